//! RGBA raster backend.
//!
//! Pixels are stored row-major, 4 bytes per pixel, without row padding.
//! Every primitive alpha-blends onto the buffer with the "over" operator.

use super::Backend;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::BBox;
use crate::vector::Vec2;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// RGBA pixel buffer implementing [`Backend`].
#[derive(Debug, Clone)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    fill: Rgba,
    stroke: Rgba,
    stroke_width: f32,
}

impl Raster {
    /// Transparent raster of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either side is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use keyplot::backend::Raster;
    ///
    /// let raster = Raster::new(64, 32).unwrap();
    /// assert_eq!(raster.width(), 64);
    /// assert!(Raster::new(0, 32).is_err());
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * 4],
            fill: Rgba::BLACK,
            stroke: Rgba::BLACK,
            stroke_width: 1.0,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Overwrite every pixel with `color`.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Color at a pixel, or `None` outside the raster.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }

    /// Blend `color` over one pixel. Out-of-range coordinates are ignored.
    ///
    /// `out = src * src_alpha + dst * dst_alpha * (1 - src_alpha)`
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }

        let idx = self.pixel_index(x as u32, y as u32);
        let src_a = f32::from(color.a) / 255.0;
        let dst_a = f32::from(self.pixels[idx + 3]) / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        if out_a <= 0.0 {
            return;
        }

        let blend = |src: u8, dst: u8| -> u8 {
            let src_f = f32::from(src) / 255.0;
            let dst_f = f32::from(dst) / 255.0;
            let out = (src_f * src_a + dst_f * dst_a * (1.0 - src_a)) / out_a;
            (out * 255.0).round() as u8
        };

        self.pixels[idx] = blend(color.r, self.pixels[idx]);
        self.pixels[idx + 1] = blend(color.g, self.pixels[idx + 1]);
        self.pixels[idx + 2] = blend(color.b, self.pixels[idx + 2]);
        self.pixels[idx + 3] = (out_a * 255.0).round() as u8;
    }

    fn span(&mut self, x0: i64, x1: i64, y: i64, color: Rgba) {
        if y < 0 || y >= i64::from(self.height) {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(i64::from(self.width) - 1);
        for x in x0..=x1 {
            self.blend_pixel(x, y, color);
        }
    }

    /// Square brush of the current stroke width.
    fn stamp(&mut self, x: i64, y: i64) {
        let size = (self.stroke_width.round() as i64).max(1);
        let lo = -(size - 1) / 2;
        let hi = lo + size - 1;
        for dy in lo..=hi {
            self.span(x + lo, x + hi, y + dy, self.stroke);
        }
    }

    /// Encode as PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buffer, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.pixels)?;
        }
        Ok(buffer)
    }

    /// Write as a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);

        let mut encoder = png::Encoder::new(writer, self.width, self.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.pixels)?;
        Ok(())
    }
}

/// Liang-Barsky clip of the segment `p0 -> p1` to the box `[lo, hi]`.
fn clip_segment(
    p0: [f64; 2],
    p1: [f64; 2],
    lo: [f64; 2],
    hi: [f64; 2],
) -> Option<([f64; 2], [f64; 2])> {
    let d = [p1[0] - p0[0], p1[1] - p0[1]];
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);

    for axis in 0..2 {
        for (p, q) in [(-d[axis], p0[axis] - lo[axis]), (d[axis], hi[axis] - p0[axis])] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }

            let t = q / p;
            if p < 0.0 {
                if t > t1 {
                    return None;
                }
                t0 = t0.max(t);
            } else {
                if t < t0 {
                    return None;
                }
                t1 = t1.min(t);
            }
        }
    }

    let at = |t: f64| [p0[0] + t * d[0], p0[1] + t * d[1]];
    Some((at(t0), at(t1)))
}

impl Backend for Raster {
    fn stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
    }

    fn stroke_color(&mut self, color: Rgba) {
        self.stroke = color;
    }

    fn fill_color(&mut self, color: Rgba) {
        self.fill = color;
    }

    /// One span per row, so translucent fills are blended exactly once.
    /// Only rows on the raster are visited.
    fn circle(&mut self, centre: Vec2, radius: f32) {
        if !(radius.is_finite() && centre[0].is_finite() && centre[1].is_finite()) {
            return;
        }

        // f64 throughout: radii far beyond the raster must not overflow
        let cx = f64::from(centre[0].round());
        let cy = f64::from(centre[1].round());
        let r = f64::from(radius.max(0.0).round());
        let x_max = f64::from(self.width) - 1.0;
        let y_first = (cy - r).max(0.0);
        let y_last = (cy + r).min(f64::from(self.height) - 1.0);
        if y_first > y_last {
            return;
        }

        for y in (y_first as i64)..=(y_last as i64) {
            let dy = y as f64 - cy;
            let half = (r * r - dy * dy).max(0.0).sqrt().floor();
            let x_first = (cx - half).max(0.0);
            let x_last = (cx + half).min(x_max);
            if x_first <= x_last {
                self.span(x_first as i64, x_last as i64, y, self.fill);
            }
        }
    }

    /// Bresenham over the part of the segment near the raster, with a square
    /// brush for wide strokes.
    fn line(&mut self, from: Vec2, to: Vec2) {
        if !(from.iter().chain(to.iter()).all(|v| v.is_finite())) {
            return;
        }

        // brush overhang: pixels just outside the raster can still paint inside it
        let pad = f64::from(self.stroke_width.round().max(1.0));
        let lo = [-pad, -pad];
        let hi = [
            f64::from(self.width) - 1.0 + pad,
            f64::from(self.height) - 1.0 + pad,
        ];
        let Some((from, to)) = clip_segment(
            [f64::from(from[0]), f64::from(from[1])],
            [f64::from(to[0]), f64::from(to[1])],
            lo,
            hi,
        ) else {
            return;
        };

        let (x0, y0) = (from[0].round() as i64, from[1].round() as i64);
        let (x1, y1) = (to[0].round() as i64, to[1].round() as i64);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        let (mut x, mut y) = (x0, y0);
        loop {
            self.stamp(x, y);
            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn rect(&mut self, bounds: BBox<f32, 2>) {
        if !(bounds.bmin.iter().chain(bounds.bmax.iter()).all(|v| v.is_finite())) {
            return;
        }

        let (x0, y0) = (bounds.bmin[0].round() as i64, bounds.bmin[1].round() as i64);
        let (x1, y1) = (bounds.bmax[0].round() as i64, bounds.bmax[1].round() as i64);
        for y in y0.max(0)..y1.min(i64::from(self.height)) {
            self.span(x0, x1 - 1, y, self.fill);
        }
    }
}

impl batuta_common::display::WithDimensions for Raster {
    /// Reallocate to the new size; the content is cleared. Zero sizes are ignored.
    fn set_dimensions(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels = vec![0; (width as usize) * (height as usize) * 4];
    }
}
