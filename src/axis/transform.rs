//! Data-space to pixel-space mapping.
//!
//! The transform is built from the axis limits, viewport and size range. Each
//! aesthetic gets its own [`LinearScale`]:
//!
//! | aesthetic | pixel range                                   |
//! |-----------|-----------------------------------------------|
//! | x         | viewport left to right                        |
//! | y         | viewport bottom to top (pixel y grows down)   |
//! | color     | colormap position `[0, 1]`                    |
//! | size      | configured radius range                       |
//!
//! Before any scale is built, limits are normalised with
//! [`effective_limits`], so an axis without data still maps sensibly.

use crate::geometry::{Limits, Viewport};
use crate::grammar::{Aesthetic, DataWithAesthetic};
use crate::scale::{LinearScale, Scale};
use crate::vector::Vec2;
use log::trace;

/// Radius drawn for rows of a frame without a size channel.
pub const DEFAULT_RADIUS: f32 = 1.0;

/// Colormap position used for rows of a frame without a color channel.
pub const DEFAULT_COLOR_POSITION: f32 = 0.0;

/// Limits with every unusable range replaced.
///
/// Inverted or non-finite ranges (no data on that axis) become `[0, 1]`.
/// Zero-width ranges are widened to one unit centred on the value.
#[must_use]
pub fn effective_limits(limits: &Limits) -> Limits {
    let mut out = *limits;
    for aesthetic in Aesthetic::ALL {
        let axis = aesthetic.index();
        let (min, max) = limits.range(axis);
        if !(min.is_finite() && max.is_finite()) || max < min {
            trace!(target: "keyplot", "no {aesthetic} range, using [0, 1]");
            out.set_range(axis, 0.0, 1.0);
        } else if max == min {
            trace!(target: "keyplot", "zero-width {aesthetic} range at {min}, widening");
            out.set_range(axis, min - 0.5, max + 0.5);
        }
    }
    out
}

/// Per-aesthetic affine maps from data values to pixel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayTransform {
    scales: [LinearScale; 4],
}

impl DisplayTransform {
    /// Build the transform for the given limits and viewport.
    #[must_use]
    pub fn new(limits: &Limits, viewport: &Viewport, size_range: (f32, f32)) -> Self {
        let limits = effective_limits(limits);
        let domain = |aesthetic: Aesthetic| limits.range(aesthetic.index());

        Self {
            scales: [
                LinearScale::spanning(
                    domain(Aesthetic::X),
                    (viewport.bmin[0], viewport.bmax[0]),
                ),
                LinearScale::spanning(
                    domain(Aesthetic::Y),
                    (viewport.bmax[1], viewport.bmin[1]),
                ),
                LinearScale::spanning(domain(Aesthetic::Color), (0.0, 1.0)),
                LinearScale::spanning(domain(Aesthetic::Size), size_range),
            ],
        }
    }

    /// The scale used for one aesthetic.
    #[must_use]
    pub fn scale(&self, aesthetic: Aesthetic) -> &LinearScale {
        &self.scales[aesthetic.index()]
    }

    /// Map a data value to pixel space.
    #[must_use]
    pub fn to_display(&self, value: f32, aesthetic: Aesthetic) -> f32 {
        self.scales[aesthetic.index()].scale(value)
    }

    /// Map a pixel value back to data space.
    #[must_use]
    pub fn from_display(&self, pixel: f32, aesthetic: Aesthetic) -> f32 {
        self.scales[aesthetic.index()].invert(pixel)
    }

    /// Map a data-space `(x, y)` to a pixel position.
    #[must_use]
    pub fn position(&self, x: f32, y: f32) -> Vec2 {
        Vec2::xy(
            self.to_display(x, Aesthetic::X),
            self.to_display(y, Aesthetic::Y),
        )
    }

    /// Transform every row of a frame.
    ///
    /// Missing color rows get [`DEFAULT_COLOR_POSITION`], missing size rows
    /// [`DEFAULT_RADIUS`]. Missing x or y rows map to the pixel position of 0.
    #[must_use]
    pub fn pixel_frame(&self, data: &DataWithAesthetic) -> PixelFrame {
        let rows = data.rows();
        let column = |aesthetic: Aesthetic, default: Option<f32>| -> Vec<f32> {
            match (data.get(aesthetic), default) {
                (Some(values), _) => values.iter().map(|&v| self.to_display(v, aesthetic)).collect(),
                (None, Some(default)) => vec![default; rows],
                (None, None) => vec![self.to_display(0.0, aesthetic); rows],
            }
        };

        PixelFrame {
            x: column(Aesthetic::X, None),
            y: column(Aesthetic::Y, None),
            color: column(Aesthetic::Color, Some(DEFAULT_COLOR_POSITION)),
            size: column(Aesthetic::Size, Some(DEFAULT_RADIUS)),
        }
    }
}

/// One frame in pixel space: positions, colormap positions and radii.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PixelFrame {
    /// Pixel x per row.
    pub x: Vec<f32>,
    /// Pixel y per row.
    pub y: Vec<f32>,
    /// Colormap position per row.
    pub color: Vec<f32>,
    /// Radius per row.
    pub size: Vec<f32>,
}

impl PixelFrame {
    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.x.len()
    }

    /// Pixel position of a row.
    #[must_use]
    pub fn position(&self, row: usize) -> Vec2 {
        Vec2::xy(self.x[row], self.y[row])
    }

    /// All positions in row order.
    #[must_use]
    pub fn positions(&self) -> Vec<Vec2> {
        (0..self.rows()).map(|row| self.position(row)).collect()
    }

    /// Row-wise `w1 * above + w2 * below` on every channel.
    #[must_use]
    pub fn blend(above: &Self, w1: f32, below: &Self, w2: f32) -> Self {
        Self {
            x: blend_column(&above.x, w1, &below.x, w2),
            y: blend_column(&above.y, w1, &below.y, w2),
            color: blend_column(&above.color, w1, &below.color, w2),
            size: blend_column(&above.size, w1, &below.size, w2),
        }
    }
}

/// Weighted sum of two columns using trueno's SIMD kernels.
fn blend_column(above: &[f32], w1: f32, below: &[f32], w2: f32) -> Vec<f32> {
    let n = above.len().min(below.len());
    if n == 0 {
        return Vec::new();
    }

    let a = trueno::Vector::from_vec(above[..n].to_vec());
    let b = trueno::Vector::from_vec(below[..n].to_vec());
    if let (Ok(a_scaled), Ok(b_scaled)) = (
        a.mul(&trueno::Vector::from_vec(vec![w1; n])),
        b.mul(&trueno::Vector::from_vec(vec![w2; n])),
    ) {
        if let Ok(sum) = a_scaled.add(&b_scaled) {
            return sum.as_slice().to_vec();
        }
    }

    above[..n]
        .iter()
        .zip(&below[..n])
        .map(|(&a, &b)| w1 * a + w2 * b)
        .collect()
}
