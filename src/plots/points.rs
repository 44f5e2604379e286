//! Point (scatter) series.
//!
//! Each row is a circle. Position comes from x/y, the radius from the size
//! channel and the fill from the color channel passed through the series
//! colormap. Frames without a size or color channel fall back to
//! [`DEFAULT_RADIUS`](crate::axis::DEFAULT_RADIUS) and colormap position 0.

use super::frames::Keyframes;
use crate::axis::DisplayTransform;
use crate::backend::{AnimatedBackend, Backend};
use crate::color::Rgba;
use crate::error::Result;
use crate::grammar::{Aesthetic, DataWithAesthetic};
use crate::scale::{ColorScale, Colormap};
use log::{debug, trace};

/// Keyframed point series.
#[derive(Debug, Clone, PartialEq)]
pub struct Points {
    keyframes: Keyframes,
    color: Rgba,
    colormap: Option<ColorScale>,
}

impl Points {
    /// Empty series filled with `color`.
    #[must_use]
    pub fn new(color: Rgba) -> Self {
        Self {
            keyframes: Keyframes::new(),
            color,
            colormap: None,
        }
    }

    /// Builder form of [`Points::set_colormap`].
    #[must_use]
    pub fn with_colormap(mut self, colormap: ColorScale) -> Self {
        self.colormap = Some(colormap);
        self
    }

    /// Append a frame at `time`.
    ///
    /// Without a colormap the frame's color channel is kept but not drawn.
    ///
    /// # Errors
    ///
    /// See [`Keyframes::push`].
    pub fn add_frame(&mut self, data: DataWithAesthetic, time: f32) -> Result<()> {
        let ignored_color = self.colormap.is_none() && data.has(Aesthetic::Color);
        self.keyframes.push(data, time)?;
        if ignored_color {
            debug!(
                target: "keyplot",
                "points: color channel at t={time} ignored, series has no colormap"
            );
        }
        Ok(())
    }

    /// Stored frames.
    #[must_use]
    pub fn keyframes(&self) -> &Keyframes {
        &self.keyframes
    }

    /// Base color, used when no colormap is set.
    #[must_use]
    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Replace the base color.
    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    /// Colormap applied to the color channel, if any.
    #[must_use]
    pub fn colormap(&self) -> Option<&ColorScale> {
        self.colormap.as_ref()
    }

    /// Set or clear the colormap. Without one every point uses the base color.
    pub fn set_colormap(&mut self, colormap: Option<ColorScale>) {
        self.colormap = colormap;
    }

    /// Fill color for a colormap position.
    #[must_use]
    pub fn color_at(&self, position: f32) -> Rgba {
        self.colormap
            .as_ref()
            .map_or(self.color, |colormap| colormap.to_color(position))
    }

    /// Draw the series as it appears at `time`.
    pub fn draw<B: Backend + ?Sized>(&self, backend: &mut B, transform: &DisplayTransform, time: f32) {
        let Some(frame) = self.keyframes.pixel_frame_at(time, transform) else {
            return;
        };
        trace!(target: "keyplot", "points: {} rows at t={time}", frame.rows());

        for row in 0..frame.rows() {
            backend.fill_color(self.color_at(frame.color[row]));
            backend.circle(frame.position(row), frame.size[row]);
        }
    }

    /// Emit one animated circle chain per row, one key per frame.
    pub fn draw_animated<B: AnimatedBackend + ?Sized>(
        &self,
        backend: &mut B,
        transform: &DisplayTransform,
    ) {
        let frames = self.keyframes.pixel_frames(transform);
        for row in 0..self.keyframes.rows() {
            for (frame, time) in &frames {
                backend.fill_color(self.color_at(frame.color[row]));
                backend.add_animated_circle(frame.position(row), frame.size[row], *time);
            }
            backend.end_animated_circle();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{DrawCommand, Recorder};
    use crate::geometry::{Limits, Viewport};
    use crate::vector::Vec2;
    use approx::assert_relative_eq;

    fn transform() -> DisplayTransform {
        let mut limits = Limits::empty();
        limits.set_range(0, 0.0, 10.0);
        limits.set_range(1, 0.0, 10.0);
        DisplayTransform::new(&limits, &Viewport::from_size(100.0, 100.0), (2.0, 12.0))
    }

    #[test]
    fn test_no_frames_draws_nothing() {
        let mut rec = Recorder::new();
        Points::new(Rgba::RED).draw(&mut rec, &transform(), 0.0);
        assert!(rec.commands().is_empty());
    }

    #[test]
    fn test_default_radius_and_color() {
        let mut points = Points::new(Rgba::RED);
        points
            .add_frame(DataWithAesthetic::new().x(&[5.0]).y(&[5.0]), 0.0)
            .expect("operation should succeed");

        let mut rec = Recorder::new();
        points.draw(&mut rec, &transform(), 0.0);
        assert_eq!(
            rec.commands(),
            &[
                DrawCommand::FillColor(Rgba::RED),
                DrawCommand::Circle {
                    centre: Vec2::xy(50.0, 50.0),
                    radius: 1.0
                },
            ]
        );
    }

    #[test]
    fn test_blended_draw() {
        let mut points = Points::new(Rgba::RED);
        points
            .add_frame(DataWithAesthetic::new().x(&[0.0]).y(&[0.0]), 0.0)
            .expect("operation should succeed");
        points
            .add_frame(DataWithAesthetic::new().x(&[10.0]).y(&[10.0]), 1.0)
            .expect("operation should succeed");

        let mut rec = Recorder::new();
        points.draw(&mut rec, &transform(), 0.25);
        let circles = rec.circles();
        assert_eq!(circles.len(), 1);
        assert_relative_eq!(circles[0].0[0], 25.0);
        assert_relative_eq!(circles[0].0[1], 75.0);
    }

    #[test]
    fn test_color_channel_without_colormap_uses_base_color() {
        let mut points = Points::new(Rgba::RED);
        points
            .add_frame(DataWithAesthetic::new().x(&[5.0]).y(&[5.0]), 0.0)
            .expect("operation should succeed");
        points
            .add_frame(DataWithAesthetic::new().x(&[5.0]).y(&[5.0]).color(&[1.0]), 1.0)
            .expect("operation should succeed");

        let mut rec = Recorder::new();
        points.draw(&mut rec, &transform(), 1.0);
        assert_eq!(rec.commands()[0], DrawCommand::FillColor(Rgba::RED));
        assert!(points.colormap().is_none());
    }

    #[test]
    fn test_colormap_applies_to_color_channel() {
        let points = Points::new(Rgba::RED).with_colormap(ColorScale::greyscale());
        assert_eq!(points.color_at(0.0), ColorScale::greyscale().to_color(0.0));
        assert_ne!(points.color_at(1.0), Rgba::RED);
    }

    #[test]
    fn test_draw_animated_chains() {
        let mut points = Points::new(Rgba::BLUE);
        points
            .add_frame(DataWithAesthetic::new().x(&[0.0, 1.0]).y(&[0.0, 1.0]), 0.0)
            .expect("operation should succeed");
        points
            .add_frame(DataWithAesthetic::new().x(&[2.0, 3.0]).y(&[2.0, 3.0]), 2.0)
            .expect("operation should succeed");

        let mut rec = Recorder::new();
        points.draw_animated(&mut rec, &transform());
        let ends = rec
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::EndAnimatedCircle))
            .count();
        let keys = rec
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::AnimatedCircle { .. }))
            .count();
        assert_eq!(ends, 2);
        assert_eq!(keys, 4);
        assert!(matches!(
            rec.commands()[3],
            DrawCommand::AnimatedCircle { time, .. } if time == 2.0
        ));
    }
}
