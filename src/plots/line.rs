//! Line series: a polyline through the rows of each frame, in row order.

use super::frames::Keyframes;
use crate::axis::DisplayTransform;
use crate::backend::{AnimatedBackend, Backend};
use crate::color::Rgba;
use crate::error::Result;
use crate::grammar::DataWithAesthetic;
use log::trace;

/// Stroke width used by new line series.
pub const DEFAULT_LINE_WIDTH: f32 = 2.0;

/// Keyframed line series.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    keyframes: Keyframes,
    color: Rgba,
    width: f32,
}

impl Line {
    /// Empty series stroked with `color`.
    #[must_use]
    pub fn new(color: Rgba) -> Self {
        Self {
            keyframes: Keyframes::new(),
            color,
            width: DEFAULT_LINE_WIDTH,
        }
    }

    /// Set the stroke width.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Append a frame at `time`.
    ///
    /// # Errors
    ///
    /// See [`Keyframes::push`].
    pub fn add_frame(&mut self, data: DataWithAesthetic, time: f32) -> Result<()> {
        self.keyframes.push(data, time)
    }

    /// Stored frames.
    #[must_use]
    pub fn keyframes(&self) -> &Keyframes {
        &self.keyframes
    }

    /// Stroke color.
    #[must_use]
    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Replace the stroke color.
    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    /// Stroke width in pixels.
    #[must_use]
    pub fn stroke(&self) -> f32 {
        self.width
    }

    /// Draw the line as it appears at `time`.
    pub fn draw<B: Backend + ?Sized>(&self, backend: &mut B, transform: &DisplayTransform, time: f32) {
        let Some(frame) = self.keyframes.pixel_frame_at(time, transform) else {
            return;
        };
        trace!(target: "keyplot", "line: {} vertices at t={time}", frame.rows());

        backend.stroke_color(self.color);
        backend.stroke_width(self.width);
        backend.polyline(&frame.positions());
    }

    /// Emit one animated path with a key per frame.
    pub fn draw_animated<B: AnimatedBackend + ?Sized>(
        &self,
        backend: &mut B,
        transform: &DisplayTransform,
    ) {
        if self.keyframes.is_empty() {
            return;
        }

        backend.stroke_color(self.color);
        backend.stroke_width(self.width);
        for (frame, time) in self.keyframes.pixel_frames(transform) {
            backend.add_animated_path(&frame.positions(), time);
        }
        backend.end_animated_path();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{DrawCommand, Recorder};
    use crate::geometry::{Limits, Viewport};
    use crate::vector::Vec2;

    fn transform() -> DisplayTransform {
        let mut limits = Limits::empty();
        limits.set_range(0, 0.0, 10.0);
        limits.set_range(1, 0.0, 10.0);
        DisplayTransform::new(&limits, &Viewport::from_size(100.0, 100.0), (2.0, 12.0))
    }

    fn diagonal() -> Line {
        let mut line = Line::new(Rgba::GREEN).width(1.5);
        line.add_frame(DataWithAesthetic::new().x(&[0.0, 10.0]).y(&[0.0, 10.0]), 0.0)
            .expect("operation should succeed");
        line
    }

    #[test]
    fn test_draw_polyline() {
        let mut rec = Recorder::new();
        diagonal().draw(&mut rec, &transform(), 0.0);
        assert_eq!(
            rec.commands(),
            &[
                DrawCommand::StrokeColor(Rgba::GREEN),
                DrawCommand::StrokeWidth(1.5),
                DrawCommand::Polyline(vec![Vec2::xy(0.0, 100.0), Vec2::xy(100.0, 0.0)]),
            ]
        );
    }

    #[test]
    fn test_draw_animated_path() {
        let mut line = diagonal();
        line.add_frame(DataWithAesthetic::new().x(&[0.0, 10.0]).y(&[10.0, 0.0]), 1.0)
            .expect("operation should succeed");

        let mut rec = Recorder::new();
        line.draw_animated(&mut rec, &transform());
        let commands = rec.commands();
        assert_eq!(commands.len(), 5);
        assert!(matches!(commands[2], DrawCommand::AnimatedPath { time, .. } if time == 0.0));
        assert!(matches!(commands[3], DrawCommand::AnimatedPath { time, .. } if time == 1.0));
        assert_eq!(commands[4], DrawCommand::EndAnimatedPath);
    }

    #[test]
    fn test_empty_line_is_silent() {
        let mut rec = Recorder::new();
        Line::new(Rgba::BLACK).draw_animated(&mut rec, &transform());
        assert!(rec.commands().is_empty());
    }
}
