//! Backend that records calls instead of drawing.

use super::{AnimatedBackend, Backend};
use crate::color::Rgba;
use crate::geometry::BBox;
use crate::vector::Vec2;

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum DrawCommand {
    StrokeWidth(f32),
    StrokeColor(Rgba),
    FillColor(Rgba),
    Circle { centre: Vec2, radius: f32 },
    Line { from: Vec2, to: Vec2 },
    Rect(BBox<f32, 2>),
    Polyline(Vec<Vec2>),
    AnimatedCircle { centre: Vec2, radius: f32, time: f32 },
    EndAnimatedCircle,
    AnimatedRect { bounds: BBox<f32, 2>, time: f32 },
    EndAnimatedRect,
    AnimatedPath { points: Vec<Vec2>, time: f32 },
    EndAnimatedPath,
}

/// Records every call as a [`DrawCommand`], in order.
///
/// ```
/// use keyplot::backend::{Backend, DrawCommand, Recorder};
/// use keyplot::vector::Vec2;
///
/// let mut rec = Recorder::new();
/// rec.circle(Vec2::xy(1.0, 2.0), 3.0);
/// assert_eq!(rec.circles(), vec![(Vec2::xy(1.0, 2.0), 3.0)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recorder {
    commands: Vec<DrawCommand>,
}

impl Recorder {
    /// Empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Forget every recorded call.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Static circles as `(centre, radius)`.
    #[must_use]
    pub fn circles(&self) -> Vec<(Vec2, f32)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Circle { centre, radius } => Some((*centre, *radius)),
                _ => None,
            })
            .collect()
    }

    /// Static rectangles.
    #[must_use]
    pub fn rects(&self) -> Vec<BBox<f32, 2>> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Rect(bounds) => Some(*bounds),
                _ => None,
            })
            .collect()
    }

    /// Static line segments as `(from, to)`.
    #[must_use]
    pub fn lines(&self) -> Vec<(Vec2, Vec2)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Line { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }
}

impl Backend for Recorder {
    fn stroke_width(&mut self, width: f32) {
        self.commands.push(DrawCommand::StrokeWidth(width));
    }

    fn stroke_color(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::StrokeColor(color));
    }

    fn fill_color(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::FillColor(color));
    }

    fn circle(&mut self, centre: Vec2, radius: f32) {
        self.commands.push(DrawCommand::Circle { centre, radius });
    }

    fn line(&mut self, from: Vec2, to: Vec2) {
        self.commands.push(DrawCommand::Line { from, to });
    }

    fn rect(&mut self, bounds: BBox<f32, 2>) {
        self.commands.push(DrawCommand::Rect(bounds));
    }

    fn polyline(&mut self, points: &[Vec2]) {
        self.commands.push(DrawCommand::Polyline(points.to_vec()));
    }
}

impl AnimatedBackend for Recorder {
    fn add_animated_circle(&mut self, centre: Vec2, radius: f32, time: f32) {
        self.commands.push(DrawCommand::AnimatedCircle {
            centre,
            radius,
            time,
        });
    }

    fn end_animated_circle(&mut self) {
        self.commands.push(DrawCommand::EndAnimatedCircle);
    }

    fn add_animated_rect(&mut self, bounds: BBox<f32, 2>, time: f32) {
        self.commands.push(DrawCommand::AnimatedRect { bounds, time });
    }

    fn end_animated_rect(&mut self) {
        self.commands.push(DrawCommand::EndAnimatedRect);
    }

    fn add_animated_path(&mut self, points: &[Vec2], time: f32) {
        self.commands.push(DrawCommand::AnimatedPath {
            points: points.to_vec(),
            time,
        });
    }

    fn end_animated_path(&mut self) {
        self.commands.push(DrawCommand::EndAnimatedPath);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut rec = Recorder::new();
        rec.fill_color(Rgba::RED);
        rec.rect(BBox::new(Vec2::xy(0.0, 0.0), Vec2::xy(1.0, 1.0)));
        rec.line(Vec2::xy(0.0, 0.0), Vec2::xy(2.0, 2.0));
        assert_eq!(rec.commands().len(), 3);
        assert_eq!(rec.commands()[0], DrawCommand::FillColor(Rgba::RED));
        assert_eq!(rec.rects().len(), 1);
        assert_eq!(rec.lines(), vec![(Vec2::xy(0.0, 0.0), Vec2::xy(2.0, 2.0))]);

        rec.clear();
        assert!(rec.commands().is_empty());
    }
}
