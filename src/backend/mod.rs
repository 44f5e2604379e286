//! Drawing backends.
//!
//! The library never rasterises or serialises by itself: axes and series
//! issue primitive calls against a [`Backend`], and keyframe chains against
//! an [`AnimatedBackend`]. All coordinates are pixels.
//!
//! Bundled implementations:
//!
//! - [`Recorder`]: records every call, for tests and inspection
//! - [`Raster`]: RGBA pixel buffer with PNG output
//! - [`SvgBackend`]: SVG document, with `<animate>` keyframes for chains

mod raster;
mod recorder;
mod svg;

pub use raster::Raster;
pub use recorder::{DrawCommand, Recorder};
pub use svg::SvgBackend;

use crate::color::Rgba;
use crate::geometry::BBox;
use crate::vector::Vec2;

/// Static drawing primitives.
///
/// Stroke and fill state set through the setters applies to every later
/// primitive until changed.
pub trait Backend {
    /// Set the stroke width for lines.
    fn stroke_width(&mut self, width: f32);

    /// Set the stroke color for lines.
    fn stroke_color(&mut self, color: Rgba);

    /// Set the fill color for circles and rectangles.
    fn fill_color(&mut self, color: Rgba);

    /// Filled circle.
    fn circle(&mut self, centre: Vec2, radius: f32);

    /// Straight line segment.
    fn line(&mut self, from: Vec2, to: Vec2);

    /// Filled rectangle.
    fn rect(&mut self, bounds: BBox<f32, 2>);

    /// Connected line segments through `points`.
    fn polyline(&mut self, points: &[Vec2]) {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1]);
        }
    }
}

/// Keyframe chains.
///
/// A chain is a run of `add_animated_*` calls with increasing times, closed
/// by the matching `end_animated_*`. Each key captures the fill (or stroke)
/// state current at the time of the call.
pub trait AnimatedBackend: Backend {
    /// Add a key to the open circle chain.
    fn add_animated_circle(&mut self, centre: Vec2, radius: f32, time: f32);

    /// Close the open circle chain.
    fn end_animated_circle(&mut self);

    /// Add a key to the open rectangle chain.
    fn add_animated_rect(&mut self, bounds: BBox<f32, 2>, time: f32);

    /// Close the open rectangle chain.
    fn end_animated_rect(&mut self);

    /// Add a key to the open path chain.
    fn add_animated_path(&mut self, points: &[Vec2], time: f32);

    /// Close the open path chain.
    fn end_animated_path(&mut self);
}
