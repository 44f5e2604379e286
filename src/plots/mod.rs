//! Keyframed series renderers.
//!
//! Every series stores a [`Keyframes`] sequence and draws either the frame
//! resolved for a time (blending the two surrounding frames in pixel space)
//! or, on animated backends, one keyframe chain per primitive.

mod frames;
mod histogram;
mod line;
mod points;

pub use frames::{FrameInfo, Keyframes, REQUIRED};
pub use histogram::{Bar, Histogram};
pub use line::{Line, DEFAULT_LINE_WIDTH};
pub use points::Points;

use crate::axis::DisplayTransform;
use crate::backend::{AnimatedBackend, Backend};
use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::Limits;
use crate::grammar::DataWithAesthetic;
use std::fmt;

/// Series type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotKind {
    /// [`Points`]
    Points,
    /// [`Line`]
    Line,
    /// [`Histogram`]
    Histogram,
}

impl fmt::Display for PlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Points => "points",
            Self::Line => "line",
            Self::Histogram => "histogram",
        };
        f.write_str(name)
    }
}

/// A series owned by an axis.
#[derive(Debug, Clone, PartialEq)]
pub enum Plot {
    /// Circles per row.
    Points(Points),
    /// Polyline through the rows.
    Line(Line),
    /// Binned bars.
    Histogram(Histogram),
}

impl Plot {
    /// Series type.
    #[must_use]
    pub fn kind(&self) -> PlotKind {
        match self {
            Self::Points(_) => PlotKind::Points,
            Self::Line(_) => PlotKind::Line,
            Self::Histogram(_) => PlotKind::Histogram,
        }
    }

    /// Stored frames. Histogram frames hold bin centres and counts.
    #[must_use]
    pub fn keyframes(&self) -> &Keyframes {
        match self {
            Self::Points(p) => p.keyframes(),
            Self::Line(l) => l.keyframes(),
            Self::Histogram(h) => h.keyframes(),
        }
    }

    /// Append a frame at `time`.
    ///
    /// # Errors
    ///
    /// Propagates the series' frame validation error.
    pub fn add_frame(&mut self, data: DataWithAesthetic, time: f32) -> Result<()> {
        match self {
            Self::Points(p) => p.add_frame(data, time),
            Self::Line(l) => l.add_frame(data, time),
            Self::Histogram(h) => h.add_frame(data, time),
        }
    }

    /// Series color.
    #[must_use]
    pub fn color(&self) -> Rgba {
        match self {
            Self::Points(p) => p.color(),
            Self::Line(l) => l.color(),
            Self::Histogram(h) => h.color(),
        }
    }

    /// Replace the series color.
    pub fn set_color(&mut self, color: Rgba) {
        match self {
            Self::Points(p) => p.set_color(color),
            Self::Line(l) => l.set_color(color),
            Self::Histogram(h) => h.set_color(color),
        }
    }

    /// Data-space extent over every frame.
    #[must_use]
    pub fn limits(&self) -> Limits {
        match self {
            Self::Histogram(h) => h.limits(),
            other => other.keyframes().limits(),
        }
    }

    /// Draw the series as it appears at `time`.
    pub fn draw<B: Backend + ?Sized>(&self, backend: &mut B, transform: &DisplayTransform, time: f32) {
        match self {
            Self::Points(p) => p.draw(backend, transform, time),
            Self::Line(l) => l.draw(backend, transform, time),
            Self::Histogram(h) => h.draw(backend, transform, time),
        }
    }

    /// Emit the series' keyframe chains.
    pub fn draw_animated<B: AnimatedBackend + ?Sized>(
        &self,
        backend: &mut B,
        transform: &DisplayTransform,
    ) {
        match self {
            Self::Points(p) => p.draw_animated(backend, transform),
            Self::Line(l) => l.draw_animated(backend, transform),
            Self::Histogram(h) => h.draw_animated(backend, transform),
        }
    }

    /// The point series, if this is one.
    #[must_use]
    pub fn as_points(&self) -> Option<&Points> {
        match self {
            Self::Points(p) => Some(p),
            _ => None,
        }
    }

    /// Mutable access to the point series, if this is one.
    pub fn as_points_mut(&mut self) -> Option<&mut Points> {
        match self {
            Self::Points(p) => Some(p),
            _ => None,
        }
    }

    /// The line series, if this is one.
    #[must_use]
    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Self::Line(l) => Some(l),
            _ => None,
        }
    }

    /// The histogram, if this is one.
    #[must_use]
    pub fn as_histogram(&self) -> Option<&Histogram> {
        match self {
            Self::Histogram(h) => Some(h),
            _ => None,
        }
    }
}

impl From<Points> for Plot {
    fn from(points: Points) -> Self {
        Self::Points(points)
    }
}

impl From<Line> for Plot {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Histogram> for Plot {
    fn from(histogram: Histogram) -> Self {
        Self::Histogram(histogram)
    }
}
