//! # keyplot
//!
//! Keyframe-animated 2D chart core: axis coordinate transforms, tick layout,
//! and series renderers that interpolate between timestamped data frames.
//!
//! Data columns are mapped onto *aesthetics* (x, y, color, size). Each series
//! stores frames captured at increasing times. Drawing at a query time blends
//! the two surrounding frames in pixel space; an animation-capable backend is
//! instead handed one keyframe chain per primitive and interpolates itself.
//!
//! ## Features
//!
//! - **Const-generic vectors**: [`vector::Vector`] with element-wise operators,
//!   norms and significant-digit rounding
//! - **Tick layout**: aspect-aware tick counts and rounded spacing, stable for
//!   empty or degenerate ranges
//! - **Keyframe interpolation**: points, lines and histograms
//! - **Backends**: call recorder, RGBA raster with PNG output, animated SVG
//!
//! ## Quick Start
//!
//! ```rust
//! use keyplot::prelude::*;
//!
//! let mut axis = Axis::new(Viewport::from_size(400.0, 300.0));
//! let points = axis
//!     .points(DataWithAesthetic::new().x(&[0.0, 1.0, 2.0]).y(&[1.0, 3.0, 2.0]))
//!     .unwrap();
//! axis.add_frame(points, DataWithAesthetic::new().x(&[0.0, 1.0, 2.0]).y(&[2.0, 1.0, 3.0]), 1.0)
//!     .unwrap();
//! axis.update_tick_information();
//!
//! let mut svg = SvgBackend::new(400, 300);
//! axis.draw_animated(&mut svg);
//! assert!(svg.render().contains("<animate"));
//! ```
//!
//! ## Feature Flags
//!
//! - `gpu`: GPU compute in trueno
//! - `parallel`: parallel processing in trueno
//! - `serde`: `Serialize`/`Deserialize` for configuration and colors
//! - `full`: all features enabled

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Fixed-size numeric vectors.
pub mod vector;

/// Axis-aligned boxes: data limits and pixel viewports.
pub mod geometry;

/// Color types and the series palette.
pub mod color;

/// Scale functions and colormaps.
pub mod scale;

// ============================================================================
// Chart Modules
// ============================================================================

/// Aesthetics, data frames and statistics.
pub mod grammar;

/// Axis configuration.
pub mod config;

/// Coordinate transform and tick layout.
pub mod axis;

/// Keyframed series renderers.
pub mod plots;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Drawing backends.
pub mod backend;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for keyplot operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use keyplot::prelude::*;
/// ```
pub mod prelude {
    pub use crate::axis::{Axis, DisplayTransform, TickInfo};
    pub use crate::backend::{AnimatedBackend, Backend, DrawCommand, Raster, Recorder, SvgBackend};
    pub use crate::color::{Hsla, Palette, Rgba};
    pub use crate::config::AxisConfig;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{BBox, Limits, Viewport};
    pub use crate::grammar::{Aes, Aesthetic, BinStrategy, DataFrame, DataWithAesthetic, Stat};
    pub use crate::plots::{FrameInfo, Histogram, Keyframes, Line, Plot, PlotKind, Points};
    pub use crate::scale::{ColorScale, Colormap, LinearScale, Scale};
    pub use crate::vector::{round_off, Vec2, Vector};
    pub use batuta_common::display::WithDimensions;
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
