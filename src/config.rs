//! Axis configuration.
//!
//! Builder-style settings consumed by [`Axis`](crate::axis::Axis). With the
//! `serde` feature the configuration can be loaded from any serde format.
//!
//! ```
//! use keyplot::config::AxisConfig;
//!
//! let config = AxisConfig::new().x_ticks(8).significant_digits(3);
//! assert_eq!(config.x_ticks, 8);
//! assert_eq!(config.y_ticks, 0);
//! ```

use crate::color::{Palette, Rgba};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tick, stroke and palette settings for an axis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AxisConfig {
    /// Requested x tick count; 0 derives it from the viewport aspect ratio.
    pub x_ticks: usize,
    /// Requested y tick count; 0 derives it from the viewport aspect ratio.
    pub y_ticks: usize,
    /// Significant digits kept in the tick spacing.
    pub significant_digits: u32,
    /// Tick mark length in pixels.
    pub tick_length: f32,
    /// Axis line width in pixels.
    pub line_width: f32,
    /// Pixel radius range the size aesthetic maps onto.
    pub size_range: (f32, f32),
    /// Color of axis lines and tick marks.
    pub axis_color: Rgba,
    /// Series colors, assigned in registration order.
    pub palette: Palette,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            x_ticks: 0,
            y_ticks: 0,
            significant_digits: 2,
            tick_length: 10.0,
            line_width: 3.0,
            size_range: (2.0, 12.0),
            axis_color: Rgba::BLACK,
            palette: Palette::default(),
        }
    }
}

impl AxisConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested x tick count (0 = automatic).
    #[must_use]
    pub fn x_ticks(mut self, n: usize) -> Self {
        self.x_ticks = n;
        self
    }

    /// Set the requested y tick count (0 = automatic).
    #[must_use]
    pub fn y_ticks(mut self, n: usize) -> Self {
        self.y_ticks = n;
        self
    }

    /// Set the significant digits of the tick spacing.
    #[must_use]
    pub fn significant_digits(mut self, digits: u32) -> Self {
        self.significant_digits = digits;
        self
    }

    /// Set the tick mark length.
    #[must_use]
    pub fn tick_length(mut self, pixels: f32) -> Self {
        self.tick_length = pixels;
        self
    }

    /// Set the axis line width.
    #[must_use]
    pub fn line_width(mut self, pixels: f32) -> Self {
        self.line_width = pixels;
        self
    }

    /// Set the pixel radius range for the size aesthetic.
    #[must_use]
    pub fn size_range(mut self, min: f32, max: f32) -> Self {
        self.size_range = (min, max);
        self
    }

    /// Set the axis line color.
    #[must_use]
    pub fn axis_color(mut self, color: Rgba) -> Self {
        self.axis_color = color;
        self
    }

    /// Set the series palette.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AxisConfig::default();
        assert_eq!(config.significant_digits, 2);
        assert_eq!((config.x_ticks, config.y_ticks), (0, 0));
        assert_eq!(config.tick_length, 10.0);
        assert_eq!(config.line_width, 3.0);
        assert_eq!(config.palette, Palette::default());
    }

    #[test]
    fn test_builder() {
        let palette = Palette::hues(4);
        let config = AxisConfig::new()
            .y_ticks(3)
            .tick_length(4.0)
            .line_width(1.0)
            .size_range(1.0, 5.0)
            .axis_color(Rgba::RED)
            .palette(palette.clone());
        assert_eq!(config.y_ticks, 3);
        assert_eq!(config.size_range, (1.0, 5.0));
        assert_eq!(config.axis_color, Rgba::RED);
        assert_eq!(config.palette, palette);
    }
}
