//! Scale functions for data-to-visual mappings.
//!
//! [`LinearScale`] is the affine map behind the axis display transform.
//! [`ColorScale`] turns a colormap position in `[0, 1]` into a color; it is
//! the standard [`Colormap`] implementation used by point series.

use crate::color::Rgba;
use crate::error::{Error, Result};

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;

    /// Get the domain extent.
    fn domain(&self) -> (D, D);

    /// Get the range extent.
    fn range(&self) -> (R, R);
}

/// Maps a colormap position (normally in `[0, 1]`) to a color.
///
/// Implementations must be pure: the same position always yields the same
/// color.
pub trait Colormap {
    /// Color at `position`.
    fn to_color(&self, position: f32) -> Rgba;
}

/// Linear scale for continuous-to-continuous mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_min: f32,
    domain_max: f32,
    range_min: f32,
    range_max: f32,
}

impl LinearScale {
    /// Create a new linear scale.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain bounds are equal or not finite.
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Result<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(Error::ScaleDomain(format!(
                "Domain bounds must be finite, got {domain:?}"
            )));
        }
        if (domain.0 - domain.1).abs() < f32::EPSILON {
            return Err(Error::ScaleDomain("Domain min and max cannot be equal".to_string()));
        }

        Ok(Self::spanning(domain, range))
    }

    /// Build without validation; callers guarantee a non-degenerate domain.
    pub(crate) const fn spanning(domain: (f32, f32), range: (f32, f32)) -> Self {
        Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        }
    }

    /// Create a scale from data extent.
    #[must_use]
    pub fn from_data(data: &[f32], range: (f32, f32)) -> Option<Self> {
        if data.is_empty() {
            return None;
        }

        let min = data.iter().copied().fold(f32::INFINITY, f32::min);
        let max = data.iter().copied().fold(f32::NEG_INFINITY, f32::max);

        Self::new((min, max), range).ok()
    }

    /// Invert the scale (range to domain).
    #[must_use]
    pub fn invert(&self, value: f32) -> f32 {
        let t = (value - self.range_min) / (self.range_max - self.range_min);
        self.domain_min + t * (self.domain_max - self.domain_min)
    }

    /// Range units per domain unit.
    #[must_use]
    pub fn slope(&self) -> f32 {
        (self.range_max - self.range_min) / (self.domain_max - self.domain_min)
    }
}

impl Scale<f32, f32> for LinearScale {
    fn scale(&self, value: f32) -> f32 {
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + t * (self.range_max - self.range_min)
    }

    fn domain(&self) -> (f32, f32) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (f32, f32) {
        (self.range_min, self.range_max)
    }
}

/// Piecewise-linear color gradient over a numeric domain.
///
/// Presets cover the colormap domain `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    colors: Vec<Rgba>,
    domain_min: f32,
    domain_max: f32,
}

impl ColorScale {
    /// Create a new color scale.
    ///
    /// # Errors
    ///
    /// Returns an error if colors is empty or domain is invalid.
    pub fn new(colors: Vec<Rgba>, domain: (f32, f32)) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::ScaleDomain("Color scale requires at least one color".to_string()));
        }

        if (domain.0 - domain.1).abs() < f32::EPSILON {
            return Err(Error::ScaleDomain("Domain min and max cannot be equal".to_string()));
        }

        Ok(Self { colors, domain_min: domain.0, domain_max: domain.1 })
    }

    fn unit(colors: Vec<Rgba>) -> Self {
        Self { colors, domain_min: 0.0, domain_max: 1.0 }
    }

    /// A scale that maps every position to `color`.
    #[must_use]
    pub fn single(color: Rgba) -> Self {
        Self::unit(vec![color])
    }

    /// Sequential blue scale.
    #[must_use]
    pub fn blues() -> Self {
        Self::unit(vec![
            Rgba::rgb(247, 251, 255),
            Rgba::rgb(198, 219, 239),
            Rgba::rgb(107, 174, 214),
            Rgba::rgb(33, 113, 181),
            Rgba::rgb(8, 48, 107),
        ])
    }

    /// Diverging red-blue scale.
    #[must_use]
    pub fn red_blue() -> Self {
        Self::unit(vec![
            Rgba::rgb(178, 24, 43),
            Rgba::rgb(239, 138, 98),
            Rgba::rgb(247, 247, 247),
            Rgba::rgb(103, 169, 207),
            Rgba::rgb(33, 102, 172),
        ])
    }

    /// Viridis (perceptually uniform).
    #[must_use]
    pub fn viridis() -> Self {
        Self::unit(vec![
            Rgba::rgb(68, 1, 84),
            Rgba::rgb(59, 82, 139),
            Rgba::rgb(33, 145, 140),
            Rgba::rgb(94, 201, 98),
            Rgba::rgb(253, 231, 37),
        ])
    }

    /// Magma (sequential, perceptually uniform).
    #[must_use]
    pub fn magma() -> Self {
        Self::unit(vec![
            Rgba::rgb(0, 0, 4),
            Rgba::rgb(81, 18, 124),
            Rgba::rgb(183, 55, 121),
            Rgba::rgb(252, 137, 97),
            Rgba::rgb(252, 253, 191),
        ])
    }

    /// Black to white.
    #[must_use]
    pub fn greyscale() -> Self {
        Self::unit(vec![Rgba::BLACK, Rgba::WHITE])
    }

    /// Black-red-yellow-white.
    #[must_use]
    pub fn heat() -> Self {
        Self::unit(vec![
            Rgba::rgb(0, 0, 0),
            Rgba::rgb(128, 0, 0),
            Rgba::rgb(255, 0, 0),
            Rgba::rgb(255, 128, 0),
            Rgba::rgb(255, 255, 0),
            Rgba::rgb(255, 255, 255),
        ])
    }

    /// The gradient stops.
    #[must_use]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }
}

impl Scale<f32, Rgba> for ColorScale {
    fn scale(&self, value: f32) -> Rgba {
        let t = ((value - self.domain_min) / (self.domain_max - self.domain_min)).clamp(0.0, 1.0);
        // NaN survives clamp
        let t = if t.is_nan() { 0.0 } else { t };

        if self.colors.len() == 1 {
            return self.colors[0];
        }

        let segment_count = self.colors.len() - 1;
        let segment = ((t * segment_count as f32).floor() as usize).min(segment_count - 1);
        let local_t = t * segment_count as f32 - segment as f32;

        self.colors[segment].lerp(self.colors[segment + 1], local_t)
    }

    fn domain(&self) -> (f32, f32) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (Rgba, Rgba) {
        (
            self.colors.first().copied().unwrap_or(Rgba::BLACK),
            self.colors.last().copied().unwrap_or(Rgba::WHITE),
        )
    }
}

impl Colormap for ColorScale {
    fn to_color(&self, position: f32) -> Rgba {
        self.scale(position)
    }
}
