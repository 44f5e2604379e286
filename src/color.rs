//! Color types and the categorical series palette.
//!
//! [`Rgba`] is the color every backend consumes. [`Palette`] is the ordered
//! list of series colors an axis hands out as plots are registered; it is a
//! plain value passed in through [`AxisConfig`](crate::config::AxisConfig),
//! so two axes never share hidden palette state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Linear interpolation toward `other`; `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;

        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    /// CSS color string: `rgb(r,g,b)` when opaque, `rgba(r,g,b,a)` otherwise.
    #[must_use]
    pub fn to_css(self) -> String {
        if self.a == 255 {
            format!("rgb({},{},{})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({},{},{},{:.3})",
                self.r,
                self.g,
                self.b,
                f32::from(self.a) / 255.0
            )
        }
    }
}

/// HSLA color with floating-point components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsla {
    /// Hue (0.0-360.0 degrees).
    pub h: f32,
    /// Saturation (0.0-1.0).
    pub s: f32,
    /// Lightness (0.0-1.0).
    pub l: f32,
    /// Alpha (0.0-1.0).
    pub a: f32,
}

impl Hsla {
    /// Create an opaque HSL color (alpha = 1.0).
    #[must_use]
    pub const fn hsl(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l, a: 1.0 }
    }

    /// Convert to RGBA.
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        let h = self.h.rem_euclid(360.0) / 360.0;
        let (s, l) = (self.s, self.l);

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_rgb(p, q, h + 1.0 / 3.0),
                hue_to_rgb(p, q, h),
                hue_to_rgb(p, q, h - 1.0 / 3.0),
            )
        };

        let channel = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgba::new(channel(r), channel(g), channel(b), channel(self.a))
    }
}

fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl From<Hsla> for Rgba {
    fn from(hsla: Hsla) -> Self {
        hsla.to_rgba()
    }
}

// ============================================================================
// Palette
// ============================================================================

/// Ordered series colors, handed out by registration index.
///
/// Indices past the end wrap around, so any number of plots gets a color.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Palette {
    /// Ten-color categorical palette (the familiar "tab10" set).
    pub const CATEGORICAL: [Rgba; 10] = [
        Rgba::rgb(31, 119, 180),
        Rgba::rgb(255, 127, 14),
        Rgba::rgb(44, 160, 44),
        Rgba::rgb(214, 39, 40),
        Rgba::rgb(148, 103, 189),
        Rgba::rgb(140, 86, 75),
        Rgba::rgb(227, 119, 194),
        Rgba::rgb(127, 127, 127),
        Rgba::rgb(188, 189, 34),
        Rgba::rgb(23, 190, 207),
    ];

    /// Create a palette from an explicit color list.
    ///
    /// Returns `None` if `colors` is empty.
    #[must_use]
    pub fn new(colors: Vec<Rgba>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    /// `n` evenly spaced hues at fixed saturation and lightness.
    #[must_use]
    pub fn hues(n: usize) -> Self {
        let n = n.max(1);
        let colors = (0..n)
            .map(|i| Hsla::hsl(360.0 * i as f32 / n as f32, 0.65, 0.5).to_rgba())
            .collect();
        Self { colors }
    }

    /// Color for the `index`-th series, wrapping past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Rgba {
        if self.colors.is_empty() {
            return Rgba::BLACK;
        }
        self.colors[index % self.colors.len()]
    }

    /// Number of distinct colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True if the palette holds no colors (only possible via deserialization).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All colors in order.
    #[must_use]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: Self::CATEGORICAL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::WHITE, Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::RED.with_alpha(10).a, 10);
    }

    #[test]
    fn test_rgba_lerp() {
        let mid = Rgba::BLACK.lerp(Rgba::WHITE, 0.5);
        assert_eq!(mid, Rgba::rgb(128, 128, 128));
        assert_eq!(Rgba::BLACK.lerp(Rgba::WHITE, 2.0), Rgba::WHITE);
    }

    #[test]
    fn test_to_css() {
        assert_eq!(Rgba::RED.to_css(), "rgb(255,0,0)");
        assert_eq!(Rgba::new(0, 0, 255, 0).to_css(), "rgba(0,0,255,0.000)");
    }

    #[test]
    fn test_hsla_to_rgba() {
        assert_eq!(Hsla::hsl(0.0, 1.0, 0.5).to_rgba(), Rgba::RED);
        assert_eq!(Hsla::hsl(120.0, 1.0, 0.5).to_rgba(), Rgba::GREEN);
        assert_eq!(Hsla::hsl(240.0, 1.0, 0.5).to_rgba(), Rgba::BLUE);
        assert_eq!(Hsla::hsl(0.0, 0.0, 0.5).to_rgba(), Rgba::rgb(128, 128, 128));
    }

    #[test]
    fn test_hsla_wraps_hue() {
        assert_eq!(Hsla::hsl(360.0, 1.0, 0.5).to_rgba(), Rgba::RED);
        let rgba: Rgba = Hsla::hsl(300.0, 1.0, 0.5).into();
        assert_eq!(rgba, Rgba::rgb(255, 0, 255));
    }

    #[test]
    fn test_palette_cycles() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 10);
        assert_eq!(palette.get(0), Rgba::rgb(31, 119, 180));
        assert_eq!(palette.get(10), palette.get(0));
        assert_eq!(palette.get(13), palette.get(3));
    }

    #[test]
    fn test_palette_new_rejects_empty() {
        assert!(Palette::new(Vec::new()).is_none());
        let p = Palette::new(vec![Rgba::RED, Rgba::BLUE]).expect("operation should succeed");
        assert_eq!(p.get(3), Rgba::BLUE);
    }

    #[test]
    fn test_palette_hues_distinct() {
        let p = Palette::hues(3);
        assert_eq!(p.len(), 3);
        assert_eq!(p.get(0).r, 210);
        assert_ne!(p.get(0), p.get(1));
        assert_ne!(p.get(1), p.get(2));
    }
}
