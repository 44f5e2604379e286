//! Tick layout.
//!
//! Tick counts follow the viewport aspect ratio unless requested explicitly,
//! so tick density stays roughly even in pixel space. Spacing is the data
//! range divided by the count, rounded to a few significant digits, and the
//! first tick is the smallest multiple of the spacing at or above the minimum.

use super::transform::{effective_limits, DisplayTransform};
use crate::geometry::{Limits, Viewport};
use crate::grammar::Aesthetic;
use crate::vector::{round_off, Vec2};

/// Tick count used along the shorter default axis.
pub const DEFAULT_TICKS: usize = 5;

/// Tick values and their pixel positions, per axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInfo {
    /// Data value of each x tick.
    pub x_val: Vec<f32>,
    /// Pixel x of each x tick.
    pub x_pos: Vec<f32>,
    /// Data value of each y tick.
    pub y_val: Vec<f32>,
    /// Pixel y of each y tick.
    pub y_pos: Vec<f32>,
}

impl TickInfo {
    /// Remove every tick.
    pub fn clear(&mut self) {
        self.x_val.clear();
        self.x_pos.clear();
        self.y_val.clear();
        self.y_pos.clear();
    }

    /// True if neither axis has ticks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x_val.is_empty() && self.y_val.is_empty()
    }

    /// `(value, pixel)` pairs along x.
    pub fn x_ticks(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.x_val.iter().copied().zip(self.x_pos.iter().copied())
    }

    /// `(value, pixel)` pairs along y.
    pub fn y_ticks(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.y_val.iter().copied().zip(self.y_pos.iter().copied())
    }

    /// Clear and recompute every tick.
    pub(crate) fn rebuild(
        &mut self,
        limits: &Limits,
        viewport: &Viewport,
        counts: (usize, usize),
        significant_digits: u32,
    ) {
        let xy = effective_limits(limits).project([Aesthetic::X.index(), Aesthetic::Y.index()]);
        let n = Vec2::xy(counts.0 as f32, counts.1 as f32);

        let raw = xy.delta() / n;
        // small spacings can round to zero; keep those unrounded
        let spacing = round_off(raw, significant_digits)
            .zip_with(raw, |rounded, raw| if rounded > 0.0 { rounded } else { raw });
        let first = (xy.bmin / spacing).ceil() * spacing;

        let spacing_px = spacing * viewport.delta() / xy.delta();
        let first_px = DisplayTransform::new(limits, viewport, (0.0, 1.0)).position(first[0], first[1]);

        self.clear();
        for i in 0..counts.0 {
            let step = i as f32;
            self.x_val.push(first[0] + step * spacing[0]);
            self.x_pos.push(first_px[0] + step * spacing_px[0]);
        }
        for i in 0..counts.1 {
            let step = i as f32;
            self.y_val.push(first[1] + step * spacing[1]);
            self.y_pos.push(first_px[1] - step * spacing_px[1]);
        }

        log::debug!(
            target: "keyplot",
            "ticks rebuilt: counts={counts:?} spacing={spacing} first={first}"
        );
    }
}

/// Resolve tick counts from the requested counts (0 = automatic) and viewport.
///
/// A viewport whose width/height ratio is not a positive finite number is
/// treated as square.
#[must_use]
pub fn num_ticks(requested: (usize, usize), viewport: &Viewport) -> (usize, usize) {
    let (nx, ny) = requested;
    if nx > 0 && ny > 0 {
        return (nx, ny);
    }

    let delta = viewport.delta();
    let ratio = delta[0] / delta[1];
    let ratio = if ratio.is_finite() && ratio > 0.0 { ratio } else { 1.0 };

    if nx > 0 {
        (nx, (nx as f32 / ratio).floor() as usize)
    } else if ny > 0 {
        ((ny as f32 * ratio).floor() as usize, ny)
    } else {
        ((DEFAULT_TICKS as f32 * ratio).floor() as usize, DEFAULT_TICKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_num_ticks_square() {
        assert_eq!(num_ticks((0, 0), &Viewport::from_size(100.0, 100.0)), (5, 5));
    }

    #[test]
    fn test_num_ticks_wide() {
        assert_eq!(num_ticks((0, 0), &Viewport::from_size(200.0, 100.0)), (10, 5));
    }

    #[test]
    fn test_num_ticks_one_requested() {
        let vp = Viewport::from_size(200.0, 100.0);
        assert_eq!(num_ticks((6, 0), &vp), (6, 3));
        assert_eq!(num_ticks((0, 3), &vp), (6, 3));
        assert_eq!(num_ticks((7, 2), &vp), (7, 2));
    }

    #[test]
    fn test_num_ticks_degenerate_viewport() {
        assert_eq!(num_ticks((0, 0), &Viewport::from_size(100.0, 0.0)), (5, 5));
        assert_eq!(num_ticks((0, 0), &Viewport::from_size(0.0, 0.0)), (5, 5));
    }

    #[test]
    fn test_rebuild_basic() {
        let mut limits = Limits::empty();
        limits.set_range(0, 0.0, 10.0);
        limits.set_range(1, 0.0, 10.0);
        let vp = Viewport::from_size(100.0, 100.0);

        let mut ticks = TickInfo::default();
        ticks.rebuild(&limits, &vp, (5, 5), 2);
        assert_eq!(ticks.x_val, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
        assert_eq!(ticks.x_pos, vec![0.0, 20.0, 40.0, 60.0, 80.0]);
        assert_eq!(ticks.y_val, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
        assert_eq!(ticks.y_pos, vec![100.0, 80.0, 60.0, 40.0, 20.0]);
    }

    #[test]
    fn test_rebuild_clears_previous() {
        let vp = Viewport::from_size(100.0, 100.0);
        let mut ticks = TickInfo::default();
        ticks.rebuild(&Limits::empty(), &vp, (5, 5), 2);
        ticks.rebuild(&Limits::empty(), &vp, (3, 2), 2);
        assert_eq!(ticks.x_val.len(), 3);
        assert_eq!(ticks.y_pos.len(), 2);
    }

    #[test]
    fn test_rebuild_offset_minimum() {
        let mut limits = Limits::empty();
        limits.set_range(0, 0.3, 10.3);
        limits.set_range(1, -7.0, 3.0);
        let mut ticks = TickInfo::default();
        ticks.rebuild(&limits, &Viewport::from_size(100.0, 100.0), (5, 5), 2);

        // first tick is the first multiple of the spacing above the minimum
        assert_relative_eq!(ticks.x_val[0], 2.0);
        assert_relative_eq!(ticks.x_pos[0], 17.0, epsilon = 1e-4);
        assert_relative_eq!(ticks.y_val[0], -6.0);
        assert_relative_eq!(ticks.y_pos[0], 90.0, epsilon = 1e-4);
        assert_relative_eq!(ticks.y_pos[1], 70.0, epsilon = 1e-4);
    }

    #[test]
    fn test_spacing_rounding_to_zero_keeps_raw_spacing() {
        let mut ticks = TickInfo::default();
        ticks.rebuild(&Limits::empty(), &Viewport::from_size(100.0, 100.0), (250, 5), 2);
        assert_eq!(ticks.x_val.len(), 250);
        assert!(ticks.x_ticks().all(|(v, p)| v.is_finite() && p.is_finite()));
        assert_relative_eq!(ticks.x_val[1] - ticks.x_val[0], 0.004, epsilon = 1e-6);
        assert_relative_eq!(ticks.y_val[1], 0.2, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_ticks_emits_nothing() {
        let mut ticks = TickInfo::default();
        ticks.rebuild(&Limits::empty(), &Viewport::from_size(10.0, 100.0), (0, 5), 2);
        assert!(ticks.x_val.is_empty());
        assert_eq!(ticks.y_val.len(), 5);
    }
}
