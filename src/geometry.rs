//! Axis-aligned boxes over [`Vector`]s.
//!
//! A [`BBox`] is a pair of corner vectors. The same type describes data
//! limits (one dimension per aesthetic) and pixel viewports (two dimensions).
//! A box whose `bmax` is below its `bmin` on some axis is *inverted*: it holds
//! no data on that axis yet. [`BBox::empty`] starts fully inverted so that
//! the first [`BBox::union`] or [`BBox::expand`] adopts the incoming extent.

use crate::vector::Vector;
use num_traits::Float;

/// An axis-aligned box in `N` dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox<T, const N: usize> {
    /// Lower corner.
    pub bmin: Vector<T, N>,
    /// Upper corner.
    pub bmax: Vector<T, N>,
}

/// Data-space limits, indexed by [`Aesthetic::index`](crate::grammar::Aesthetic::index).
pub type Limits = BBox<f32, 4>;

/// Pixel-space rectangle an axis draws into.
pub type Viewport = BBox<f32, 2>;

impl<T, const N: usize> BBox<T, N> {
    /// Create a box from its corners.
    #[must_use]
    pub const fn new(bmin: Vector<T, N>, bmax: Vector<T, N>) -> Self {
        Self { bmin, bmax }
    }
}

impl<T: Float, const N: usize> BBox<T, N> {
    /// A box inverted on every axis (`bmin = +inf`, `bmax = -inf`).
    #[must_use]
    pub fn empty() -> Self {
        Self::new(
            Vector::constant(T::infinity()),
            Vector::constant(T::neg_infinity()),
        )
    }

    /// Extent per axis (`bmax - bmin`).
    #[must_use]
    pub fn delta(&self) -> Vector<T, N> {
        self.bmax - self.bmin
    }

    /// Per-axis flag: `bmax < bmin`.
    #[must_use]
    pub fn inverted(&self) -> Vector<bool, N> {
        self.bmax.elem_lt(&self.bmin)
    }

    /// True if the box is inverted on any axis.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inverted().any()
    }

    /// Smallest box containing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            self.bmin.component_min(&other.bmin),
            self.bmax.component_max(&other.bmax),
        )
    }

    /// Grow the box to include `point`.
    pub fn expand(&mut self, point: &Vector<T, N>) {
        self.bmin = self.bmin.component_min(point);
        self.bmax = self.bmax.component_max(point);
    }

    /// Whether `point` lies inside the box (edges included).
    #[must_use]
    pub fn contains(&self, point: &Vector<T, N>) -> bool {
        point.elem_ge(&self.bmin).all() && point.elem_le(&self.bmax).all()
    }

    /// Centre of the box.
    #[must_use]
    pub fn center(&self) -> Vector<T, N> {
        let two = T::one() + T::one();
        (self.bmin + self.bmax) / two
    }

    /// Project onto a subset of axes, in the given order.
    ///
    /// ```
    /// use keyplot::geometry::Limits;
    /// use keyplot::vector::Vector;
    ///
    /// let limits = Limits::new(Vector::xyzw(0.0, 1.0, 2.0, 3.0), Vector::xyzw(4.0, 5.0, 6.0, 7.0));
    /// let xy = limits.project([0, 1]);
    /// assert_eq!(xy.bmax, Vector::xy(4.0, 5.0));
    /// ```
    #[must_use]
    pub fn project<const M: usize>(&self, axes: [usize; M]) -> BBox<T, M> {
        BBox::new(
            Vector::from_array(axes.map(|i| self.bmin[i])),
            Vector::from_array(axes.map(|i| self.bmax[i])),
        )
    }

    /// Range `(min, max)` along one axis.
    #[must_use]
    pub fn range(&self, axis: usize) -> (T, T) {
        (self.bmin[axis], self.bmax[axis])
    }

    /// Replace the range along one axis.
    pub fn set_range(&mut self, axis: usize, min: T, max: T) {
        self.bmin[axis] = min;
        self.bmax[axis] = max;
    }
}

impl<T: Float, const N: usize> Default for BBox<T, N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl Viewport {
    /// Viewport covering `width` x `height` pixels from the origin.
    #[must_use]
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(Vector::xy(0.0, 0.0), Vector::xy(width, height))
    }
}
