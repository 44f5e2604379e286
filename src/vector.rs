//! Fixed-size numeric vectors with element-wise arithmetic.
//!
//! [`Vector<T, N>`] is the leaf type every other module builds on: axis
//! limits and viewports are boxes of vectors, pixel positions are
//! `Vector<f32, 2>`, and tick spacing is computed on both axes at once.
//!
//! Arithmetic is element-wise. Binary operators accept another vector of the
//! same size or a scalar, on either side for the primitive numeric types.
//! Comparisons return a vector of `bool` rather than a single verdict, so
//! per-axis questions ("which ranges are inverted?") stay per-axis.
//!
//! ```
//! use keyplot::vector::{round_off, Vector};
//!
//! let spacing = Vector::xy(10.0_f32, 7.3) / 5.0;
//! let rounded = round_off(spacing, 2);
//! assert_eq!(rounded, Vector::xy(2.0, 1.5));
//! ```

use crate::error::{Error, Result};
use num_traits::{Float, NumCast, One, Zero};
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use std::str::FromStr;

/// An `N`-element tuple of numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize>([T; N]);

/// Two-component `f32` vector used for pixel positions.
pub type Vec2 = Vector<f32, 2>;

impl<T, const N: usize> Vector<T, N> {
    /// Wrap an array.
    #[must_use]
    pub const fn from_array(values: [T; N]) -> Self {
        Self(values)
    }

    /// Unwrap into the underlying array.
    #[must_use]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Number of elements (always `N`).
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// True only for the zero-sized vector.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Apply `f` to every element.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Vector<U, N> {
        Vector(self.0.map(f))
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Vector with every element set to `value`.
    #[must_use]
    pub fn constant(value: T) -> Self {
        Self([value; N])
    }

    /// Combine two vectors element by element.
    #[must_use]
    pub fn zip_with<U, V, F>(self, other: Vector<U, N>, mut f: F) -> Vector<V, N>
    where
        U: Copy,
        F: FnMut(T, U) -> V,
    {
        Vector(std::array::from_fn(|i| f(self.0[i], other.0[i])))
    }
}

impl<T: Copy + Zero, const N: usize> Vector<T, N> {
    /// The zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Self([T::zero(); N])
    }

    /// Sum of all elements.
    #[must_use]
    pub fn sum(&self) -> T {
        self.0.iter().fold(T::zero(), |acc, &v| acc + v)
    }
}

impl<T: Copy + Zero, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Copy + One, const N: usize> Vector<T, N> {
    /// Product of all elements.
    #[must_use]
    pub fn prod(&self) -> T {
        self.0.iter().fold(T::one(), |acc, &v| acc * v)
    }
}

impl<T> Vector<T, 2> {
    /// Two-component vector.
    #[must_use]
    pub const fn xy(x: T, y: T) -> Self {
        Self([x, y])
    }
}

impl<T> Vector<T, 3> {
    /// Three-component vector.
    #[must_use]
    pub const fn xyz(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
    }
}

impl<T> Vector<T, 4> {
    /// Four-component vector.
    #[must_use]
    pub const fn xyzw(x: T, y: T, z: T, w: T) -> Self {
        Self([x, y, z, w])
    }
}

impl<T: Copy + Mul<Output = T> + Sub<Output = T>> Vector<T, 3> {
    /// Cross product.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        let [a0, a1, a2] = self.0;
        let [b0, b1, b2] = other.0;
        Self([a1 * b2 - a2 * b1, a2 * b0 - a0 * b2, a0 * b1 - a1 * b0])
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(values: [T; N]) -> Self {
        Self(values)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

macro_rules! impl_elementwise_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T: Copy + $Op<Output = T>, const N: usize> $Op for Vector<T, N> {
            type Output = Self;

            fn $op(self, rhs: Self) -> Self {
                self.zip_with(rhs, |a, b| $Op::$op(a, b))
            }
        }

        impl<T: Copy + $Op<Output = T>, const N: usize> $Op<T> for Vector<T, N> {
            type Output = Self;

            fn $op(self, rhs: T) -> Self {
                self.map(|a| $Op::$op(a, rhs))
            }
        }

        impl<T: Copy + $OpAssign, const N: usize> $OpAssign for Vector<T, N> {
            fn $op_assign(&mut self, rhs: Self) {
                for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
                    $OpAssign::$op_assign(lhs, rhs);
                }
            }
        }

        impl<T: Copy + $OpAssign, const N: usize> $OpAssign<T> for Vector<T, N> {
            fn $op_assign(&mut self, rhs: T) {
                for lhs in &mut self.0 {
                    $OpAssign::$op_assign(lhs, rhs);
                }
            }
        }
    };
}

impl_elementwise_op!(Add, add, AddAssign, add_assign);
impl_elementwise_op!(Sub, sub, SubAssign, sub_assign);
impl_elementwise_op!(Mul, mul, MulAssign, mul_assign);
impl_elementwise_op!(Div, div, DivAssign, div_assign);

// scalar on the left: `2.0 * v`, `1.0 - v`
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl<const N: usize> Add<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            fn add(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                rhs.map(|v| self + v)
            }
        }

        impl<const N: usize> Sub<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            fn sub(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                rhs.map(|v| self - v)
            }
        }

        impl<const N: usize> Mul<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                rhs.map(|v| self * v)
            }
        }

        impl<const N: usize> Div<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            fn div(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                rhs.map(|v| self / v)
            }
        }
    )*};
}

impl_scalar_lhs!(f32, f64, i32, i64);

impl<T: Copy + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

// ============================================================================
// Comparisons and reductions
// ============================================================================

impl<T: Copy + PartialOrd, const N: usize> Vector<T, N> {
    /// Element-wise `==`.
    #[must_use]
    pub fn elem_eq(&self, other: &Self) -> Vector<bool, N> {
        self.zip_with(*other, |a, b| a == b)
    }

    /// Element-wise `!=`.
    #[must_use]
    pub fn elem_ne(&self, other: &Self) -> Vector<bool, N> {
        self.zip_with(*other, |a, b| a != b)
    }

    /// Element-wise `<`.
    #[must_use]
    pub fn elem_lt(&self, other: &Self) -> Vector<bool, N> {
        self.zip_with(*other, |a, b| a < b)
    }

    /// Element-wise `>`.
    #[must_use]
    pub fn elem_gt(&self, other: &Self) -> Vector<bool, N> {
        self.zip_with(*other, |a, b| a > b)
    }

    /// Element-wise `<=`.
    #[must_use]
    pub fn elem_le(&self, other: &Self) -> Vector<bool, N> {
        self.zip_with(*other, |a, b| a <= b)
    }

    /// Element-wise `>=`.
    #[must_use]
    pub fn elem_ge(&self, other: &Self) -> Vector<bool, N> {
        self.zip_with(*other, |a, b| a >= b)
    }

    /// Smallest element.
    ///
    /// # Panics
    ///
    /// Panics if `N == 0`.
    #[must_use]
    pub fn min_coeff(&self) -> T {
        let mut best = self.0[0];
        for &v in &self.0[1..] {
            if v < best {
                best = v;
            }
        }
        best
    }

    /// Largest element.
    ///
    /// # Panics
    ///
    /// Panics if `N == 0`.
    #[must_use]
    pub fn max_coeff(&self) -> T {
        let mut best = self.0[0];
        for &v in &self.0[1..] {
            if v > best {
                best = v;
            }
        }
        best
    }

    /// Element-wise minimum of two vectors.
    #[must_use]
    pub fn component_min(&self, other: &Self) -> Self {
        self.zip_with(*other, |a, b| if b < a { b } else { a })
    }

    /// Element-wise maximum of two vectors.
    #[must_use]
    pub fn component_max(&self, other: &Self) -> Self {
        self.zip_with(*other, |a, b| if b > a { b } else { a })
    }
}

/// Boolean interpretation of an element, used by `all`/`any`/`none`.
pub trait Truthy {
    /// Whether the value counts as true.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy {
    ($zero:expr => $($t:ty),*) => {$(
        impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != $zero
            }
        }
    )*};
}

impl_truthy!(0 => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_truthy!(0.0 => f32, f64);

impl<T: Truthy, const N: usize> Vector<T, N> {
    /// True when every element is truthy.
    #[must_use]
    pub fn all(&self) -> bool {
        self.0.iter().all(Truthy::is_truthy)
    }

    /// True when at least one element is truthy.
    #[must_use]
    pub fn any(&self) -> bool {
        self.0.iter().any(Truthy::is_truthy)
    }

    /// True when no element is truthy.
    #[must_use]
    pub fn none(&self) -> bool {
        !self.any()
    }
}

impl<T: Copy + Zero + Mul<Output = T>, const N: usize> Vector<T, N> {
    /// Dot product.
    #[must_use]
    pub fn dot(&self, other: &Self) -> T {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Alias for [`Vector::dot`].
    #[must_use]
    pub fn inner_product(&self, other: &Self) -> T {
        self.dot(other)
    }

    /// Sum of squared elements.
    #[must_use]
    pub fn squared_norm(&self) -> T {
        self.dot(self)
    }
}

impl<T: Float, const N: usize> Vector<T, N> {
    /// Euclidean length.
    #[must_use]
    pub fn norm(&self) -> T {
        self.squared_norm().sqrt()
    }

    /// Largest absolute element.
    #[must_use]
    pub fn inf_norm(&self) -> T {
        self.0.iter().fold(T::zero(), |acc, &v| acc.max(v.abs()))
    }

    /// Scale to unit length in place.
    ///
    /// The zero vector becomes all-NaN.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        *self = *self / norm;
    }

    /// Unit-length copy of this vector.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Element-wise floor.
    #[must_use]
    pub fn floor(self) -> Self {
        self.map(Float::floor)
    }

    /// Element-wise ceiling.
    #[must_use]
    pub fn ceil(self) -> Self {
        self.map(Float::ceil)
    }

    /// Element-wise round (half away from zero).
    #[must_use]
    pub fn round(self) -> Self {
        self.map(Float::round)
    }

    /// Element-wise absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        self.map(Float::abs)
    }

    /// Element-wise square.
    #[must_use]
    pub fn abs2(self) -> Self {
        self.map(|v| v * v)
    }

    /// Element-wise power.
    #[must_use]
    pub fn pow(self, exponent: T) -> Self {
        self.map(|v| v.powf(exponent))
    }
}

impl<T: Copy + NumCast, const N: usize> Vector<T, N> {
    /// Convert every element to `U`, or `None` if any value does not fit.
    #[must_use]
    pub fn cast<U: NumCast>(&self) -> Option<Vector<U, N>> {
        let values = self
            .0
            .iter()
            .map(|&v| U::from(v))
            .collect::<Option<Vec<U>>>()?;
        <[U; N]>::try_from(values).ok().map(Vector)
    }
}

// ============================================================================
// Significant-digit rounding
// ============================================================================

fn ten<T: Float>() -> T {
    let two = T::one() + T::one();
    let five = two + two + T::one();
    two * five
}

/// Round `value` to `digits` significant digits, ties rounding up.
///
/// Digits left of the decimal point are counted first; values below one
/// count none, so they keep exactly `digits` decimals. Non-finite values
/// are returned unchanged.
///
/// ```
/// use keyplot::vector::round_off_scalar;
///
/// assert_eq!(round_off_scalar(1234.5_f64, 2), 1200.0);
/// assert_eq!(round_off_scalar(0.25_f64, 1), 0.3);
/// ```
#[must_use]
pub fn round_off_scalar<T: Float>(value: T, digits: u32) -> T {
    if !value.is_finite() {
        return value;
    }

    let ten = ten::<T>();
    let mut magnitude = value;
    let mut integer_digits = 0_i32;
    while magnitude >= T::one() {
        magnitude = magnitude / ten;
        integer_digits += 1;
    }

    let half = T::one() / (T::one() + T::one());
    let exponent = digits as i32 - integer_digits;
    if exponent >= 0 {
        let scale = ten.powi(exponent);
        (value * scale + half).floor() / scale
    } else {
        let scale = ten.powi(-exponent);
        (value / scale + half).floor() * scale
    }
}

/// Element-wise [`round_off_scalar`].
#[must_use]
pub fn round_off<T: Float, const N: usize>(values: Vector<T, N>, digits: u32) -> Vector<T, N> {
    values.map(|v| round_off_scalar(v, digits))
}

// ============================================================================
// Text form: `(a,b,c)`
// ============================================================================

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            fmt::Display::fmt(v, f)?;
        }
        f.write_str(")")
    }
}

impl<T: FromStr, const N: usize> FromStr for Vector<T, N> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| Error::Parse(format!("expected parenthesised vector, got {s:?}")))?;

        let values = inner
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<T>()
                    .map_err(|_| Error::Parse(format!("invalid element {part:?}")))
            })
            .collect::<Result<Vec<T>>>()?;

        let found = values.len();
        <[T; N]>::try_from(values)
            .map(Self)
            .map_err(|_| Error::Parse(format!("expected {} elements, found {found}", N)))
    }
}
