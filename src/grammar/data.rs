//! Data containers: named columns and aesthetic-tagged frames.
//!
//! [`DataFrame`] holds named numeric columns. [`DataWithAesthetic`] is what
//! series actually store: one optional column per [`Aesthetic`], where an
//! absent channel (`None`) is distinct from a present but empty one.

use super::aes::{Aes, Aesthetic};
use crate::error::{Error, Result};
use crate::geometry::Limits;
use std::collections::HashMap;

/// A simple columnar data frame of `f32` values.
#[derive(Debug, Clone, Default)]
pub struct DataFrame {
    /// Column data keyed by column name.
    columns: HashMap<String, Vec<f32>>,
    /// Number of rows (length of the longest column).
    n_rows: usize,
}

impl DataFrame {
    /// Create a new empty data frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from x and y arrays, truncated to the shorter one.
    #[must_use]
    pub fn from_xy(x: &[f32], y: &[f32]) -> Self {
        let n = x.len().min(y.len());
        let mut df = Self::new();
        df.add_column("x", &x[..n]);
        df.add_column("y", &y[..n]);
        df
    }

    /// Add or replace a column.
    pub fn add_column(&mut self, name: &str, data: &[f32]) {
        self.n_rows = self.n_rows.max(data.len());
        self.columns.insert(name.to_string(), data.to_vec());
    }

    /// Builder form of [`DataFrame::add_column`].
    #[must_use]
    pub fn column(mut self, name: &str, data: &[f32]) -> Self {
        self.add_column(name, data);
        self
    }

    /// Get a column.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[f32]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Get number of rows.
    #[must_use]
    pub fn nrow(&self) -> usize {
        self.n_rows
    }

    /// Get number of columns.
    #[must_use]
    pub fn ncol(&self) -> usize {
        self.columns.len()
    }

    /// Check if a column exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Get column names (unordered).
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }
}

/// One frame of rows, tagged by aesthetic.
///
/// ```
/// use keyplot::grammar::{Aesthetic, DataWithAesthetic};
///
/// let frame = DataWithAesthetic::new().x(&[0.0, 1.0]).y(&[2.0, 3.0]);
/// assert_eq!(frame.rows(), 2);
/// assert!(frame.get(Aesthetic::Size).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataWithAesthetic {
    columns: [Option<Vec<f32>>; 4],
}

impl DataWithAesthetic {
    /// Create a frame with no channels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the x channel.
    #[must_use]
    pub fn x(self, values: &[f32]) -> Self {
        self.with(Aesthetic::X, values)
    }

    /// Set the y channel.
    #[must_use]
    pub fn y(self, values: &[f32]) -> Self {
        self.with(Aesthetic::Y, values)
    }

    /// Set the color channel.
    #[must_use]
    pub fn color(self, values: &[f32]) -> Self {
        self.with(Aesthetic::Color, values)
    }

    /// Set the size channel.
    #[must_use]
    pub fn size(self, values: &[f32]) -> Self {
        self.with(Aesthetic::Size, values)
    }

    /// Set any channel.
    #[must_use]
    pub fn with(mut self, aesthetic: Aesthetic, values: &[f32]) -> Self {
        self.set(aesthetic, values.to_vec());
        self
    }

    /// Set any channel, taking ownership of the values.
    pub fn set(&mut self, aesthetic: Aesthetic, values: Vec<f32>) {
        self.columns[aesthetic.index()] = Some(values);
    }

    /// Build a frame from named columns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownColumn`] if the mapping names a column the
    /// frame does not have.
    pub fn from_frame(df: &DataFrame, aes: &Aes) -> Result<Self> {
        let mut frame = Self::new();
        for aesthetic in Aesthetic::ALL {
            if let Some(name) = aes.column(aesthetic) {
                let values = df
                    .get(name)
                    .ok_or_else(|| Error::UnknownColumn(name.to_string()))?;
                frame.set(aesthetic, values.to_vec());
            }
        }
        Ok(frame)
    }

    /// Number of rows: the x column length, or the first present column's.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.columns
            .iter()
            .flatten()
            .next()
            .map_or(0, Vec::len)
    }

    /// Values of a channel, or `None` if the channel is not mapped.
    #[must_use]
    pub fn get(&self, aesthetic: Aesthetic) -> Option<&[f32]> {
        self.columns[aesthetic.index()].as_deref()
    }

    /// Whether a channel is mapped.
    #[must_use]
    pub fn has(&self, aesthetic: Aesthetic) -> bool {
        self.columns[aesthetic.index()].is_some()
    }

    /// Check the required channels exist and every mapped column has the same length.
    ///
    /// Returns the row count.
    ///
    /// # Errors
    ///
    /// [`Error::MissingAesthetic`] for the first absent required channel,
    /// [`Error::ColumnLength`] for the first column of the wrong length.
    pub fn validate(&self, required: &[Aesthetic]) -> Result<usize> {
        if let Some(&missing) = required.iter().find(|&&aes| !self.has(aes)) {
            return Err(Error::MissingAesthetic(missing));
        }

        let rows = self.rows();
        for aesthetic in Aesthetic::ALL {
            if let Some(values) = self.get(aesthetic) {
                if values.len() != rows {
                    return Err(Error::ColumnLength {
                        aesthetic,
                        expected: rows,
                        found: values.len(),
                    });
                }
            }
        }
        Ok(rows)
    }

    /// Data-space extent of every channel.
    ///
    /// Absent, empty, or all-NaN channels stay inverted.
    #[must_use]
    pub fn limits(&self) -> Limits {
        let mut limits = Limits::empty();
        for aesthetic in Aesthetic::ALL {
            if let Some((min, max)) = self.get(aesthetic).and_then(extent) {
                limits.set_range(aesthetic.index(), min, max);
            }
        }
        limits
    }
}

/// Finite `(min, max)` of `values` using trueno's SIMD reductions.
pub(crate) fn extent(values: &[f32]) -> Option<(f32, f32)> {
    let finite: Vec<f32> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return None;
    }

    let vec = trueno::Vector::from_vec(finite);
    match (vec.min(), vec.max()) {
        (Ok(min), Ok(max)) => Some((min, max)),
        _ => None,
    }
}
