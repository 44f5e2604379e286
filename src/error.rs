//! Error types for keyplot operations.

use crate::grammar::Aesthetic;
use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in keyplot operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a raster backend.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// A frame is missing an aesthetic the series requires.
    #[error("Frame has no {0} aesthetic")]
    MissingAesthetic(Aesthetic),

    /// One aesthetic column has a different length than the others in its frame.
    #[error("Column {aesthetic} has {found} rows, expected {expected}")]
    ColumnLength {
        /// The offending aesthetic.
        aesthetic: Aesthetic,
        /// Row count of the frame.
        expected: usize,
        /// Row count of the column.
        found: usize,
    },

    /// A frame's row count differs from the first frame of its series.
    #[error("Frame has {found} rows, series expects {expected}")]
    RowCountMismatch {
        /// Row count of the first frame.
        expected: usize,
        /// Row count of the rejected frame.
        found: usize,
    },

    /// Frame timestamps must be strictly increasing.
    #[error("Frame time {time} does not follow previous frame time {previous}")]
    NonIncreasingTime {
        /// Timestamp of the last stored frame.
        previous: f32,
        /// Timestamp of the rejected frame.
        time: f32,
    },

    /// Frame timestamp is NaN or infinite.
    #[error("Invalid frame time: {0}")]
    InvalidTime(f32),

    /// No plot exists at the given index.
    #[error("No plot at index {index} (axis has {len})")]
    PlotIndex {
        /// Requested index.
        index: usize,
        /// Number of plots on the axis.
        len: usize,
    },

    /// Named data column does not exist.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Empty data provided where non-empty is required.
    #[error("Empty data provided")]
    EmptyData,

    /// Scale domain error (e.g., equal domain bounds).
    #[error("Scale domain error: {0}")]
    ScaleDomain(String),

    /// Text could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_row_count_mismatch() {
        let err = Error::RowCountMismatch {
            expected: 10,
            found: 20,
        };
        assert!(err.to_string().contains("10"));
        assert!(err.to_string().contains("20"));
    }

    #[test]
    fn test_missing_aesthetic_names_channel() {
        let err = Error::MissingAesthetic(Aesthetic::Y);
        assert_eq!(err.to_string(), "Frame has no y aesthetic");
    }

    #[test]
    fn test_io_from() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
