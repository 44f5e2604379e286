//! Data-to-aesthetic mapping.
//!
//! # Components
//!
//! - **Aesthetics**: the visual channels (x, y, color, size) data maps onto
//! - **Data**: named columns and aesthetic-tagged frames
//! - **Statistics**: transformations applied before a frame is stored (identity, bin)
//!
//! # Example
//!
//! ```rust
//! use keyplot::grammar::*;
//!
//! let df = DataFrame::from_xy(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]);
//! let frame = DataWithAesthetic::from_frame(&df, &Aes::new().x("x").y("y")).unwrap();
//! assert_eq!(frame.rows(), 3);
//! assert!(!frame.has(Aesthetic::Color));
//! ```

mod aes;
mod data;
mod stat;

pub use aes::{Aes, Aesthetic};
pub use data::{DataFrame, DataWithAesthetic};
pub use stat::{bin, BinStrategy, Bins, Stat};
