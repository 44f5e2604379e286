//! Aesthetic channels and column-to-aesthetic mappings.

use std::fmt;

/// A visual channel data can be mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Aesthetic {
    /// Horizontal position.
    X,
    /// Vertical position.
    Y,
    /// Colormap position.
    Color,
    /// Marker radius.
    Size,
}

impl Aesthetic {
    /// All aesthetics in index order.
    pub const ALL: [Self; 4] = [Self::X, Self::Y, Self::Color, Self::Size];

    /// Position of this aesthetic in a [`Limits`](crate::geometry::Limits) box.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Color => 2,
            Self::Size => 3,
        }
    }

    /// Lower-case channel name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Color => "color",
            Self::Size => "size",
        }
    }
}

impl fmt::Display for Aesthetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Column-to-aesthetic mapping.
///
/// Names the [`DataFrame`](super::DataFrame) column feeding each aesthetic.
/// Unmapped aesthetics are simply absent from the resulting frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aes {
    columns: [Option<String>; 4],
}

impl Aes {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map x position to a column.
    #[must_use]
    pub fn x(self, column: &str) -> Self {
        self.map(Aesthetic::X, column)
    }

    /// Map y position to a column.
    #[must_use]
    pub fn y(self, column: &str) -> Self {
        self.map(Aesthetic::Y, column)
    }

    /// Map color to a column.
    #[must_use]
    pub fn color(self, column: &str) -> Self {
        self.map(Aesthetic::Color, column)
    }

    /// Map size to a column.
    #[must_use]
    pub fn size(self, column: &str) -> Self {
        self.map(Aesthetic::Size, column)
    }

    /// Map any aesthetic to a column.
    #[must_use]
    pub fn map(mut self, aesthetic: Aesthetic, column: &str) -> Self {
        self.columns[aesthetic.index()] = Some(column.to_string());
        self
    }

    /// Column mapped to `aesthetic`, if any.
    #[must_use]
    pub fn column(&self, aesthetic: Aesthetic) -> Option<&str> {
        self.columns[aesthetic.index()].as_deref()
    }
}
