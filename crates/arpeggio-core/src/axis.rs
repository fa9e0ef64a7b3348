//! The closed set of logical joint axes.

use crate::error::{KinematicsError, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// Logical joint axis, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
    A,
    B,
    C,
}

impl Axis {
    pub const ALL: [Axis; 6] = [Axis::X, Axis::Y, Axis::Z, Axis::A, Axis::B, Axis::C];

    /// Resolve a single lower-case axis code. Any other character,
    /// upper-case codes included, is rejected.
    pub fn from_code(code: char) -> Result<Self> {
        match code {
            'x' => Ok(Axis::X),
            'y' => Ok(Axis::Y),
            'z' => Ok(Axis::Z),
            'a' => Ok(Axis::A),
            'b' => Ok(Axis::B),
            'c' => Ok(Axis::C),
            _ => Err(KinematicsError::UnknownAxis(code)),
        }
    }

    // User-facing input folds case; the reported code is the one typed
    fn from_code_folded(code: char) -> Result<Self> {
        Self::from_code(code.to_ascii_lowercase())
            .map_err(|_| KinematicsError::UnknownAxis(code))
    }

    /// Parse axis from a one-character string (case-insensitive)
    pub fn parse(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Self::from_code_folded(code),
            _ => Err(KinematicsError::InvalidAxisName(s.to_string())),
        }
    }

    pub const fn code(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
            Axis::A => 'a',
            Axis::B => 'b',
            Axis::C => 'c',
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
            Axis::A => 3,
            Axis::B => 4,
            Axis::C => 5,
        }
    }

    /// Parse a list such as `"xyz"` or `"x, a, c"` into axes (case-insensitive).
    ///
    /// A comma-separated list must name exactly one axis per entry.
    pub fn parse_list(s: &str) -> Result<Vec<Self>> {
        if s.contains(',') {
            s.split(',').map(|name| Self::parse(name.trim())).collect()
        } else {
            s.chars()
                .filter(|c| !c.is_whitespace())
                .map(Self::from_code_folded)
                .collect()
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for Axis {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_char(self.code())
    }
}
