//! Point and position types for source locations.
//!
//! These follow the unist `position` shape, so trees produced by JavaScript
//! tooling round-trip without loss.

use serde::{Deserialize, Serialize};

/// A single place in a source file.
///
/// Uses 1-indexed lines and 1-indexed columns, as unist does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
    /// Byte offset (0-indexed), when the producer recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

impl Point {
    /// Creates a new point without an offset.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self {
            line,
            column,
            offset: None,
        }
    }
}

/// The source range a node was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Place of the first character.
    pub start: Point,
    /// Place after the last character.
    pub end: Point,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}
