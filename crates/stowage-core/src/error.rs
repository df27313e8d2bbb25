//! Error types for inventory construction and strict accessors.
//!
//! The dominant idiom on the inventory surface is soft failure: the
//! add/remove/can-query family answers `false` for "not applicable"
//! conditions rather than erroring. `InventoryError` covers the rest —
//! construction guards, degenerate search dimensions, and the strict
//! accessor family.

use crate::geometry::Position;
use std::error::Error;
use std::fmt;

/// Errors from inventory construction and the strict accessor family.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InventoryError {
    /// Construction with both dimensions zero. A single zero dimension
    /// is accepted and yields a grid no footprint can ever fit.
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A footprint or free-position search with a zero dimension.
    ZeroFootprint {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A strict positional accessor was given a coordinate outside the
    /// grid.
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// A strict positional accessor hit a cell with no item in it.
    EmptyCell {
        /// The vacant position.
        position: Position,
    },
    /// A strict item accessor or relocation was given an item that is
    /// not resident.
    ItemNotFound,
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {width}x{height}")
            }
            Self::ZeroFootprint { width, height } => {
                write!(f, "footprint {width}x{height} has a zero dimension")
            }
            Self::OutOfBounds {
                position,
                width,
                height,
            } => {
                write!(f, "position {position} outside grid [0, {width}) x [0, {height})")
            }
            Self::EmptyCell { position } => {
                write!(f, "no item at position {position}")
            }
            Self::ItemNotFound => write!(f, "item is not in the inventory"),
        }
    }
}

impl Error for InventoryError {}
