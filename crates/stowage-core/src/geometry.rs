//! Grid geometry: cell positions and item footprints.

use crate::error::InventoryError;
use std::fmt;

/// A cell coordinate on the inventory grid.
///
/// `(x, y)` with `x` growing rightward and `y` downward. An item's
/// *anchor* is the minimum-x, minimum-y cell of its footprint.
/// Coordinates are signed so that out-of-range queries (including
/// negative ones) are representable; whether they answer `false` or
/// hard-fail depends on the accessor family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Horizontal cell index.
    pub x: i32,
    /// Vertical cell index.
    pub y: i32,
}

impl Position {
    /// Create a position from its coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// The rectangular size of an item, in cells.
///
/// Both dimensions are strictly positive; construction rejects zero, so
/// downstream placement code never re-validates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Footprint {
    width: u32,
    height: u32,
}

impl Footprint {
    /// Create a footprint of `width × height` cells.
    ///
    /// Returns `Err(InventoryError::ZeroFootprint)` if either dimension
    /// is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, InventoryError> {
        if width == 0 || height == 0 {
            return Err(InventoryError::ZeroFootprint { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells covered, the defragmentation sort key.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl fmt::Display for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprint_rejects_zero_dimensions() {
        assert!(Footprint::new(0, 3).is_err());
        assert!(Footprint::new(3, 0).is_err());
        assert!(Footprint::new(0, 0).is_err());
    }

    #[test]
    fn footprint_area() {
        let fp = Footprint::new(3, 2).unwrap();
        assert_eq!(fp.area(), 6);
    }

    #[test]
    fn position_display() {
        assert_eq!(Position::new(2, -1).to_string(), "(2, -1)");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn construction_accepts_exactly_positive_dimensions(
                width in 0u32..100,
                height in 0u32..100,
            ) {
                let result = Footprint::new(width, height);
                prop_assert_eq!(result.is_ok(), width > 0 && height > 0);
                if let Ok(fp) = result {
                    prop_assert_eq!(fp.area(), u64::from(width) * u64::from(height));
                }
            }

            #[test]
            fn area_never_overflows(
                width in 1u32..=u32::MAX,
                height in 1u32..=u32::MAX,
            ) {
                let fp = Footprint::new(width, height).unwrap();
                // u64 holds the full u32 x u32 product.
                prop_assert!(fp.area() >= u64::from(width.max(height)));
            }
        }
    }
}
