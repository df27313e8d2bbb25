//! Flat-buffer occupancy grid.

use stowage_core::{Footprint, InventoryError, ItemId, Position};

/// A fixed-size dense 2D array of slots, each empty or holding the ID of
/// the item occupying it.
///
/// Storage is a flat buffer of `width * height` slots indexed
/// `y * width + x`. Point access is O(1). The grid carries no validation
/// layer of its own beyond the construction guard: rectangle operations
/// assume caller-validated bounds, and the raw point accessors hard-fail
/// (panic) on out-of-range coordinates.
///
/// # Examples
///
/// ```
/// use stowage_core::{Footprint, ItemId, Position};
/// use stowage_grid::OccupancyGrid;
///
/// let mut grid = OccupancyGrid::new(4, 4).unwrap();
/// let id = ItemId::next();
/// grid.fill(Position::new(1, 1), Footprint::new(2, 2).unwrap(), id);
/// assert_eq!(grid.get(Position::new(2, 2)), Some(id));
/// assert_eq!(grid.get(Position::new(0, 0)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    width: u32,
    height: u32,
    cells: Vec<Option<ItemId>>,
}

impl OccupancyGrid {
    /// Create an empty `width × height` grid.
    ///
    /// Returns `Err(InventoryError::InvalidDimensions)` only when *both*
    /// dimensions are zero. A single zero dimension constructs a grid in
    /// which no footprint ever fits.
    pub fn new(width: u32, height: u32) -> Result<Self, InventoryError> {
        if width == 0 && height == 0 {
            return Err(InventoryError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; (width as usize) * (height as usize)],
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of slots (`width * height`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `pos` names a slot of this grid.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as i64) < i64::from(self.width)
            && (pos.y as i64) < i64::from(self.height)
    }

    /// Occupant of the slot at `pos`, or `None` if the slot is empty.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds. Use
    /// [`in_bounds`](Self::in_bounds) first on untrusted coordinates.
    pub fn get(&self, pos: Position) -> Option<ItemId> {
        assert!(
            self.in_bounds(pos),
            "position {pos} outside grid [0, {}) x [0, {})",
            self.width,
            self.height,
        );
        self.cells[self.index(pos)]
    }

    /// Stamp `id` into every slot of the rectangle at `anchor`.
    ///
    /// Bounds are caller-validated; out-of-bounds rectangles panic.
    pub fn fill(&mut self, anchor: Position, footprint: Footprint, id: ItemId) {
        for pos in Self::rect_cells(anchor, footprint) {
            let idx = self.checked_index(pos);
            self.cells[idx] = Some(id);
        }
    }

    /// Clear every slot of the rectangle at `anchor`.
    ///
    /// Bounds are caller-validated; out-of-bounds rectangles panic.
    pub fn clear_rect(&mut self, anchor: Position, footprint: Footprint) {
        for pos in Self::rect_cells(anchor, footprint) {
            let idx = self.checked_index(pos);
            self.cells[idx] = None;
        }
    }

    /// Clear every slot.
    pub fn clear_all(&mut self) {
        self.cells.fill(None);
    }

    /// The cells of a rectangle at `anchor`, column by column (x outer,
    /// y inner) — the traversal order the inventory reports footprint
    /// positions in.
    pub fn rect_cells(
        anchor: Position,
        footprint: Footprint,
    ) -> impl Iterator<Item = Position> {
        let (w, h) = (footprint.width() as i32, footprint.height() as i32);
        (anchor.x..anchor.x + w)
            .flat_map(move |x| (anchor.y..anchor.y + h).map(move |y| Position::new(x, y)))
    }

    /// Flat index of an in-bounds position.
    fn index(&self, pos: Position) -> usize {
        (pos.y as usize) * (self.width as usize) + (pos.x as usize)
    }

    fn checked_index(&self, pos: Position) -> usize {
        assert!(
            self.in_bounds(pos),
            "position {pos} outside grid [0, {}) x [0, {})",
            self.width,
            self.height,
        );
        self.index(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(w: u32, h: u32) -> Footprint {
        Footprint::new(w, h).unwrap()
    }

    #[test]
    fn new_rejects_only_both_zero() {
        assert!(OccupancyGrid::new(0, 0).is_err());
        // One zero dimension is accepted (construction guard quirk).
        assert!(OccupancyGrid::new(0, 4).is_ok());
        assert!(OccupancyGrid::new(4, 0).is_ok());
    }

    #[test]
    fn fill_and_clear_round_trip() {
        let mut grid = OccupancyGrid::new(4, 4).unwrap();
        let id = ItemId::next();
        grid.fill(Position::new(1, 2), fp(2, 2), id);
        assert_eq!(grid.get(Position::new(1, 2)), Some(id));
        assert_eq!(grid.get(Position::new(2, 3)), Some(id));
        assert_eq!(grid.get(Position::new(0, 0)), None);

        grid.clear_rect(Position::new(1, 2), fp(2, 2));
        for pos in OccupancyGrid::rect_cells(Position::new(0, 0), fp(4, 4)) {
            assert_eq!(grid.get(pos), None);
        }
    }

    #[test]
    fn rect_cells_is_column_major() {
        let cells: Vec<_> = OccupancyGrid::rect_cells(Position::new(1, 1), fp(2, 2)).collect();
        assert_eq!(
            cells,
            vec![
                Position::new(1, 1),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "outside grid")]
    fn get_out_of_bounds_panics() {
        let grid = OccupancyGrid::new(4, 4).unwrap();
        grid.get(Position::new(4, 0));
    }

    #[test]
    #[should_panic(expected = "outside grid")]
    fn get_negative_panics() {
        let grid = OccupancyGrid::new(4, 4).unwrap();
        grid.get(Position::new(-1, 0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn fill_stamps_exactly_the_rectangle(
                ax in 0i32..6,
                ay in 0i32..6,
                w in 1u32..=3,
                h in 1u32..=3,
            ) {
                let mut grid = OccupancyGrid::new(8, 8).unwrap();
                let anchor = Position::new(ax, ay);
                let footprint = fp(w, h);
                let id = ItemId::next();
                grid.fill(anchor, footprint, id);

                for pos in OccupancyGrid::rect_cells(Position::new(0, 0), fp(8, 8)) {
                    let inside = pos.x >= ax
                        && pos.x < ax + w as i32
                        && pos.y >= ay
                        && pos.y < ay + h as i32;
                    prop_assert_eq!(grid.get(pos), inside.then_some(id));
                }
            }

            #[test]
            fn clear_rect_inverts_fill(
                ax in 0i32..6,
                ay in 0i32..6,
                w in 1u32..=3,
                h in 1u32..=3,
            ) {
                let mut grid = OccupancyGrid::new(8, 8).unwrap();
                let anchor = Position::new(ax, ay);
                let footprint = fp(w, h);
                grid.fill(anchor, footprint, ItemId::next());
                grid.clear_rect(anchor, footprint);
                prop_assert_eq!(grid, OccupancyGrid::new(8, 8).unwrap());
            }

            #[test]
            fn rect_cells_covers_the_footprint_area(
                ax in -4i32..4,
                ay in -4i32..4,
                w in 1u32..=5,
                h in 1u32..=5,
            ) {
                let cells: Vec<_> =
                    OccupancyGrid::rect_cells(Position::new(ax, ay), fp(w, h)).collect();
                prop_assert_eq!(cells.len() as u64, fp(w, h).area());
                let distinct: std::collections::HashSet<_> = cells.iter().collect();
                prop_assert_eq!(distinct.len(), cells.len());
            }
        }
    }
}
