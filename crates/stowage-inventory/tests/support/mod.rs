//! Invariant assertion helpers shared by the integration suites.

// Each suite compiles its own copy; not every suite uses every helper.
#![allow(dead_code)]

use stowage_core::{Position, Stowable};
use stowage_inventory::Inventory;
use stowage_test_utils::TestItem;

/// Assert the grid/registry consistency invariant:
///
/// - every resident's footprint cells are in bounds and all reference
///   that resident (so no other resident overlaps them),
/// - every non-empty grid cell belongs to some resident,
/// - `len()` equals the number of distinct residents.
pub fn assert_consistent(inventory: &Inventory<TestItem>) {
    let mut footprint_cells = 0usize;
    for item in inventory.iter() {
        let cells = inventory
            .positions(item)
            .expect("resident item must have positions");
        assert_eq!(
            cells.len() as u64,
            item.footprint().area(),
            "footprint of {} is not fully stamped",
            item.name(),
        );
        for &cell in &cells {
            let occupant = inventory
                .try_item_at(cell)
                .expect("footprint cell must be occupied");
            assert_eq!(occupant.id(), item.id(), "cell {cell} references another item");
        }
        footprint_cells += cells.len();
    }

    let mut occupied_cells = 0usize;
    for y in 0..inventory.height() as i32 {
        for x in 0..inventory.width() as i32 {
            if inventory.is_occupied(Position::new(x, y)) {
                occupied_cells += 1;
            }
        }
    }
    assert_eq!(
        footprint_cells, occupied_cells,
        "grid holds cells no resident accounts for"
    );
    assert_eq!(inventory.len(), inventory.iter().count());
}

/// Row-major snapshot of the slot → item-ID mapping, for byte-for-byte
/// state comparisons.
pub fn snapshot(inventory: &Inventory<TestItem>) -> Vec<Option<TestItem>> {
    let mut out = vec![None; (inventory.width() * inventory.height()) as usize];
    inventory.copy_to(&mut out);
    out
}
