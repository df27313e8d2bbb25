//! Benchmark profiles for the Stowage grid inventory.
//!
//! Provides pre-built inventory states so benches measure the
//! operations, not the setup:
//!
//! - [`fragmented_profile`]: checkerboard of 1x1 items, the worst case
//!   for the row-major free-fit scan
//! - [`mixed_profile`]: first-fit packing of mixed footprints with
//!   every third item removed, a realistic defragmentation input

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use stowage_core::Position;
use stowage_inventory::Inventory;
use stowage_test_utils::TestItem;

/// A `width × height` inventory with a 1x1 item on every other cell.
///
/// Roughly half the cells are occupied in a checkerboard, so any
/// footprint wider than 1x1 forces the free-fit scan to walk the whole
/// grid.
pub fn fragmented_profile(width: u32, height: u32) -> Inventory<TestItem> {
    let mut inventory = Inventory::new(width, height).expect("profile dimensions are valid");
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            if (x + y) % 2 == 0 {
                let item = TestItem::new("pebble", 1, 1);
                inventory.add_at(&item, Position::new(x, y));
            }
        }
    }
    inventory
}

/// A `width × height` inventory packed first-fit with cycling 2x2, 2x1,
/// and 1x1 footprints, then every third item removed.
pub fn mixed_profile(width: u32, height: u32) -> Inventory<TestItem> {
    let mut inventory = Inventory::new(width, height).expect("profile dimensions are valid");
    let shapes = [(2, 2), (2, 1), (1, 1)];
    let mut placed = Vec::new();
    for i in 0.. {
        let (w, h) = shapes[i % shapes.len()];
        let item = TestItem::new("cargo", w, h);
        if !inventory.add(&item) {
            break;
        }
        placed.push(item);
    }
    for item in placed.iter().step_by(3) {
        inventory.remove(item);
    }
    inventory
}
