//! Grid inventory orchestration for the Stowage workspace.
//!
//! [`Inventory`] places rectangular items on a dense occupancy grid
//! without overlap, supports collision-aware queries, relocation, and a
//! defragmentation pass, and notifies subscribers of every state change.
//! It keeps the grid and a side registry (item → anchor) in lockstep so
//! observers never see an inconsistent view.
//!
//! Single-threaded by design: no internal locking, synchronous dispatch,
//! all operations bounded and deterministic. Drive it from one control
//! thread and serialize any cross-thread access externally.
//!
//! # Quick start
//!
//! ```
//! use stowage_core::Position;
//! use stowage_inventory::Inventory;
//! use stowage_test_utils::TestItem;
//!
//! let mut inventory = Inventory::new(4, 4).unwrap();
//! let crate_2x2 = TestItem::new("crate", 2, 2);
//!
//! assert!(inventory.add_at(&crate_2x2, Position::new(0, 0)));
//! assert!(inventory.is_occupied(Position::new(1, 1)));
//! assert_eq!(inventory.len(), 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bus;
pub mod inventory;

pub use bus::{EventBus, SubscriberId, Subscription};
pub use inventory::{Inventory, Iter, CELLS_INLINE};
