//! Stowage: a grid-based spatial inventory.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Stowage sub-crates. For most users, adding `stowage` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use stowage::prelude::*;
//!
//! #[derive(Clone)]
//! struct Part {
//!     id: ItemId,
//!     footprint: Footprint,
//! }
//!
//! impl Stowable for Part {
//!     fn id(&self) -> ItemId { self.id }
//!     fn name(&self) -> &str { "part" }
//!     fn footprint(&self) -> Footprint { self.footprint }
//! }
//!
//! let mut inventory = Inventory::new(4, 4).unwrap();
//! let part = Part {
//!     id: ItemId::next(),
//!     footprint: Footprint::new(2, 2).unwrap(),
//! };
//!
//! // First-fit placement scans row-major from the top-left corner.
//! assert!(inventory.add(&part));
//! assert_eq!(inventory.anchor_of(&part), Some(Position::new(0, 0)));
//!
//! // Relocation is atomic: it either commits or restores exactly.
//! assert!(inventory.move_to(&part, Position::new(2, 2)).unwrap());
//! assert!(inventory.is_free(Position::new(0, 0)));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `stowage-core` | IDs, geometry, the item contract, events, errors |
//! | [`grid`] | `stowage-grid` | Dense occupancy grid storage |
//! | [`inventory`] | `stowage-inventory` | Placement, relocation, defragmentation, notification |
//! | [`depot`] | `stowage-depot` | Bounded resource areas and the timed converter |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`stowage-core`).
pub use stowage_core as types;

/// Dense occupancy grid storage (`stowage-grid`).
pub use stowage_grid as grid;

/// Inventory orchestration and change notification
/// (`stowage-inventory`).
pub use stowage_inventory as inventory;

/// Bounded resource areas and the timed converter (`stowage-depot`).
pub use stowage_depot as depot;

/// Common imports for typical Stowage usage.
///
/// ```rust
/// use stowage::prelude::*;
/// ```
pub mod prelude {
    pub use stowage_core::{
        Footprint, InventoryError, InventoryEvent, ItemId, Position, Stowable,
    };
    pub use stowage_depot::{Area, Converter, ConverterConfig, DepotError};
    pub use stowage_grid::OccupancyGrid;
    pub use stowage_inventory::{EventBus, Inventory, SubscriberId, Subscription};
}
