//! Dense occupancy grid storage for the Stowage inventory.
//!
//! [`OccupancyGrid`] is the pure spatial truth source: a fixed-size flat
//! buffer of slots, each empty or holding the [`ItemId`] of its occupant.
//! It answers point queries in O(1) and stamps or clears rectangular
//! footprints. It is intentionally dumb — rectangle bounds are validated
//! by the orchestration layer above it, which is the single point
//! enforcing the inventory invariants.
//!
//! [`ItemId`]: stowage_core::ItemId

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;

pub use grid::OccupancyGrid;
