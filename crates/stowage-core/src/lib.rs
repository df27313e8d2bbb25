//! Core types and traits for the Stowage grid inventory.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Stowage workspace:
//! item identity, grid geometry, the external item contract, change
//! events, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod event;
pub mod geometry;
pub mod id;
pub mod item;

pub use error::InventoryError;
pub use event::InventoryEvent;
pub use geometry::{Footprint, Position};
pub use id::ItemId;
pub use item::Stowable;
