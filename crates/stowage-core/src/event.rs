//! Change-notification payloads.

use crate::geometry::Position;

/// A state change published by an inventory after the mutation has been
/// fully committed.
///
/// Subscribers always observe a consistent post-mutation state. Note that
/// the defragmentation pass re-announces each surviving placement through
/// [`Added`](InventoryEvent::Added) rather than a dedicated event, and a
/// relocation publishes a single [`Moved`](InventoryEvent::Moved) — no
/// `Removed`/`Added` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InventoryEvent<T> {
    /// An item was placed; `anchor` is its minimum-x, minimum-y cell.
    Added {
        /// The placed item.
        item: T,
        /// Anchor it was placed at.
        anchor: Position,
    },
    /// An item was removed; `anchor` is the cell it was removed from.
    Removed {
        /// The removed item.
        item: T,
        /// Anchor it occupied before removal.
        anchor: Position,
    },
    /// An item was relocated; `anchor` is its new anchor.
    Moved {
        /// The relocated item.
        item: T,
        /// Anchor it now occupies.
        anchor: Position,
    },
    /// All items were removed at once. Fired at most once per
    /// `clear()`, and not at all when the inventory was already empty.
    Cleared,
}
