//! The external item contract.

use crate::geometry::Footprint;
use crate::id::ItemId;

/// Contract for items an inventory can track.
///
/// Items are owned by the caller; the inventory only records spatial
/// placement and never mutates an item. Implementations must uphold:
///
/// - [`id`](Stowable::id) is stable and unique — the same logical item
///   never answers with two different IDs, and two distinct items never
///   share one.
/// - [`footprint`](Stowable::footprint) is fixed while the item is
///   resident (the [`Footprint`] type already guarantees both dimensions
///   are positive).
/// - [`name`](Stowable::name) is only used for equality-based aggregate
///   counting and need not be unique.
pub trait Stowable {
    /// Stable unique identity.
    fn id(&self) -> ItemId;

    /// Display/grouping name.
    fn name(&self) -> &str;

    /// Rectangular size in cells.
    fn footprint(&self) -> Footprint;
}
