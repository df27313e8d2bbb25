//! Strongly-typed item identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`ItemId`] allocation.
static ITEM_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Stable, unique identity of an externally-owned item.
///
/// The inventory keys its registry and grid cells by `ItemId`; the same
/// logical item must never surface under two different IDs. Callers that
/// mint their own IDs are responsible for uniqueness; [`ItemId::next`]
/// provides a process-wide unique allocation for the common case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl ItemId {
    /// Allocate a fresh, unique item ID.
    ///
    /// Each call returns an ID never returned before within this process.
    /// Thread-safe.
    pub fn next() -> Self {
        Self(ITEM_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
