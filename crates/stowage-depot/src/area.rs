//! Capacity-bounded resource counter.

use crate::error::DepotError;

/// A resource store that never holds more than its capacity.
///
/// Deposits clamp at capacity and report the overflow that burned;
/// withdrawals take what is available up to the requested count.
///
/// # Examples
///
/// ```
/// use stowage_depot::Area;
///
/// let mut area = Area::new(10).unwrap();
/// assert_eq!(area.add(12), 2); // two over capacity burned
/// assert_eq!(area.count(), 10);
/// assert_eq!(area.remove(4).unwrap(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Area {
    count: u32,
    capacity: u32,
}

impl Area {
    /// Create an empty area holding up to `capacity` resources.
    ///
    /// Returns `Err(DepotError::ZeroCapacity)` for a zero capacity.
    pub fn new(capacity: u32) -> Result<Self, DepotError> {
        Self::with_count(capacity, 0)
    }

    /// Create an area pre-filled with `count` resources.
    ///
    /// The initial count is taken as-is, even above capacity; only
    /// deposits clamp.
    pub fn with_count(capacity: u32, count: u32) -> Result<Self, DepotError> {
        if capacity == 0 {
            return Err(DepotError::ZeroCapacity);
        }
        Ok(Self { count, capacity })
    }

    /// Resources currently held.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Maximum resources this area holds.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Deposit `count` resources, clamping at capacity.
    ///
    /// Returns the overflow that did not fit (burned).
    pub fn add(&mut self, count: u32) -> u32 {
        let total = u64::from(self.count) + u64::from(count);
        if total > u64::from(self.capacity) {
            let overflow = total - u64::from(self.capacity);
            self.count = self.capacity;
            overflow as u32
        } else {
            self.count += count;
            0
        }
    }

    /// Whether `count` more resources would fit without burning.
    pub fn can_add(&self, count: u32) -> bool {
        u64::from(self.count) + u64::from(count) <= u64::from(self.capacity)
    }

    /// Whether `count` resources are available for withdrawal.
    pub fn can_remove(&self, count: u32) -> bool {
        self.count >= count
    }

    /// Withdraw up to `count` resources, returning how many were taken.
    ///
    /// Returns `Err(DepotError::ZeroCount)` for a zero request.
    pub fn remove(&mut self, count: u32) -> Result<u32, DepotError> {
        if count == 0 {
            return Err(DepotError::ZeroCount);
        }
        let taken = self.count.min(count);
        self.count -= taken;
        Ok(taken)
    }
}
