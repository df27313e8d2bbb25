//! The inventory: placement, relocation, defragmentation, notification.

use indexmap::IndexMap;
use smallvec::SmallVec;

use stowage_core::{Footprint, InventoryError, InventoryEvent, ItemId, Position, Stowable};
use stowage_grid::OccupancyGrid;

use crate::bus::{EventBus, Subscription};

/// Inline capacity for footprint cell lists; spills for items larger
/// than 8 cells.
pub const CELLS_INLINE: usize = 8;

/// A resident item and the anchor it occupies.
#[derive(Clone, Debug)]
struct Stowed<T> {
    item: T,
    anchor: Position,
}

/// A 2D spatial container that places rectangular items without overlap.
///
/// Two layers kept in lockstep: an [`OccupancyGrid`] as the spatial
/// truth source and a registry mapping each resident item's ID to its
/// anchor for O(1) reverse lookup. Every mutation updates grid then
/// registry before any notification fires.
///
/// Items are externally owned; the inventory stores clones of the
/// caller's handles and keys everything by [`Stowable::id`]. The
/// registry preserves insertion order, which is the order [`iter`]
/// yields residents in and the tie-break order of [`reorganize`].
///
/// Failure style is split by family, deliberately:
///
/// - boolean queries and mutations (`can_add*`, `add*`, `remove*`,
///   `contains`) answer `false` for "not applicable" — absent item,
///   already resident, no space;
/// - strict accessors ([`item_at`], [`positions`], [`move_to`]) return
///   [`InventoryError`];
/// - the raw family ([`is_occupied`], [`is_free`], [`copy_to`]) panics
///   on out-of-range input.
///
/// [`iter`]: Inventory::iter
/// [`reorganize`]: Inventory::reorganize
/// [`item_at`]: Inventory::item_at
/// [`positions`]: Inventory::positions
/// [`move_to`]: Inventory::move_to
/// [`is_occupied`]: Inventory::is_occupied
/// [`is_free`]: Inventory::is_free
/// [`copy_to`]: Inventory::copy_to
#[derive(Debug)]
pub struct Inventory<T> {
    grid: OccupancyGrid,
    registry: IndexMap<ItemId, Stowed<T>>,
    bus: EventBus<T>,
}

impl<T: Stowable + Clone> Inventory<T> {
    /// Create an empty `width × height` inventory.
    ///
    /// Returns `Err(InventoryError::InvalidDimensions)` only when both
    /// dimensions are zero; a single zero dimension constructs an
    /// inventory no item ever fits into.
    pub fn new(width: u32, height: u32) -> Result<Self, InventoryError> {
        Ok(Self {
            grid: OccupancyGrid::new(width, height)?,
            registry: IndexMap::new(),
            bus: EventBus::new(),
        })
    }

    /// Create an inventory pre-loaded with `entries`, applied in order.
    ///
    /// An entry with an explicit anchor goes through [`add_at`]; one
    /// without goes through [`add`] (first-fit). Entries that fail to
    /// place are silently skipped, exactly as the runtime operations
    /// behave.
    ///
    /// [`add_at`]: Inventory::add_at
    /// [`add`]: Inventory::add
    pub fn with_items(
        width: u32,
        height: u32,
        entries: impl IntoIterator<Item = (T, Option<Position>)>,
    ) -> Result<Self, InventoryError> {
        let mut inventory = Self::new(width, height)?;
        for (item, anchor) in entries {
            match anchor {
                Some(pos) => {
                    inventory.add_at(&item, pos);
                }
                None => {
                    inventory.add(&item);
                }
            }
        }
        Ok(inventory)
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Number of resident items.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether no items are resident.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    // ── placement queries ────────────────────────────────────────────

    /// Whether `item` could be placed with its anchor at `pos`.
    ///
    /// False if the item is already resident or the footprint rectangle
    /// is not fully in bounds with every cell empty. Negative or
    /// otherwise out-of-range anchors simply do not fit.
    pub fn can_add_at(&self, item: &T, pos: Position) -> bool {
        !self.contains(item) && self.fits_at(item.footprint(), pos)
    }

    /// Whether a free anchor exists anywhere for `item`.
    pub fn can_add(&self, item: &T) -> bool {
        !self.contains(item) && self.free_anchor(item.footprint()).is_some()
    }

    /// First anchor at which a `width × height` footprint fits.
    ///
    /// Scans anchors in row-major order (y outer from 0, x inner from 0)
    /// and returns the first whose full footprint is free — the
    /// deterministic tie-break every auto-placement relies on.
    /// `Ok(None)` when nothing fits;
    /// `Err(InventoryError::ZeroFootprint)` when either dimension is
    /// zero.
    pub fn find_free_position(
        &self,
        width: u32,
        height: u32,
    ) -> Result<Option<Position>, InventoryError> {
        let footprint = Footprint::new(width, height)?;
        Ok(self.free_anchor(footprint))
    }

    // ── mutation ─────────────────────────────────────────────────────

    /// Place `item` with its anchor at `pos`.
    ///
    /// No side effects and no event when [`can_add_at`] would answer
    /// false; otherwise stamps the footprint, registers the anchor, and
    /// publishes [`InventoryEvent::Added`].
    ///
    /// [`can_add_at`]: Inventory::can_add_at
    pub fn add_at(&mut self, item: &T, pos: Position) -> bool {
        if !self.can_add_at(item, pos) {
            return false;
        }
        self.occupy(item.clone(), pos);
        self.bus.publish(&InventoryEvent::Added {
            item: item.clone(),
            anchor: pos,
        });
        true
    }

    /// Place `item` at the first free anchor, row-major.
    pub fn add(&mut self, item: &T) -> bool {
        match self.free_anchor(item.footprint()) {
            Some(pos) => self.add_at(item, pos),
            None => false,
        }
    }

    /// Remove `item`. False (and no event) if it is not resident.
    pub fn remove(&mut self, item: &T) -> bool {
        self.remove_with_anchor(item).is_some()
    }

    /// Remove `item`, yielding the anchor it occupied.
    ///
    /// `None` (and no event) if it is not resident; otherwise clears the
    /// footprint, deregisters, and publishes [`InventoryEvent::Removed`]
    /// with the old anchor.
    pub fn remove_with_anchor(&mut self, item: &T) -> Option<Position> {
        let stowed = self.vacate(item.id())?;
        let anchor = stowed.anchor;
        self.bus.publish(&InventoryEvent::Removed {
            item: stowed.item,
            anchor,
        });
        Some(anchor)
    }

    /// Relocate `item` so its anchor is `pos`.
    ///
    /// `Err(InventoryError::ItemNotFound)` if the item is not resident —
    /// a hard failure, unlike the boolean family. Otherwise the current
    /// footprint is tentatively vacated (so the target may overlap it),
    /// the target is tested, and the operation either commits with one
    /// [`InventoryEvent::Moved`] (`Ok(true)`) or restores the original
    /// placement exactly with no event (`Ok(false)`). Callers never
    /// observe a partially-moved state.
    pub fn move_to(&mut self, item: &T, pos: Position) -> Result<bool, InventoryError> {
        let id = item.id();
        let (prev, footprint) = match self.registry.get(&id) {
            Some(stowed) => (stowed.anchor, stowed.item.footprint()),
            None => return Err(InventoryError::ItemNotFound),
        };

        self.grid.clear_rect(prev, footprint);
        if !self.fits_at(footprint, pos) {
            self.grid.fill(prev, footprint, id);
            return Ok(false);
        }
        self.grid.fill(pos, footprint, id);

        let stowed = self
            .registry
            .get_mut(&id)
            .expect("resident item vanished mid-move");
        stowed.anchor = pos;
        let moved = stowed.item.clone();
        self.bus.publish(&InventoryEvent::Moved {
            item: moved,
            anchor: pos,
        });
        Ok(true)
    }

    /// Remove every item.
    ///
    /// No-op (and no event) when already empty; otherwise wipes every
    /// cell and the registry, then publishes a single
    /// [`InventoryEvent::Cleared`].
    pub fn clear(&mut self) {
        if self.registry.is_empty() {
            return;
        }
        self.grid.clear_all();
        self.registry.clear();
        self.bus.publish(&InventoryEvent::Cleared);
    }

    /// Defragmentation pass: repack residents by descending footprint
    /// area.
    ///
    /// Rebuilds an empty grid, then greedily first-fit places each item
    /// in row-major scan order, re-publishing
    /// [`InventoryEvent::Added`] for every successful placement (the add
    /// channel is reused; there is no dedicated repack event). Ties keep
    /// registry insertion order (stable sort).
    ///
    /// An item the greedy order can no longer fit is **silently
    /// dropped** and [`len`](Inventory::len) decreases — the repack is
    /// deliberately lossy and signals nothing. `reorganize` never
    /// increases the resident count. O(items · width · height); treat as
    /// a rarely-invoked maintenance operation.
    pub fn reorganize(&mut self) {
        self.grid.clear_all();
        let mut residents: Vec<Stowed<T>> =
            self.registry.drain(..).map(|(_, stowed)| stowed).collect();
        residents.sort_by(|a, b| {
            b.item
                .footprint()
                .area()
                .cmp(&a.item.footprint().area())
        });

        for stowed in residents {
            if let Some(anchor) = self.free_anchor(stowed.item.footprint()) {
                let item = stowed.item.clone();
                self.occupy(stowed.item, anchor);
                self.bus.publish(&InventoryEvent::Added { item, anchor });
            }
        }
    }

    // ── read queries ─────────────────────────────────────────────────

    /// Whether `item` is resident.
    pub fn contains(&self, item: &T) -> bool {
        self.registry.contains_key(&item.id())
    }

    /// Whether the cell at `pos` holds an item.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds; this is the raw accessor
    /// family. Use [`try_item_at`](Inventory::try_item_at) for checked
    /// lookup.
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.grid.get(pos).is_some()
    }

    /// Whether the cell at `pos` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn is_free(&self, pos: Position) -> bool {
        self.grid.get(pos).is_none()
    }

    /// The item occupying the cell at `pos`.
    ///
    /// `Err(OutOfBounds)` outside the grid, `Err(EmptyCell)` on a vacant
    /// slot.
    pub fn item_at(&self, pos: Position) -> Result<&T, InventoryError> {
        if !self.grid.in_bounds(pos) {
            return Err(InventoryError::OutOfBounds {
                position: pos,
                width: self.width(),
                height: self.height(),
            });
        }
        match self.grid.get(pos) {
            Some(id) => Ok(self.resident(id)),
            None => Err(InventoryError::EmptyCell { position: pos }),
        }
    }

    /// Non-failing companion to [`item_at`](Inventory::item_at):
    /// `None` uniformly for out-of-bounds and empty cells.
    pub fn try_item_at(&self, pos: Position) -> Option<&T> {
        if !self.grid.in_bounds(pos) {
            return None;
        }
        self.grid.get(pos).map(|id| self.resident(id))
    }

    /// Anchor of `item`, if resident.
    pub fn anchor_of(&self, item: &T) -> Option<Position> {
        self.registry.get(&item.id()).map(|stowed| stowed.anchor)
    }

    /// Every cell of `item`'s footprint, re-derived from the grid.
    ///
    /// Exactly `width * height` entries for an uncorrupted inventory;
    /// the re-derivation doubles as a self-check, since only cells that
    /// actually reference the item are reported. Cells come back column
    /// by column (x outer, y inner).
    /// `Err(InventoryError::ItemNotFound)` if the item is not resident —
    /// a hard failure, unlike the boolean family.
    pub fn positions(
        &self,
        item: &T,
    ) -> Result<SmallVec<[Position; CELLS_INLINE]>, InventoryError> {
        let stowed = self
            .registry
            .get(&item.id())
            .ok_or(InventoryError::ItemNotFound)?;
        Ok(self.derive_cells(item.id(), stowed))
    }

    /// Non-failing companion to [`positions`](Inventory::positions).
    pub fn try_positions(&self, item: &T) -> Option<SmallVec<[Position; CELLS_INLINE]>> {
        let stowed = self.registry.get(&item.id())?;
        Some(self.derive_cells(item.id(), stowed))
    }

    /// Number of residents whose name equals `name`. Linear scan; the
    /// only name-indexed aggregate query.
    pub fn count_by_name(&self, name: &str) -> usize {
        self.registry
            .values()
            .filter(|stowed| stowed.item.name() == name)
            .count()
    }

    /// Export a snapshot of the slot → item mapping.
    ///
    /// `out` is filled row-major (`index = y * width + x`) with a clone
    /// of each occupant; the live grid is never exposed.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != width * height`.
    pub fn copy_to(&self, out: &mut [Option<T>]) {
        assert_eq!(
            out.len(),
            self.grid.cell_count(),
            "snapshot buffer must hold width * height slots",
        );
        let mut idx = 0;
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                out[idx] = self
                    .grid
                    .get(Position::new(x, y))
                    .map(|id| self.resident(id).clone());
                idx += 1;
            }
        }
    }

    /// Iterate residents in registry insertion order.
    ///
    /// The sequence is finite and restartable; each call reflects the
    /// state at the time it starts.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.registry.values(),
        }
    }

    // ── notification ─────────────────────────────────────────────────

    /// Register a change handler; see [`EventBus`] for dispatch rules.
    pub fn subscribe(&mut self, handler: impl FnMut(&InventoryEvent<T>) + 'static) -> Subscription {
        self.bus.subscribe(handler)
    }

    /// Cancel a subscription. False if already cancelled.
    pub fn unsubscribe(&mut self, sub: &Subscription) -> bool {
        self.bus.unsubscribe(sub)
    }

    // ── internals ────────────────────────────────────────────────────

    /// Whether `footprint` lies fully in bounds at `pos` with every cell
    /// empty.
    fn fits_at(&self, footprint: Footprint, pos: Position) -> bool {
        if pos.x < 0 || pos.y < 0 {
            return false;
        }
        if i64::from(pos.x) + i64::from(footprint.width()) > i64::from(self.width())
            || i64::from(pos.y) + i64::from(footprint.height()) > i64::from(self.height())
        {
            return false;
        }
        OccupancyGrid::rect_cells(pos, footprint).all(|cell| self.grid.get(cell).is_none())
    }

    /// Row-major first-fit scan. Returns the instant an anchor fits.
    fn free_anchor(&self, footprint: Footprint) -> Option<Position> {
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                let pos = Position::new(x, y);
                if self.fits_at(footprint, pos) {
                    return Some(pos);
                }
            }
        }
        None
    }

    /// Stamp the footprint and register the anchor, grid first. The one
    /// write path shared by placement, relocation commit, and repack.
    fn occupy(&mut self, item: T, anchor: Position) {
        let id = item.id();
        self.grid.fill(anchor, item.footprint(), id);
        self.registry.insert(id, Stowed { item, anchor });
    }

    /// Clear the footprint and deregister, grid first.
    fn vacate(&mut self, id: ItemId) -> Option<Stowed<T>> {
        let (anchor, footprint) = {
            let stowed = self.registry.get(&id)?;
            (stowed.anchor, stowed.item.footprint())
        };
        self.grid.clear_rect(anchor, footprint);
        self.registry.shift_remove(&id)
    }

    fn resident(&self, id: ItemId) -> &T {
        &self
            .registry
            .get(&id)
            .expect("grid cell references an unregistered item")
            .item
    }

    fn derive_cells(
        &self,
        id: ItemId,
        stowed: &Stowed<T>,
    ) -> SmallVec<[Position; CELLS_INLINE]> {
        OccupancyGrid::rect_cells(stowed.anchor, stowed.item.footprint())
            .filter(|&cell| self.grid.get(cell) == Some(id))
            .collect()
    }
}

/// Iterator over resident items in registry insertion order.
pub struct Iter<'a, T> {
    inner: indexmap::map::Values<'a, ItemId, Stowed<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|stowed| &stowed.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a, T: Stowable + Clone> IntoIterator for &'a Inventory<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
