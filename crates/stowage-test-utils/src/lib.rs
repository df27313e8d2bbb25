//! Test fixtures for Stowage development.
//!
//! Provides [`TestItem`], a minimal [`Stowable`] implementation with
//! process-unique identity, and [`EventRecorder`] for asserting
//! notification sequences.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::RefCell;
use std::rc::Rc;

use stowage_core::{Footprint, InventoryEvent, ItemId, Stowable};

/// A named rectangular item with a unique, stable identity.
///
/// Cloning preserves the identity — clones are the same logical item,
/// which is what the inventory's registry expects of caller handles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestItem {
    id: ItemId,
    name: String,
    footprint: Footprint,
}

impl TestItem {
    /// Create a `width × height` item named `name` with a fresh ID.
    ///
    /// Panics if either dimension is zero; fixtures are always valid.
    pub fn new(name: &str, width: u32, height: u32) -> Self {
        Self {
            id: ItemId::next(),
            name: name.to_owned(),
            footprint: Footprint::new(width, height)
                .expect("fixture footprint dimensions must be positive"),
        }
    }
}

impl Stowable for TestItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn footprint(&self) -> Footprint {
        self.footprint
    }
}

/// Records every event a subscriber receives, for later assertion.
///
/// Hand [`handler`](EventRecorder::handler) to `Inventory::subscribe`;
/// the recorder and the handler share the same log.
#[derive(Clone, Debug, Default)]
pub struct EventRecorder<T> {
    events: Rc<RefCell<Vec<InventoryEvent<T>>>>,
}

impl<T: Clone + 'static> EventRecorder<T> {
    pub fn new() -> Self {
        Self {
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// A subscription handler that appends every event to this log.
    pub fn handler(&self) -> impl FnMut(&InventoryEvent<T>) + 'static {
        let events = Rc::clone(&self.events);
        move |event| events.borrow_mut().push(event.clone())
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<InventoryEvent<T>> {
        self.events.borrow().clone()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Drop everything recorded so far.
    pub fn reset(&self) {
        self.events.borrow_mut().clear();
    }
}
