//! Synchronous multi-subscriber change notification.
//!
//! [`EventBus`] fans each event out to every live subscriber, in
//! subscription order, on the calling thread. Dispatch happens strictly
//! after the triggering mutation has been committed, so handlers always
//! observe a consistent post-mutation inventory. Handler panics are not
//! caught and propagate to the caller.
//!
//! Each subscription carries a shared active flag, so a handler may
//! cancel its own (or any other) subscription mid-dispatch via
//! [`Subscription::cancel`]; cancelled entries are skipped and pruned
//! after the fan-out completes.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use stowage_core::InventoryEvent;

/// Identifies a subscriber within one [`EventBus`].
///
/// IDs are allocated sequentially per bus and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(pub u64);

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle to a registered subscriber.
///
/// Cloneable so a handler can capture its own handle and cancel itself
/// from inside a dispatch. Dropping a `Subscription` does *not*
/// unsubscribe; cancellation is always explicit.
#[derive(Clone, Debug)]
pub struct Subscription {
    id: SubscriberId,
    active: Arc<AtomicBool>,
}

impl Subscription {
    /// The subscriber's ID on its bus.
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Whether the subscriber still receives events.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    /// Stop receiving events.
    ///
    /// Safe to call from inside a handler: the current fan-out skips the
    /// entry from that point on and the bus prunes it afterwards.
    pub fn cancel(&self) {
        self.active.store(false, Ordering::Relaxed);
    }
}

struct Entry<T> {
    id: SubscriberId,
    active: Arc<AtomicBool>,
    handler: Box<dyn FnMut(&InventoryEvent<T>)>,
}

/// Ordered registry of event handlers with synchronous fan-out.
pub struct EventBus<T> {
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> EventBus<T> {
    /// Create a bus with no subscribers.
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Register `handler` and return its cancellation handle.
    pub fn subscribe(&mut self, handler: impl FnMut(&InventoryEvent<T>) + 'static) -> Subscription {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        let active = Arc::new(AtomicBool::new(true));
        self.entries.push(Entry {
            id,
            active: Arc::clone(&active),
            handler: Box::new(handler),
        });
        Subscription { id, active }
    }

    /// Cancel and drop the given subscription.
    ///
    /// Returns `false` if it was already cancelled or never belonged to
    /// this bus.
    pub fn unsubscribe(&mut self, sub: &Subscription) -> bool {
        let mut found = false;
        self.entries.retain(|entry| {
            if entry.id == sub.id && entry.active.load(Ordering::Relaxed) {
                entry.active.store(false, Ordering::Relaxed);
                found = true;
                return false;
            }
            entry.active.load(Ordering::Relaxed)
        });
        found
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.active.load(Ordering::Relaxed))
            .count()
    }

    /// Dispatch `event` to every live subscriber, in subscription order.
    pub fn publish(&mut self, event: &InventoryEvent<T>) {
        for i in 0..self.entries.len() {
            let entry = &mut self.entries[i];
            if entry.active.load(Ordering::Relaxed) {
                (entry.handler)(event);
            }
        }
        self.entries
            .retain(|entry| entry.active.load(Ordering::Relaxed));
    }
}

impl<T> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventBus<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use stowage_core::Position;

    fn added(n: i32) -> InventoryEvent<&'static str> {
        InventoryEvent::Added {
            item: "x",
            anchor: Position::new(n, 0),
        }
    }

    #[test]
    fn fan_out_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        for tag in ["a", "b", "c"] {
            let log = Rc::clone(&log);
            bus.subscribe(move |_event| log.borrow_mut().push(tag));
        }
        bus.publish(&added(0));
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let hits = Rc::new(RefCell::new(0));
        let mut bus = EventBus::new();
        let sub = {
            let hits = Rc::clone(&hits);
            bus.subscribe(move |_event| *hits.borrow_mut() += 1)
        };
        bus.publish(&added(0));
        assert!(bus.unsubscribe(&sub));
        assert!(!bus.unsubscribe(&sub));
        bus.publish(&added(1));
        assert_eq!(*hits.borrow(), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn handler_can_cancel_itself_mid_dispatch() {
        let hits = Rc::new(RefCell::new(0));
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let mut bus = EventBus::new();
        let sub = {
            let hits = Rc::clone(&hits);
            let slot = Rc::clone(&slot);
            bus.subscribe(move |_event| {
                *hits.borrow_mut() += 1;
                if let Some(sub) = slot.borrow().as_ref() {
                    sub.cancel();
                }
            })
        };
        *slot.borrow_mut() = Some(sub);

        bus.publish(&added(0));
        bus.publish(&added(1));
        // First dispatch delivered once, then the entry was pruned.
        assert_eq!(*hits.borrow(), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn handler_can_cancel_a_later_subscriber() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let mut bus = EventBus::new();
        {
            let log = Rc::clone(&log);
            let victim = Rc::clone(&victim);
            bus.subscribe(move |_event| {
                log.borrow_mut().push("first");
                if let Some(sub) = victim.borrow().as_ref() {
                    sub.cancel();
                }
            });
        }
        let sub = {
            let log = Rc::clone(&log);
            bus.subscribe(move |_event| log.borrow_mut().push("second"))
        };
        *victim.borrow_mut() = Some(sub);

        bus.publish(&added(0));
        // The later subscriber was cancelled before its turn.
        assert_eq!(*log.borrow(), vec!["first"]);
    }
}
