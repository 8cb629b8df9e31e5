//! # Sender: ordered fan-out over registered delegates.
//!
//! A [`Sender`] keeps an ordered registry of [`Delegate`]s sharing one
//! payload type and delivers each emitted payload to every entry,
//! synchronously, in registration order.
//!
//! ## What it guarantees
//! - `emit(&payload)` invokes every registered delegate exactly once, in the
//!   order they were added.
//! - `remove` drops the **first** entry equal to the probe and preserves the
//!   order of the rest; removing an absent target is a silent no-op.
//! - Duplicate registrations are permitted and fire once each.
//!
//! ## What it does **not** guarantee
//! - No thread safety: a `Sender` holding bound delegates is `!Send`/`!Sync`
//!   and all use happens on one logical thread (or behind caller locking).
//! - No mid-emit registry mutation: `emit` borrows the sender shared while
//!   `add`/`remove` need it exclusive, so a delegate cannot reach back and
//!   mutate the registry it is being called from — the borrow checker rejects
//!   the attempt outright.
//!
//! ## Diagram
//! ```text
//!    emit(&payload)
//!        │              (registration order, synchronous)
//!        ├──────────────► delegate #1 ─► handler(&payload)
//!        ├──────────────► delegate #2 ─► obj.method(&payload)
//!        └──────────────► delegate #N ─► ...
//! ```
//!
//! ## Example
//! ```rust
//! use std::cell::RefCell;
//! use fanout::Sender;
//!
//! struct Recorder {
//!     log: RefCell<Vec<String>>,
//! }
//!
//! impl Recorder {
//!     fn on_message(&self, msg: &String) {
//!         self.log.borrow_mut().push(msg.clone());
//!     }
//! }
//!
//! fn print_message(msg: &String) {
//!     println!("message: {msg}");
//! }
//!
//! let recorder = Recorder { log: RefCell::new(Vec::new()) };
//!
//! let mut sender = Sender::new();
//! sender.add(print_message);
//! sender.add_bound(&recorder, Recorder::on_message);
//!
//! sender.emit(&"hello".to_string());
//! assert_eq!(recorder.log.borrow().as_slice(), ["hello"]);
//!
//! sender.remove(print_message);
//! assert_eq!(sender.len(), 1);
//! ```

use smallvec::SmallVec;

use crate::delegate::Delegate;

/// Registrations kept inline before the registry spills to the heap.
const INLINE_DELEGATES: usize = 4;

/// Ordered registry of delegates sharing one payload type, with synchronous
/// fan-out.
///
/// Created empty; delegates are appended with [`add`](Self::add) /
/// [`add_bound`](Self::add_bound) and dropped with the matching `remove`
/// calls. [`emit`](Self::emit) never mutates the registry.
///
/// Small registries (up to four entries) live inline in the sender itself;
/// only larger ones touch the heap.
#[derive(Debug)]
pub struct Sender<'a, T> {
    delegates: SmallVec<[Delegate<'a, T>; INLINE_DELEGATES]>,
}

impl<'a, T> Sender<'a, T> {
    /// Creates an empty sender.
    #[must_use]
    pub fn new() -> Self {
        Self {
            delegates: SmallVec::new(),
        }
    }

    /// Registers a free-function handler.
    ///
    /// Appends to the registry; a handler added twice fires twice per emit.
    pub fn add(&mut self, handler: fn(&T)) {
        self.add_delegate(Delegate::function(handler));
    }

    /// Registers `method` called on `object`.
    ///
    /// The receiver is borrowed for as long as the sender holds the
    /// registration.
    pub fn add_bound<O>(&mut self, object: &'a O, method: fn(&O, &T)) {
        self.add_delegate(Delegate::bound(object, method));
    }

    /// Registers an already-constructed delegate.
    pub fn add_delegate(&mut self, delegate: Delegate<'a, T>) {
        log::trace!("registering {delegate:?}");
        self.delegates.push(delegate);
    }

    /// Unregisters the first entry matching a free-function handler.
    ///
    /// No-op when no entry matches; later duplicates stay registered.
    pub fn remove(&mut self, handler: fn(&T)) {
        self.remove_delegate(Delegate::function(handler));
    }

    /// Unregisters the first entry matching an `(object, method)` pair.
    ///
    /// Matches on the instance, not the type: registrations of the same
    /// method bound to a different instance are left alone. No-op when no
    /// entry matches.
    pub fn remove_bound<O>(&mut self, object: &'a O, method: fn(&O, &T)) {
        self.remove_delegate(Delegate::bound(object, method));
    }

    /// Unregisters the first entry equal to `probe`, preserving the order of
    /// the rest. No-op when no entry is equal.
    pub fn remove_delegate(&mut self, probe: Delegate<'a, T>) {
        if let Some(index) = self.delegates.iter().position(|d| *d == probe) {
            log::trace!("unregistering {probe:?} at index {index}");
            self.delegates.remove(index);
        }
    }

    /// Invokes every registered delegate with `payload`, in registration
    /// order. Safe to call with an empty registry (does nothing).
    pub fn emit(&self, payload: &T) {
        for delegate in &self.delegates {
            delegate.call(payload);
        }
    }

    /// Number of registered delegates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.delegates.len()
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }

    /// Drops every registration.
    pub fn clear(&mut self) {
        self.delegates.clear();
    }

    /// Pre-allocates room for `additional` more registrations. Purely a
    /// capacity hint.
    pub fn reserve(&mut self, additional: usize) {
        self.delegates.reserve(additional);
    }
}

impl<'a, T> Default for Sender<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Listener that appends a tagged copy of every payload it sees, so
    /// tests can assert both delivery counts and ordering.
    struct Tagged<'log> {
        tag: &'static str,
        log: &'log RefCell<Vec<(&'static str, u32)>>,
    }

    impl<'log> Tagged<'log> {
        fn on_event(&self, payload: &u32) {
            self.log.borrow_mut().push((self.tag, *payload));
        }
    }

    thread_local! {
        static FREE_LOG: RefCell<Vec<u32>> = const { RefCell::new(Vec::new()) };
    }

    fn free_handler(payload: &u32) {
        FREE_LOG.with(|l| l.borrow_mut().push(*payload));
    }

    fn drain_free_log() -> Vec<u32> {
        FREE_LOG.with(|l| l.borrow_mut().drain(..).collect())
    }

    #[test]
    fn test_emit_delivers_to_all_in_registration_order() {
        let log = RefCell::new(Vec::new());
        let first = Tagged { tag: "first", log: &log };
        let second = Tagged { tag: "second", log: &log };

        let mut sender = Sender::new();
        sender.add_bound(&first, Tagged::on_event);
        sender.add_bound(&second, Tagged::on_event);

        sender.emit(&5);
        assert_eq!(
            log.borrow().as_slice(),
            [("first", 5), ("second", 5)],
        );
    }

    #[test]
    fn test_emit_on_empty_sender_is_noop() {
        let sender: Sender<'_, u32> = Sender::new();
        sender.emit(&1);
        assert!(sender.is_empty());
    }

    #[test]
    fn test_emit_does_not_consume_registrations() {
        let log = RefCell::new(Vec::new());
        let listener = Tagged { tag: "only", log: &log };

        let mut sender = Sender::new();
        sender.add_bound(&listener, Tagged::on_event);

        sender.emit(&1);
        sender.emit(&2);
        assert_eq!(log.borrow().as_slice(), [("only", 1), ("only", 2)]);
        assert_eq!(sender.len(), 1);
    }

    #[test]
    fn test_remove_absent_handler_is_noop() {
        let _ = drain_free_log();
        let mut sender = Sender::new();
        sender.remove(free_handler);
        assert!(sender.is_empty());

        sender.add(free_handler);
        sender.remove(free_handler);
        sender.remove(free_handler);
        assert!(sender.is_empty());
    }

    #[test]
    fn test_removed_handler_is_never_invoked() {
        let _ = drain_free_log();
        let mut sender = Sender::new();
        sender.add(free_handler);
        sender.remove(free_handler);
        sender.emit(&9);
        assert!(drain_free_log().is_empty());
    }

    #[test]
    fn test_duplicate_registration_fires_twice_and_removes_once() {
        let _ = drain_free_log();
        let mut sender = Sender::new();
        sender.add(free_handler);
        sender.add(free_handler);

        sender.emit(&3);
        assert_eq!(drain_free_log(), [3, 3]);

        sender.remove(free_handler);
        assert_eq!(sender.len(), 1);
        sender.emit(&4);
        assert_eq!(drain_free_log(), [4]);
    }

    #[test]
    fn test_remove_middle_preserves_order_of_rest() {
        let log = RefCell::new(Vec::new());
        let a = Tagged { tag: "a", log: &log };
        let b = Tagged { tag: "b", log: &log };
        let c = Tagged { tag: "c", log: &log };

        let mut sender = Sender::new();
        sender.add_bound(&a, Tagged::on_event);
        sender.add_bound(&b, Tagged::on_event);
        sender.add_bound(&c, Tagged::on_event);

        sender.remove_bound(&b, Tagged::on_event);
        sender.emit(&1);
        assert_eq!(log.borrow().as_slice(), [("a", 1), ("c", 1)]);
    }

    #[test]
    fn test_remove_bound_matches_instance_not_type() {
        let log = RefCell::new(Vec::new());
        let a = Tagged { tag: "a", log: &log };
        let b = Tagged { tag: "b", log: &log };

        let mut sender = Sender::new();
        sender.add_bound(&a, Tagged::on_event);
        sender.add_bound(&b, Tagged::on_event);

        sender.remove_bound(&a, Tagged::on_event);
        sender.emit(&8);
        assert_eq!(log.borrow().as_slice(), [("b", 8)]);
    }

    #[test]
    fn test_clear_drops_everything() {
        let _ = drain_free_log();
        let mut sender = Sender::new();
        sender.add(free_handler);
        sender.add(free_handler);
        sender.clear();
        assert!(sender.is_empty());
        sender.emit(&1);
        assert!(drain_free_log().is_empty());
    }

    #[test]
    fn test_reserve_has_no_observable_effect() {
        let _ = drain_free_log();
        let mut sender = Sender::new();
        sender.reserve(64);
        assert!(sender.is_empty());
        sender.add(free_handler);
        sender.emit(&2);
        assert_eq!(drain_free_log(), [2]);
    }

    #[test]
    fn test_registry_spills_past_inline_capacity() {
        let log = RefCell::new(Vec::new());
        let listeners: Vec<Tagged<'_>> = (0..8)
            .map(|_| Tagged { tag: "n", log: &log })
            .collect();

        let mut sender = Sender::new();
        for listener in &listeners {
            sender.add_bound(listener, Tagged::on_event);
        }
        sender.emit(&1);
        assert_eq!(log.borrow().len(), 8);
    }
}
