//! # Queue: buffered payloads replayed through a sender at flush time.
//!
//! A [`Queue`] decouples "event occurred" from "event delivered": producers
//! [`push`](Queue::push) payloads as they happen, and an external driver (a
//! frame loop, a simulation tick) calls [`emit`](Queue::emit) at the point
//! where delivery is safe, flushing the whole batch through the inner
//! [`Sender`] and clearing the buffer.
//!
//! Delivery is **payload-major**: each buffered payload, in push order, is
//! handed to every registered delegate (in registration order) before the
//! next payload goes out.
//!
//! ```text
//!   push(a) ──► [a]
//!   push(b) ──► [a, b]
//!   emit()  ──► sender.emit(&a) ─► d1(&a), d2(&a), ...
//!               sender.emit(&b) ─► d1(&b), d2(&b), ...
//!               buffer cleared
//! ```
//!
//! Flushing with nothing registered simply discards the batch; buffered data
//! with no listener is lost on flush by design, not an error. The queue owns
//! its payloads, so `T` needs no `Clone` and handlers see each payload by
//! reference.
//!
//! ## Example
//! ```rust
//! use fanout::Queue;
//!
//! fn on_damage(amount: &i32) {
//!     println!("took {amount} damage");
//! }
//!
//! let mut queue = Queue::new();
//! queue.add(on_damage);
//!
//! queue.push(12);
//! queue.push(3);
//! assert_eq!(queue.len(), 2);
//!
//! queue.emit(); // on_damage(&12), then on_damage(&3)
//! assert!(queue.is_empty());
//! ```

use crate::delegate::Delegate;
use crate::sender::Sender;

/// Ordered payload buffer paired with one owned [`Sender`].
///
/// Created empty on both sides; payloads accumulate via
/// [`push`](Self::push) until the driver flushes them with
/// [`emit`](Self::emit). Registration methods pass through to the inner
/// sender with the same contract as [`Sender`]'s.
#[derive(Debug)]
pub struct Queue<'a, T> {
    buffer: Vec<T>,
    sender: Sender<'a, T>,
}

impl<'a, T> Queue<'a, T> {
    /// Creates an empty queue with no registrations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            sender: Sender::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` buffered payloads.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            sender: Sender::new(),
        }
    }

    /// Registers a free-function handler on the inner sender.
    pub fn add(&mut self, handler: fn(&T)) {
        self.sender.add(handler);
    }

    /// Registers `method` called on `object` on the inner sender.
    pub fn add_bound<O>(&mut self, object: &'a O, method: fn(&O, &T)) {
        self.sender.add_bound(object, method);
    }

    /// Registers an already-constructed delegate on the inner sender.
    pub fn add_delegate(&mut self, delegate: Delegate<'a, T>) {
        self.sender.add_delegate(delegate);
    }

    /// Unregisters the first matching free-function handler; no-op when
    /// absent.
    pub fn remove(&mut self, handler: fn(&T)) {
        self.sender.remove(handler);
    }

    /// Unregisters the first matching `(object, method)` pair; no-op when
    /// absent.
    pub fn remove_bound<O>(&mut self, object: &'a O, method: fn(&O, &T)) {
        self.sender.remove_bound(object, method);
    }

    /// Unregisters the first entry equal to `probe`; no-op when absent.
    pub fn remove_delegate(&mut self, probe: Delegate<'a, T>) {
        self.sender.remove_delegate(probe);
    }

    /// Buffers one payload, taking ownership. Nothing is delivered until
    /// [`emit`](Self::emit).
    pub fn push(&mut self, payload: T) {
        self.buffer.push(payload);
    }

    /// Pre-allocates room for `additional` more buffered payloads. Purely a
    /// capacity hint.
    pub fn reserve(&mut self, additional: usize) {
        self.buffer.reserve(additional);
    }

    /// Flushes the buffer: delivers every payload, in push order, to every
    /// registered delegate, then clears the buffer.
    ///
    /// Safe on an empty buffer (does nothing). With zero registrations the
    /// buffered payloads are discarded.
    pub fn emit(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        log::trace!(
            "flushing {} payload(s) to {} delegate(s)",
            self.buffer.len(),
            self.sender.len(),
        );
        for payload in &self.buffer {
            self.sender.emit(payload);
        }
        self.buffer.clear();
    }

    /// Number of buffered payloads awaiting the next flush.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` when no payloads are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of delegates registered on the inner sender.
    #[must_use]
    pub fn delegate_count(&self) -> usize {
        self.sender.len()
    }
}

impl<'a, T> Default for Queue<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}
