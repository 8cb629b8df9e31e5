//! # fanout
//!
//! **Fanout** is a lightweight, allocation-light event dispatch library for
//! Rust.
//!
//! It provides a typed [`Delegate`] handle for callbacks (free functions or
//! object/method pairs), a [`Sender`] that fans an event out to every
//! registered delegate, and a [`Queue`] that buffers payloads and replays
//! them through a sender at an explicit flush point. The crate is designed
//! as a building block for frame loops, simulations, and other drivers that
//! decide for themselves when events get delivered.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  producers                               consumers
//!     │                                        │
//!     │ push(payload)                          │ add / add_bound
//!     ▼                                        ▼
//! ┌───────────────────────────┐   ┌─────────────────────────────────┐
//! │  Queue<T>                 │   │  Sender<T>                      │
//! │  - Vec<T> payload buffer  │──►│  - ordered list of Delegate<T>  │
//! │  - owns one Sender<T>     │   │  - emit(&T): synchronous fan-out│
//! └───────────┬───────────────┘   └───────────────┬─────────────────┘
//!             │ emit() (driver-chosen flush)      │ registration order
//!             ▼                                   ▼
//!      each payload, in push order     ┌──────────┴──────────┐
//!      through the sender              ▼                     ▼
//!                                 fn handler(&T)      obj.method(&T)
//!                                 (free function)     (bound delegate)
//! ```
//!
//! ### Delivery order
//! ```text
//! queue.push(a); queue.push(b); queue.emit()
//!
//!   ├─► sender.emit(&a)
//!   │     ├─► delegate #1 (&a)
//!   │     └─► delegate #2 (&a)
//!   ├─► sender.emit(&b)
//!   │     ├─► delegate #1 (&b)
//!   │     └─► delegate #2 (&b)
//!   └─► buffer cleared
//! ```
//! Payload-major: every delegate sees payload `a` before any delegate sees
//! payload `b`.
//!
//! ## Features
//! | Area          | Description                                                          | Key types      |
//! |---------------|----------------------------------------------------------------------|----------------|
//! | **Delegates** | Fixed-size, copyable, comparable handles to callbacks.               | [`Delegate`]   |
//! | **Fan-out**   | Ordered registry with synchronous emit, value-based removal.         | [`Sender`]     |
//! | **Buffering** | Decouple event production from delivery; flush on the driver's tick. | [`Queue`]      |
//!
//! ## Guarantees
//! - Delegates are three words, `Copy`, and never heap-allocate.
//! - `emit` invokes every registered delegate exactly once, in registration
//!   order.
//! - Removal is by value: reconstruct the registration and the first equal
//!   entry is dropped; removing an absent target is a silent no-op.
//! - Bound objects are borrowed, not owned: the borrow checker keeps a
//!   listener alive for as long as it is registered, so there is no dangling
//!   callback to invoke.
//!
//! ## Limits
//! - Single-threaded by design: no internal synchronization, and delegate
//!   types are `!Send`/`!Sync`. Share across threads only behind caller
//!   locking.
//! - One signature per sender: callbacks take a single payload by shared
//!   reference and return nothing.
//! - Capturing closures are not representable; use a bound delegate with
//!   state on the receiver instead.
//! - The registry cannot be mutated mid-emit (`emit` holds a shared borrow);
//!   buffer such changes and apply them after the flush.
//!
//! ## Example
//! ```rust
//! use std::cell::Cell;
//! use fanout::{Queue, Sender};
//!
//! struct Health {
//!     value: Cell<i32>,
//! }
//!
//! impl Health {
//!     fn on_damage(&self, amount: &i32) {
//!         self.value.set(self.value.get() - amount);
//!     }
//! }
//!
//! fn log_damage(amount: &i32) {
//!     println!("damage event: {amount}");
//! }
//!
//! let player = Health { value: Cell::new(100) };
//!
//! // Immediate fan-out.
//! let mut on_hit = Sender::new();
//! on_hit.add(log_damage);
//! on_hit.add_bound(&player, Health::on_damage);
//! on_hit.emit(&30);
//! assert_eq!(player.value.get(), 70);
//!
//! // Buffered: damage accumulates during the frame, applies at the tick.
//! let mut damage_queue = Queue::new();
//! damage_queue.add_bound(&player, Health::on_damage);
//! damage_queue.push(10);
//! damage_queue.push(5);
//! damage_queue.emit();
//! assert_eq!(player.value.get(), 55);
//! ```

mod delegate;
mod queue;
mod sender;

// ---- Public re-exports ----

pub use delegate::Delegate;
pub use queue::Queue;
pub use sender::Sender;
