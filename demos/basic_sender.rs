//! # Example: basic_sender
//!
//! Demonstrates immediate fan-out with a [`Sender`].
//!
//! Shows how to:
//! - Register free-function handlers with [`Sender::add`].
//! - Emit an event to every handler in registration order.
//! - Remove a handler by value and emit again.
//!
//! ## Flow
//! ```text
//! sender.add(print_tick)
//! sender.add(print_tick_loudly)
//!     │
//! sender.emit(&1) ──► print_tick(&1) ─► print_tick_loudly(&1)
//!     │
//! sender.remove(print_tick_loudly)
//!     │
//! sender.emit(&2) ──► print_tick(&2)
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=trace cargo run --example basic_sender
//! ```

use fanout::Sender;

fn print_tick(tick: &u64) {
    println!("[tick] {tick}");
}

fn print_tick_loudly(tick: &u64) {
    println!("[TICK] {tick}!");
}

fn main() {
    env_logger::init();

    let mut sender = Sender::new();
    sender.add(print_tick);
    sender.add(print_tick_loudly);

    println!("two handlers registered:");
    sender.emit(&1);

    sender.remove(print_tick_loudly);
    println!("one handler left after remove:");
    sender.emit(&2);

    // Removing something that is no longer registered is a silent no-op.
    sender.remove(print_tick_loudly);
    sender.emit(&3);
}
