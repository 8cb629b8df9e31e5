//! # Example: bound_listeners
//!
//! Demonstrates bound delegates: callbacks tied to a specific object
//! instance and one of its methods.
//!
//! Shows how to:
//! - Register `(object, method)` pairs with [`Sender::add_bound`].
//! - Keep per-listener state behind `Cell` (the receiver is a shared borrow).
//! - Remove one instance's registration while the other stays live.
//!
//! ## Run
//! ```bash
//! RUST_LOG=trace cargo run --example bound_listeners
//! ```

use std::cell::Cell;

use fanout::Sender;

struct ScoreBoard {
    name: &'static str,
    total: Cell<u64>,
}

impl ScoreBoard {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            total: Cell::new(0),
        }
    }

    fn on_points(&self, points: &u64) {
        self.total.set(self.total.get() + points);
        println!("[{}] +{points} (total {})", self.name, self.total.get());
    }
}

fn main() {
    env_logger::init();

    let red = ScoreBoard::new("red");
    let blue = ScoreBoard::new("blue");

    let mut on_score = Sender::new();
    on_score.add_bound(&red, ScoreBoard::on_points);
    on_score.add_bound(&blue, ScoreBoard::on_points);

    on_score.emit(&10);
    on_score.emit(&5);

    // Same method, different instance: only blue's registration matches.
    on_score.remove_bound(&blue, ScoreBoard::on_points);
    on_score.emit(&100);

    assert_eq!(red.total.get(), 115);
    assert_eq!(blue.total.get(), 15);
    println!("final: red={} blue={}", red.total.get(), blue.total.get());
}
