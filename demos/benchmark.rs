//! # Example: benchmark
//!
//! Compares the cost of delivering events three ways:
//! - calling the handler directly (inlinable baseline),
//! - fanning out through a [`Sender`],
//! - buffering and flushing through a [`Queue`].
//!
//! Each round delivers a small batch of randomized integers, repeated
//! `ROUNDS` times. Handler work is routed through `black_box` so the
//! optimizer cannot delete the loops outright.
//!
//! ## Run
//! ```bash
//! cargo run --release --example benchmark
//! ```

use std::hint::black_box;
use std::time::Instant;

use fanout::{Queue, Sender};

/// Rounds of batch delivery per measured section.
const ROUNDS: u32 = 1_000_000;

fn handle_event(x: &i64) {
    black_box(x.wrapping_mul(*x).wrapping_add(1));
}

fn main() {
    // 1..=100 payloads per round, mirroring a small per-frame event burst.
    let batch: Vec<i64> = (0..fastrand::usize(1..=100))
        .map(|_| fastrand::i64(..))
        .collect();

    println!(
        "benchmark: {ROUNDS} rounds x {} payload(s) per round",
        batch.len()
    );

    {
        println!("direct function calls:");
        let start = Instant::now();
        for _ in 0..ROUNDS {
            for number in &batch {
                handle_event(number);
            }
        }
        println!("  took {:?}", start.elapsed());
    }

    {
        let mut sender = Sender::new();
        sender.add(handle_event);

        println!("Sender<i64>::emit:");
        let start = Instant::now();
        for _ in 0..ROUNDS {
            for number in &batch {
                sender.emit(number);
            }
        }
        println!("  took {:?}", start.elapsed());
    }

    {
        let mut queue = Queue::new();
        queue.add(handle_event);

        println!("Queue<i64>::push + emit:");
        let start = Instant::now();
        for _ in 0..ROUNDS {
            queue.reserve(batch.len());
            for number in &batch {
                queue.push(*number);
            }
            queue.emit();
        }
        println!("  took {:?}", start.elapsed());
    }
}
