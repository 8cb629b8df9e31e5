//! # Example: queued_events
//!
//! Demonstrates buffered delivery with a [`Queue`] driven by a frame loop.
//!
//! Shows how to:
//! - Buffer payloads with [`Queue::push`] as they are produced.
//! - Flush the whole batch at an explicit point with [`Queue::emit`].
//! - Observe payload-major delivery order across two handlers.
//!
//! ## Flow
//! ```text
//! frame N:  push(Spawned), push(Collided)
//!              │
//! end of frame: queue.emit()
//!              ├─► sender.emit(&Spawned)  ─► log_event, audit_event
//!              └─► sender.emit(&Collided) ─► log_event, audit_event
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=trace cargo run --example queued_events
//! ```

use fanout::Queue;

#[derive(Debug)]
enum GameEvent {
    Spawned { id: u32 },
    Collided { a: u32, b: u32 },
    Despawned { id: u32 },
}

fn log_event(event: &GameEvent) {
    println!("[log]   {event:?}");
}

fn audit_event(event: &GameEvent) {
    if let GameEvent::Collided { a, b } = event {
        println!("[audit] collision between {a} and {b}");
    }
}

fn main() {
    env_logger::init();

    let mut queue = Queue::new();
    queue.add(log_event);
    queue.add(audit_event);

    for frame in 0..3u32 {
        println!("--- frame {frame} ---");

        // Producers run during the frame; nothing is delivered yet.
        queue.push(GameEvent::Spawned { id: frame });
        if frame > 0 {
            queue.push(GameEvent::Collided { a: frame - 1, b: frame });
            queue.push(GameEvent::Despawned { id: frame - 1 });
        }
        println!("buffered: {}", queue.len());

        // The driver flushes once per frame.
        queue.emit();
        assert!(queue.is_empty());
    }
}
