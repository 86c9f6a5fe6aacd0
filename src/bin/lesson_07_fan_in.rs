//! Lesson 07: Concurrency
//! Two workers, one rendezvous channel, one consumer
//!
//! Run with: cargo run --bin lesson_07_fan_in

use afternoon_lessons::concurrency::fan_in;

const WORKERS: usize = 2;

fn main() {
    for value in fan_in(WORKERS) {
        println!("{}", value);
    }
}
