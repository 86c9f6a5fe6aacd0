//! Lesson 07: Concurrency
//! Racing a receive against a timer
//!
//! Run with: cargo run --bin lesson_07_select_timeout

use std::time::Duration;

use afternoon_lessons::concurrency::{recv_or_timeout, Outcome};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() {
    // Nobody ever sends, but the sender stays alive so the channel is not closed.
    let (_tx, mut rx) = mpsc::channel::<String>(1);

    match recv_or_timeout(&mut rx, Duration::from_millis(500)).await {
        Outcome::Received(msg) => println!("{}", msg),
        Outcome::Closed => println!("closed"),
        Outcome::TimedOut => println!("timeout"),
    }
}
