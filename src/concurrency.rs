//! Lesson 07: Concurrency
//!
//! - Fan-in: several producer threads share one zero-capacity channel and
//!   a single consumer drains it.
//! - Timeout: a receive races a timer; whichever is ready first wins.

use std::thread;
use std::time::Duration;

use crossbeam::channel::{self, Receiver, Sender};
use tokio::sync::mpsc;
use tracing::debug;

/// Number of values each worker sends before exiting.
pub const VALUES_PER_WORKER: i64 = 3;

/// Send `id * 10 + i` for each `i` in `0..VALUES_PER_WORKER`.
///
/// Stops early if the consumer has gone away.
pub fn worker(id: i64, tx: Sender<i64>) {
    for i in 0..VALUES_PER_WORKER {
        if tx.send(id * 10 + i).is_err() {
            debug!(worker = id, "receiver dropped, stopping");
            return;
        }
    }
}

/// Run `workers` producers against one rendezvous channel and collect
/// everything they send, in arrival order.
///
/// Each send blocks until the consumer takes the value. The consumer drops
/// its own sender up front, so the channel closes once the last worker
/// returns; the scope then joins every thread before handing back results.
pub fn fan_in(workers: usize) -> Vec<i64> {
    let (tx, rx) = channel::bounded(0);

    thread::scope(|s| {
        for id in 0..workers {
            let tx = tx.clone();
            s.spawn(move || worker(id as i64, tx));
        }
        drop(tx);

        rx.iter().collect()
    })
}

/// Result of racing a receive against a timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Received(T),
    /// Every sender was dropped before a message arrived.
    Closed,
    TimedOut,
}

/// Wait for the next message, giving up after `limit`.
pub async fn recv_or_timeout<T>(rx: &mut mpsc::Receiver<T>, limit: Duration) -> Outcome<T> {
    tokio::select! {
        msg = rx.recv() => match msg {
            Some(msg) => Outcome::Received(msg),
            None => Outcome::Closed,
        },
        _ = tokio::time::sleep(limit) => Outcome::TimedOut,
    }
}

/// Blocking twin of [`recv_or_timeout`] for plain threads.
pub fn recv_or_timeout_blocking<T>(rx: &Receiver<T>, limit: Duration) -> Outcome<T> {
    channel::select! {
        recv(rx) -> msg => match msg {
            Ok(msg) => Outcome::Received(msg),
            Err(_) => Outcome::Closed,
        },
        recv(channel::after(limit)) -> _ => Outcome::TimedOut,
    }
}
