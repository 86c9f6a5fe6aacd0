//! # Afternoon Lessons
//!
//! Short, independent lessons, one concept each. Nothing here is shared
//! between lessons; every module stands on its own.
//!
//! ## Lesson 06: Error Handling
//! - Returning a plain error value and checking it before printing
//! - Wrapping a sentinel error with context and recovering it by identity
//!
//! ## Lesson 07: Concurrency
//! - Fan-in: a fixed pool of workers writing to one rendezvous channel
//! - Racing a channel receive against a timer
//!
//! ## Lesson 08: Dependencies and Versioning
//! - Pulling in a versioned crate (`uuid`) and generating one identifier
//!
//! ## Lesson 10: API Design
//! - A single JSON endpoint served with hyper
//! - A table-driven unit test for `add`
//!
//! Run a lesson with: `cargo run --bin <name>`

pub mod api;
pub mod concurrency;
pub mod config;
pub mod errors;
pub mod identifiers;
pub mod telemetry;
