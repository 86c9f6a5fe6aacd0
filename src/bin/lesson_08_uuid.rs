//! Lesson 08: Dependencies and Versioning
//! Printing one identifier from a versioned dependency
//!
//! Commands to set this up from scratch:
//!   cargo new myapp
//!   cargo add uuid@1 --features v4
//!
//! Run with: cargo run --bin lesson_08_uuid

use afternoon_lessons::identifiers::new_id;

fn main() {
    println!("{}", new_id());
}
