//! Lesson 06: Error Handling
//! Wrapping a sentinel error and recovering it by identity
//!
//! Run with: cargo run --bin lesson_06_wrapped_errors

use afternoon_lessons::errors::{find, is_error, LookupError};

fn main() {
    match find(1) {
        Ok(value) => println!("found {}", value),
        Err(err) if is_error(&err, &LookupError::NotFound) => println!("not found"),
        Err(err) => println!("error: {}", err),
    }
}
