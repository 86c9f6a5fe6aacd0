//! Lesson 06: Error Handling
//! Returning a plain error value
//!
//! Run with: cargo run --bin lesson_06_errors [-- <number>]

use std::num::ParseIntError;

use afternoon_lessons::errors::may_fail;

const DEFAULT_INPUT: i64 = -1;

/// Parse the optional argument. Only a missing argument falls back to the default.
fn parse_input(arg: Option<&str>) -> Result<i64, ParseIntError> {
    match arg {
        Some(arg) => arg.trim().parse(),
        None => Ok(DEFAULT_INPUT),
    }
}

fn main() -> Result<(), ParseIntError> {
    let arg = std::env::args().nth(1);
    let input = parse_input(arg.as_deref())?;

    match may_fail(input) {
        Ok(v) => println!("{}", v),
        Err(e) => println!("error: {}", e),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_uses_default() {
        assert_eq!(parse_input(None), Ok(-1));
    }

    #[test]
    fn test_numeric_argument() {
        assert_eq!(parse_input(Some(" 21 ")), Ok(21));
    }

    #[test]
    fn test_bad_argument_is_reported() {
        assert!(parse_input(Some("abc")).is_err());
    }
}
