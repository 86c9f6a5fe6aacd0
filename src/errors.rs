//! Lesson 06: Error Handling
//!
//! Two idioms, each on its own:
//! 1. A function returns a plain error value that the caller checks.
//! 2. A sentinel error is wrapped with context, and the caller recovers
//!    the sentinel by walking the `source()` chain.

use std::error::Error;

use thiserror::Error;

/// Errors returned by [`may_fail`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MayFailError {
    #[error("negative not allowed")]
    Negative,
    #[error("doubling {0} overflows")]
    Overflow(i64),
}

/// Double a non-negative number.
pub fn may_fail(x: i64) -> Result<i64, MayFailError> {
    if x < 0 {
        return Err(MayFailError::Negative);
    }
    x.checked_mul(2).ok_or(MayFailError::Overflow(x))
}

/// Sentinel errors. Callers compare variants, never message text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    #[error("not found")]
    NotFound,
}

/// A lookup failure with context. The sentinel stays reachable via `source()`.
#[derive(Error, Debug)]
#[error("find failed: {source}")]
pub struct FindError {
    key: i64,
    #[source]
    source: LookupError,
}

impl FindError {
    pub fn key(&self) -> i64 {
        self.key
    }

    pub fn is_not_found(&self) -> bool {
        is_error(self, &LookupError::NotFound)
    }
}

/// Look up `x`. Nothing is ever stored, so every lookup fails.
pub fn find(x: i64) -> Result<i64, FindError> {
    Err(FindError {
        key: x,
        source: LookupError::NotFound,
    })
}

/// Report whether `target` appears anywhere in the chain starting at `err`.
///
/// Each link is downcast to `E` and compared with `==`, so the match is by
/// identity of the value rather than by its rendered message.
pub fn is_error<E>(err: &(dyn Error + 'static), target: &E) -> bool
where
    E: Error + PartialEq + 'static,
{
    let mut current = Some(err);
    while let Some(link) = current {
        if link.downcast_ref::<E>() == Some(target) {
            return true;
        }
        current = link.source();
    }
    false
}
