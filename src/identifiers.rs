//! Lesson 08: Dependencies and Versioning
//!
//! `uuid` is pinned to its 1.x line in Cargo.toml with the `v4` feature
//! enabled; this module is the only place that calls into it.

use uuid::Uuid;

/// Generate a random (version 4) identifier.
pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Version;

    #[test]
    fn test_new_id_is_random_v4() {
        let id = new_id();
        assert_eq!(id.get_version(), Some(Version::Random));
        assert!(!id.is_nil());
    }

    #[test]
    fn test_new_id_round_trips_through_text() {
        let id = new_id();
        let text = id.hyphenated().to_string();
        assert_eq!(text.len(), 36);
        assert_eq!(Uuid::parse_str(&text).unwrap(), id);
    }

    #[test]
    fn test_new_id_differs_between_calls() {
        assert_ne!(new_id(), new_id());
    }
}
