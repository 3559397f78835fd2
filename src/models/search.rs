//! Projections returned by the read-only search endpoints.
//!
//! These panels render whatever the server sends, so every field is
//! tolerant of being absent.

use serde::{Deserialize, Serialize};

use super::Person;

/// Result of an identity-number search: the matched person plus everyone
/// registered in the same household.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdNumberSearch {
    #[serde(default)]
    pub record: Option<Person>,
    #[serde(default)]
    pub people: Vec<Person>,
}

impl IdNumberSearch {
    /// True when the search matched nobody.
    pub fn is_empty(&self) -> bool {
        self.record.is_none() && self.people.is_empty()
    }
}
