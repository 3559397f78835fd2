//! Read-only reference data for selection controls.

use serde::{Deserialize, Serialize};

use super::ser;

/// One `{id, text}` option for a selection control. The backend prepends a
/// placeholder entry whose id is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupItem {
    #[serde(default, with = "ser::opt_id")]
    pub id: Option<i64>,
    #[serde(default)]
    pub text: String,
}

impl LookupItem {
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            text: text.into(),
        }
    }

    /// True for the server-prepended "Seleccione..." entry.
    pub fn is_placeholder(&self) -> bool {
        self.id.is_none()
    }
}

/// Envelope every list endpoint wraps its payload in:
/// `{"status": "true", "list": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    #[serde(default)]
    pub status: String,
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
}
