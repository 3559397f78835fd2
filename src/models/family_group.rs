//! Family group and person models matching the backend contract.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ser;

/// Yes/no flag as the backend spells it (`"y"` / `"n"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    #[serde(rename = "y")]
    Yes,
    #[serde(rename = "n")]
    No,
}

impl Default for YesNo {
    fn default() -> Self {
        YesNo::Yes
    }
}

impl YesNo {
    pub fn is_yes(self) -> bool {
        self == YesNo::Yes
    }
}

/// Scalar head-of-household fields of a family group.
///
/// `department_id` is only meaningful once `building_id` is set and that
/// building's department list has loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupHead {
    /// Absent until the record is first stored; presence routes submits to
    /// the update endpoint.
    #[serde(default, with = "ser::opt_id")]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, with = "ser::opt_id")]
    pub building_id: Option<i64>,
    #[serde(default, with = "ser::opt_id")]
    pub department_id: Option<i64>,
}

/// Full family group record as exchanged with the backend: the head scalars
/// plus the ordered list of household members, submitted as one body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilyGroup {
    #[serde(flatten)]
    pub head: GroupHead,
    #[serde(default)]
    pub people: Vec<Person>,
}

/// One household member nested in a family group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Server-assigned; a freshly added entry has none until first saved.
    #[serde(default, with = "ser::opt_id")]
    pub id: Option<i64>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Gates whether `id_number` is shown and required by the backend.
    #[serde(default)]
    pub has_id_number: YesNo,
    #[serde(default)]
    pub id_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, with = "ser::opt_date")]
    pub birthdate: Option<NaiveDate>,
    #[serde(default, with = "ser::opt_id")]
    pub gender_id: Option<i64>,
    #[serde(default, with = "ser::opt_id")]
    pub vote_type_id: Option<i64>,
    #[serde(default, with = "ser::opt_id")]
    pub relationship_id: Option<i64>,
    /// Conceptually at most one per group; advisory, not enforced anywhere.
    #[serde(default)]
    pub family_head: bool,
}
