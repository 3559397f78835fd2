//! Validation-message containers mirroring the form's shape.
//!
//! The backend returns these keyed by field name; a missing key means the
//! field has no errors, so every field defaults to empty.

use serde::{Deserialize, Serialize};

/// Per-field validation messages for the family-group scalars, plus the
/// per-person bags for the nested people list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupErrors {
    #[serde(default)]
    pub username: Vec<String>,
    #[serde(default)]
    pub email: Vec<String>,
    #[serde(default)]
    pub building_id: Vec<String>,
    #[serde(default)]
    pub department_id: Vec<String>,
    #[serde(default)]
    pub general_error: Vec<String>,
    #[serde(default)]
    pub people: Vec<PersonErrors>,
}

impl GroupErrors {
    /// True when no field carries a message.
    pub fn is_empty(&self) -> bool {
        self.username.is_empty()
            && self.email.is_empty()
            && self.building_id.is_empty()
            && self.department_id.is_empty()
            && self.general_error.is_empty()
            && self.people.iter().all(PersonErrors::is_empty)
    }

    /// Split off the per-person bags, leaving only the scalar messages.
    pub fn take_people(&mut self) -> Vec<PersonErrors> {
        std::mem::take(&mut self.people)
    }
}

/// Validation messages for one person entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonErrors {
    #[serde(default)]
    pub first_name: Vec<String>,
    #[serde(default)]
    pub last_name: Vec<String>,
    #[serde(default)]
    pub id_number: Vec<String>,
    #[serde(default)]
    pub email: Vec<String>,
    #[serde(default)]
    pub phone: Vec<String>,
    #[serde(default)]
    pub birthdate: Vec<String>,
    #[serde(default)]
    pub gender_id: Vec<String>,
    #[serde(default)]
    pub vote_type_id: Vec<String>,
    #[serde(default)]
    pub relationship_id: Vec<String>,
}

impl PersonErrors {
    /// True when no field carries a message.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.id_number.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.birthdate.is_empty()
            && self.gender_id.is_empty()
            && self.vote_type_id.is_empty()
            && self.relationship_id.is_empty()
    }
}
