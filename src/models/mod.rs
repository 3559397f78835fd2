//! Data models for the Censo client.
//!
//! These models match the backend JSON contract exactly, including the legacy
//! convention of sending `""` for unset foreign keys and dates.

mod family_group;
mod lookup;
mod search;
pub(crate) mod ser;
mod validation;

pub use family_group::*;
pub use lookup::*;
pub use search::*;
pub use validation::*;
