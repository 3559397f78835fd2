//! Censo client
//!
//! Client-side companion to the Censo census backend: typed wire models, a
//! reqwest-based REST client, and the controller driving the dynamic
//! family-group registration form. The backend owns all business logic
//! (validation rules, persistence, age computation, report generation); this
//! crate owns form state, validation-error display data, and the REST calls.

pub mod api;
pub mod config;
pub mod errors;
pub mod form;
pub mod models;

pub use api::{ApiClient, FamilyGroupStore, SaveOutcome};
pub use config::Config;
pub use errors::ApiError;
pub use form::{FamilyGroupForm, PersonRow, SubmitOutcome};
