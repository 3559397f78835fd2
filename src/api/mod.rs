//! REST client module.
//!
//! One file per resource area, all sharing the request plumbing below. The
//! [`FamilyGroupStore`] trait is the persistence collaborator injected into
//! form controllers; [`ApiClient`] is its HTTP implementation.

mod family_group;
mod lookups;
mod search;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::Config;
use crate::errors::{ApiError, ErrorBody};
use crate::models::{FamilyGroup, LookupItem};

/// Body of a successful create/update. A `redirect` value instructs the
/// client to navigate away instead of resetting in place.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveOutcome {
    #[serde(default)]
    pub redirect: Option<String>,
}

/// Persistence operations a family-group form needs from the backend.
///
/// Implemented by [`ApiClient`]; tests substitute an in-memory double, so a
/// controller's persistence behavior is an explicit, mockable collaborator.
#[allow(async_fn_in_trait)]
pub trait FamilyGroupStore {
    async fn family_group_detail(&self, id: i64) -> Result<FamilyGroup, ApiError>;
    async fn family_groups(&self) -> Result<Vec<FamilyGroup>, ApiError>;
    async fn create_family_group(&self, record: &FamilyGroup) -> Result<SaveOutcome, ApiError>;
    async fn update_family_group(
        &self,
        id: i64,
        record: &FamilyGroup,
    ) -> Result<SaveOutcome, ApiError>;
    async fn delete_person(&self, person_id: i64) -> Result<(), ApiError>;
    async fn vote_types(&self) -> Result<Vec<LookupItem>, ApiError>;
    async fn relationships(&self) -> Result<Vec<LookupItem>, ApiError>;
    async fn buildings(&self) -> Result<Vec<LookupItem>, ApiError>;
    async fn genders(&self) -> Result<Vec<LookupItem>, ApiError>;
    async fn departments_for(&self, building_id: i64) -> Result<Vec<LookupItem>, ApiError>;
}

/// HTTP client for the census backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    resource: String,
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            resource: config.resource.clone(),
        })
    }

    /// Absolute URL for a path under the backend root.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Absolute URL for a path under the resource prefix.
    pub(crate) fn resource_url(&self, path: &str) -> String {
        format!("{}/{}{}", self.base_url, self.resource, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        tracing::debug!("GET {}", url);
        let response = self.http.get(&url).send().await?;
        decode(response).await
    }

    /// GET where only the status matters; the body is discarded.
    pub(crate) async fn get_ok(&self, url: String) -> Result<(), ApiError> {
        tracing::debug!("GET {}", url);
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(format!("{} not found", url)));
        }
        if !status.is_success() {
            let body = response.text().await?;
            return Err(status_error(status, body));
        }
        Ok(())
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

/// Turn a response into `T`, mapping 404 and validation rejections.
pub(crate) async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(format!(
            "{} not found",
            response.url()
        )));
    }
    let body = response.text().await?;
    if !status.is_success() {
        return Err(status_error(status, body));
    }
    serde_json::from_str(&body).map_err(Into::into)
}

/// A 4xx carrying an `errors` map is a validation rejection; anything else
/// non-success surfaces as a plain status error.
pub(crate) fn status_error(status: StatusCode, body: String) -> ApiError {
    if status.is_client_error() {
        if let Ok(rejected) = serde_json::from_str::<ErrorBody>(&body) {
            return ApiError::Validation(rejected.errors);
        }
    }
    tracing::warn!("Unexpected status {} from backend", status);
    ApiError::Status {
        status: status.as_u16(),
        message: body,
    }
}

impl FamilyGroupStore for ApiClient {
    async fn family_group_detail(&self, id: i64) -> Result<FamilyGroup, ApiError> {
        ApiClient::family_group_detail(self, id).await
    }

    async fn family_groups(&self) -> Result<Vec<FamilyGroup>, ApiError> {
        ApiClient::family_groups(self).await
    }

    async fn create_family_group(&self, record: &FamilyGroup) -> Result<SaveOutcome, ApiError> {
        ApiClient::create_family_group(self, record).await
    }

    async fn update_family_group(
        &self,
        id: i64,
        record: &FamilyGroup,
    ) -> Result<SaveOutcome, ApiError> {
        ApiClient::update_family_group(self, id, record).await
    }

    async fn delete_person(&self, person_id: i64) -> Result<(), ApiError> {
        ApiClient::delete_person(self, person_id).await
    }

    async fn vote_types(&self) -> Result<Vec<LookupItem>, ApiError> {
        ApiClient::vote_types(self).await
    }

    async fn relationships(&self) -> Result<Vec<LookupItem>, ApiError> {
        ApiClient::relationships(self).await
    }

    async fn buildings(&self) -> Result<Vec<LookupItem>, ApiError> {
        ApiClient::buildings(self).await
    }

    async fn genders(&self) -> Result<Vec<LookupItem>, ApiError> {
        ApiClient::genders(self).await
    }

    async fn departments_for(&self, building_id: i64) -> Result<Vec<LookupItem>, ApiError> {
        ApiClient::departments_for(self, building_id).await
    }
}
