//! Read-only query panels: lookup by ID number, lookup by age, and the
//! age-range export. Stateless; one fetch per user-triggered search.

use reqwest::StatusCode;

use super::{status_error, ApiClient};
use crate::errors::ApiError;
use crate::models::{IdNumberSearch, ListEnvelope, Person};

impl ApiClient {
    /// GET /{resource}/searches/{id_number}/ - person + household by ID.
    ///
    /// The ID number comes straight from a search box, so it is
    /// percent-encoded before being placed in the path.
    pub async fn search_by_id_number(
        &self,
        id_number: &str,
    ) -> Result<IdNumberSearch, ApiError> {
        let url = self.resource_url(&format!("/searches/{}/", urlencoding::encode(id_number)));
        self.get_json(url).await
    }

    /// GET /{resource}/searches-for-age/{age}/ - people of a given age.
    pub async fn search_by_age(&self, age: u32) -> Result<Vec<Person>, ApiError> {
        let url = self.resource_url(&format!("/searches-for-age/{}/", age));
        let body: ListEnvelope<Person> = self.get_json(url).await?;
        Ok(body.list)
    }

    /// Link for the age-range export, for rendering without fetching.
    pub fn age_filter_url(&self, age1: u32, age2: u32) -> String {
        self.url(&format!("/filtros/edad/?age1={}&age2={}", age1, age2))
    }

    /// GET /filtros/edad/?age1=&age2= - download the export for the range.
    pub async fn age_filter_export(&self, age1: u32, age2: u32) -> Result<Vec<u8>, ApiError> {
        let url = self.age_filter_url(age1, age2);
        tracing::debug!("GET {}", url);
        let response = self.http().get(&url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(format!("{} not found", url)));
        }
        if !status.is_success() {
            let body = response.text().await?;
            return Err(status_error(status, body));
        }
        Ok(response.bytes().await?.to_vec())
    }
}
