//! Family-group endpoints: detail, list, create, update, person delete.

use serde::Deserialize;

use super::{decode, ApiClient, SaveOutcome};
use crate::errors::ApiError;
use crate::models::{FamilyGroup, ListEnvelope};

/// Detail responses wrap the record: `{"record": {...}}`.
#[derive(Debug, Deserialize)]
struct DetailEnvelope {
    record: FamilyGroup,
}

impl ApiClient {
    /// GET /{resource}/family-group/detail/{id}/ - full record with people.
    pub async fn family_group_detail(&self, id: i64) -> Result<FamilyGroup, ApiError> {
        let url = self.resource_url(&format!("/family-group/detail/{}/", id));
        let body: DetailEnvelope = self.get_json(url).await?;
        Ok(body.record)
    }

    /// GET /{resource}/family-group/list/ - groups for the parent list view.
    pub async fn family_groups(&self) -> Result<Vec<FamilyGroup>, ApiError> {
        let url = self.resource_url("/family-group/list/");
        let body: ListEnvelope<FamilyGroup> = self.get_json(url).await?;
        Ok(body.list)
    }

    /// POST /{resource}/family-group/save - create a new group.
    pub async fn create_family_group(
        &self,
        record: &FamilyGroup,
    ) -> Result<SaveOutcome, ApiError> {
        // The legacy client posts the save route without a trailing slash.
        let url = self.resource_url("/family-group/save");
        tracing::debug!("POST {}", url);
        let response = self.http().post(&url).json(record).send().await?;
        decode(response).await
    }

    /// PUT /{resource}/family-group/update/{id}/ - update an existing group.
    pub async fn update_family_group(
        &self,
        id: i64,
        record: &FamilyGroup,
    ) -> Result<SaveOutcome, ApiError> {
        let url = self.resource_url(&format!("/family-group/update/{}/", id));
        tracing::debug!("PUT {}", url);
        let response = self.http().put(&url).json(record).send().await?;
        decode(response).await
    }

    /// GET /{resource}/person/delete/{id}/ - delete one person.
    ///
    /// The backend routes this mutation through a read verb; kept as-is for
    /// compatibility rather than normalized to DELETE.
    pub async fn delete_person(&self, person_id: i64) -> Result<(), ApiError> {
        let url = self.resource_url(&format!("/person/delete/{}/", person_id));
        self.get_ok(url).await
    }
}
