//! Lookup-list endpoints: `{id, text}` pairs for selection controls.

use super::ApiClient;
use crate::errors::ApiError;
use crate::models::{ListEnvelope, LookupItem};

impl ApiClient {
    /// GET /vote-types/list/
    pub async fn vote_types(&self) -> Result<Vec<LookupItem>, ApiError> {
        self.lookup_list("/vote-types/list/").await
    }

    /// GET /relationships/list/
    pub async fn relationships(&self) -> Result<Vec<LookupItem>, ApiError> {
        self.lookup_list("/relationships/list/").await
    }

    /// GET /buildings/list/
    pub async fn buildings(&self) -> Result<Vec<LookupItem>, ApiError> {
        self.lookup_list("/buildings/list/").await
    }

    /// GET /genders/list/
    pub async fn genders(&self) -> Result<Vec<LookupItem>, ApiError> {
        self.lookup_list("/genders/list/").await
    }

    /// GET /get-departments/{building_id} - departments of one building.
    pub async fn departments_for(&self, building_id: i64) -> Result<Vec<LookupItem>, ApiError> {
        self.lookup_list(&format!("/get-departments/{}", building_id))
            .await
    }

    async fn lookup_list(&self, path: &str) -> Result<Vec<LookupItem>, ApiError> {
        let envelope: ListEnvelope<LookupItem> = self.get_json(self.url(path)).await?;
        Ok(envelope.list)
    }
}
