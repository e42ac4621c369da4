use crate::modules::provider::domain::{ExternalRecord, PageResult};
use serde::Deserialize;

/// Envelope of every paginated Jikan list endpoint. Both fields may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JikanPageResponse {
    #[serde(default)]
    pub data: Option<Vec<ExternalRecord>>,
    #[serde(default)]
    pub pagination: Option<JikanPagination>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JikanPagination {
    #[serde(default)]
    pub has_next_page: Option<bool>,
}

/// Envelope of single-resource endpoints such as `anime/{id}/full`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JikanResourceResponse {
    #[serde(default)]
    pub data: Option<ExternalRecord>,
}

impl From<JikanPageResponse> for PageResult {
    fn from(response: JikanPageResponse) -> Self {
        let has_next_page = response
            .pagination
            .and_then(|p| p.has_next_page)
            .unwrap_or(false);

        PageResult::new(response.data.unwrap_or_default(), has_next_page)
    }
}

impl JikanResourceResponse {
    /// The record, or `None` when the upstream sent nothing useful
    pub fn into_record(self) -> Option<ExternalRecord> {
        self.data.filter(|record| !record.is_empty())
    }
}
