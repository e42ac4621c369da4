use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A record exactly as the upstream API returned it. The fetcher never looks inside.
pub type ExternalRecord = Map<String, Value>;

/// One fetched page and whether the upstream says there is another one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    pub items: Vec<ExternalRecord>,
    pub has_next_page: bool,
}

impl PageResult {
    pub fn new(items: Vec<ExternalRecord>, has_next_page: bool) -> Self {
        Self {
            items,
            has_next_page,
        }
    }

    /// "No more data": what a page degrades to once retries run out
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
