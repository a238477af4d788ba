use serde::{Deserialize, Serialize};

use crate::group::Group;

/// Which retrieval path a query was ultimately served by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Forward,
    Reverse,
}

/// The top-level contract returned by `search()` (§6.1).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub groups: Vec<Group>,
    pub total_candidates: usize,
    pub mode: SearchMode,
    /// `true` if the primary mode returned nothing and the retriever fell
    /// back to the other direction (§4.2 at-most-once fallback rule).
    pub fell_back: bool,
}

impl SearchResponse {
    pub fn empty(mode: SearchMode) -> Self {
        SearchResponse {
            groups: Vec::new(),
            total_candidates: 0,
            mode,
            fell_back: false,
        }
    }
}
