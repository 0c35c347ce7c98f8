use serde::{Deserialize, Serialize};

///
/// One page of search results.
/// Page indexing starts at 0.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default, alias = "number")]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
}

impl<T> PageResponse<T> {
    pub fn is_last(&self) -> bool {
        self.page + 1 >= self.total_pages
    }
}
