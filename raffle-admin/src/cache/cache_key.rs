use crate::dto::output::{PageRequest, QueryFilters};
use serde_json::json;

///
/// Deterministic key of a search request.
///
/// Filter fields are sorted by name so two filters with the same
/// non-empty fields always produce the same key. Values are JSON
/// encoded, separators inside them can not make two requests collide.
///
pub fn cache_key<F: QueryFilters + ?Sized>(filters: &F, page: &PageRequest) -> String {
    let mut params = filters.query_params();
    params.sort();

    json!({
        "filters": params,
        "page": page.page,
        "size": page.size,
        "sort": page.sort.as_deref().filter(|sort| !sort.is_empty()),
    })
    .to_string()
}

///
/// Query parameters of a search request, filters first
///
pub fn search_params<F: QueryFilters + ?Sized>(
    filters: &F,
    page: &PageRequest,
) -> Vec<(&'static str, String)> {
    let mut params = filters.query_params();
    params.extend(page.query_params());

    params
}
