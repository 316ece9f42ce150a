//! Publication search: a live, case-insensitive substring filter.

/// Returns true if `text` matches the search `query`.
///
/// An empty or whitespace-only query matches everything so the list is
/// fully visible when the search box is cleared.
pub fn matches_query(text: &str, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&query.to_lowercase())
}
