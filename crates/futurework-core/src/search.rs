//! Free-text search shared by the content stream.
//!
//! A query matches when its trimmed, lowercased text is a substring of
//! any of the searched fields. An empty query matches everything.

/// Normalize a raw query: trimmed and lowercased. Empty means "no search".
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Case-insensitive substring check (Unicode lowercase folding)
pub fn text_contains(text: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    text.to_lowercase().contains(needle)
}

/// Check a normalized query against several fields, OR-ed together
pub fn any_field_contains(fields: &[&str], needle: &str) -> bool {
    needle.is_empty() || fields.iter().any(|field| text_contains(field, needle))
}
