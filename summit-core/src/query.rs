//! Query keys and filter drafts for paginated list requests.
//!
//! A `QueryKey` is the normalized identity of one list request: two keys
//! built from equal field values compare and hash equal, which is what lets
//! the fetcher deduplicate concurrent requests and the store cache by key.
//! A `FilterDraft` is the mutable, per-edit counterpart that commits into a
//! key with the page reset to 1.

use std::collections::BTreeMap;

pub const DEFAULT_PER_PAGE: u32 = 20;
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    resource: String,
    page: u32,
    per_page: u32,
    status: Option<String>,
    search: Option<String>,
    filters: BTreeMap<String, String>,
}

impl QueryKey {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            status: None,
            search: None,
            filters: BTreeMap::new(),
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.clamp(1, MAX_PER_PAGE);
        self
    }

    pub fn with_status(mut self, status: impl AsRef<str>) -> Self {
        self.status = normalize(status.as_ref());
        self
    }

    pub fn with_search(mut self, search: impl AsRef<str>) -> Self {
        self.search = normalize(search.as_ref());
        self
    }

    pub fn with_filter(mut self, name: impl Into<String>, value: impl AsRef<str>) -> Self {
        if let Some(value) = normalize(value.as_ref()) {
            self.filters.insert(name.into(), value);
        }
        self
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// URL query pairs in a deterministic order: pagination first, then
    /// status and search, then entity-specific filters sorted by name.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("per_page".to_string(), self.per_page.to_string()),
        ];
        if let Some(status) = &self.status {
            pairs.push(("status".to_string(), status.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        for (name, value) in &self.filters {
            pairs.push((name.clone(), value.clone()));
        }
        pairs
    }
}

/// In-progress filter values, mutated on every input event. Committing
/// copies the draft into a `QueryKey` with the page reset to 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDraft {
    pub search: String,
    pub status: Option<String>,
    pub per_page: Option<u32>,
    pub filters: BTreeMap<String, String>,
}

impl FilterDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commit(&self, resource: &str) -> QueryKey {
        let mut key = QueryKey::new(resource)
            .with_per_page(self.per_page.unwrap_or(DEFAULT_PER_PAGE))
            .with_search(&self.search);
        if let Some(status) = &self.status {
            key = key.with_status(status);
        }
        for (name, value) in &self.filters {
            key = key.with_filter(name.clone(), value);
        }
        key
    }
}

/// Empty and whitespace-only values are "unset", not distinct filters.
fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_equal_fields_compare_and_hash_equal() {
        let a = QueryKey::new("visa-demands")
            .with_page(2)
            .with_search("acme")
            .with_status("pending")
            .with_filter("country", "DZ");
        let b = QueryKey::new("visa-demands")
            .with_page(2)
            .with_search("acme")
            .with_status("pending")
            .with_filter("country", "DZ");
        assert_eq!(a, b);

        let mut cache = HashMap::new();
        cache.insert(a, 1);
        assert!(cache.contains_key(&b));
    }

    #[test]
    fn test_empty_strings_normalize_to_unset() {
        let key = QueryKey::new("pitch-decks")
            .with_search("   ")
            .with_status("")
            .with_filter("track", " ");
        assert_eq!(key, QueryKey::new("pitch-decks"));
        assert!(key.search().is_none());
    }

    #[test]
    fn test_search_is_trimmed() {
        let key = QueryKey::new("pitch-decks").with_search("  acme ");
        assert_eq!(key.search(), Some("acme"));
    }

    #[test]
    fn test_page_and_per_page_bounds() {
        let key = QueryKey::new("side-events").with_page(0).with_per_page(500);
        assert_eq!(key.page(), 1);
        assert_eq!(key.per_page(), MAX_PER_PAGE);
    }

    #[test]
    fn test_query_pairs_are_deterministic() {
        let key = QueryKey::new("exhibition-demands")
            .with_page(3)
            .with_status("accepted")
            .with_search("acme")
            .with_filter("stand_type", "fitted")
            .with_filter("country", "DZ");

        let pairs = key.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "3".to_string()),
                ("per_page".to_string(), DEFAULT_PER_PAGE.to_string()),
                ("status".to_string(), "accepted".to_string()),
                ("search".to_string(), "acme".to_string()),
                ("country".to_string(), "DZ".to_string()),
                ("stand_type".to_string(), "fitted".to_string()),
            ]
        );
    }

    #[test]
    fn test_commit_resets_page() {
        let draft = FilterDraft {
            search: "acme".to_string(),
            status: Some("pending".to_string()),
            per_page: Some(50),
            filters: BTreeMap::new(),
        };

        let key = draft.commit("exhibition-demands");
        assert_eq!(key.page(), 1);
        assert_eq!(key.per_page(), 50);
        assert_eq!(key.search(), Some("acme"));
        assert_eq!(key.status(), Some("pending"));
    }
}
