//! Pagination types for the provider's list endpoints

use serde::{Deserialize, Serialize};

/// Page envelope returned by the provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderPage<T> {
    /// Current page number (1-indexed)
    pub current_page: u32,

    pub items: Vec<T>,

    /// Total number of pages
    pub pages: u32,

    /// Total number of items across all pages
    pub results: u64,

    pub results_per_page: u32,
}

impl<T> ProviderPage<T> {
    /// Whether the provider has pages after this one
    pub fn has_next(&self) -> bool {
        self.current_page < self.pages
    }

    /// Build a single page holding every collected item
    pub fn collected(items: Vec<T>) -> Self {
        let count = items.len();
        Self {
            current_page: 1,
            pages: 1,
            results: count as u64,
            results_per_page: count as u32,
            items,
        }
    }

    /// Transform the items using a function
    pub fn map<U, F>(self, f: F) -> ProviderPage<U>
    where
        F: FnMut(T) -> U,
    {
        ProviderPage {
            current_page: self.current_page,
            items: self.items.into_iter().map(f).collect(),
            pages: self.pages,
            results: self.results,
            results_per_page: self.results_per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_deserializes_camel_case() {
        let page: ProviderPage<u32> = serde_json::from_value(json!({
            "currentPage": 1,
            "items": [1, 2],
            "pages": 3,
            "results": 6,
            "resultsPerPage": 2
        }))
        .unwrap();
        assert!(page.has_next());
        assert_eq!(page.results_per_page, 2);
    }

    #[test]
    fn test_last_page_has_no_next() {
        let page = ProviderPage::collected(vec!["a", "b"]);
        assert!(!page.has_next());
        assert_eq!(page.results, 2);
        assert_eq!(page.map(str::len).items, vec![1, 1]);
    }
}
