use serde::{Deserialize, Serialize};

/// 1-based page request sent as `page` and `itemsPerPage`.
///
/// The API never reports a total, so the next page is assumed to exist
/// only while the last fetch returned a full page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page: u32,
    pub items_per_page: u32,
}

impl PageRequest {
    pub fn first(items_per_page: u32) -> Self {
        Self {
            page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, fetched_len: usize) -> bool {
        fetched_len == self.items_per_page as usize
    }

    pub fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..*self
        }
    }

    pub fn previous(&self) -> Self {
        Self {
            page: self.page.saturating_sub(1).max(1),
            ..*self
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("itemsPerPage", self.items_per_page.to_string()),
        ]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_next_only_on_full_page() {
        let p = PageRequest::first(5);
        assert!(p.has_next(5));
        assert!(!p.has_next(4));
        assert!(!p.has_next(0));
    }

    #[test]
    fn test_has_previous_after_first_page() {
        let p = PageRequest::first(10);
        assert!(!p.has_previous());
        assert!(p.next().has_previous());
    }

    #[test]
    fn test_previous_clamps_at_one() {
        let p = PageRequest::first(10);
        assert_eq!(p.previous().page, 1);
        assert_eq!(p.next().next().previous().page, 2);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        assert_eq!(PageRequest::first(0).items_per_page, 1);
    }

    #[test]
    fn test_query_pairs() {
        let pairs = PageRequest::first(5).next().query_pairs();
        assert_eq!(pairs, vec![("page", "2".to_string()), ("itemsPerPage", "5".to_string())]);
    }
}
