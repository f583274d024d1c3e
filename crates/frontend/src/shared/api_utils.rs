//! API utilities for frontend-gateway communication
//!
//! The gateway serves the SPA and exposes the upstream API under `/api` of
//! the same origin.

/// Origin the page was served from, e.g. "https://app.freitasgas.com.br"
///
/// Empty string if window is not available, which keeps URLs relative.
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full URL for an upstream resource path
///
/// # Example
/// ```ignore
/// let url = api_url("/customers/123"); // {origin}/api/customers/123
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}/api{}", api_base(), normalize_path(path))
}

/// Paths are accepted with or without the leading slash
pub fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("sales/mark-as-paid/1"), "/sales/mark-as-paid/1");
        assert_eq!(normalize_path("/customers"), "/customers");
    }
}
