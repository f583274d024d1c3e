use std::time::Duration;

use crate::shared::config::UpstreamConfig;

/// HTTP client bound to the upstream REST API
#[derive(Clone)]
pub struct Upstream {
    pub client: reqwest::Client,
    base_url: String,
    login_path: String,
}

impl Upstream {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            login_path: config.login_path.clone(),
        })
    }

    pub fn url(&self, path: &str, query: Option<&str>) -> String {
        upstream_url(&self.base_url, path, query)
    }

    pub fn login_url(&self) -> String {
        self.url(&self.login_path, None)
    }
}

/// Joins the upstream base with a gateway path and its raw query string
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_is_joined_once() {
        assert_eq!(
            upstream_url("http://api:3333/", "/customers", None),
            "http://api:3333/customers"
        );
        assert_eq!(
            upstream_url("http://api:3333", "sales/indicators", None),
            "http://api:3333/sales/indicators"
        );
    }

    #[test]
    fn test_query_is_kept_verbatim() {
        assert_eq!(
            upstream_url(
                "http://api:3333",
                "transactions",
                Some("page=2&itemsPerPage=5&startDate=2024-01-01")
            ),
            "http://api:3333/transactions?page=2&itemsPerPage=5&startDate=2024-01-01"
        );
        assert_eq!(upstream_url("http://api:3333", "users", Some("")), "http://api:3333/users");
    }
}
