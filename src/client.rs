use crate::response::ResponseMode;
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONNECTION};

/// Create the default HTTP client for API requests.
///
/// Every request carries `Accept: */*` and `Connection: keep-alive`;
/// connections are pooled across calls. No request timeout is set: a call
/// blocks until the response arrives or the transport fails.
pub(crate) fn create_api_client() -> Client {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

    ClientBuilder::new()
        .default_headers(headers)
        .pool_max_idle_per_host(50)
        .build()
        .expect("Failed to create HTTP client")
}

/// Configuration for the API client.
///
/// All fields are stored verbatim; nothing is validated.
#[derive(Debug, Clone)]
pub struct Config {
    /// Short name identifying the blog under the platform
    pub blog_name: String,
    /// Root URL, used for the OAuth2 authorization endpoint
    pub base_url: String,
    /// Root URL for API endpoints
    pub api_base_url: String,
    /// Output shape applied to every endpoint call
    pub response_mode: ResponseMode,
}

impl Config {
    /// Create a configuration for the given blog with the platform defaults
    pub fn new(blog_name: impl Into<String>) -> Self {
        Config {
            blog_name: blog_name.into(),
            base_url: "https://www.tistory.com".to_string(),
            api_base_url: "https://www.tistory.com/apis".to_string(),
            response_mode: ResponseMode::Simple,
        }
    }

    /// Override the root URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the API root URL
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    /// Select the output shape for every endpoint call
    pub fn with_response_mode(mut self, mode: ResponseMode) -> Self {
        self.response_mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new("sandbox");
        assert_eq!(config.blog_name, "sandbox");
        assert_eq!(config.base_url, "https://www.tistory.com");
        assert_eq!(config.api_base_url, "https://www.tistory.com/apis");
        assert_eq!(config.response_mode, ResponseMode::Simple);
    }

    #[test]
    fn test_config_builders() {
        let config = Config::new("sandbox")
            .with_base_url("http://localhost:8080")
            .with_api_base_url("http://localhost:8080/apis")
            .with_response_mode(ResponseMode::Raw);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.api_base_url, "http://localhost:8080/apis");
        assert_eq!(config.response_mode, ResponseMode::Raw);
    }
}
