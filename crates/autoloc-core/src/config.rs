//! Backend origin configuration
//!
//! The origin is chosen once at application startup and is immutable
//! afterwards; every request goes through [`ApiConfig::url`] so no module
//! carries its own base-URL constant.

/// Default backend origin for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Fixed backend origin plus URL joining.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a relative path onto the fixed origin.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let config = ApiConfig::new("http://localhost:8080");
        assert_eq!(config.url("/voitures"), "http://localhost:8080/voitures");
        assert_eq!(config.url("voitures"), "http://localhost:8080/voitures");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("http://api.example.com/");
        assert_eq!(config.base_url(), "http://api.example.com");
        assert_eq!(
            config.url("/reservations/stats"),
            "http://api.example.com/reservations/stats"
        );
    }
}
