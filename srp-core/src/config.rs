/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Where the prediction service lives. Passed explicitly to the client so
/// tests can point it at a stub service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().to_string(),
        }
    }

    /// Use `base_url` when it is present and non-blank, the default otherwise.
    pub fn from_optional(base_url: Option<&str>) -> Self {
        match base_url.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_url() {
        assert_eq!(
            ClientConfig::default().predict_url(),
            "http://127.0.0.1:5000/predict"
        );
        assert_eq!(
            ClientConfig::new("https://api.example.org/v1/").predict_url(),
            "https://api.example.org/v1/predict"
        );
    }

    #[test]
    fn test_from_optional() {
        assert_eq!(ClientConfig::from_optional(None), ClientConfig::default());
        assert_eq!(ClientConfig::from_optional(Some("  ")), ClientConfig::default());
        assert_eq!(
            ClientConfig::from_optional(Some("http://localhost:8080")).base_url,
            "http://localhost:8080"
        );
    }
}
