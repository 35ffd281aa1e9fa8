//! Configuration for the order capture workflow.
//!
//! Loaded from TOML. Every key is optional; missing values fall back to the
//! storefront's production endpoint and entry identifiers.
//!
//! ```toml
//! language = "en"
//!
//! [endpoint]
//! url = "https://docs.google.com/forms/d/e/<form-id>/formResponse"
//!
//! [fields]
//! name = "entry.1"
//! order_details = "entry.5"
//! ```

use crate::domain::content::Language;
use crate::domain::payload::FieldMapping;
use crate::error::{OrderError, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

const DEFAULT_ENDPOINT: &str = "https://docs.google.com/forms/d/e/1FAIpQLSckm85UMzeIGhUY10Fq6VcN8VVJPfk2e3dq9IcKU-MCVFaNVg/formResponse";

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OrderCaptureConfig {
    /// Language for built-in notification text and page content.
    pub language: Language,
    /// Where orders are posted.
    pub endpoint: EndpointConfig,
    /// Entry identifiers for each submitted value.
    pub fields: FieldMapping,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl OrderCaptureConfig {
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path).await?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.endpoint_url()?;

        let entries = self.fields.entries();
        if entries.iter().any(|entry| entry.trim().is_empty()) {
            return Err(OrderError::ConfigError(
                "Field entry identifiers must not be empty".to_string(),
            ));
        }
        let unique: HashSet<&str> = entries.iter().copied().collect();
        if unique.len() != entries.len() {
            return Err(OrderError::ConfigError(
                "Field entry identifiers must be distinct".to_string(),
            ));
        }
        Ok(())
    }

    pub fn endpoint_url(&self) -> Result<Url> {
        let url = Url::parse(&self.endpoint.url)
            .map_err(|e| OrderError::ConfigError(format!("Invalid endpoint URL: {e}")))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(OrderError::ConfigError(format!(
                "Endpoint must use http or https, got {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = OrderCaptureConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.language, Language::Vn);
        assert_eq!(config.fields.name, "entry.1013124254");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = OrderCaptureConfig::from_toml_str(
            r#"
            language = "en"

            [fields]
            name = "entry.42"
            "#,
        )
        .unwrap();

        assert_eq!(config.language, Language::En);
        assert_eq!(config.fields.name, "entry.42");
        assert_eq!(config.fields.email, FieldMapping::default().email);
        assert_eq!(config.endpoint, EndpointConfig::default());
    }

    #[test]
    fn test_rejects_bad_url() {
        let result = OrderCaptureConfig::from_toml_str(
            r#"
            [endpoint]
            url = "ftp://example.com/form"
            "#,
        );
        assert!(matches!(result, Err(OrderError::ConfigError(_))));
    }

    #[test]
    fn test_rejects_duplicate_entries() {
        let result = OrderCaptureConfig::from_toml_str(
            r#"
            [fields]
            name = "entry.1"
            email = "entry.1"
            "#,
        );
        assert!(matches!(result, Err(OrderError::ConfigError(_))));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let result = OrderCaptureConfig::from_toml_str("language = ");
        assert!(matches!(result, Err(OrderError::ConfigError(_))));
    }

    #[tokio::test]
    async fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "language = \"en\"").unwrap();

        let config = OrderCaptureConfig::from_file(file.path()).await.unwrap();
        assert_eq!(config.language, Language::En);
    }
}
