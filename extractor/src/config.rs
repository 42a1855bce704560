//! Component L: configuration (§6c). A small TOML file with environment-
//! variable overrides for the two mandatory URLs and the sink path, the way
//! a standalone CLI crate typically reads its settings.

use serde::Deserialize;

use crate::error::{ExtractorError, Result};

fn default_sink_path() -> String {
    "development_applications.db".to_string()
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    pub source_url: String,
    pub comment_url: String,
    #[serde(default)]
    pub proxy_url: Option<String>,
    #[serde(default = "default_sink_path")]
    pub sink_path: String,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ExtractorError::ConfigRead {
            path: path.to_string(),
            source,
        })?;
        let mut config: Config = toml::from_str(&contents).map_err(|source| ExtractorError::ConfigParse {
            path: path.to_string(),
            source,
        })?;

        if let Ok(source_url) = std::env::var("SCRAPER_SOURCE_URL") {
            config.source_url = source_url;
        }
        if let Ok(comment_url) = std::env::var("SCRAPER_COMMENT_URL") {
            config.comment_url = comment_url;
        }
        if let Ok(sink_path) = std::env::var("SCRAPER_SINK_PATH") {
            config.sink_path = sink_path;
        }
        if let Ok(proxy_url) = std::env::var("SCRAPER_PROXY_URL") {
            config.proxy_url = Some(proxy_url);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_defaults_proxy_and_sink_path() {
        let toml = r#"
            source_url = "http://example/register"
            comment_url = "http://example/comment"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.source_url, "http://example/register");
        assert_eq!(config.comment_url, "http://example/comment");
        assert_eq!(config.proxy_url, None);
        assert_eq!(config.sink_path, "development_applications.db");
    }

    #[test]
    fn proxy_url_round_trips_when_present() {
        let toml = r#"
            source_url = "http://example/register"
            comment_url = "http://example/comment"
            proxy_url = "http://proxy.example:8080"
            sink_path = "/tmp/applications.db"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.proxy_url.as_deref(), Some("http://proxy.example:8080"));
        assert_eq!(config.sink_path, "/tmp/applications.db");
    }
}
