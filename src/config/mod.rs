//! Blog configuration (_config.yml)

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Blog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    pub title: String,
    pub author: String,
    pub url: String,

    /// Directory holding the markdown posts, relative to the blog root
    pub posts_dir: String,

    /// Date display format (chrono strftime syntax)
    pub date_format: String,

    /// Store any additional fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "A blog".to_string(),
            author: String::new(),
            url: "http://example.com".to_string(),
            posts_dir: "posts".to_string(),
            date_format: "%Y-%m-%d".to_string(),
            extra: IndexMap::new(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BlogConfig::default();
        assert_eq!(config.posts_dir, "posts");
        assert_eq!(config.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: BlogConfig =
            serde_yaml::from_str("title: asawo.dev\ntracking_id: UA-123\n").unwrap();
        assert_eq!(config.title, "asawo.dev");
        assert_eq!(config.posts_dir, "posts");
        assert_eq!(
            config.extra.get("tracking_id").and_then(|v| v.as_str()),
            Some("UA-123")
        );
    }
}
