//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub static_dir: String,
    pub public_dir: String,
    pub blog_dir: String,

    // Meta
    pub meta_generator: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "RainChill".to_string(),
            tagline: "Life is short, code is long".to_string(),
            description: String::new(),
            author: "RainChill".to_string(),
            language: "zh-CN".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            static_dir: "static".to_string(),
            public_dir: "public".to_string(),
            blog_dir: "blog".to_string(),

            meta_generator: true,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Meta description for the home page, falling back to the tagline
    pub fn meta_description(&self) -> &str {
        if self.description.is_empty() {
            &self.tagline
        } else {
            &self.description
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "RainChill");
        assert_eq!(config.tagline, "Life is short, code is long");
        assert_eq!(config.blog_dir, "blog");
        assert_eq!(config.public_dir, "public");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Homepage
author: Test User
blog_dir: posts
root: /site/
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Homepage");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.blog_dir, "posts");
        assert_eq!(config.root, "/site/");
        // Unspecified fields keep their defaults
        assert_eq!(config.tagline, "Life is short, code is long");
    }

    #[test]
    fn test_meta_description_fallback() {
        let mut config = SiteConfig::default();
        assert_eq!(config.meta_description(), "Life is short, code is long");
        config.description = "A personal homepage".to_string();
        assert_eq!(config.meta_description(), "A personal homepage");
    }
}
