use crate::error::{BlogError, Result};
use crate::feed::FeedConfig;
use crate::spam::FilterConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub filter: FilterConfig,
    pub feed: FeedConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| BlogError::Config(e.to_string()))?;

        toml::from_str(&content).map_err(|e| BlogError::Config(e.to_string()))
    }

    /// Build a config from environment variables.
    ///
    /// Keyword lists come from `BANNED_KEYWORDS` and
    /// `BANNED_ALT_KEYWORDS` as comma-separated values; unset variables
    /// yield empty lists. Feed fields come from `FEED_*` variables with
    /// the defaults as fallback.
    pub fn from_env() -> Self {
        let filter = FilterConfig {
            banned_keywords: FilterConfig::parse_keyword_list(&env_or("BANNED_KEYWORDS", "")),
            banned_alt_keywords: FilterConfig::parse_keyword_list(&env_or(
                "BANNED_ALT_KEYWORDS",
                "",
            )),
            ..FilterConfig::default()
        };

        let feed_defaults = FeedConfig::default();
        let feed = FeedConfig {
            base_url: env_or("FEED_BASE_URL", &feed_defaults.base_url),
            title: env_or("FEED_TITLE", &feed_defaults.title),
            description: env_or("FEED_DESCRIPTION", &feed_defaults.description),
            image: std::env::var("FEED_IMAGE").ok().or(feed_defaults.image),
            copyright: env_or("FEED_COPYRIGHT", &feed_defaults.copyright),
            max_items: feed_defaults.max_items,
        };

        Self {
            filter,
            feed,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filter: FilterConfig::default(),
            feed: FeedConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[filter]
banned_keywords = ["viagra"]
banned_alt_keywords = ["casino", "jackpot"]
max_trailing_links = 4
alt_keyword_threshold = 2

[feed]
base_url = "https://blog.example.com"
title = "blog"
description = "a blog"
copyright = "Copyright (C) blog."
max_items = 20

[logging]
level = "debug"
format = "pretty"
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.filter.banned_keywords, vec!["viagra"]);
        assert_eq!(config.filter.banned_alt_keywords.len(), 2);
        assert_eq!(config.feed.max_items, 20);
        assert!(config.feed.image.is_none());
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_from_file_missing() {
        assert!(Config::from_file("/nonexistent/blog.toml").is_err());
    }

    #[test]
    fn test_from_env_keyword_lists() {
        std::env::set_var("BANNED_KEYWORDS", "viagra, Cialis");
        std::env::set_var("BANNED_ALT_KEYWORDS", "casino,,jackpot");

        let config = Config::from_env();
        assert_eq!(config.filter.banned_keywords, vec!["viagra", "cialis"]);
        assert_eq!(config.filter.banned_alt_keywords, vec!["casino", "jackpot"]);

        std::env::remove_var("BANNED_KEYWORDS");
        std::env::remove_var("BANNED_ALT_KEYWORDS");
    }
}
