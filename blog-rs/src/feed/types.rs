//! Feed input types and configuration

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published post, as loaded by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Post title
    pub title: String,
    /// Post body, markdown
    pub body: String,
    /// URL slug, may contain non-ASCII characters
    pub url_slug: String,
    /// Publication time
    pub released_at: DateTime<Utc>,
    /// Post author
    pub author: Author,
}

/// Post author
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub username: String,
    pub display_name: String,
}

/// Site-wide feed settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Site base URL, no trailing slash
    pub base_url: String,
    /// Channel title
    pub title: String,
    /// Channel description
    pub description: String,
    /// Channel image URL
    pub image: Option<String>,
    /// Copyright line
    pub copyright: String,
    /// Posts per rendered feed
    pub max_items: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: "https://blog.example.com".to_string(),
            title: "blog".to_string(),
            description: "A blog".to_string(),
            image: None,
            copyright: "Copyright (C) blog. All rights reserved.".to_string(),
            max_items: 20,
        }
    }
}

/// Per-author feed settings, from the author's profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserFeedInfo {
    /// Author username; a legacy leading `@` is accepted
    pub username: String,
    /// Feed title override; `{username}.log` when absent
    pub title: Option<String>,
    /// Channel description
    pub short_bio: String,
    /// Channel image URL
    pub thumbnail: Option<String>,
}
