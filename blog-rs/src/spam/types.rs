//! Spam filter types and configuration

use serde::{Deserialize, Serialize};

/// Result of a spam check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpamCheck {
    /// Is this text spam
    pub is_spam: bool,
    /// The signal that fired, when spam
    pub signal: Option<SpamSignal>,
}

impl SpamCheck {
    pub(crate) fn clean() -> Self {
        Self {
            is_spam: false,
            signal: None,
        }
    }

    pub(crate) fn flagged(signal: SpamSignal) -> Self {
        Self {
            is_spam: true,
            signal: Some(signal),
        }
    }
}

/// A spam signal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpamSignal {
    /// Run of link lines at the end of the text, without any Hangul
    TrailingLinks { count: usize },
    /// A hard-banned keyword was found
    BannedKeyword { keyword: String },
    /// Alternate keywords accumulated past the threshold
    AltKeywordScore { score: usize },
    /// Comment rule: a link substring without any Hangul
    LinkWithoutHangul,
}

/// Keyword lists and thresholds for the spam filter.
///
/// Built once from process configuration and immutable afterwards, so a
/// single instance can be shared across any number of request handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Keywords whose presence alone marks a post as spam
    pub banned_keywords: Vec<String>,
    /// Keywords that each add one point to the spam score
    pub banned_alt_keywords: Vec<String>,
    /// A trailing link run longer than this flags a post
    pub max_trailing_links: usize,
    /// Alternate keyword score at which a post is flagged
    pub alt_keyword_threshold: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            banned_keywords: Vec::new(),
            banned_alt_keywords: Vec::new(),
            max_trailing_links: 4,
            alt_keyword_threshold: 2,
        }
    }
}

impl FilterConfig {
    /// Parse a comma-separated keyword list.
    ///
    /// Entries are trimmed and lowercased; empty entries and duplicates
    /// are dropped, so an empty or malformed list degrades to "no
    /// keyword ever matches" rather than matching everything.
    pub fn parse_keyword_list(raw: &str) -> Vec<String> {
        let mut keywords: Vec<String> = Vec::new();
        for entry in raw.split(',') {
            let entry = entry.trim().to_lowercase();
            if entry.is_empty() || keywords.contains(&entry) {
                continue;
            }
            keywords.push(entry);
        }
        keywords
    }
}
