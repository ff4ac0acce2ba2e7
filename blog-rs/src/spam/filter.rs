//! Spam classification engine
//!
//! Applies the post-level signals in order (trailing link run, hard-ban
//! keywords, weighted alternate keywords) and the simpler comment rule.
//! Matching is plain substring containment with no word-boundary
//! awareness; the thresholds were tuned against exactly that behavior.

use tracing::debug;

use super::normalize::{collapse_blank_lines, contains_hangul, normalize};
use super::types::{FilterConfig, SpamCheck, SpamSignal};

/// Rule-based spam filter for post and comment bodies
pub struct SpamFilter {
    config: FilterConfig,
}

impl SpamFilter {
    /// Create a filter over the given keyword lists and thresholds
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// Get current config
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Classify a post body. True means spam.
    pub fn is_spam(&self, text: &str) -> bool {
        self.evaluate(text).is_spam
    }

    /// Classify a post body, reporting the first signal that fired.
    pub fn evaluate(&self, text: &str) -> SpamCheck {
        let run = trailing_link_run(text);
        if run > self.config.max_trailing_links && !contains_hangul(text) {
            debug!(count = run, "trailing link run flagged");
            return SpamCheck::flagged(SpamSignal::TrailingLinks { count: run });
        }

        let normalized = normalize(text);

        if let Some(keyword) = self
            .config
            .banned_keywords
            .iter()
            .find(|k| !k.is_empty() && normalized.contains(k.as_str()))
        {
            debug!(keyword = %keyword, "banned keyword flagged");
            return SpamCheck::flagged(SpamSignal::BannedKeyword {
                keyword: keyword.clone(),
            });
        }

        let score = self
            .config
            .banned_alt_keywords
            .iter()
            .filter(|k| !k.is_empty() && normalized.contains(k.as_str()))
            .count();
        if score >= self.config.alt_keyword_threshold {
            debug!(score, "alternate keyword score flagged");
            return SpamCheck::flagged(SpamSignal::AltKeywordScore { score });
        }

        SpamCheck::clean()
    }

    /// Classify a comment body. True means spam.
    pub fn is_comment_spam(&self, text: &str) -> bool {
        self.evaluate_comment(text).is_spam
    }

    /// Classify a comment body: flagged when it contains no Hangul and
    /// carries the literal substring `http`. Keyword lists are not
    /// consulted.
    pub fn evaluate_comment(&self, text: &str) -> SpamCheck {
        if !contains_hangul(text) && text.contains("http") {
            debug!("comment link without hangul flagged");
            return SpamCheck::flagged(SpamSignal::LinkWithoutHangul);
        }
        SpamCheck::clean()
    }
}

/// Count link lines at the end of a text block.
///
/// The text is blank-line-collapsed and lowercased, split into lines,
/// and walked in reverse. A line counts when it starts with `http` and
/// either closes the text or the line immediately following it in
/// original order also starts with `http`. Every reversed line is
/// visited; do not simplify this into a count-until-first-miss loop,
/// the spam threshold is tuned against this exact rule.
fn trailing_link_run(text: &str) -> usize {
    let collapsed = collapse_blank_lines(text).to_lowercase();
    let lines: Vec<&str> = collapsed.split('\n').rev().collect();

    let mut run = 0;
    for (i, line) in lines.iter().enumerate() {
        if line.starts_with("http") && (i == 0 || lines[i - 1].starts_with("http")) {
            run += 1;
        }
    }
    run
}
