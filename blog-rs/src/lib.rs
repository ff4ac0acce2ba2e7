//! blog-rs: blogging platform content core
//!
//! Spam filtering for post and comment submissions, and RSS feed
//! rendering for published posts.
//!
//! # Features
//!
//! - **Spam filter**: multi-signal verdicts over normalized text —
//!   trailing-link-run detection, hard-banned keywords, and weighted
//!   alternate-keyword scoring. Matching is raw substring containment
//!   without word boundaries; the thresholds are tuned against that
//!   behavior, so it is kept as-is.
//! - **Comment filter**: flags link-bearing comments without Hangul.
//! - **Feeds**: RSS 2.0 site-wide and per-author channels built from
//!   in-memory post data.
//!
//! Every classifier call is synchronous and side-effect free over an
//! immutable configuration, so one [`SpamFilter`] can serve any number
//! of concurrent request handlers.
//!
//! # Example
//!
//! ```
//! use blog_rs::spam::{FilterConfig, SpamFilter};
//!
//! let filter = SpamFilter::new(FilterConfig {
//!     banned_keywords: vec!["viagra".to_string()],
//!     ..FilterConfig::default()
//! });
//!
//! assert!(filter.is_spam("buy viagra now"));
//! assert!(!filter.is_spam("a post about rust"));
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`spam`]: Post and comment spam classification
//! - [`feed`]: RSS feed rendering

pub mod config;
pub mod error;
pub mod feed;
pub mod spam;

// Re-export commonly used types
pub use config::Config;
pub use error::{BlogError, Result};
pub use spam::SpamFilter;
