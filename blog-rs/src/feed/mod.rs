//! RSS feed module
//!
//! Renders RSS 2.0 feeds from already-loaded posts. Queries and HTTP
//! delivery belong to the caller.

pub mod builder;
pub mod types;

pub use builder::{render_site_feed, render_user_feed};
pub use types::*;
