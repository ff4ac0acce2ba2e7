//! Spam filtering module
//!
//! Rule-based classification of post and comment bodies: text
//! normalization, a trailing-link-run check, and keyword matching
//! against configured ban lists.

pub mod filter;
pub mod normalize;
pub mod types;

pub use filter::SpamFilter;
pub use normalize::{contains_hangul, normalize};
pub use types::*;
