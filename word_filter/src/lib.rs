//! Counting and masking of "negative" words in free text.
//!
//! A [`FilterEngine`] asks a [`WordSource`] for the current pattern list and
//! filtering flag on every call, then either counts the matches or returns a
//! copy of the text with every match partially masked (`horrible` becomes
//! `h######e`).

mod error;
mod filter;
mod mask;
mod patterns;
mod source;

pub use error::{Error, Result};
pub use filter::FilterEngine;
pub use mask::{mask_middle, MASK};
pub use patterns::{compile, dedup_case_insensitive, PatternCache};
pub use source::{InMemorySource, WordSource, DEFAULT_PATTERNS};
