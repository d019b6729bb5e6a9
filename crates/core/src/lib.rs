//! Core library for dailyprompt.
//!
//! Answers to a configured list of prompts are rendered and written into a
//! heading-delimited section of a markdown note, replacing whatever that
//! section held before. [`markdown`] holds the line-based section rewriter;
//! the other modules supply the settings, the daily note and the storage
//! around it.

pub mod config;
pub mod daily;
pub mod fill;
pub mod markdown;
pub mod prompts;
pub mod store;
pub mod vault;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
