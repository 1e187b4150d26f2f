//! src/error.rs
//! Error types for the normalization core. Mirrors the per-layer split the
//! rest of this crate's lineage uses: one `thiserror` enum for normalizer
//! failures, one for configuration/build failures.

use thiserror::Error;

/// Internal error raised by a single normalizer pass.
///
/// These never escape [`crate::Pipeline::process`] /
/// [`crate::Pipeline::process_with_map`] — the orchestrator catches every
/// variant, records it on [`crate::Diagnostics`], and falls back to the
/// next-lower-priority token kind.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("token at {start}..{end} looked like a number but could not be parsed: {text:?}")]
    MalformedNumber {
        start: usize,
        end: usize,
        text: String,
    },

    #[error("size unit `{unit}` at {start}..{end} is not in the unit table")]
    UnknownUnit {
        start: usize,
        end: usize,
        unit: String,
    },
}

/// Errors raised while building a [`crate::Pipeline`] from a
/// [`crate::Config`], e.g. a malformed custom-dictionary entry.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("custom dictionary entry `{key}` rejected: {reason}")]
    DictionaryMerge { key: String, reason: &'static str },
}
