#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Position-tracked Cyrillic-surface normalization for a Russian TTS
//! pipeline: given raw, possibly markdown-flavored text, rewrite every
//! Latin/numeric/symbolic token into Russian words while keeping a
//! character map back to the original input.

pub mod buffer;
pub mod config;
pub mod data;
pub mod diagnostics;
pub mod error;
pub mod normalizer;
pub mod normalizers;
pub mod pipeline;
pub mod ru;
pub mod testing;

pub use buffer::CharMap;
pub use config::{CodeBlockMode, Config, ConfigBuilder, IpReadMode, UrlDetailLevel};
pub use diagnostics::Diagnostics;
pub use error::{ConfigError, NormalizeError};
pub use normalizer::Normalizer;
pub use pipeline::{Pipeline, PipelineBuilder, PipelineContext};

/// Normalize `text` with the default [`Config`], discarding the character
/// map and diagnostics. The common case for callers that only want spoken
/// text.
pub fn process(text: &str) -> Result<String, ConfigError> {
    Ok(Pipeline::configure(Config::default())?.process(text))
}

/// Normalize `text` with the default [`Config`], returning the rewritten
/// text alongside its [`CharMap`] back to the original input.
pub fn process_with_map(text: &str) -> Result<(String, CharMap), ConfigError> {
    Ok(Pipeline::configure(Config::default())?.process_with_map(text))
}

/// Build a [`Pipeline`] from a caller-supplied [`Config`].
pub fn configure(config: Config) -> Result<Pipeline, ConfigError> {
    Pipeline::configure(config)
}

#[cfg(test)]
mod tests {
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
