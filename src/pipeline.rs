//! src/pipeline.rs — the top-level orchestrator.
//!
//! The normalizer sequence is not user-composable: token priority makes
//! reordering unsafe, so [`PipelineBuilder`] only ever assembles the one
//! fixed battery, in the one fixed order, and hands back an opaque
//! [`Pipeline`].

use crate::buffer::{CharMap, TrackedBuffer};
use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::error::ConfigError;
use crate::normalizer::{run_normalizer, Normalizer};
use crate::normalizers::{
    abbreviation::AbbreviationNormalizer,
    english::EnglishNormalizer,
    identifier::IdentifierNormalizer,
    number::{
        DateNormalizer, FloatNormalizer, IntegerNormalizer, PercentageNormalizer,
        RangeNormalizer, SizeUnitNormalizer, TimeNormalizer, VersionNormalizer,
    },
    postprocessor::Postprocessor,
    preprocessor::Preprocessor,
    structural::StructuralParser,
    symbol::SymbolNormalizer,
    url::{EmailNormalizer, FilePathNormalizer, Ipv4Normalizer, UrlNormalizer},
};

/// Frozen, per-pipeline context every normalizer pass borrows. Built once
/// at [`PipelineBuilder::build`] time and never mutated afterward —
/// dictionaries are loaded at construction and then frozen.
pub struct PipelineContext {
    config: Config,
}

impl PipelineContext {
    /// Build a context directly from a [`Config`], bypassing dictionary
    /// validation. Used by [`PipelineBuilder::build`] (after validating)
    /// and by normalizer unit tests that don't exercise custom dictionaries.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Case-insensitive English-dictionary lookup: custom terms first,
    /// falling back to the built-in table.
    pub fn lookup_english_word(&self, lower_word: &str) -> Option<&str> {
        self.config
            .custom_english_terms
            .get(lower_word)
            .map(String::as_str)
            .or_else(|| crate::data::english_dict::WORDS.get(lower_word).copied())
    }

    /// Case-insensitive acronym-as-word lookup: custom additions first,
    /// falling back to the built-in table.
    pub fn lookup_abbreviation_word(&self, lower_word: &str) -> Option<&str> {
        self.config
            .custom_abbreviations
            .get(lower_word)
            .map(String::as_str)
            .or_else(|| crate::data::abbreviations::ACRONYMS_AS_WORD.get(lower_word).copied())
    }
}

/// Builds a [`Pipeline`] from a [`Config`], validating and freezing the
/// user-supplied dictionary extensions along the way.
#[derive(Default)]
pub struct PipelineBuilder {
    config: Config,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    fn validate_dictionary(entries: &std::collections::HashMap<String, String>) -> Result<(), ConfigError> {
        for key in entries.keys() {
            if key.is_empty() {
                return Err(ConfigError::DictionaryMerge {
                    key: key.clone(),
                    reason: "key is empty",
                });
            }
            if !key.is_ascii() {
                return Err(ConfigError::DictionaryMerge {
                    key: key.clone(),
                    reason: "key is not ASCII",
                });
            }
        }
        Ok(())
    }

    pub fn build(self) -> Result<Pipeline, ConfigError> {
        Self::validate_dictionary(&self.config.custom_english_terms)?;
        Self::validate_dictionary(&self.config.custom_abbreviations)?;

        let ctx = PipelineContext::new(self.config);
        let normalizers: Vec<Box<dyn Normalizer>> = vec![
            Box::new(Preprocessor),
            Box::new(StructuralParser),
            Box::new(UrlNormalizer),
            Box::new(EmailNormalizer),
            Box::new(Ipv4Normalizer),
            Box::new(FilePathNormalizer),
            Box::new(VersionNormalizer),
            Box::new(SizeUnitNormalizer),
            Box::new(PercentageNormalizer),
            // Date before Range: an ISO date's dashes would otherwise be
            // mistaken for a Range token.
            Box::new(DateNormalizer),
            Box::new(RangeNormalizer),
            Box::new(TimeNormalizer),
            Box::new(AbbreviationNormalizer),
            Box::new(IdentifierNormalizer),
            Box::new(FloatNormalizer),
            Box::new(IntegerNormalizer),
            Box::new(SymbolNormalizer),
            Box::new(EnglishNormalizer),
            Box::new(Postprocessor),
        ];

        Ok(Pipeline { ctx, normalizers })
    }
}

/// A fully configured, immutable normalization pipeline.
///
/// Construction is the only place allocation for dictionaries happens;
/// `process`/`process_with_map`/`process_with_diagnostics` borrow `self`
/// and allocate only the per-call [`TrackedBuffer`] and its output.
pub struct Pipeline {
    ctx: PipelineContext,
    normalizers: Vec<Box<dyn Normalizer>>,
}

impl Pipeline {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Convenience constructor equivalent to `Pipeline::builder().config(cfg).build()`.
    pub fn configure(config: Config) -> Result<Pipeline, ConfigError> {
        PipelineBuilder::new().config(config).build()
    }

    /// Run the full battery and discard the character map.
    pub fn process(&self, input: &str) -> String {
        self.process_with_map(input).0
    }

    /// Run the full battery, returning the rewritten text and its
    /// character map.
    #[tracing::instrument(skip(self, input), fields(input_len = input.chars().count()))]
    pub fn process_with_map(&self, input: &str) -> (String, CharMap) {
        let (text, map, _diagnostics) = self.process_with_diagnostics(input);
        (text, map)
    }

    /// Run the full battery, also returning the [`Diagnostics`] collected
    /// during this call (overlap drops, malformed numbers, unknown units,
    /// optionally unknown words).
    pub fn process_with_diagnostics(&self, input: &str) -> (String, CharMap, Diagnostics) {
        // NFC-fold ahead of everything else. Real-world Cyrillic prose is
        // already NFC; this only matters for stray combining marks, and
        // happens before the tracked buffer exists so it is not itself a
        // logged substitution — the buffer's "original" is this folded form.
        let normalized = icu_normalizer::ComposingNormalizer::new_nfc().normalize(input);
        let mut buffer = TrackedBuffer::new(&normalized);
        let mut diagnostics = Diagnostics::new(self.ctx.config().collect_unknown_words);

        for normalizer in &self.normalizers {
            if let Err(err) = run_normalizer(normalizer.as_ref(), &mut buffer, &self.ctx, &mut diagnostics) {
                tracing::warn!(normalizer = normalizer.name(), error = %err, "pass failed, continuing");
            }
        }

        let (text, map) = buffer.build_mapping();
        (text, map, diagnostics)
    }
}
