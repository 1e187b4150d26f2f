//! src/config.rs
//! The configuration surface. A plain value object — no file or
//! environment I/O is performed here or anywhere else in the core.

use std::collections::HashMap;

/// How fenced code blocks are spoken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeBlockMode {
    /// Recurse the block's interior through the normalizer battery so
    /// identifiers and operators inside it are pronounced.
    #[default]
    Full,
    /// Replace the whole block with a single summary sentence.
    Brief,
}

/// How much of a URL is spoken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrlDetailLevel {
    #[default]
    Full,
    DomainOnly,
    Minimal,
}

/// How IPv4 octets are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IpReadMode {
    #[default]
    Numbers,
    Digits,
}

/// Value object carrying every configuration knob the pipeline exposes.
/// Built once, frozen into a [`crate::Pipeline`] by
/// [`crate::Pipeline::configure`], and never mutated again for the
/// lifetime of that pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    pub code_block_mode: CodeBlockMode,
    pub url_detail_level: UrlDetailLevel,
    pub ip_read_mode: IpReadMode,
    pub read_operators: bool,
    pub custom_english_terms: HashMap<String, String>,
    pub custom_abbreviations: HashMap<String, String>,
    pub diagram_sentinel: String,
    /// Diagnostic flag: collect unrecognized English words so callers can
    /// extend [`Config::custom_english_terms`].
    pub collect_unknown_words: bool,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            code_block_mode: CodeBlockMode::Full,
            url_detail_level: UrlDetailLevel::Full,
            ip_read_mode: IpReadMode::Numbers,
            read_operators: true,
            custom_english_terms: HashMap::new(),
            custom_abbreviations: HashMap::new(),
            diagram_sentinel: "Тут диаграмма".to_string(),
            collect_unknown_words: false,
        }
    }
}

/// Fluent builder over [`Config`]. Kept deliberately thin — every field is
/// a simple value, there is no validation that belongs here rather than at
/// [`crate::Pipeline::configure`] (dictionary key validation happens once,
/// at freeze time).
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code_block_mode(mut self, mode: CodeBlockMode) -> Self {
        self.config.code_block_mode = mode;
        self
    }

    pub fn url_detail_level(mut self, level: UrlDetailLevel) -> Self {
        self.config.url_detail_level = level;
        self
    }

    pub fn ip_read_mode(mut self, mode: IpReadMode) -> Self {
        self.config.ip_read_mode = mode;
        self
    }

    pub fn read_operators(mut self, read: bool) -> Self {
        self.config.read_operators = read;
        self
    }

    pub fn custom_english_term(mut self, latin: impl Into<String>, cyrillic: impl Into<String>) -> Self {
        self.config.custom_english_terms.insert(latin.into(), cyrillic.into());
        self
    }

    pub fn custom_abbreviation(mut self, latin: impl Into<String>, cyrillic: impl Into<String>) -> Self {
        self.config.custom_abbreviations.insert(latin.into(), cyrillic.into());
        self
    }

    pub fn diagram_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.config.diagram_sentinel = sentinel.into();
        self
    }

    pub fn collect_unknown_words(mut self, collect: bool) -> Self {
        self.config.collect_unknown_words = collect;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
