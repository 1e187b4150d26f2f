//! src/normalizers/postprocessor.rs — stage 4.
//!
//! Runs last. By the time it sees the buffer, every Latin/numeric/symbol
//! token the battery recognizes has already become Russian words; this
//! pass only tidies the *shape* of what is left: collapsed whitespace,
//! residual bare markup with no spoken form, and punctuation spacing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::buffer::TrackedBuffer;
use crate::diagnostics::Diagnostics;
use crate::error::NormalizeError;
use crate::normalizer::Normalizer;
use crate::pipeline::PipelineContext;

/// Bare markup characters that carry no spoken form of their own once
/// everything with semantic weight has already been rewritten by the
/// symbol normalizer (stray emphasis markers, leftover fence backticks,
/// heading hashes at line start).
static RESIDUAL_MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[`*_#]+").unwrap());

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\S\n]{2,}").unwrap());
static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());
static SPACE_BEFORE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([.,!?:;])").unwrap());
static MISSING_SPACE_AFTER_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.,!?:;])(\S)").unwrap());
static LEADING_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+").unwrap());
static TRAILING_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+$").unwrap());

pub struct Postprocessor;

impl Normalizer for Postprocessor {
    fn name(&self) -> &'static str {
        "postprocessor"
    }

    fn needs_apply(&self, _text: &str, _ctx: &PipelineContext) -> bool {
        // Always runs: even text needing no rewrite still gets trimmed.
        true
    }

    fn apply(
        &self,
        buffer: &mut TrackedBuffer,
        _ctx: &PipelineContext,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), NormalizeError> {
        // Strip bare markup and trim the edges before any run-collapsing:
        // once a whitespace run is folded into a single logged space, that
        // space cannot be re-touched (the buffer rejects overlapping
        // rewrites), so trimming only works reliably against untouched
        // original whitespace.
        let diag: &Diagnostics = diagnostics;
        buffer.sub_regex(&RESIDUAL_MARKUP, diag, |_, _| Some(String::new()));
        buffer.sub_regex(&LEADING_WHITESPACE, diag, |_, _| Some(String::new()));
        buffer.sub_regex(&TRAILING_WHITESPACE, diag, |_, _| Some(String::new()));
        buffer.sub_regex(&BLANK_LINES, diag, |_, _| Some("\n".to_string()));
        buffer.sub_regex(&WHITESPACE_RUN, diag, |_, _| Some(" ".to_string()));
        buffer.sub_regex(&SPACE_BEFORE_PUNCT, diag, |_, caps| Some(caps[1].to_string()));
        buffer.sub_regex(&MISSING_SPACE_AFTER_PUNCT, diag, |_, caps| {
            Some(format!("{} {}", &caps[1], &caps[2]))
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diag() -> Diagnostics {
        Diagnostics::new(false)
    }

    #[test]
    fn collapses_whitespace_runs() {
        let mut buffer = TrackedBuffer::new("привет   мир");
        let mut d = diag();
        let ctx = PipelineContext::new(crate::config::Config::default());
        Postprocessor.apply(&mut buffer, &ctx, &mut d).unwrap();
        assert_eq!(buffer.current_text(), "привет мир");
    }

    #[test]
    fn trims_leading_and_trailing_whitespace() {
        let mut buffer = TrackedBuffer::new("  далее следует пример кода на пайтон  ");
        let mut d = diag();
        let ctx = PipelineContext::new(crate::config::Config::default());
        Postprocessor.apply(&mut buffer, &ctx, &mut d).unwrap();
        assert_eq!(buffer.current_text(), "далее следует пример кода на пайтон");
    }

    #[test]
    fn strips_residual_markup_with_no_spoken_form() {
        let mut buffer = TrackedBuffer::new("# заголовок **жирный**");
        let mut d = diag();
        let ctx = PipelineContext::new(crate::config::Config::default());
        Postprocessor.apply(&mut buffer, &ctx, &mut d).unwrap();
        assert_eq!(buffer.current_text(), "заголовок жирный");
    }

    #[test]
    fn ensures_single_space_around_punctuation() {
        let mut buffer = TrackedBuffer::new("привет ,мир . пока");
        let mut d = diag();
        let ctx = PipelineContext::new(crate::config::Config::default());
        Postprocessor.apply(&mut buffer, &ctx, &mut d).unwrap();
        assert_eq!(buffer.current_text(), "привет, мир. пока");
    }
}
