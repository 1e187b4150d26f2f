//! src/normalizers/abbreviation.rs — the abbreviation normalizer.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::buffer::TrackedBuffer;
use crate::data::abbreviations::{DIGIT_WORDS, LETTER_SPELLING};
use crate::diagnostics::Diagnostics;
use crate::error::NormalizeError;
use crate::normalizer::Normalizer;
use crate::pipeline::PipelineContext;

/// Candidate tokens: a single Latin letter, or a run of uppercase letters
/// optionally mixed with digits. The regex over-matches (it also catches
/// `camelCase`/plain words); [`is_abbreviation_shape`] narrows it down, and
/// a `None` return from the rewriter leaves the token for a later pass.
static CANDIDATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Za-z][A-Za-z0-9]*\b").unwrap());

/// A single Latin letter, or 2+ characters that are all uppercase letters
/// or digits with at least one uppercase letter (`H264` has only one
/// uppercase letter, so "2+ uppercase letters" is read here as "2+
/// characters, at least one uppercase").
fn is_abbreviation_shape(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else { return false };
    if chars.next().is_none() {
        return first.is_ascii_alphabetic();
    }
    word.len() >= 2
        && word.chars().any(|c| c.is_ascii_uppercase())
        && word.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

/// Translate one abbreviation-shaped token via the two-level lookup.
pub fn translate_abbreviation(word: &str, ctx: &PipelineContext) -> String {
    let lower = word.to_lowercase();
    if let Some(as_word) = ctx.lookup_abbreviation_word(&lower) {
        return as_word.to_string();
    }
    word.chars()
        .map(|c| {
            if c.is_ascii_digit() {
                DIGIT_WORDS.get(&c).copied().unwrap_or("")
            } else {
                LETTER_SPELLING.get(&c.to_ascii_lowercase()).copied().unwrap_or("")
            }
        })
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub struct AbbreviationNormalizer;

impl Normalizer for AbbreviationNormalizer {
    fn name(&self) -> &'static str {
        "abbreviation"
    }

    fn needs_apply(&self, text: &str, _ctx: &PipelineContext) -> bool {
        CANDIDATE_RE.is_match(text)
    }

    fn apply(
        &self,
        buffer: &mut TrackedBuffer,
        ctx: &PipelineContext,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), NormalizeError> {
        let diag: &Diagnostics = diagnostics;
        buffer.sub_regex(&CANDIDATE_RE, diag, |_, caps| {
            let word = caps.get(0).unwrap().as_str();
            if !is_abbreviation_shape(word) {
                return None;
            }
            Some(translate_abbreviation(word, ctx))
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn ctx() -> PipelineContext {
        PipelineContext::new(Config::default())
    }

    #[test]
    fn known_acronym_reads_as_a_word() {
        let mut buffer = TrackedBuffer::new("через API");
        let mut d = Diagnostics::new(false);
        AbbreviationNormalizer.apply(&mut buffer, &ctx(), &mut d).unwrap();
        assert_eq!(buffer.current_text(), "через эй пи ай");
    }

    #[test]
    fn digits_embedded_in_abbreviation_are_spelled_individually() {
        let mut buffer = TrackedBuffer::new("H264");
        let mut d = Diagnostics::new(false);
        AbbreviationNormalizer.apply(&mut buffer, &ctx(), &mut d).unwrap();
        assert_eq!(buffer.current_text(), "эйч два шесть четыре");
    }

    #[test]
    fn camel_case_word_is_left_untouched() {
        let mut buffer = TrackedBuffer::new("getUserData");
        let mut d = Diagnostics::new(false);
        AbbreviationNormalizer.apply(&mut buffer, &ctx(), &mut d).unwrap();
        assert_eq!(buffer.current_text(), "getUserData");
    }
}
