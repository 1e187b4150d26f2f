//! src/normalizers/identifier.rs — the identifier splitter (token kinds
//! `CamelIdent`/`SnakeIdent`/`KebabIdent`). Runs after
//! `Abbreviation`, so whatever reaches here either has an internal `_`/`-`
//! or a genuine case/digit boundary — a plain word is left for `EnglishWord`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::buffer::TrackedBuffer;
use crate::diagnostics::Diagnostics;
use crate::error::NormalizeError;
use crate::normalizer::Normalizer;
use crate::normalizers::abbreviation::translate_abbreviation;
use crate::normalizers::english::transliterate;
use crate::pipeline::PipelineContext;
use crate::ru::cardinals::cardinal;

static IDENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Za-z][A-Za-z0-9_-]*\b").unwrap());

/// Split `word` into raw sub-word segments by its snake/kebab/camel shape.
/// Returns `None` if the word has no internal structure at all (plain
/// lowercase or uniform-case word, no digits) — the caller then leaves it
/// untouched for the `EnglishWord` pass.
fn split_segments(word: &str) -> Option<Vec<String>> {
    if word.contains('_') {
        return Some(word.split('_').filter(|s| !s.is_empty()).map(str::to_string).collect());
    }
    if word.contains('-') {
        return Some(word.split('-').filter(|s| !s.is_empty()).map(str::to_string).collect());
    }

    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    let mut cuts = vec![0usize];
    for i in 1..n {
        let prev = chars[i - 1];
        let cur = chars[i];
        let lower_to_upper = prev.is_lowercase() && cur.is_uppercase();
        let upper_run_to_lower = prev.is_uppercase() && cur.is_uppercase() && i + 1 < n && chars[i + 1].is_lowercase();
        let letter_digit_boundary = prev.is_ascii_digit() != cur.is_ascii_digit();
        if lower_to_upper || upper_run_to_lower || letter_digit_boundary {
            cuts.push(i);
        }
    }
    if cuts.len() == 1 {
        return None;
    }
    cuts.push(n);
    Some(
        cuts.windows(2)
            .map(|w| chars[w[0]..w[1]].iter().collect())
            .collect(),
    )
}

/// Speak one already-split segment: an all-uppercase run of length ≥2
/// routes to the abbreviation table, a pure digit run to the number
/// engine, everything else to the English dictionary/fallback.
fn speak_segment(segment: &str, ctx: &PipelineContext) -> String {
    if segment.chars().all(|c| c.is_ascii_digit()) {
        return segment.parse::<u64>().map(cardinal).unwrap_or_default();
    }
    if segment.len() >= 2 && segment.chars().all(|c| c.is_ascii_uppercase()) {
        return translate_abbreviation(segment, ctx);
    }
    let lower = segment.to_lowercase();
    ctx.lookup_english_word(&lower)
        .map(str::to_string)
        .unwrap_or_else(|| transliterate(segment))
}

pub struct IdentifierNormalizer;

impl Normalizer for IdentifierNormalizer {
    fn name(&self) -> &'static str {
        "identifier"
    }

    fn needs_apply(&self, text: &str, _ctx: &PipelineContext) -> bool {
        IDENT_RE.is_match(text)
    }

    fn apply(
        &self,
        buffer: &mut TrackedBuffer,
        ctx: &PipelineContext,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), NormalizeError> {
        let diag: &Diagnostics = diagnostics;
        buffer.sub_regex(&IDENT_RE, diag, |_, caps| {
            let word = caps.get(0).unwrap().as_str();
            let segments = split_segments(word)?;
            Some(
                segments
                    .iter()
                    .map(|s| speak_segment(s, ctx))
                    .collect::<Vec<_>>()
                    .join(" "),
            )
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
    fn camel_case_splits_on_case_boundaries() {
        let mut buffer = TrackedBuffer::new("getUserData()");
        let mut d = Diagnostics::new(false);
        IdentifierNormalizer.apply(&mut buffer, &ctx(), &mut d).unwrap();
        assert_eq!(buffer.current_text(), "гет юзер дата()");
    }

    #[test]
    fn upper_run_to_lower_boundary() {
        let mut buffer = TrackedBuffer::new("XMLHttpRequest");
        let mut d = Diagnostics::new(false);
        IdentifierNormalizer.apply(&mut buffer, &ctx(), &mut d).unwrap();
        assert_eq!(buffer.current_text(), "экс эм эль хттп реквест");
    }

    #[test]
    fn double_underscore_init_drops_empty_segments() {
        let mut buffer = TrackedBuffer::new("__init__");
        let mut d = Diagnostics::new(false);
        IdentifierNormalizer.apply(&mut buffer, &ctx(), &mut d).unwrap();
        assert_eq!(buffer.current_text(), "инит");
    }

    #[test]
    fn kebab_splits_on_hyphen() {
        let mut buffer = TrackedBuffer::new("load-balancer");
        let mut d = Diagnostics::new(false);
        IdentifierNormalizer.apply(&mut buffer, &ctx(), &mut d).unwrap();
        assert_eq!(buffer.current_text(), "лоад балансер");
    }

    #[test]
    fn plain_word_is_left_untouched() {
        let mut buffer = TrackedBuffer::new("hello");
        let mut d = Diagnostics::new(false);
        IdentifierNormalizer.apply(&mut buffer, &ctx(), &mut d).unwrap();
        assert_eq!(buffer.current_text(), "hello");
    }
}
