//! src/normalizers/english.rs — the English dictionary + phonetic fallback.
//! Runs last among the Latin-script passes, on whatever plain word
//! survives everything more specific.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::buffer::TrackedBuffer;
use crate::data::english_dict::{DIGRAPHS, LETTER_FALLBACK, PHRASES};
use crate::diagnostics::Diagnostics;
use crate::error::NormalizeError;
use crate::normalizer::Normalizer;
use crate::pipeline::PipelineContext;

static PHRASE_RE: Lazy<Regex> = Lazy::new(|| {
    // Longest phrase first, so "pull request" doesn't get pre-empted by a
    // (nonexistent) single-word "pull" match on the first word alone.
    let mut phrases: Vec<&'static str> = PHRASES.keys().copied().collect();
    phrases.sort_by_key(|p| std::cmp::Reverse(p.len()));
    let pattern = phrases
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{pattern})\b")).unwrap()
});

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Za-z]+\b").unwrap());

/// Deterministic letter-level transliteration, used when no dictionary
/// entry matches a word. Digraphs are checked greedily,
/// left-to-right, before the single-letter fallback table.
pub fn transliterate(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut out = String::new();
    let mut i = 0;
    while i < chars.len() {
        let mut matched = false;
        if i + 1 < chars.len() {
            let pair: String = [chars[i], chars[i + 1]].iter().collect::<String>().to_lowercase();
            for &(digraph, ru) in DIGRAPHS {
                if digraph == pair {
                    out.push_str(ru);
                    i += 2;
                    matched = true;
                    break;
                }
            }
        }
        if matched {
            continue;
        }
        let lower = chars[i].to_ascii_lowercase();
        out.push_str(LETTER_FALLBACK.get(&lower).copied().unwrap_or(""));
        i += 1;
    }
    out
}

pub struct EnglishNormalizer;

impl Normalizer for EnglishNormalizer {
    fn name(&self) -> &'static str {
        "english"
    }

    fn needs_apply(&self, text: &str, _ctx: &PipelineContext) -> bool {
        WORD_RE.is_match(text)
    }

    fn apply(
        &self,
        buffer: &mut TrackedBuffer,
        ctx: &PipelineContext,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), NormalizeError> {
        // Phrases first — matched and consumed before single-word lookup
        // ever sees their constituent words.
        let diag: &Diagnostics = diagnostics;
        buffer.sub_regex(&PHRASE_RE, diag, |_, caps| {
            let matched = caps.get(0).unwrap().as_str().to_lowercase();
            PHRASES.get(matched.as_str()).map(|s| s.to_string())
        });

        let mut unknown = Vec::new();
        let diag: &Diagnostics = diagnostics;
        buffer.sub_regex(&WORD_RE, diag, |_, caps| {
            let word = caps.get(0).unwrap().as_str();
            let lower = word.to_lowercase();
            if let Some(translated) = ctx.lookup_english_word(&lower) {
                Some(translated.to_string())
            } else {
                unknown.push(lower);
                Some(transliterate(word))
            }
        });
        for word in unknown {
            diagnostics.record_unknown_word(&word);
        }
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
    fn dictionary_word_translates() {
        let mut buffer = TrackedBuffer::new("get user data");
        let mut d = Diagnostics::new(false);
        EnglishNormalizer.apply(&mut buffer, &ctx(), &mut d).unwrap();
        assert_eq!(buffer.current_text(), "гет юзер дата");
    }

    #[test]
    fn phrase_wins_over_single_word_lookup() {
        let mut buffer = TrackedBuffer::new("pull request");
        let mut d = Diagnostics::new(false);
        EnglishNormalizer.apply(&mut buffer, &ctx(), &mut d).unwrap();
        assert_eq!(buffer.current_text(), "пул реквест");
    }

    #[test]
    fn unknown_word_falls_back_to_transliteration_and_is_recorded() {
        let mut buffer = TrackedBuffer::new("xyzzy");
        let mut d = Diagnostics::new(true);
        EnglishNormalizer.apply(&mut buffer, &ctx(), &mut d).unwrap();
        assert_eq!(buffer.current_text(), transliterate("xyzzy"));
        assert!(d.unknown_words().contains("xyzzy"));
    }

    #[test]
    fn digraph_matched_before_letter_fallback() {
        assert_eq!(transliterate("this"), "зис");
    }
}
