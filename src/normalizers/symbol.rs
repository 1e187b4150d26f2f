//! src/normalizers/symbol.rs — the symbol/operator normalizer (token kind
//! `Operator`). Runs last among the number/operator passes, on whatever
//! punctuation survives everything with a more specific shape.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::buffer::TrackedBuffer;
use crate::data::symbols::{BRACKETS, OPERATORS, SYMBOLS};
use crate::diagnostics::Diagnostics;
use crate::error::NormalizeError;
use crate::normalizer::Normalizer;
use crate::pipeline::PipelineContext;

/// One symbol/operator/bracket token, longest first, so the alternation
/// tries multi-character operators (`->`, `==`, ...) before any
/// single-character symbol or bracket that happens to be one of their
/// prefixes.
static SYMBOL_TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let mut items: Vec<&'static str> = OPERATORS
        .keys()
        .copied()
        .chain(SYMBOLS.keys().copied())
        .chain(BRACKETS.keys().copied())
        .collect();
    items.sort_by_key(|s| std::cmp::Reverse(s.len()));
    let pattern = items.iter().map(|s| regex::escape(s)).collect::<Vec<_>>().join("|");
    Regex::new(&pattern).unwrap()
});

/// A maximal run of adjacent tokens, matched as a single span so e.g. `()`
/// becomes one replacement record instead of two. Splicing two separate
/// bracket phrases back to back would otherwise glue them with no
/// separator, and the buffer's disjointness rule forbids a later pass
/// from reaching back in to add one.
static SYMBOL_RUN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("(?:{})+", SYMBOL_TOKEN_PATTERN.as_str())).unwrap());

pub struct SymbolNormalizer;

impl Normalizer for SymbolNormalizer {
    fn name(&self) -> &'static str {
        "symbol"
    }

    fn needs_apply(&self, text: &str, _ctx: &PipelineContext) -> bool {
        SYMBOL_TOKEN_PATTERN.is_match(text)
    }

    fn apply(
        &self,
        buffer: &mut TrackedBuffer,
        ctx: &PipelineContext,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), NormalizeError> {
        let diag: &Diagnostics = diagnostics;
        let read_operators = ctx.config().read_operators;
        buffer.sub_regex(&SYMBOL_RUN_PATTERN, diag, |text, caps| {
            let m = caps.get(0).unwrap();
            let mut words: Vec<String> = Vec::new();
            let mut saw_disabled_operator = false;
            for tok in SYMBOL_TOKEN_PATTERN.find_iter(m.as_str()) {
                let matched = tok.as_str();
                if let Some(&phrase) = OPERATORS.get(matched) {
                    if read_operators {
                        words.push(phrase.to_string());
                    } else {
                        saw_disabled_operator = true;
                    }
                } else if let Some(&phrase) = SYMBOLS.get(matched) {
                    words.push(phrase.to_string());
                } else if let Some(&phrase) = BRACKETS.get(matched) {
                    words.push(phrase.to_string());
                }
            }

            let mut out = words.join(" ");
            if out.is_empty() {
                // A run made entirely of disabled operators: stripped to a
                // single space rather than deleted outright.
                return Some(if saw_disabled_operator { " ".to_string() } else { String::new() });
            }

            let before_is_space =
                text[..m.start()].chars().next_back().map(|c| c.is_whitespace()).unwrap_or(true);
            let after_is_space = text[m.end()..].chars().next().map(|c| c.is_whitespace()).unwrap_or(true);
            if !before_is_space {
                out.insert(0, ' ');
            }
            if !after_is_space {
                out.push(' ');
            }
            Some(out)
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn multi_char_operator_beats_single_char_prefix() {
        let mut buffer = TrackedBuffer::new("a -> b");
        let mut d = Diagnostics::new(false);
        let ctx = PipelineContext::new(Config::default());
        SymbolNormalizer.apply(&mut buffer, &ctx, &mut d).unwrap();
        assert_eq!(buffer.current_text(), "a стрелка b");
    }

    #[test]
    fn disabling_operators_strips_to_space() {
        let mut buffer = TrackedBuffer::new("a -> b");
        let mut d = Diagnostics::new(false);
        let ctx = PipelineContext::new(
            Config::builder().read_operators(false).build(),
        );
        SymbolNormalizer.apply(&mut buffer, &ctx, &mut d).unwrap();
        assert_eq!(buffer.current_text(), "a   b");
    }

    #[test]
    fn brackets_are_always_spoken() {
        let mut buffer = TrackedBuffer::new("f()");
        let mut d = Diagnostics::new(false);
        let ctx = PipelineContext::new(Config::default());
        SymbolNormalizer.apply(&mut buffer, &ctx, &mut d).unwrap();
        assert_eq!(buffer.current_text(), "f открывающая скобка закрывающая скобка");
    }
}
