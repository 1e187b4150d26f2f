//! src/normalizers/preprocessor.rs — stage 0.
//!
//! BOM strip, quote/dash unification, whitespace collapse. NFC folding
//! happens one level up, before the tracked buffer even exists (see
//! [`crate::pipeline::Pipeline::process_with_diagnostics`]); this pass
//! covers everything the buffer itself can track.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::buffer::TrackedBuffer;
use crate::diagnostics::Diagnostics;
use crate::error::NormalizeError;
use crate::normalizer::Normalizer;
use crate::pipeline::PipelineContext;

const BOM: &str = "\u{FEFF}";

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

pub struct Preprocessor;

impl Normalizer for Preprocessor {
    fn name(&self) -> &'static str {
        "preprocessor"
    }

    fn needs_apply(&self, text: &str, _ctx: &PipelineContext) -> bool {
        text.contains(BOM)
            || text.contains(['«', '»', '“', '”', '‘', '’', '—', '–'])
            || WHITESPACE_RUN.is_match(text)
    }

    fn apply(
        &self,
        buffer: &mut TrackedBuffer,
        _ctx: &PipelineContext,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), NormalizeError> {
        buffer.replace_literal(BOM, "", None, diagnostics);
        buffer.replace_literal("«", "\"", None, diagnostics);
        buffer.replace_literal("»", "\"", None, diagnostics);
        buffer.replace_literal("“", "\"", None, diagnostics);
        buffer.replace_literal("”", "\"", None, diagnostics);
        buffer.replace_literal("‘", "'", None, diagnostics);
        buffer.replace_literal("’", "'", None, diagnostics);
        buffer.replace_literal("—", "-", None, diagnostics);
        buffer.replace_literal("–", "-", None, diagnostics);
        buffer.sub_regex(&WHITESPACE_RUN, diagnostics, |_, _| Some(" ".to_string()));
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
    fn strips_bom_and_unifies_quotes() {
        let mut buffer = TrackedBuffer::new("\u{FEFF}«привет»  — мир");
        let mut diagnostics = diag();
        let ctx = PipelineContext::new(crate::config::Config::default());
        Preprocessor.apply(&mut buffer, &ctx, &mut diagnostics).unwrap();
        assert_eq!(buffer.current_text(), "\"привет\" - мир");
    }
}
