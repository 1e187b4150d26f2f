//! src/normalizers/structural.rs — stage 1, the structural parser.
//!
//! Block boundaries are found with `pulldown-cmark`'s byte-offset event
//! stream. Once a span is located this module does not hand it off to a
//! nested pipeline: full mode simply removes the fence markup and leaves
//! the interior text in place in the buffer, where every later pass in
//! the battery scans it like any other prose — that is how full-mode
//! code blocks get their contents pronounced without re-running the
//! structural pass over them.

use memchr::memchr;
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::buffer::TrackedBuffer;
use crate::config::CodeBlockMode;
use crate::data::code_langs::{GENERIC_LANGUAGE, LANGUAGE_NAMES, NO_LANGUAGE};
use crate::diagnostics::Diagnostics;
use crate::error::NormalizeError;
use crate::normalizer::Normalizer;
use crate::pipeline::PipelineContext;

const DIAGRAM_LANGUAGE_TAG: &str = "mermaid";

/// Spoken form of a fenced block's language tag, falling back to a
/// generic phrase when the tag is absent or unrecognized.
fn spoken_language(info: &str) -> &'static str {
    let tag = info.split_whitespace().next().unwrap_or("");
    if tag.is_empty() {
        return NO_LANGUAGE;
    }
    LANGUAGE_NAMES.get(&tag.to_lowercase() as &str).copied().unwrap_or(GENERIC_LANGUAGE)
}

fn is_diagram(info: &str) -> bool {
    info.split_whitespace()
        .next()
        .is_some_and(|tag| tag.eq_ignore_ascii_case(DIAGRAM_LANGUAGE_TAG))
}

pub struct StructuralParser;

impl Normalizer for StructuralParser {
    fn name(&self) -> &'static str {
        "structural"
    }

    fn needs_apply(&self, text: &str, _ctx: &PipelineContext) -> bool {
        memchr(b'`', text.as_bytes()).is_some()
    }

    fn apply(
        &self,
        buffer: &mut TrackedBuffer,
        ctx: &PipelineContext,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), NormalizeError> {
        let text = buffer.current_text();
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);

        let mut spans: Vec<(usize, usize, String)> = Vec::new();
        let mut fence_open: Option<(usize, String)> = None;

        for (event, range) in Parser::new_ext(&text, options).into_offset_iter() {
            match event {
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                    fence_open = Some((range.start, info.to_string()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((start, info)) = fence_open.take() {
                        let end = range.end;
                        let replacement = if is_diagram(&info) {
                            ctx.config().diagram_sentinel.clone()
                        } else {
                            match ctx.config().code_block_mode {
                                CodeBlockMode::Brief => {
                                    format!("далее следует пример кода на {}", spoken_language(&info))
                                }
                                CodeBlockMode::Full => interior_of_fence(&text[start..end]),
                            }
                        };
                        spans.push((start, end, replacement));
                    }
                }
                Event::Code(code) => {
                    // Inline code: drop the backtick delimiters, keep the
                    // content for the later battery to pronounce.
                    spans.push((range.start, range.end, code.to_string()));
                }
                _ => {}
            }
        }

        buffer.sub_byte_spans(spans, diagnostics);
        Ok(())
    }
}

/// Strip the opening ` ```lang ` line and the closing ` ``` ` fence from a
/// whole fenced-block source slice, returning just its interior text
/// verbatim (full mode).
fn interior_of_fence(block: &str) -> String {
    let mut lines = block.lines();
    lines.next(); // opening fence + language tag
    let mut interior: Vec<&str> = lines.collect();
    if interior.last().is_some_and(|l| l.trim_start().starts_with("```")) {
        interior.pop();
    }
    interior.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ConfigBuilder};

    fn ctx_with(mode: CodeBlockMode) -> PipelineContext {
        PipelineContext::new(ConfigBuilder::new().code_block_mode(mode).build())
    }

    #[test]
    fn brief_mode_replaces_whole_block_with_summary() {
        let mut buffer = TrackedBuffer::new("текст\n```python\nprint('hello')\n```\nконец");
        let mut d = Diagnostics::new(false);
        StructuralParser.apply(&mut buffer, &ctx_with(CodeBlockMode::Brief), &mut d).unwrap();
        assert_eq!(
            buffer.current_text(),
            "текст\nдалее следует пример кода на пайтон\nконец"
        );
    }

    #[test]
    fn brief_mode_with_unknown_language_uses_generic_phrase() {
        let mut buffer = TrackedBuffer::new("```brainfuck\n+++\n```");
        let mut d = Diagnostics::new(false);
        StructuralParser.apply(&mut buffer, &ctx_with(CodeBlockMode::Brief), &mut d).unwrap();
        assert_eq!(
            buffer.current_text(),
            "далее следует пример кода на неизвестном языке программирования"
        );
    }

    #[test]
    fn brief_mode_with_no_language_tag() {
        let mut buffer = TrackedBuffer::new("```\nplain\n```");
        let mut d = Diagnostics::new(false);
        StructuralParser.apply(&mut buffer, &ctx_with(CodeBlockMode::Brief), &mut d).unwrap();
        assert_eq!(
            buffer.current_text(),
            "далее следует пример кода на неуказанном языке программирования"
        );
    }

    #[test]
    fn diagram_block_always_replaced_regardless_of_mode() {
        let mut buffer = TrackedBuffer::new("```mermaid\ngraph TD;\n```");
        let mut d = Diagnostics::new(false);
        StructuralParser.apply(&mut buffer, &ctx_with(CodeBlockMode::Full), &mut d).unwrap();
        assert_eq!(buffer.current_text(), Config::default().diagram_sentinel);
    }

    #[test]
    fn full_mode_leaves_interior_for_later_passes() {
        let mut buffer = TrackedBuffer::new("```python\nprint('hi')\n```");
        let mut d = Diagnostics::new(false);
        StructuralParser.apply(&mut buffer, &ctx_with(CodeBlockMode::Full), &mut d).unwrap();
        assert_eq!(buffer.current_text(), "print('hi')");
    }

    #[test]
    fn inline_code_drops_backticks() {
        let mut buffer = TrackedBuffer::new("вызови `getUser()` сейчас");
        let mut d = Diagnostics::new(false);
        StructuralParser.apply(&mut buffer, &ctx_with(CodeBlockMode::Full), &mut d).unwrap();
        assert_eq!(buffer.current_text(), "вызови getUser() сейчас");
    }

    #[test]
    fn fence_at_very_start_and_end_of_input_is_recognized() {
        let mut buffer = TrackedBuffer::new("```\ncode\n```");
        let mut d = Diagnostics::new(false);
        StructuralParser.apply(&mut buffer, &ctx_with(CodeBlockMode::Full), &mut d).unwrap();
        assert_eq!(buffer.current_text(), "code");
    }
}
