//! src/buffer.rs — the tracked-rewrite substrate.
//!
//! Every normalizer in the battery mutates text exclusively through this
//! buffer. It is the only reason a character map can be computed at all:
//! each substitution is logged against offsets in the *original* input,
//! never against the intermediate text a later pass sees.

use regex::{Captures, Regex};

/// One logged substitution. `orig_start..orig_end` is a half-open,
/// code-point range in the **original** input; `replacement` is what the
/// current text holds in its place.
#[derive(Debug, Clone)]
struct ReplacementRecord {
    orig_start: usize,
    orig_end: usize,
    replacement: Vec<char>,
}

/// The central mutable artifact of one `process` call.
pub struct TrackedBuffer {
    original: Vec<char>,
    current: Vec<char>,
    /// Always kept sorted by `orig_start`, pairwise disjoint.
    log: Vec<ReplacementRecord>,
}

/// Derived array mapping every code point of the final rewritten text back
/// to the original range responsible for it.
#[derive(Debug, Clone, Default)]
pub struct CharMap {
    entries: Vec<(usize, usize)>,
}

impl CharMap {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<(usize, usize)> {
        self.entries.get(index).copied()
    }

    /// Union of the original ranges touched by every code point in
    /// `[out_start, out_end)`.
    pub fn original_range_for(&self, out_start: usize, out_end: usize) -> (usize, usize) {
        let end = out_end.min(self.entries.len());
        if out_start >= end {
            return (0, 0);
        }
        let mut lo = usize::MAX;
        let mut hi = 0usize;
        for &(a, b) in &self.entries[out_start..end] {
            lo = lo.min(a);
            hi = hi.max(b);
        }
        (lo, hi)
    }

    /// Expand the contiguous run of output code points sharing the same
    /// original range as `out[out_offset]`, and return that shared range.
    pub fn original_word_range_for(&self, out_offset: usize) -> (usize, usize) {
        let Some(&target) = self.entries.get(out_offset) else {
            return (0, 0);
        };
        target
    }
}

fn byte_to_char_table(text: &str) -> Vec<usize> {
    let mut table = vec![0usize; text.len() + 1];
    let mut char_idx = 0usize;
    for (byte_idx, _) in text.char_indices() {
        table[byte_idx] = char_idx;
        char_idx += 1;
    }
    table[text.len()] = char_idx;
    table
}

impl TrackedBuffer {
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        Self {
            original: chars.clone(),
            current: chars,
            log: Vec::new(),
        }
    }

    /// The current rewritten text, materialized as an owned `String`.
    /// Called once per normalizer pass, not per match.
    pub fn current_text(&self) -> String {
        self.current.iter().collect()
    }

    pub fn current_len(&self) -> usize {
        self.current.len()
    }

    pub fn original_len(&self) -> usize {
        self.original.len()
    }

    /// Translate a current-text match range `[c0, c1)` into the
    /// corresponding original range by replaying the log.
    /// Returns `None` if the range overlaps (partially or fully) the
    /// current-text span of any already-logged record.
    fn locate_original_range(&self, c0: usize, c1: usize) -> Option<(usize, usize)> {
        let mut delta: isize = 0;
        for record in &self.log {
            let orig_len = record.orig_end - record.orig_start;
            let rep_len = record.replacement.len();
            let cur_start = (record.orig_start as isize + delta) as usize;
            let cur_end = cur_start + rep_len;

            // Any overlap (partial or total) with a previously-logged
            // record's current-text span is rejected.
            if c0 < cur_end && cur_start < c1 {
                return None;
            }

            if cur_end <= c0 {
                delta += rep_len as isize - orig_len as isize;
            }
            if cur_start >= c1 {
                break;
            }
        }
        let o0 = (c0 as isize - delta) as usize;
        let o1 = (c1 as isize - delta) as usize;
        Some((o0, o1))
    }

    fn insert_record(&mut self, orig_start: usize, orig_end: usize, replacement: Vec<char>) {
        let pos = self
            .log
            .binary_search_by_key(&orig_start, |r| r.orig_start)
            .unwrap_or_else(|p| p);
        self.log.insert(
            pos,
            ReplacementRecord {
                orig_start,
                orig_end,
                replacement,
            },
        );
    }

    fn splice(&mut self, c0: usize, c1: usize, replacement: &str, o0: usize, o1: usize) {
        let rep_chars: Vec<char> = replacement.chars().collect();
        self.current.splice(c0..c1, rep_chars.iter().copied());
        self.insert_record(o0, o1, rep_chars);
    }

    /// Run one rewrite pass. `rewriter` is called once per match (on the
    /// text snapshotted before this pass) and returns `Some(replacement)`
    /// to rewrite it, or `None` to leave it untouched for a later pass to
    /// consider (e.g. an `IPv4` candidate with an out-of-range octet).
    /// Matches are applied right-to-left within the pass so earlier
    /// offsets stay stable while later ones are spliced.
    pub fn sub_regex<F>(
        &mut self,
        pattern: &Regex,
        diagnostics: &crate::diagnostics::Diagnostics,
        mut rewriter: F,
    ) -> usize
    where
        F: FnMut(&str, &Captures) -> Option<String>,
    {
        let snapshot = self.current_text();
        let byte_to_char = byte_to_char_table(&snapshot);

        let mut pending: Vec<(usize, usize, String)> = Vec::new();
        for caps in pattern.captures_iter(&snapshot) {
            let m = caps.get(0).expect("capture group 0 always matches");
            if let Some(replacement) = rewriter(&snapshot, &caps) {
                let c0 = byte_to_char[m.start()];
                let c1 = byte_to_char[m.end()];
                pending.push((c0, c1, replacement));
            }
        }
        self.apply_char_spans(pending, diagnostics)
    }

    /// Like [`TrackedBuffer::sub_regex`], but for callers that already know
    /// their spans as **byte** offsets into [`TrackedBuffer::current_text`]
    /// (e.g. the structural parser, driven by `pulldown-cmark`'s byte-offset
    /// event stream) rather than a regex match.
    pub fn sub_byte_spans(
        &mut self,
        spans: Vec<(usize, usize, String)>,
        diagnostics: &crate::diagnostics::Diagnostics,
    ) -> usize {
        let snapshot = self.current_text();
        let byte_to_char = byte_to_char_table(&snapshot);
        let char_spans = spans
            .into_iter()
            .map(|(b0, b1, rep)| (byte_to_char[b0], byte_to_char[b1], rep))
            .collect();
        self.apply_char_spans(char_spans, diagnostics)
    }

    fn apply_char_spans(
        &mut self,
        mut pending: Vec<(usize, usize, String)>,
        diagnostics: &crate::diagnostics::Diagnostics,
    ) -> usize {
        pending.sort_by(|a, b| b.0.cmp(&a.0));

        let mut applied = 0;
        for (c0, c1, replacement) in pending {
            match self.locate_original_range(c0, c1) {
                Some((o0, o1)) => {
                    self.splice(c0, c1, &replacement, o0, o1);
                    applied += 1;
                }
                None => diagnostics.record_overlap_dropped(),
            }
        }
        applied
    }

    /// Replace up to `max_count` (or all, if `None`) non-overlapping
    /// occurrences of `old` with `new`. A thin convenience over
    /// [`TrackedBuffer::sub_regex`] for fixed-string substitutions that
    /// don't warrant compiling a `Regex`.
    pub fn replace_literal(
        &mut self,
        old: &str,
        new: &str,
        max_count: Option<usize>,
        diagnostics: &crate::diagnostics::Diagnostics,
    ) -> usize {
        if old.is_empty() {
            return 0;
        }
        let snapshot = self.current_text();
        let byte_to_char = byte_to_char_table(&snapshot);

        let mut matches: Vec<(usize, usize, String)> = snapshot
            .match_indices(old)
            .map(|(b, s)| (byte_to_char[b], byte_to_char[b + s.len()], new.to_string()))
            .collect();
        if let Some(max) = max_count {
            matches.truncate(max);
        }
        self.apply_char_spans(matches, diagnostics)
    }

    /// Consume the buffer, producing the final text and its character map.
    pub fn build_mapping(self) -> (String, CharMap) {
        let final_text: String = self.current.iter().collect();
        let mut entries = Vec::with_capacity(self.current.len());
        let mut orig_pos = 0usize;

        for record in &self.log {
            while orig_pos < record.orig_start {
                entries.push((orig_pos, orig_pos + 1));
                orig_pos += 1;
            }
            for _ in 0..record.replacement.len() {
                entries.push((record.orig_start, record.orig_end));
            }
            orig_pos = record.orig_end;
        }
        while orig_pos < self.original.len() {
            entries.push((orig_pos, orig_pos + 1));
            orig_pos += 1;
        }

        (final_text, CharMap { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostics;
    use regex::Regex;

    fn diag() -> Diagnostics {
        Diagnostics::new(false)
    }

    #[test]
    fn untouched_text_maps_identity() {
        let buf = TrackedBuffer::new("привет мир");
        let (text, map) = buf.build_mapping();
        assert_eq!(text, "привет мир");
        assert_eq!(map.len(), text.chars().count());
        for (i, entry) in (0..map.len()).zip((0..map.len()).map(|i| map.get(i).unwrap())) {
            assert_eq!(entry, (i, i + 1));
        }
    }

    #[test]
    fn single_substitution_maps_every_output_char_to_the_source_span() {
        let mut buf = TrackedBuffer::new("Test 123 API");
        let d = diag();
        let re = Regex::new(r"API").unwrap();
        buf.sub_regex(&re, &d, |_, _| Some("эй пи ай".to_string()));
        let (text, map) = buf.build_mapping();
        assert_eq!(text, "Test 123 эй пи ай");
        let api_start = text.find("эй пи ай").unwrap();
        let api_start_chars = text[..api_start].chars().count();
        for i in api_start_chars..map.len() {
            assert_eq!(map.get(i).unwrap(), (9, 12));
        }
    }

    #[test]
    fn right_to_left_application_keeps_earlier_offsets_stable() {
        let mut buf = TrackedBuffer::new("aa bb aa");
        let d = diag();
        let re = Regex::new(r"aa").unwrap();
        let mut calls = 0;
        buf.sub_regex(&re, &d, |_, _| {
            calls += 1;
            Some(format!("X{calls}"))
        });
        let text = buf.current_text();
        assert!(text.starts_with("X1") || text.starts_with("X2"));
        assert_eq!(text.matches("bb").count(), 1);
    }

    #[test]
    fn overlapping_rewrite_is_dropped_and_counted() {
        let mut buf = TrackedBuffer::new("hello");
        let d = diag();
        let re_outer = Regex::new(r"hello").unwrap();
        buf.sub_regex(&re_outer, &d, |_, _| Some("HI".to_string()));

        // Re-running a pattern that would cross the replaced span must be
        // rejected, not cause a panic or corrupt the log.
        let re_inner = Regex::new(r"HI").unwrap();
        let applied = buf.sub_regex(&re_inner, &d, |_, _| Some("nope".to_string()));
        assert_eq!(applied, 0);
        assert_eq!(d.overlap_dropped(), 1);
        assert_eq!(buf.current_text(), "HI");
    }

    #[test]
    fn replace_literal_respects_max_count() {
        let mut buf = TrackedBuffer::new("a a a a");
        let d = diag();
        let n = buf.replace_literal("a", "b", Some(2), &d);
        assert_eq!(n, 2);
        assert_eq!(buf.current_text(), "b b a a");
    }

    #[test]
    fn empty_input_round_trips_to_empty_map() {
        let buf = TrackedBuffer::new("");
        let (text, map) = buf.build_mapping();
        assert!(text.is_empty());
        assert!(map.is_empty());
    }
}
