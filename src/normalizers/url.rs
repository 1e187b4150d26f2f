//! src/normalizers/url.rs — URL, email, IPv4, and file-path normalizers.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::buffer::TrackedBuffer;
use crate::config::{IpReadMode, UrlDetailLevel};
use crate::data::abbreviations::LETTER_SPELLING;
use crate::data::extensions::EXTENSIONS;
use crate::data::protocols::SCHEMES;
use crate::data::tld::TLDS;
use crate::diagnostics::Diagnostics;
use crate::error::NormalizeError;
use crate::normalizer::Normalizer;
use crate::pipeline::PipelineContext;
use crate::ru::cardinals::cardinal;

/// Spell a word letter-by-letter using the abbreviation speech table —
/// shared by the TLD/extension/scheme fallbacks in this module.
fn spell_letters(word: &str) -> String {
    word.chars()
        .filter_map(|c| LETTER_SPELLING.get(&c.to_ascii_lowercase()).copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Speak a dot-joined host, translating the final segment (the TLD) via
/// the TLD table or letter-by-letter if unknown.
fn speak_host(host: &str) -> String {
    let segments: Vec<&str> = host.split('.').collect();
    let mut spoken = Vec::new();
    for (i, seg) in segments.iter().enumerate() {
        if i == segments.len() - 1 {
            let lower = seg.to_lowercase();
            spoken.push(TLDS.get(lower.as_str()).map(|s| s.to_string()).unwrap_or_else(|| spell_letters(seg)));
        } else {
            spoken.push(seg.to_string());
        }
    }
    spoken.join(" точка ")
}

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(https?|ftp|wss?|ssh)://([A-Za-z0-9.-]+)(?::(\d+))?(/[^\s?#]*)?(\?[^\s#]*)?(#\S*)?").unwrap()
});

pub struct UrlNormalizer;

impl Normalizer for UrlNormalizer {
    fn name(&self) -> &'static str {
        "url"
    }

    fn needs_apply(&self, text: &str, _ctx: &PipelineContext) -> bool {
        URL_RE.is_match(text)
    }

    fn apply(
        &self,
        buffer: &mut TrackedBuffer,
        ctx: &PipelineContext,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), NormalizeError> {
        let diag: &Diagnostics = diagnostics;
        let detail = ctx.config().url_detail_level;
        buffer.sub_regex(&URL_RE, diag, |_, caps| {
            let scheme = caps.get(1).unwrap().as_str().to_lowercase();
            let host = caps.get(2).unwrap().as_str();

            let spoken_scheme = SCHEMES.get(scheme.as_str()).map(|s| s.to_string()).unwrap_or_else(|| spell_letters(&scheme));
            let mut out = format!("{spoken_scheme} двоеточие слэш слэш");

            if matches!(detail, UrlDetailLevel::Minimal) {
                let first_segment = host.split('.').next().unwrap_or(host);
                let segments: Vec<&str> = host.split('.').collect();
                let tld = segments.last().copied().unwrap_or("");
                let spoken_tld = TLDS.get(tld.to_lowercase().as_str()).map(|s| s.to_string()).unwrap_or_else(|| spell_letters(tld));
                return Some(format!("{out} {first_segment} точка {spoken_tld}"));
            }

            out.push(' ');
            out.push_str(&speak_host(host));

            if matches!(detail, UrlDetailLevel::DomainOnly) {
                return Some(out);
            }

            if let Some(port) = caps.get(3) {
                if let Ok(n) = port.as_str().parse::<u64>() {
                    out.push_str(&format!(" двоеточие {}", cardinal(n)));
                }
            }
            if let Some(path) = caps.get(4) {
                for segment in path.as_str().split('/').filter(|s| !s.is_empty()) {
                    out.push_str(&format!(" слэш {segment}"));
                }
            }
            if let Some(query) = caps.get(5) {
                let spoken: String = query
                    .as_str()
                    .chars()
                    .map(|c| match c {
                        '?' => " вопрос ".to_string(),
                        '&' => " амперсанд ".to_string(),
                        '=' => " равно ".to_string(),
                        other => other.to_string(),
                    })
                    .collect();
                out.push(' ');
                out.push_str(spoken.trim());
            }
            if let Some(fragment) = caps.get(6) {
                out.push_str(" решётка ");
                out.push_str(fragment.as_str().trim_start_matches('#'));
            }

            Some(out)
        });
        Ok(())
    }
}

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

pub struct EmailNormalizer;

impl Normalizer for EmailNormalizer {
    fn name(&self) -> &'static str {
        "email"
    }

    fn needs_apply(&self, text: &str, _ctx: &PipelineContext) -> bool {
        EMAIL_RE.is_match(text)
    }

    fn apply(
        &self,
        buffer: &mut TrackedBuffer,
        _ctx: &PipelineContext,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), NormalizeError> {
        let diag: &Diagnostics = diagnostics;
        buffer.sub_regex(&EMAIL_RE, diag, |_, caps| {
            let whole = caps.get(0).unwrap().as_str();
            let (local, domain) = whole.split_once('@')?;
            Some(format!("{local} собака {}", speak_host(domain)))
        });
        Ok(())
    }
}

static IPV4_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})\b").unwrap());

pub struct Ipv4Normalizer;

impl Normalizer for Ipv4Normalizer {
    fn name(&self) -> &'static str {
        "ipv4"
    }

    fn needs_apply(&self, text: &str, _ctx: &PipelineContext) -> bool {
        IPV4_RE.is_match(text)
    }

    fn apply(
        &self,
        buffer: &mut TrackedBuffer,
        ctx: &PipelineContext,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), NormalizeError> {
        let diag: &Diagnostics = diagnostics;
        let read_mode = ctx.config().ip_read_mode;
        buffer.sub_regex(&IPV4_RE, diag, |_, caps| {
            let mut octets = Vec::with_capacity(4);
            for i in 1..=4 {
                let n: u64 = caps[i].parse().ok()?;
                if n > 255 {
                    // Octet >255 is not a valid IPv4 address; fall
                    // through to Float+Integer.
                    diag.record_malformed_number();
                    return None;
                }
                octets.push(n);
            }
            let spoken: Vec<String> = octets
                .iter()
                .map(|&n| match read_mode {
                    IpReadMode::Numbers => cardinal(n),
                    IpReadMode::Digits => n
                        .to_string()
                        .chars()
                        .map(|c| crate::data::abbreviations::DIGIT_WORDS.get(&c).copied().unwrap_or(""))
                        .collect::<Vec<_>>()
                        .join(" "),
                })
                .collect();
            Some(spoken.join(" точка "))
        });
        Ok(())
    }
}

static FILE_PATH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:[A-Za-z]:[\\/]|~/|\.\./|\./|/)[^\s]*").unwrap()
});

pub struct FilePathNormalizer;

impl Normalizer for FilePathNormalizer {
    fn name(&self) -> &'static str {
        "file_path"
    }

    fn needs_apply(&self, text: &str, _ctx: &PipelineContext) -> bool {
        FILE_PATH_RE.is_match(text)
    }

    fn apply(
        &self,
        buffer: &mut TrackedBuffer,
        _ctx: &PipelineContext,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), NormalizeError> {
        let diag: &Diagnostics = diagnostics;
        buffer.sub_regex(&FILE_PATH_RE, diag, |_, caps| {
            let whole = caps.get(0).unwrap().as_str();
            Some(speak_path(whole))
        });
        Ok(())
    }
}

fn speak_path(path: &str) -> String {
    let mut out = String::new();
    let chars: Vec<char> = path.chars().collect();
    let mut i = 0;
    let mut segment_start = true;
    while i < chars.len() {
        let c = chars[i];
        match c {
            '/' => {
                out.push_str(" слэш ");
                i += 1;
                segment_start = true;
                continue;
            }
            '\\' => {
                out.push_str(" бэкслэш ");
                i += 1;
                segment_start = true;
                continue;
            }
            '~' => {
                out.push_str(" тильда ");
                i += 1;
                segment_start = false;
                continue;
            }
            '.' if segment_start => {
                if chars.get(i + 1) == Some(&'.') {
                    out.push_str(" две точки ");
                    i += 2;
                } else {
                    out.push_str(" точка ");
                    i += 1;
                }
                segment_start = false;
                continue;
            }
            _ => {}
        }
        // Collect the rest of this path segment up to the next separator.
        let start = i;
        while i < chars.len() && chars[i] != '/' && chars[i] != '\\' {
            i += 1;
        }
        let segment: String = chars[start..i].iter().collect();
        let is_last = i == chars.len();
        if is_last {
            if let Some((stem, ext)) = segment.rsplit_once('.') {
                let spoken_ext = EXTENSIONS
                    .get(ext.to_lowercase().as_str())
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| spell_letters(ext));
                out.push_str(stem);
                out.push_str(" точка ");
                out.push_str(&spoken_ext);
            } else {
                out.push_str(&segment);
            }
        } else {
            out.push_str(&segment);
        }
        segment_start = false;
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn ctx() -> PipelineContext {
        PipelineContext::new(Config::default())
    }

    #[test]
    fn email_reads_local_at_domain() {
        let mut buffer = TrackedBuffer::new("user@example.com");
        let mut d = Diagnostics::new(false);
        EmailNormalizer.apply(&mut buffer, &ctx(), &mut d).unwrap();
        assert_eq!(buffer.current_text(), "user собака example точка ком");
    }

    #[test]
    fn ipv4_octets_joined_by_tochka() {
        let mut buffer = TrackedBuffer::new("192.168.1.1");
        let mut d = Diagnostics::new(false);
        Ipv4Normalizer.apply(&mut buffer, &ctx(), &mut d).unwrap();
        assert_eq!(
            buffer.current_text(),
            "сто девяносто два точка сто шестьдесят восемь точка один точка один"
        );
    }

    #[test]
    fn ipv4_out_of_range_octet_is_left_untouched() {
        let mut buffer = TrackedBuffer::new("999.1.1.1");
        let mut d = Diagnostics::new(false);
        Ipv4Normalizer.apply(&mut buffer, &ctx(), &mut d).unwrap();
        assert_eq!(buffer.current_text(), "999.1.1.1");
        assert_eq!(d.malformed_number(), 1);
    }
}
