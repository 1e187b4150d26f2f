//! src/normalizers/number.rs — the number engine.
//!
//! One `Normalizer` per token kind, grouped in a single file because they
//! all lean on the same `ru::` grammar helpers and share the declension
//! rule. Order between them is fixed by [`crate::pipeline::Pipeline`], not
//! by this module.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::buffer::TrackedBuffer;
use crate::data::units::UNITS;
use crate::diagnostics::Diagnostics;
use crate::error::NormalizeError;
use crate::normalizer::Normalizer;
use crate::pipeline::PipelineContext;
use crate::ru::cardinals::cardinal;
use crate::ru::declension::agree;
use crate::ru::months::genitive_month;
use crate::ru::ordinals::feminine_ordinal;

const DIGIT_WORDS: [&str; 10] = [
    "ноль", "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
];

fn spell_digits(digits: &str) -> String {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| DIGIT_WORDS[d as usize])
        .collect::<Vec<_>>()
        .join(" ")
}

/// **Version**. A leading `v`/`V` always marks a
/// version; without one, exactly three dot-separated components with no
/// leading zero are required — this is the line drawn to keep a bare
/// two-component decimal like `3.14` as a `Float`
/// while still catching `20.10.0`. A component with a
/// leading zero (`01`) is treated as a date fragment, not a version one.
/// Four bare dot-separated components is deliberately excluded too: that
/// shape belongs to a rejected IPv4 address, which must fall through to
/// Float+Integer, not be
/// swallowed here.
static VERSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:[vV]\d+(?:\.\d+)+|(?:0|[1-9]\d*)(?:\.(?:0|[1-9]\d*)){2,})\b").unwrap()
});

pub struct VersionNormalizer;

impl Normalizer for VersionNormalizer {
    fn name(&self) -> &'static str {
        "version"
    }

    fn needs_apply(&self, text: &str, _ctx: &PipelineContext) -> bool {
        VERSION_RE.is_match(text)
    }

    fn apply(
        &self,
        buffer: &mut TrackedBuffer,
        _ctx: &PipelineContext,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), NormalizeError> {
        let diag: &Diagnostics = diagnostics;
        buffer.sub_regex(&VERSION_RE, diag, |_, caps| {
            let raw = caps.get(0).unwrap().as_str();
            let has_v_prefix = raw.starts_with(['v', 'V']);
            let stripped = raw.trim_start_matches(['v', 'V']);
            let parts: Vec<&str> = stripped.split('.').collect();
            if !has_v_prefix && parts.len() != 3 {
                // Four or more bare dot-separated components is the shape
                // of a rejected IPv4 address (an octet >255), which must
                // fall through to Float+Integer instead of being read as
                // a version number.
                return None;
            }
            let mut words = Vec::new();
            for part in parts {
                match part.parse::<u64>() {
                    Ok(n) => words.push(cardinal(n)),
                    Err(_) => {
                        diag.record_malformed_number();
                        return None;
                    }
                }
            }
            Some(words.join(" точка "))
        });
        Ok(())
    }
}

/// **SizeUnit**.
static SIZE_UNIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d+(?:[.,]\d+)?)\s?(kb|mb|gb|tb|pb|ms|sec|min|hr|px|em|rem|bytes|byte|[bhs])\b").unwrap());

pub struct SizeUnitNormalizer;

impl Normalizer for SizeUnitNormalizer {
    fn name(&self) -> &'static str {
        "size_unit"
    }

    fn needs_apply(&self, text: &str, _ctx: &PipelineContext) -> bool {
        SIZE_UNIT_RE.is_match(text)
    }

    fn apply(
        &self,
        buffer: &mut TrackedBuffer,
        _ctx: &PipelineContext,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), NormalizeError> {
        let diag: &Diagnostics = diagnostics;
        buffer.sub_regex(&SIZE_UNIT_RE, diag, |_, caps| {
            let number = caps.get(1).unwrap().as_str();
            let unit = caps.get(2).unwrap().as_str().to_lowercase();
            let Some(&(singular, paucal, plural)) = UNITS.get(unit.as_str()) else {
                diag.record_unknown_unit();
                return None;
            };
            let Ok(int_part) = number.split(['.', ',']).next().unwrap_or(number).parse::<u64>() else {
                diag.record_malformed_number();
                return None;
            };
            let number_words = spell_number_literal(number);
            Some(format!("{number_words} {}", agree(int_part, (singular, paucal, plural))))
        });
        Ok(())
    }
}

/// Reads `digits` or `digits[.,]digits` the way `Integer`/`Float` would,
/// without going through those normalizers (used by `SizeUnit`/`Percentage`
/// so they produce one finished phrase per match).
fn spell_number_literal(literal: &str) -> String {
    if let Some((int_part, frac_part)) = literal.split_once(['.', ',']) {
        let sep = if literal.contains(',') { "запятая" } else { "точка" };
        let int_words = int_part.parse::<u64>().map(cardinal).unwrap_or_default();
        format!("{int_words} {sep} {}", spell_digits(frac_part))
    } else {
        literal.parse::<u64>().map(cardinal).unwrap_or_default()
    }
}

/// **Percentage**.
static PERCENTAGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d+(?:[.,]\d+)?)%").unwrap());

pub struct PercentageNormalizer;

impl Normalizer for PercentageNormalizer {
    fn name(&self) -> &'static str {
        "percentage"
    }

    fn needs_apply(&self, text: &str, _ctx: &PipelineContext) -> bool {
        PERCENTAGE_RE.is_match(text)
    }

    fn apply(
        &self,
        buffer: &mut TrackedBuffer,
        _ctx: &PipelineContext,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), NormalizeError> {
        let diag: &Diagnostics = diagnostics;
        buffer.sub_regex(&PERCENTAGE_RE, diag, |_, caps| {
            let literal = caps.get(1).unwrap().as_str();
            let has_fraction = literal.contains(['.', ',']);
            let int_part: u64 = literal
                .split(['.', ','])
                .next()
                .unwrap_or(literal)
                .parse()
                .unwrap_or(0);
            let number_words = spell_number_literal(literal);
            // Decimal percentages take the genitive singular of "процент"
            // by Russian convention, regardless of the integer part's own
            // agreement class.
            let word = if has_fraction {
                "процента"
            } else {
                agree(int_part, ("процент", "процента", "процентов"))
            };
            Some(format!("{number_words} {word}"))
        });
        Ok(())
    }
}

/// **Date**. Must run before `Range` — an ISO date's dashes would
/// otherwise be mistaken for a `Range` token.
static DATE_ISO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").unwrap());
static DATE_EU_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{1,2})\.(\d{1,2})\.(\d{4})\b").unwrap());

pub struct DateNormalizer;

impl DateNormalizer {
    fn render(diag: &Diagnostics, day: u32, month: u32, year: u32) -> Option<String> {
        let Some(day_word) = feminine_ordinal(day) else {
            diag.record_malformed_number();
            return None;
        };
        let Some(month_word) = genitive_month(month) else {
            diag.record_malformed_number();
            return None;
        };
        Some(format!("{day_word} {month_word} {} года", cardinal(year as u64)))
    }
}

impl Normalizer for DateNormalizer {
    fn name(&self) -> &'static str {
        "date"
    }

    fn needs_apply(&self, text: &str, _ctx: &PipelineContext) -> bool {
        DATE_ISO_RE.is_match(text) || DATE_EU_RE.is_match(text)
    }

    fn apply(
        &self,
        buffer: &mut TrackedBuffer,
        _ctx: &PipelineContext,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), NormalizeError> {
        let diag: &Diagnostics = diagnostics;
        buffer.sub_regex(&DATE_ISO_RE, diag, |_, caps| {
            let year: u32 = caps[1].parse().ok()?;
            let month: u32 = caps[2].parse().ok()?;
            let day: u32 = caps[3].parse().ok()?;
            Self::render(diag, day, month, year)
        });
        let diag: &Diagnostics = diagnostics;
        buffer.sub_regex(&DATE_EU_RE, diag, |_, caps| {
            let day: u32 = caps[1].parse().ok()?;
            let month: u32 = caps[2].parse().ok()?;
            let year: u32 = caps[3].parse().ok()?;
            Self::render(diag, day, month, year)
        });
        Ok(())
    }
}

/// **Range**. "Simple implementation": both bounds
/// are read as plain cardinals.
static RANGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d+)-(\d+)\b").unwrap());

pub struct RangeNormalizer;

impl Normalizer for RangeNormalizer {
    fn name(&self) -> &'static str {
        "range"
    }

    fn needs_apply(&self, text: &str, _ctx: &PipelineContext) -> bool {
        RANGE_RE.is_match(text)
    }

    fn apply(
        &self,
        buffer: &mut TrackedBuffer,
        _ctx: &PipelineContext,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), NormalizeError> {
        let diag: &Diagnostics = diagnostics;
        buffer.sub_regex(&RANGE_RE, diag, |_, caps| {
            let x: u64 = caps[1].parse().ok()?;
            let y: u64 = caps[2].parse().ok()?;
            Some(format!("от {} до {}", cardinal(x), cardinal(y)))
        });
        Ok(())
    }
}

/// **Time**.
static TIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([01]?\d|2[0-3]):([0-5]\d)\b").unwrap());

pub struct TimeNormalizer;

impl Normalizer for TimeNormalizer {
    fn name(&self) -> &'static str {
        "time"
    }

    fn needs_apply(&self, text: &str, _ctx: &PipelineContext) -> bool {
        TIME_RE.is_match(text)
    }

    fn apply(
        &self,
        buffer: &mut TrackedBuffer,
        _ctx: &PipelineContext,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), NormalizeError> {
        let diag: &Diagnostics = diagnostics;
        buffer.sub_regex(&TIME_RE, diag, |_, caps| {
            let hours: u64 = caps[1].parse().ok()?;
            let minutes: u64 = caps[2].parse().ok()?;
            let hour_word = agree(hours, ("час", "часа", "часов"));
            let minute_word = agree(minutes, ("минута", "минуты", "минут"));
            Some(format!(
                "{} {hour_word} {} {minute_word}",
                cardinal(hours),
                cardinal(minutes)
            ))
        });
        Ok(())
    }
}

/// **Float**. Runs after every normalizer that
/// claims a more specific dotted/percent/unit shape, so whatever reaches
/// here is a bare `digits[.,]digits` literal.
static FLOAT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+([.,])\d+\b").unwrap());

pub struct FloatNormalizer;

impl Normalizer for FloatNormalizer {
    fn name(&self) -> &'static str {
        "float"
    }

    fn needs_apply(&self, text: &str, _ctx: &PipelineContext) -> bool {
        FLOAT_RE.is_match(text)
    }

    fn apply(
        &self,
        buffer: &mut TrackedBuffer,
        _ctx: &PipelineContext,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), NormalizeError> {
        let diag: &Diagnostics = diagnostics;
        buffer.sub_regex(&FLOAT_RE, diag, |_, caps| {
            let whole = caps.get(0).unwrap().as_str();
            Some(spell_number_literal(whole))
        });
        Ok(())
    }
}

/// **Integer**. Runs last among the number kinds —
/// whatever digit run survives every more specific pass is a plain cardinal.
static INTEGER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\b").unwrap());

pub struct IntegerNormalizer;

impl Normalizer for IntegerNormalizer {
    fn name(&self) -> &'static str {
        "integer"
    }

    fn needs_apply(&self, text: &str, _ctx: &PipelineContext) -> bool {
        INTEGER_RE.is_match(text)
    }

    fn apply(
        &self,
        buffer: &mut TrackedBuffer,
        _ctx: &PipelineContext,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), NormalizeError> {
        let diag: &Diagnostics = diagnostics;
        buffer.sub_regex(&INTEGER_RE, diag, |_, caps| match caps[0].parse::<u64>() {
            Ok(n) => Some(cardinal(n)),
            Err(_) => {
                diag.record_malformed_number();
                None
            }
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

    fn diag() -> Diagnostics {
        Diagnostics::new(false)
    }

    #[test]
    fn version_reads_each_component_as_cardinal() {
        let mut buffer = TrackedBuffer::new("Версия должна быть >= 20.10.0");
        let mut d = diag();
        VersionNormalizer.apply(&mut buffer, &ctx(), &mut d).unwrap();
        assert_eq!(buffer.current_text(), "Версия должна быть >= двадцать точка десять точка ноль");
    }

    #[test]
    fn bare_two_component_decimal_is_left_for_float() {
        let mut buffer = TrackedBuffer::new("3.14");
        let mut d = diag();
        VersionNormalizer.apply(&mut buffer, &ctx(), &mut d).unwrap();
        assert_eq!(buffer.current_text(), "3.14");
    }

    #[test]
    fn float_spells_fraction_digit_by_digit() {
        let mut buffer = TrackedBuffer::new("3.14");
        let mut d = diag();
        FloatNormalizer.apply(&mut buffer, &ctx(), &mut d).unwrap();
        assert_eq!(buffer.current_text(), "три точка один четыре");
    }

    #[test]
    fn percentage_declension_boundaries() {
        let cases = [
            ("11%", "одиннадцать процентов"),
            ("12%", "двенадцать процентов"),
            ("21%", "двадцать один процент"),
            ("22%", "двадцать два процента"),
            ("50%", "пятьдесят процентов"),
        ];
        for (input, expected) in cases {
            let mut buffer = TrackedBuffer::new(input);
            let mut d = diag();
            PercentageNormalizer.apply(&mut buffer, &ctx(), &mut d).unwrap();
            assert_eq!(buffer.current_text(), expected, "input={input}");
        }
    }

    #[test]
    fn size_unit_declines_by_count() {
        let mut buffer = TrackedBuffer::new("100MB");
        let mut d = diag();
        SizeUnitNormalizer.apply(&mut buffer, &ctx(), &mut d).unwrap();
        assert_eq!(buffer.current_text(), "сто мегабайт");
    }

    #[test]
    fn iso_date_renders_full_phrase() {
        let mut buffer = TrackedBuffer::new("2024-01-15");
        let mut d = diag();
        DateNormalizer.apply(&mut buffer, &ctx(), &mut d).unwrap();
        assert_eq!(buffer.current_text(), "пятнадцатая января две тысячи двадцать четыре года");
    }

    #[test]
    fn range_reads_from_to() {
        let mut buffer = TrackedBuffer::new("5-10");
        let mut d = diag();
        RangeNormalizer.apply(&mut buffer, &ctx(), &mut d).unwrap();
        assert_eq!(buffer.current_text(), "от пять до десять");
    }

    #[test]
    fn time_declines_hours_and_minutes() {
        let mut buffer = TrackedBuffer::new("14:05");
        let mut d = diag();
        TimeNormalizer.apply(&mut buffer, &ctx(), &mut d).unwrap();
        assert_eq!(buffer.current_text(), "четырнадцать часов пять минут");
    }
}
