//! src/data/units.rs — size/time/display unit table.
//!
//! Each entry gives the three declension stems needed to agree with the
//! preceding number: singular (1, 21, 31...), paucal (2-4, 22-24...), and
//! plural (0, 5-20, 25-30...). Looked up case-insensitively on the unit
//! suffix as written in source text (`KB`, `Kb`, `kb` all resolve the same
//! way — callers lowercase first).

use phf::{Map, phf_map};

/// `(singular, paucal, plural)` genitive-agreement forms for one unit.
pub type UnitForms = (&'static str, &'static str, &'static str);

pub static UNITS: Map<&'static str, UnitForms> = phf_map! {
    "b" => ("байт", "байта", "байт"),
    "byte" => ("байт", "байта", "байт"),
    "bytes" => ("байт", "байта", "байт"),
    "kb" => ("килобайт", "килобайта", "килобайт"),
    "mb" => ("мегабайт", "мегабайта", "мегабайт"),
    "gb" => ("гигабайт", "гигабайта", "гигабайт"),
    "tb" => ("терабайт", "терабайта", "терабайт"),
    "pb" => ("петабайт", "петабайта", "петабайт"),
    "ms" => ("миллисекунда", "миллисекунды", "миллисекунд"),
    "sec" => ("секунда", "секунды", "секунд"),
    "s" => ("секунда", "секунды", "секунд"),
    "min" => ("минута", "минуты", "минут"),
    "h" => ("час", "часа", "часов"),
    "hr" => ("час", "часа", "часов"),
    "px" => ("пиксель", "пикселя", "пикселей"),
    "em" => ("эм", "эма", "эм"),
    "rem" => ("рэм", "рэма", "рэм"),
};
