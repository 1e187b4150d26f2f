//! src/data/tld.rs — top-level domain spoken forms.
//! A TLD not in this table is spoken letter-by-letter instead.

use phf::Map;

pub static TLDS: Map<&'static str, &'static str> = phf::phf_map! {
    "com" => "ком",
    "ru" => "ру",
    "org" => "орг",
    "net" => "нет",
    "io" => "ай оу",
    "dev" => "дев",
    "app" => "апп",
    "ai" => "эй ай",
    "gov" => "гав",
    "edu" => "эду",
    "info" => "инфо",
    "biz" => "биз",
};
