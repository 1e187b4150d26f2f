//! src/data/extensions.rs — file-extension spoken forms.
//! An extension not in this table is spoken letter-by-letter instead.

use phf::Map;

pub static EXTENSIONS: Map<&'static str, &'static str> = phf::phf_map! {
    "rs" => "рас",
    "py" => "пай",
    "js" => "джей эс",
    "ts" => "ти эс",
    "go" => "гоу",
    "md" => "эм ди",
    "txt" => "текст",
    "log" => "лог",
    "toml" => "томл",
    "yaml" => "ямл",
    "yml" => "ямл",
    "json" => "джейсон",
    "xml" => "экс эм эль",
    "html" => "эйч ти эм эль",
    "css" => "си эс эс",
};
