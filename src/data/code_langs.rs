//! src/data/code_langs.rs — spoken form of a fenced-code-block language tag.

use phf::Map;

pub static LANGUAGE_NAMES: Map<&'static str, &'static str> = phf::phf_map! {
    "rust" => "раст",
    "python" => "пайтон",
    "py" => "пайтон",
    "javascript" => "джаваскрипт",
    "js" => "джаваскрипт",
    "typescript" => "тайпскрипт",
    "ts" => "тайпскрипт",
    "go" => "го",
    "golang" => "го",
    "java" => "джава",
    "c" => "си",
    "cpp" => "си плюс плюс",
    "c++" => "си плюс плюс",
    "csharp" => "си шарп",
    "c#" => "си шарп",
    "bash" => "баш",
    "shell" => "шелл",
    "sh" => "шелл",
    "sql" => "эс кью эль",
    "html" => "эйч ти эм эль",
    "css" => "си эс эс",
    "json" => "джейсон",
    "yaml" => "ямл",
    "toml" => "томл",
    "ruby" => "руби",
    "php" => "пи эйч пи",
    "kotlin" => "котлин",
    "swift" => "свифт",
};

/// Used when the tag is present but not in [`LANGUAGE_NAMES`].
pub const GENERIC_LANGUAGE: &str = "неизвестном языке программирования";

/// Used when the opening fence carries no language tag at all.
pub const NO_LANGUAGE: &str = "неуказанном языке программирования";
