//! src/data/abbreviations.rs — two-level abbreviation lookup.
//!
//! First level: acronyms pronounced as a single word. Second level: the
//! 26-letter Latin speech table, used letter-by-letter for anything the
//! first level doesn't recognize. Digits embedded in an abbreviation are
//! spelled out individually via [`DIGIT_WORDS`].

use phf::{Map, phf_map};

/// Acronyms pronounced as a single Russian word, looked up
/// case-insensitively (callers lowercase the key first).
pub static ACRONYMS_AS_WORD: Map<&'static str, &'static str> = phf_map! {
    "json" => "джейсон",
    "rest" => "рест",
    "html" => "эйч ти эм эль",
    "css" => "си эс эс",
    "sql" => "эс кью эль",
    "http" => "эйч ти ти пи",
    "https" => "эйч ти ти пи эс",
    "xml" => "экс эм эль",
    "yaml" => "ямл",
    "toml" => "томл",
    "url" => "ю ар эл",
    "uri" => "ю ар ай",
    "api" => "эй пи ай",
    "sdk" => "эс ди кей",
    "cli" => "си эл ай",
    "gui" => "гуи",
    "orm" => "о эр эм",
    "crud" => "круд",
    "jwt" => "джейвоти",
    "ci" => "си ай",
    "cd" => "си ди",
    "os" => "о эс",
    "id" => "ай ди",
    "ip" => "ай пи",
    "tcp" => "ти си пи",
    "udp" => "ю ди пи",
    "dns" => "ди эн эс",
    "ssh" => "эс эс эйч",
    "ftp" => "эф ти пи",
    "vpn" => "ви пи эн",
    "ram" => "рам",
    "rom" => "ром",
    "cpu" => "си пи ю",
    "gpu" => "джи пи ю",
    "npm" => "эн пи эм",
    "git" => "гит",
    "ide" => "ай ди и",
    "ai" => "эй ай",
    "ml" => "эм эл",
    "nlp" => "эн эл пи",
    "qa" => "кью эй",
    "ux" => "ю икс",
    "ui" => "ю ай",
};

/// The 26-letter Latin-to-Russian speech table.
pub static LETTER_SPELLING: Map<char, &'static str> = phf_map! {
    'a' => "эй",
    'b' => "би",
    'c' => "си",
    'd' => "ди",
    'e' => "и",
    'f' => "эф",
    'g' => "джи",
    'h' => "эйч",
    'i' => "ай",
    'j' => "джей",
    'k' => "кей",
    'l' => "эл",
    'm' => "эм",
    'n' => "эн",
    'o' => "оу",
    'p' => "пи",
    'q' => "кью",
    'r' => "ар",
    's' => "эс",
    't' => "ти",
    'u' => "ю",
    'v' => "ви",
    'w' => "дабл ю",
    'x' => "икс",
    'y' => "уай",
    'z' => "зед",
};

/// Digits embedded in an abbreviation are pronounced individually.
pub static DIGIT_WORDS: Map<char, &'static str> = phf_map! {
    '0' => "ноль",
    '1' => "один",
    '2' => "два",
    '3' => "три",
    '4' => "четыре",
    '5' => "пять",
    '6' => "шесть",
    '7' => "семь",
    '8' => "восемь",
    '9' => "девять",
};
