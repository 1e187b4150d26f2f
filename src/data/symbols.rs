//! src/data/symbols.rs — the symbol/operator table.
//!
//! Three tables, tried longest-match-first in the declared order:
//! multi-character operators, then single-character symbols, then
//! bracket variants. All three are `phf::Map`s, built at compile time.

use phf::{Map, phf_map};

/// Multi-character operator strings, longest match wins (checked before
/// any single-character entry).
pub static OPERATORS: Map<&'static str, &'static str> = phf_map! {
    "->" => "стрелка",
    "=>" => "толстая стрелка",
    ">=" => "больше или равно",
    "<=" => "меньше или равно",
    "!=" => "не равно",
    "==" => "равно равно",
    "&&" => "логическое и",
    "||" => "логическое или",
    "::" => "два двоеточия",
    "..." => "троеточие",
    "++" => "плюс плюс",
    "--" => "минус минус",
    "+=" => "плюс равно",
    "-=" => "минус равно",
    "*=" => "умножить равно",
    "/=" => "разделить равно",
    "**" => "возведение в степень",
};

/// Single-character symbols with semantic weight.
pub static SYMBOLS: Map<&'static str, &'static str> = phf_map! {
    "@" => "собака",
    "#" => "решётка",
    "&" => "амперсанд",
    "$" => "доллар",
    "*" => "звёздочка",
    "/" => "слэш",
    "\\" => "бэкслэш",
    "~" => "тильда",
    "%" => "процент",
    "=" => "равно",
    "+" => "плюс",
    "-" => "минус",
    "_" => "подчёркивание",
    "|" => "вертикальная черта",
    "^" => "циркумфлекс",
    "!" => "восклицательный знак",
    "?" => "вопросительный знак",
    ":" => "двоеточие",
    ";" => "точка с запятой",
};

/// Bracket open/close variants, spoken by side.
pub static BRACKETS: Map<&'static str, &'static str> = phf_map! {
    "(" => "открывающая скобка",
    ")" => "закрывающая скобка",
    "{" => "открывающая фигурная скобка",
    "}" => "закрывающая фигурная скобка",
    "[" => "открывающая квадратная скобка",
    "]" => "закрывающая квадратная скобка",
    "<" => "открывающая угловая скобка",
    ">" => "закрывающая угловая скобка",
};
