//! src/data/mod.rs — static lookup tables shared by the normalizer battery.
//!
//! Every table here is a `phf` perfect-hash map or set, built once at
//! compile time and immutable for the lifetime of the process.

pub mod abbreviations;
pub mod code_langs;
pub mod english_dict;
pub mod extensions;
pub mod protocols;
pub mod symbols;
pub mod tld;
pub mod units;
