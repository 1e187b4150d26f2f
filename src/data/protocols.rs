//! src/data/protocols.rs — URL scheme names spoken as a word.

use phf::Map;

pub static SCHEMES: Map<&'static str, &'static str> = phf::phf_map! {
    "http" => "эйч ти ти пи",
    "https" => "эйч ти ти пи эс",
    "ftp" => "эф ти пи",
    "ssh" => "эс эс эйч",
    "ws" => "дабл ю эс",
    "wss" => "дабл ю эс эс",
};
