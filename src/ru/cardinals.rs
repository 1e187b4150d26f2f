//! src/ru/cardinals.rs — Russian cardinal number-to-words.
//!
//! Reads any `u64` up to 999 999 999 999 (billions). Each group of three
//! digits (units / thousands / millions / billions) is rendered with the
//! grammatical gender its scale word demands — "тысяча" is feminine, so
//! `1`/`2` read as «одна»/«две» inside a thousands group, but «один»/«два»
//! everywhere else.

use crate::ru::declension::agree;

const UNITS_MASC: [&str; 9] = [
    "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
];
const UNITS_FEM: [&str; 9] = [
    "одна", "две", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
];
const TEENS: [&str; 10] = [
    "десять",
    "одиннадцать",
    "двенадцать",
    "тринадцать",
    "четырнадцать",
    "пятнадцать",
    "шестнадцать",
    "семнадцать",
    "восемнадцать",
    "девятнадцать",
];
const TENS: [&str; 8] = [
    "двадцать",
    "тридцать",
    "сорок",
    "пятьдесят",
    "шестьдесят",
    "семьдесят",
    "восемьдесят",
    "девяносто",
];
const HUNDREDS: [&str; 9] = [
    "сто",
    "двести",
    "триста",
    "четыреста",
    "пятьсот",
    "шестьсот",
    "семьсот",
    "восемьсот",
    "девятьсот",
];

const THOUSAND_FORMS: (&str, &str, &str) = ("тысяча", "тысячи", "тысяч");
const MILLION_FORMS: (&str, &str, &str) = ("миллион", "миллиона", "миллионов");
const BILLION_FORMS: (&str, &str, &str) = ("миллиард", "миллиарда", "миллиардов");

/// Render `0 <= n < 1000` as a sequence of words, using the feminine unit
/// forms for "one"/"two" when `feminine` is set (i.e. this chunk precedes
/// "тысяча").
fn chunk_words(n: u32, feminine: bool) -> Vec<&'static str> {
    debug_assert!(n < 1000);
    let mut words = Vec::new();
    let hundreds = n / 100;
    let rest = n % 100;
    if hundreds > 0 {
        words.push(HUNDREDS[hundreds as usize - 1]);
    }
    if (10..20).contains(&rest) {
        words.push(TEENS[(rest - 10) as usize]);
    } else {
        let tens = rest / 10;
        let units = rest % 10;
        if tens > 0 {
            words.push(TENS[tens as usize - 1]);
        }
        if units > 0 {
            let table = if feminine { &UNITS_FEM } else { &UNITS_MASC };
            words.push(table[units as usize - 1]);
        }
    }
    words
}

/// Spell out `n` as a cardinal number in Russian.
pub fn cardinal(n: u64) -> String {
    if n == 0 {
        return "ноль".to_string();
    }

    let billions = (n / 1_000_000_000) % 1000;
    let millions = (n / 1_000_000) % 1000;
    let thousands = (n / 1_000) % 1000;
    let units = n % 1000;

    let mut words: Vec<String> = Vec::new();

    if billions > 0 {
        words.extend(chunk_words(billions as u32, false).iter().map(|s| s.to_string()));
        words.push(agree(billions, BILLION_FORMS).to_string());
    }
    if millions > 0 {
        words.extend(chunk_words(millions as u32, false).iter().map(|s| s.to_string()));
        words.push(agree(millions, MILLION_FORMS).to_string());
    }
    if thousands > 0 {
        words.extend(chunk_words(thousands as u32, true).iter().map(|s| s.to_string()));
        words.push(agree(thousands, THOUSAND_FORMS).to_string());
    }
    if units > 0 || words.is_empty() {
        words.extend(chunk_words(units as u32, false).iter().map(|s| s.to_string()));
    }

    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_nol() {
        assert_eq!(cardinal(0), "ноль");
    }

    #[test]
    fn small_numbers() {
        assert_eq!(cardinal(1), "один");
        assert_eq!(cardinal(11), "одиннадцать");
        assert_eq!(cardinal(21), "двадцать один");
        assert_eq!(cardinal(100), "сто");
        assert_eq!(cardinal(101), "сто один");
    }

    #[test]
    fn thousands_use_feminine_agreement() {
        assert_eq!(cardinal(1000), "одна тысяча");
        assert_eq!(cardinal(2000), "две тысячи");
        assert_eq!(cardinal(5000), "пять тысяч");
        assert_eq!(cardinal(21_000), "двадцать одна тысяча");
    }

    #[test]
    fn millions_use_masculine_agreement() {
        assert_eq!(cardinal(1_000_000), "один миллион");
        assert_eq!(cardinal(2_000_000), "два миллиона");
    }

    #[test]
    fn mixed_magnitudes_compose_left_to_right() {
        assert_eq!(
            cardinal(1_234_567),
            "один миллион двести тридцать четыре тысячи пятьсот шестьдесят семь"
        );
    }
}
