//! Números romanos ("XIV" → 14).

use std::sync::OnceLock;

use regex::Regex;

static ROMAN: OnceLock<Regex> = OnceLock::new();

fn roman_regex() -> &'static Regex {
    ROMAN.get_or_init(|| {
        Regex::new(r"^M{0,4}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
            .expect("roman numeral pattern is valid")
    })
}

fn value(c: char) -> i64 {
    match c {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => 0,
    }
}

/// Valor de um número romano em maiúsculas, ou `None` se a forma não for canônica.
pub fn parse_roman(s: &str) -> Option<u32> {
    if s.is_empty() || !roman_regex().is_match(s) {
        return None;
    }
    let mut digits = s.chars().map(value).peekable();
    let mut total = 0i64;
    while let Some(v) = digits.next() {
        match digits.peek() {
            Some(&next) if next > v => total -= v,
            _ => total += v,
        }
    }
    u32::try_from(total).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roman() {
        assert_eq!(parse_roman("XIV"), Some(14));
        assert_eq!(parse_roman("MCMXCIV"), Some(1994));
        assert_eq!(parse_roman("IV"), Some(4));
        assert_eq!(parse_roman("I"), Some(1));
    }

    #[test]
    fn test_rejects_non_canonical() {
        assert_eq!(parse_roman(""), None);
        assert_eq!(parse_roman("IIII"), None);
        assert_eq!(parse_roman("IL"), None);
        assert_eq!(parse_roman("xiv"), None);
        assert_eq!(parse_roman("CIVIL"), None);
        assert_eq!(parse_roman("Il"), None);
    }
}
