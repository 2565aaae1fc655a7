//! Entidades de caractere (`&amp;`, `&eacute;`, `&#233;`, `&#xE9;`).
//!
//! A decodificação nunca falha: se o trecho após `&` não formar uma entidade
//! conhecida terminada por `;`, o chamador trata o `&` como texto literal.

/// Comprimento máximo do nome de uma entidade (sem `&` e `;`).
const MAX_ENTITY_LEN: usize = 10;

/// Tenta decodificar a entidade que começa no byte `start` (onde está o `&`).
///
/// Retorna o caractere e o índice de byte logo após o `;`.
pub fn decode_at(source: &str, start: usize) -> Option<(char, usize)> {
    let rest = source.get(start + 1..)?;
    let mut close = None;
    for (i, c) in rest.char_indices().take(MAX_ENTITY_LEN + 1) {
        if c == ';' {
            close = Some(i);
            break;
        }
        let legal = c.is_ascii_alphanumeric() || (i == 0 && c == '#');
        if !legal {
            return None;
        }
    }
    let close = close?;
    let ch = resolve(&rest[..close])?;
    Some((ch, start + 1 + close + 1))
}

/// Resolve um nome de entidade (sem `&` e `;`).
pub fn resolve(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code).filter(|c| *c != '\0');
    }
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{A0}',
        "shy" => '\u{AD}',
        "laquo" => '«',
        "raquo" => '»',
        "lsquo" => '‘',
        "rsquo" => '’',
        "ldquo" => '“',
        "rdquo" => '”',
        "hellip" => '…',
        "ndash" => '–',
        "mdash" => '—',
        "middot" => '·',
        "deg" => '°',
        "copy" => '©',
        "reg" => '®',
        "euro" => '€',
        "sect" => '§',
        "times" => '×',
        "agrave" => 'à',
        "aacute" => 'á',
        "acirc" => 'â',
        "auml" => 'ä',
        "aelig" => 'æ',
        "ccedil" => 'ç',
        "egrave" => 'è',
        "eacute" => 'é',
        "ecirc" => 'ê',
        "euml" => 'ë',
        "icirc" => 'î',
        "iuml" => 'ï',
        "ocirc" => 'ô',
        "ouml" => 'ö',
        "oelig" => 'œ',
        "ugrave" => 'ù',
        "ucirc" => 'û',
        "uuml" => 'ü',
        "yuml" => 'ÿ',
        "Agrave" => 'À',
        "Acirc" => 'Â',
        "AElig" => 'Æ',
        "Ccedil" => 'Ç',
        "Egrave" => 'È',
        "Eacute" => 'É',
        "Ecirc" => 'Ê',
        "Icirc" => 'Î',
        "Ocirc" => 'Ô',
        "OElig" => 'Œ',
        "Ugrave" => 'Ù',
        "Ucirc" => 'Û',
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_entities() {
        assert_eq!(resolve("amp"), Some('&'));
        assert_eq!(resolve("eacute"), Some('é'));
        assert_eq!(resolve("Eacute"), Some('É'));
        assert_eq!(resolve("bogus"), None);
    }

    #[test]
    fn test_numeric_entities() {
        assert_eq!(resolve("#233"), Some('é'));
        assert_eq!(resolve("#xE9"), Some('é'));
        assert_eq!(resolve("#X41"), Some('A'));
        assert_eq!(resolve("#0"), None);
        assert_eq!(resolve("#xZZ"), None);
    }

    #[test]
    fn test_decode_at() {
        let s = "a &amp; b";
        assert_eq!(decode_at(s, 2), Some(('&', 7)));
        // sem ';' → literal
        assert_eq!(decode_at("&amp b", 0), None);
        // caractere ilegal antes do ';'
        assert_eq!(decode_at("&a-b;", 0), None);
        // nome longo demais
        assert_eq!(decode_at("&abcdefghijklmnop;", 0), None);
    }
}
