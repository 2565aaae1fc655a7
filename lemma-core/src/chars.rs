//! # Classificador de Caracteres
//!
//! Tabela pré-calculada de propriedades por code point, consultada pelo
//! tokenizador a cada caractere lido. A tabela cobre todo o plano básico
//! multilíngue (BMP) e é construída uma única vez; fora do BMP as
//! propriedades são calculadas na hora com as mesmas regras.
//!
//! ## Propriedades
//!
//! | Flag             | Caracteres                                           |
//! |------------------|------------------------------------------------------|
//! | `LETTER`         | alfabéticos                                          |
//! | `DIGIT`          | numéricos                                            |
//! | `SPACE`          | espaços e caracteres de controle                     |
//! | `TOKEN`          | letras, dígitos, `-`, `'`, `’`, `_`, `&`, hífen suave |
//! | `PUNCTUATION`    | pontuação em geral                                   |
//! | `SENTENCE_PUNCT` | `.` `…` `?` `!`                                      |
//! | `CLAUSE_PUNCT`   | `,` `;` `:`                                          |
//! | `UPPER`/`LOWER`  | caixa alta / caixa baixa                             |
//!
//! O `&` faz parte de `TOKEN` por causa das abreviações históricas ("&c.").

use std::ops::BitOr;
use std::sync::OnceLock;

/// Hífen suave (U+00AD): consumido pelo tokenizador mas nunca acrescentado ao token.
pub const SOFT_HYPHEN: char = '\u{AD}';

/// Conjunto de propriedades de um caractere (bitset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CharProps(u16);

impl CharProps {
    pub const NONE: CharProps = CharProps(0);
    pub const LETTER: CharProps = CharProps(1 << 0);
    pub const DIGIT: CharProps = CharProps(1 << 1);
    pub const SPACE: CharProps = CharProps(1 << 2);
    pub const TOKEN: CharProps = CharProps(1 << 3);
    pub const PUNCTUATION: CharProps = CharProps(1 << 4);
    pub const SENTENCE_PUNCT: CharProps = CharProps(1 << 5);
    pub const CLAUSE_PUNCT: CharProps = CharProps(1 << 6);
    pub const UPPER: CharProps = CharProps(1 << 7);
    pub const LOWER: CharProps = CharProps(1 << 8);

    /// Verifica se todas as flags de `other` estão presentes.
    pub const fn contains(self, other: CharProps) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_letter(self) -> bool {
        self.contains(Self::LETTER)
    }

    pub const fn is_digit(self) -> bool {
        self.contains(Self::DIGIT)
    }

    pub const fn is_space(self) -> bool {
        self.contains(Self::SPACE)
    }

    pub const fn is_token(self) -> bool {
        self.contains(Self::TOKEN)
    }

    pub const fn is_punctuation(self) -> bool {
        self.contains(Self::PUNCTUATION)
    }

    pub const fn is_sentence_punct(self) -> bool {
        self.contains(Self::SENTENCE_PUNCT)
    }

    pub const fn is_clause_punct(self) -> bool {
        self.contains(Self::CLAUSE_PUNCT)
    }

    pub const fn is_upper(self) -> bool {
        self.contains(Self::UPPER)
    }

    pub const fn is_lower(self) -> bool {
        self.contains(Self::LOWER)
    }

    const fn bits(self) -> u16 {
        self.0
    }
}

impl BitOr for CharProps {
    type Output = CharProps;

    fn bitor(self, rhs: CharProps) -> CharProps {
        CharProps(self.0 | rhs.0)
    }
}

const BMP_SIZE: usize = 0x1_0000;

static TABLE: OnceLock<Box<[u16]>> = OnceLock::new();

fn table() -> &'static [u16] {
    TABLE.get_or_init(|| {
        (0..BMP_SIZE as u32)
            .map(|cp| char::from_u32(cp).map(|c| compute(c).bits()).unwrap_or(0))
            .collect()
    })
}

/// Retorna as propriedades de um caractere.
///
/// Função pura: o mesmo caractere sempre produz o mesmo conjunto.
pub fn classify(c: char) -> CharProps {
    let cp = c as usize;
    if cp < BMP_SIZE {
        CharProps(table()[cp])
    } else {
        compute(c)
    }
}

/// Normaliza apóstrofos tipográficos para o apóstrofo reto.
pub fn canonical_apostrophe(c: char) -> char {
    match c {
        '\u{2019}' | '\u{02BC}' => '\'',
        other => other,
    }
}

pub fn is_apostrophe(c: char) -> bool {
    canonical_apostrophe(c) == '\''
}

/// Escreve `form` em minúsculas no buffer `buf`, reaproveitando sua capacidade.
pub fn lowercase_into<'b>(buf: &'b mut String, form: &str) -> &'b str {
    buf.clear();
    buf.extend(form.chars().flat_map(char::to_lowercase));
    buf
}

fn compute(c: char) -> CharProps {
    let mut props = CharProps::NONE;

    if c.is_alphabetic() {
        props = props | CharProps::LETTER | CharProps::TOKEN;
    }
    if c.is_numeric() {
        props = props | CharProps::DIGIT | CharProps::TOKEN;
    }
    if c.is_whitespace() || c.is_control() {
        props = props | CharProps::SPACE;
    }
    if c.is_uppercase() {
        props = props | CharProps::UPPER;
    }
    if c.is_lowercase() {
        props = props | CharProps::LOWER;
    }
    if matches!(c, '-' | '\'' | '\u{2019}' | '\u{02BC}' | '_' | '&' | SOFT_HYPHEN) {
        props = props | CharProps::TOKEN;
    }
    if is_punctuation_char(c) {
        props = props | CharProps::PUNCTUATION;
    }
    match c {
        '.' | '…' | '?' | '!' => props = props | CharProps::SENTENCE_PUNCT,
        ',' | ';' | ':' => props = props | CharProps::CLAUSE_PUNCT,
        _ => {}
    }
    props
}

fn is_punctuation_char(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '«' | '»'
                | '¡'
                | '¿'
                | '§'
                | '¶'
                | '·'
                | '\u{2010}'..='\u{2027}'
                | '\u{2030}'..='\u{205E}'
        )
}
