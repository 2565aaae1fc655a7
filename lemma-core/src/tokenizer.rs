//! # Tokenizador (Scanner de Estados Finitos)
//!
//! Divide o texto bruto em unidades tipadas: palavras, números, abreviações,
//! pontuação de oração, pontuação de frase e marcações (tags XML/HTML).
//! Cada token preserva sua posição original no texto (offsets de byte).
//!
//! ## Estados
//!
//! - **Fora**: ignora espaços; decide o tipo do próximo token pelo primeiro caractere.
//! - **Marcação**: `<` seguido de letra, `/`, `!` ou `?` copia tudo até `>` literalmente.
//! - **Entidade**: `&nome;` é decodificado pelo leitor de caracteres; entidade
//!   desconhecida ou sem `;` vira texto literal.
//! - **Número**: dígitos; `.` e `,` só entre dois dígitos (`3,14`, `1.000`).
//! - **Palavra**: letras e caracteres de token; hífen suave é consumido e descartado,
//!   apóstrofo tipográfico vira `'` e encerra a palavra (`l'homme` → `l'`, `homme`).
//! - **Ponto de abreviação**: `M.`, `etc.` (tabela de abreviações) e iniciais
//!   (`J.`, `S.N.C.F.`) mantêm o ponto.
//! - **Pontuação de frase**: acumulada gulosamente (`...`, `?!`).
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use lemma_core::tokenizer::tokenize;
//!
//! let tokens = tokenize("Il vit le chemin de fer.");
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, ["Il", "vit", "le", "chemin", "de", "fer", "."]);
//! ```
//!
//! Nenhuma entrada é fatal: marcação ou entidade malformada degrada para
//! texto literal, e tokens acima de `max_chars` caracteres são cortados.

use crate::chars::{canonical_apostrophe, classify, is_apostrophe, lowercase_into, SOFT_HYPHEN};
use crate::dictionary::DictionaryStore;
use crate::entity;
use crate::tag::Tag;
use crate::token::{collect_tokens, Token, TokenStream};

/// Tamanho máximo padrão de um token, em caracteres.
pub const DEFAULT_MAX_TOKEN_CHARS: usize = 256;

/// Caractere lido da fonte, já com entidades decodificadas.
#[derive(Debug, Clone, Copy)]
struct Decoded {
    ch: char,
    start: usize,
    end: usize,
    entity: bool,
}

/// Leitor de caracteres com devolução (pilha de caracteres "des-consumidos").
struct CharReader<'a> {
    source: &'a str,
    pos: usize,
    pushback: Vec<Decoded>,
}

impl<'a> CharReader<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            pushback: Vec::with_capacity(4),
        }
    }

    fn read(&mut self) -> Option<Decoded> {
        if let Some(d) = self.pushback.pop() {
            return Some(d);
        }
        let ch = self.source[self.pos..].chars().next()?;
        let start = self.pos;
        self.pos += ch.len_utf8();
        if ch == '&' {
            if let Some((decoded, end)) = entity::decode_at(self.source, start) {
                self.pos = end;
                return Some(Decoded {
                    ch: decoded,
                    start,
                    end,
                    entity: true,
                });
            }
        }
        Some(Decoded {
            ch,
            start,
            end: self.pos,
            entity: false,
        })
    }

    fn unread(&mut self, d: Decoded) {
        self.pushback.push(d);
    }

    fn peek(&mut self) -> Option<char> {
        let d = self.read()?;
        self.unread(d);
        Some(d.ch)
    }

    /// Os dois próximos caracteres, sem consumi-los.
    fn peek2(&mut self) -> (Option<char>, Option<char>) {
        let first = self.read();
        let second = self.read();
        if let Some(d) = second {
            self.unread(d);
        }
        if let Some(d) = first {
            self.unread(d);
        }
        (first.map(|d| d.ch), second.map(|d| d.ch))
    }

    fn seek(&mut self, pos: usize) {
        self.pushback.clear();
        self.pos = pos;
    }
}

enum ScanState {
    Outside,
    InWord,
    InNumber,
    InSentencePunct,
}

/// Scanner de tokens sobre um texto emprestado.
pub struct Tokenizer<'a> {
    reader: CharReader<'a>,
    dict: Option<&'a DictionaryStore>,
    max_chars: usize,
    scratch: String,
    lower: String,
    // a partir desta posição não há nenhum `-->`
    no_comment_close: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            reader: CharReader::new(source),
            dict: None,
            max_chars: DEFAULT_MAX_TOKEN_CHARS,
            scratch: String::new(),
            lower: String::new(),
            no_comment_close: usize::MAX,
        }
    }

    /// Scanner que consulta a tabela de abreviações do dicionário.
    pub fn with_dictionary(source: &'a str, dict: &'a DictionaryStore) -> Self {
        Self {
            dict: Some(dict),
            ..Self::new(source)
        }
    }

    /// Limita o tamanho dos tokens (mínimo 1 caractere).
    pub fn max_chars(mut self, max: usize) -> Self {
        self.max_chars = max.max(1);
        self
    }

    fn next_is_letter(&mut self) -> bool {
        self.reader.peek().map(|c| classify(c).is_letter()).unwrap_or(false)
    }

    fn next_is_digit(&mut self) -> bool {
        self.reader.peek().map(|c| classify(c).is_digit()).unwrap_or(false)
    }

    fn next_is_alphanumeric(&mut self) -> bool {
        self.reader
            .peek()
            .map(|c| {
                let p = classify(c);
                p.is_letter() || p.is_digit()
            })
            .unwrap_or(false)
    }

    /// Decide se o ponto após a palavra pertence a ela.
    ///
    /// Retorna `None` se o ponto não foi absorvido, `Some(true)` se a palavra
    /// continua (iniciais em série) e `Some(false)` se a palavra terminou.
    fn absorb_dot(&mut self, token: &mut Token, dot: Decoded) -> Option<bool> {
        if let Some(dict) = self.dict {
            self.scratch.clear();
            self.scratch.push_str(&token.text);
            self.scratch.push('.');
            let expansion = dict
                .is_abbreviation(&self.scratch)
                .or_else(|| dict.is_abbreviation(lowercase_into(&mut self.lower, &self.scratch)));
            if let Some(expansion) = expansion {
                token.text.push('.');
                token.end = dot.end;
                token.orth.clear();
                token.orth.push_str(expansion);
                token.tag = Tag::Abbr;
                return Some(false);
            }
        }
        if is_initials(&token.text) {
            token.text.push('.');
            token.end = dot.end;
            token.tag = Tag::Abbr;
            let (next, after) = self.reader.peek2();
            let more = next.map(|c| classify(c).is_upper()).unwrap_or(false) && after == Some('.');
            return Some(more);
        }
        None
    }
}

/// Letras maiúsculas isoladas separadas por pontos: "J", "S.N.C".
fn is_initials(text: &str) -> bool {
    !text.is_empty()
        && text.split('.').all(|part| {
            let mut chars = part.chars();
            matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
        })
}

/// Fim (exclusivo) da marcação que começa em `start`, ou `None` se ela for malformada.
///
/// `no_comment_close` é a menor posição a partir da qual já se sabe que não
/// existe `-->`; um comentário aberto depois dela nunca fecha.
fn markup_end(source: &str, start: usize, no_comment_close: &mut usize) -> Option<usize> {
    let rest = &source[start..];
    let first = rest[1..].chars().next()?;
    if !(first.is_ascii_alphabetic() || matches!(first, '/' | '!' | '?')) {
        return None;
    }
    if rest.starts_with("<!--") {
        if start >= *no_comment_close {
            return None;
        }
        let end = rest.find("-->").map(|i| start + i + 3);
        if end.is_none() {
            *no_comment_close = start;
        }
        return end;
    }
    for (i, c) in rest.char_indices().skip(1) {
        match c {
            '>' => return Some(start + i + 1),
            '<' => return None,
            _ => {}
        }
    }
    None
}

impl TokenStream for Tokenizer<'_> {
    fn advance(&mut self, token: &mut Token) -> bool {
        token.clear();
        let mut state = ScanState::Outside;
        let mut chars = 0usize;

        while let Some(c) = self.reader.read() {
            let props = classify(c.ch);
            match state {
                ScanState::Outside => {
                    if props.is_space() || c.ch == SOFT_HYPHEN {
                        continue;
                    }
                    if c.ch == '<' && !c.entity {
                        let source = self.reader.source;
                        if let Some(end) =
                            markup_end(source, c.start, &mut self.no_comment_close)
                        {
                            token.text.push_str(&source[c.start..end]);
                            token.tag = Tag::Xml;
                            token.start = c.start;
                            token.end = end;
                            self.reader.seek(end);
                            return true;
                        }
                    }
                    token.start = c.start;
                    token.end = c.end;
                    token.text.push(c.ch);
                    chars = 1;
                    if props.is_sentence_punct() {
                        token.tag = Tag::PunctSentence;
                        state = ScanState::InSentencePunct;
                    } else if props.is_clause_punct() {
                        token.tag = Tag::PunctClause;
                        return true;
                    } else if props.is_digit() {
                        token.tag = Tag::Num;
                        state = ScanState::InNumber;
                    } else if props.is_token() && c.ch != '-' && !is_apostrophe(c.ch) {
                        state = ScanState::InWord;
                    } else {
                        // apóstrofo ou hífen soltos, outra pontuação, símbolos
                        token.tag = Tag::Punct;
                        return true;
                    }
                    if chars >= self.max_chars {
                        return true;
                    }
                }
                ScanState::InWord => {
                    if c.ch == SOFT_HYPHEN {
                        token.end = c.end;
                        continue;
                    }
                    if is_apostrophe(c.ch) {
                        if !self.next_is_letter() {
                            self.reader.unread(c);
                            return true;
                        }
                        token.text.push(canonical_apostrophe(c.ch));
                        token.end = c.end;
                        return true;
                    } else if c.ch == '-' {
                        if !self.next_is_alphanumeric() {
                            self.reader.unread(c);
                            return true;
                        }
                        token.text.push('-');
                    } else if props.is_token() {
                        token.text.push(c.ch);
                    } else if c.ch == '.' && !c.entity {
                        match self.absorb_dot(token, c) {
                            Some(true) => continue,
                            Some(false) => return true,
                            None => {
                                self.reader.unread(c);
                                return true;
                            }
                        }
                    } else {
                        self.reader.unread(c);
                        return true;
                    }
                    token.end = c.end;
                    chars += 1;
                    if chars >= self.max_chars {
                        return true;
                    }
                }
                ScanState::InNumber => {
                    if props.is_digit() {
                        token.text.push(c.ch);
                    } else if matches!(c.ch, '.' | ',') && self.next_is_digit() {
                        token.text.push(c.ch);
                    } else if props.is_letter() {
                        // "1er", "3e": o número vira palavra
                        token.text.push(c.ch);
                        token.tag = Tag::Unknown;
                        state = ScanState::InWord;
                    } else {
                        self.reader.unread(c);
                        return true;
                    }
                    token.end = c.end;
                    chars += 1;
                    if chars >= self.max_chars {
                        return true;
                    }
                }
                ScanState::InSentencePunct => {
                    if !props.is_sentence_punct() {
                        self.reader.unread(c);
                        return true;
                    }
                    token.text.push(c.ch);
                    token.end = c.end;
                    chars += 1;
                    if chars >= self.max_chars {
                        return true;
                    }
                }
            }
        }

        // fim do fluxo: entrega o token pendente, se houver
        !matches!(state, ScanState::Outside)
    }
}

/// Tokeniza um texto sem dicionário, com o tamanho máximo padrão.
pub fn tokenize(text: &str) -> Vec<Token> {
    collect_tokens(&mut Tokenizer::new(text))
}
