//! # Token e Fluxo de Tokens
//!
//! O `Token` é o registro que atravessa todos os estágios do pipeline.
//! Cada estágio implementa [`TokenStream`]: o consumidor passa um token
//! mutável e o estágio o preenche, reaproveitando os buffers de texto já
//! alocados. Nenhum estágio guarda referência para o token do consumidor;
//! quem precisa reter um token (os estágios de composição) faz uma cópia
//! explícita com [`Token::copy_from`].

use serde::{Deserialize, Serialize};

use crate::tag::Tag;

/// Um token extraído do texto original.
///
/// `start` e `end` são índices de byte no texto original (`end` exclusivo),
/// de modo que `&source[start..end]` é sempre o trecho coberto pelo token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Texto como aparece na fonte (entidades já decodificadas).
    pub text: String,
    /// Grafia normalizada (vazia quando igual a `text` ou desconhecida).
    pub orth: String,
    /// Lema do dicionário (pode ser vazio).
    pub lemma: String,
    pub tag: Tag,
    /// Índice de byte inicial no texto original (inclusivo).
    pub start: usize,
    /// Índice de byte final no texto original (exclusivo).
    pub end: usize,
    /// 1 normalmente; 0 quando o token ocupa a mesma posição lógica do anterior.
    pub position_increment: u32,
}

impl Default for Token {
    fn default() -> Self {
        Self {
            text: String::new(),
            orth: String::new(),
            lemma: String::new(),
            tag: Tag::Unknown,
            start: 0,
            end: 0,
            position_increment: 1,
        }
    }
}

impl Token {
    pub fn new(text: &str, tag: Tag, start: usize, end: usize) -> Self {
        Self {
            text: text.to_string(),
            tag,
            start,
            end,
            ..Self::default()
        }
    }

    /// Esvazia o token mantendo a capacidade dos buffers.
    pub fn clear(&mut self) {
        self.text.clear();
        self.orth.clear();
        self.lemma.clear();
        self.tag = Tag::Unknown;
        self.start = 0;
        self.end = 0;
        self.position_increment = 1;
    }

    /// Copia o estado de `other` reaproveitando os buffers deste token.
    pub fn copy_from(&mut self, other: &Token) {
        self.text.clone_from(&other.text);
        self.orth.clone_from(&other.orth);
        self.lemma.clone_from(&other.lemma);
        self.tag = other.tag;
        self.start = other.start;
        self.end = other.end;
        self.position_increment = other.position_increment;
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Grafia normalizada, ou o texto bruto quando não há normalização.
    pub fn orth_or_text(&self) -> &str {
        if self.orth.is_empty() {
            &self.text
        } else {
            &self.orth
        }
    }

    /// Primeiro caractere do texto bruto começa com maiúscula?
    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().map(|c| c.is_uppercase()).unwrap_or(false)
    }

    /// Token de palavra: nem marcação, nem pontuação, nem vazio.
    pub fn is_word(&self) -> bool {
        !self.is_empty() && self.tag != Tag::Xml && !self.tag.is_punctuation()
    }
}

/// Estágio do pipeline em modo *pull*.
///
/// `advance` preenche `token` com o próximo token e retorna `true`, ou
/// retorna `false` quando o fluxo terminou. O conteúdo de `token` após um
/// `false` não é especificado.
pub trait TokenStream {
    fn advance(&mut self, token: &mut Token) -> bool;
}

impl<S: TokenStream + ?Sized> TokenStream for Box<S> {
    fn advance(&mut self, token: &mut Token) -> bool {
        (**self).advance(token)
    }
}

/// Consome um fluxo inteiro, devolvendo cópias independentes dos tokens.
pub fn collect_tokens<S: TokenStream + ?Sized>(stream: &mut S) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut token = Token::default();
    while stream.advance(&mut token) {
        tokens.push(token.clone());
    }
    tokens
}

/// Fluxo a partir de um vetor de tokens já prontos (útil em testes e para reprocessamento).
pub struct VecStream {
    tokens: std::vec::IntoIter<Token>,
}

impl VecStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl TokenStream for VecStream {
    fn advance(&mut self, token: &mut Token) -> bool {
        match self.tokens.next() {
            Some(next) => {
                token.copy_from(&next);
                true
            }
            None => false,
        }
    }
}
