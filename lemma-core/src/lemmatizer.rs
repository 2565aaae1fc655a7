//! # Etiquetador e Lematizador
//!
//! Atribui a cada token de palavra uma tag, uma grafia normalizada (`orth`)
//! e um lema, consultando o [`DictionaryStore`].
//!
//! ## Estado
//!
//! Um único booleano, `after_break`: o token anterior encerrou uma frase
//! ou oração (ou um bloco de marcação). Começa verdadeiro, já que o início
//! do fluxo é início de frase. Ele decide se uma palavra comum em maiúscula
//! é só um início de frase ("Chemin" → `chemin`) ou um uso enfático fora
//! dessa posição ("le Chemin" → `Chemin`).
//!
//! ## Palavras em maiúscula
//!
//! 1. Número romano (`XIV` → NUM, lema `14`).
//! 2. Dicionário de nomes próprios, com a forma como veio e capitalizada.
//! 3. Primeiro fragmento de um nome composto (`Charles-François` → tag de `Charles`).
//! 4. Dicionário comum, em minúsculas.
//! 5. Caso contrário, NAME: nome próprio desconhecido.
//!
//! Palavras em minúscula só consultam o dicionário comum; uma ausência
//! deixa o token sem tag, o que não é um erro.

use std::fmt::Write;

use crate::chars::{classify, lowercase_into};
use crate::dictionary::{DictionaryEntry, DictionaryStore};
use crate::roman::parse_roman;
use crate::tag::Tag;
use crate::token::{Token, TokenStream};

/// Elementos de bloco: marcam fronteira de frase como uma pontuação final.
const BLOCK_ELEMENTS: &[&str] = &[
    "p", "div", "br", "h1", "h2", "h3", "h4", "h5", "h6", "li", "td", "tr", "section", "article",
    "title", "head", "body", "blockquote", "table", "ul", "ol",
];

/// Nome do elemento de uma marcação (`"</P>"` → `"P"`).
fn element_name(markup: &str) -> &str {
    let name = markup.trim_start_matches('<').trim_start_matches('/');
    let end = name
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(name.len());
    &name[..end]
}

pub fn is_block_markup(markup: &str) -> bool {
    let name = element_name(markup);
    BLOCK_ELEMENTS.iter().any(|b| b.eq_ignore_ascii_case(name))
}

/// Primeira letra maiúscula, resto minúsculo ("PARIS" → "Paris").
fn capitalize_into(buf: &mut String, form: &str) {
    buf.clear();
    let mut chars = form.chars();
    if let Some(first) = chars.next() {
        buf.extend(first.to_uppercase());
        buf.extend(chars.flat_map(char::to_lowercase));
    }
}

/// Só a primeira letra em maiúscula, o resto intocado.
fn upper_first_into(buf: &mut String, form: &str) {
    buf.clear();
    let mut chars = form.chars();
    if let Some(first) = chars.next() {
        buf.extend(first.to_uppercase());
        buf.push_str(chars.as_str());
    }
}

/// Sigla ou palavra gritada: todas as letras maiúsculas.
fn is_all_caps(form: &str) -> bool {
    form.chars().any(char::is_alphabetic)
        && form
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase)
}

fn apply_entry(token: &mut Token, entry: &DictionaryEntry, default_orth: &str) {
    token.tag = entry.tag;
    token.orth.clear();
    token.orth.push_str(entry.orth.as_deref().unwrap_or(default_orth));
    token.lemma.clear();
    if let Some(lemma) = &entry.lemma {
        token.lemma.push_str(lemma);
    }
}

fn tag_capitalized(
    dict: &DictionaryStore,
    form: &str,
    scratch: &mut String,
    token: &mut Token,
    after_break: bool,
) {
    if form.chars().count() > 1 {
        if let Some(value) = parse_roman(form) {
            token.tag = Tag::Num;
            token.lemma.clear();
            let _ = write!(token.lemma, "{value}");
            return;
        }
    }

    let proper = match dict.lookup_proper(form) {
        Some(entry) => Some(entry),
        None => {
            capitalize_into(scratch, form);
            if scratch.as_str() != form {
                dict.lookup_proper(scratch.as_str())
            } else {
                None
            }
        }
    };
    if let Some(entry) = proper {
        apply_entry(token, entry, form);
        return;
    }

    if let Some((head, _)) = form.split_once('-') {
        if let Some(entry) = dict.lookup_proper(head) {
            token.tag = entry.tag;
            token.orth.clear();
            token.orth.push_str(form);
            return;
        }
    }

    let lower = dict.normalize_or(lowercase_into(scratch, form));
    if let Some(entry) = dict.lookup_common(lower) {
        apply_entry(token, entry, lower);
        if !after_break {
            upper_first_into(&mut token.orth, entry.orth.as_deref().unwrap_or(lower));
        }
        return;
    }

    if token.tag != Tag::Abbr {
        token.tag = Tag::Name;
    }
    if is_all_caps(form) && form.chars().count() > 3 && !form.contains('.') {
        capitalize_into(&mut token.orth, form);
    } else {
        token.orth.clear();
        token.orth.push_str(form);
    }
}

fn tag_lowercase(dict: &DictionaryStore, form: &str, scratch: &mut String, token: &mut Token) {
    let form = dict.normalize_or(lowercase_into(scratch, form));
    match dict.lookup_common(form) {
        Some(entry) => apply_entry(token, entry, form),
        None => {
            token.orth.clear();
            token.orth.push_str(form);
        }
    }
}

/// Estágio de etiquetagem e lematização.
pub struct Lemmatizer<'d, S> {
    input: S,
    dict: &'d DictionaryStore,
    after_break: bool,
    form: String,
    scratch: String,
}

impl<'d, S: TokenStream> Lemmatizer<'d, S> {
    pub fn new(input: S, dict: &'d DictionaryStore) -> Self {
        Self {
            input,
            dict,
            after_break: true,
            form: String::new(),
            scratch: String::new(),
        }
    }
}

impl<S: TokenStream> TokenStream for Lemmatizer<'_, S> {
    fn advance(&mut self, token: &mut Token) -> bool {
        if !self.input.advance(token) {
            return false;
        }
        match token.tag {
            Tag::Xml => {
                if is_block_markup(&token.text) {
                    self.after_break = true;
                }
                return true;
            }
            tag if tag.is_break() => {
                self.after_break = true;
                return true;
            }
            // parênteses e aspas não mudam a posição na frase
            tag if tag.is_punctuation() => return true,
            Tag::Num => {
                self.after_break = false;
                return true;
            }
            _ => {}
        }
        if token.is_empty() {
            return true;
        }

        self.form.clear();
        self.form.push_str(self.dict.normalize_or(token.orth_or_text()));
        let props = self.form.chars().next().map(classify).unwrap_or_default();
        if props.is_upper() {
            tag_capitalized(
                self.dict,
                &self.form,
                &mut self.scratch,
                token,
                self.after_break,
            );
        } else if props.is_lower() {
            tag_lowercase(self.dict, &self.form, &mut self.scratch, token);
        }
        self.after_break = false;
        true
    }
}
