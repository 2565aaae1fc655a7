//! # Elisões e Clíticos
//!
//! O scanner já corta a palavra depois de um apóstrofo seguido de letra
//! (`qu'il` → `qu'`, `il`). Este estágio completa o trabalho:
//!
//! - formas elididas conhecidas recebem a grafia plena (`l'` → `le`,
//!   `qu'` → `que`, `jusqu'` → `jusque`);
//! - clíticos finais ligados por hífen viram tokens próprios
//!   (`viens-tu` → `viens`, `tu`; `a-t-il` → `a`, `il`; `donne-le-moi` →
//!   `donne`, `le`, `moi`), a menos que a forma inteira esteja no dicionário
//!   comum (`rendez-vous`).
//!
//! O token do clítico cobre também o hífen que o precede, então os offsets
//! continuam contíguos.

use crate::backtrack::BacktrackBuffer;
use crate::chars::lowercase_into;
use crate::dictionary::DictionaryStore;
use crate::tag::Tag;
use crate::token::{Token, TokenStream};

/// Formas elididas e suas grafias plenas.
const ELIDED: &[(&str, &str)] = &[
    ("l'", "le"),
    ("d'", "de"),
    ("j'", "je"),
    ("m'", "me"),
    ("n'", "ne"),
    ("s'", "se"),
    ("t'", "te"),
    ("c'", "ce"),
    ("qu'", "que"),
    ("jusqu'", "jusque"),
    ("lorsqu'", "lorsque"),
    ("puisqu'", "puisque"),
    ("quoiqu'", "quoique"),
];

/// Pronomes que podem se ligar ao verbo por hífen.
const CLITICS: &[&str] = &[
    "je", "tu", "il", "elle", "on", "nous", "vous", "ils", "elles", "le", "la", "les", "lui",
    "leur", "moi", "toi", "en", "y", "ce",
];

/// Sujeitos que admitem o `-t-` eufônico (`a-t-il`, `va-t-on`).
const EUPHONIC: &[&str] = &["il", "elle", "on", "ils", "elles"];

/// Grafia plena de uma forma elidida (`"Qu'"` → `"que"`).
pub fn expand_elision(form: &str) -> Option<&'static str> {
    if !form.ends_with('\'') {
        return None;
    }
    ELIDED
        .iter()
        .find(|(elided, _)| elided.eq_ignore_ascii_case(form))
        .map(|(_, full)| *full)
}

fn is_clitic(form: &str) -> bool {
    CLITICS.iter().any(|c| c.eq_ignore_ascii_case(form))
}

fn is_euphonic(form: &str) -> bool {
    EUPHONIC.iter().any(|c| c.eq_ignore_ascii_case(form))
}

/// Estágio de separação de elisões e clíticos.
pub struct Elision<'d, S> {
    input: S,
    dict: &'d DictionaryStore,
    pending: BacktrackBuffer,
    scratch: Token,
    lower: String,
    // (início do trecho com o hífen, início do pronome, fim)
    splits: Vec<(usize, usize, usize)>,
}

impl<'d, S: TokenStream> Elision<'d, S> {
    pub fn new(input: S, dict: &'d DictionaryStore) -> Self {
        Self {
            input,
            dict,
            pending: BacktrackBuffer::new(),
            scratch: Token::default(),
            lower: String::new(),
            splits: Vec::new(),
        }
    }

    fn is_common(&mut self, form: &str) -> bool {
        self.dict.lookup_common(lowercase_into(&mut self.lower, form)).is_some()
    }

    /// Separa os clíticos finais de `token`, deixando em `token` só a base.
    fn split_clitics(&mut self, token: &mut Token) {
        // offsets só podem ser recalculados se o texto espelha a fonte
        if token.text.len() != token.end - token.start || !token.text.contains('-') {
            return;
        }
        if self.is_common(&token.text) {
            return;
        }

        let mut cut = token.text.len();
        self.splits.clear();
        while let Some(hyphen) = token.text[..cut].rfind('-') {
            let suffix = &token.text[hyphen + 1..cut];
            if hyphen == 0 || !is_clitic(suffix) {
                break;
            }
            let base = &token.text[..hyphen];
            let mut start = hyphen;
            if is_euphonic(suffix)
                && base.len() > 2
                && (base.ends_with("-t") || base.ends_with("-T"))
            {
                start = hyphen - 2;
            }
            self.splits.push((start, hyphen + 1, cut));
            cut = start;
            if self.is_common(&token.text[..cut]) {
                break;
            }
        }
        if self.splits.is_empty() {
            return;
        }

        for &(from, word, to) in self.splits.iter().rev() {
            self.scratch.clear();
            self.scratch.text.push_str(&token.text[word..to]);
            self.scratch.start = token.start + from;
            self.scratch.end = token.start + to;
            self.pending.add_last(&self.scratch);
        }
        token.text.truncate(cut);
        token.end = token.start + cut;
    }
}

impl<S: TokenStream> TokenStream for Elision<'_, S> {
    fn advance(&mut self, token: &mut Token) -> bool {
        if self.pending.remove_first(token) {
            return true;
        }
        if !self.input.advance(token) {
            return false;
        }
        if !token.is_word() || token.tag == Tag::Abbr {
            return true;
        }
        if let Some(full) = expand_elision(&token.text) {
            if token.orth.is_empty() {
                token.orth.push_str(full);
            }
            return true;
        }
        self.split_clitics(token);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::collect_tokens;
    use crate::tokenizer::Tokenizer;

    fn run(text: &str) -> Vec<Token> {
        let dict = DictionaryStore::french_seed().unwrap();
        collect_tokens(&mut Elision::new(Tokenizer::new(text), &dict))
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_expand_elision() {
        assert_eq!(expand_elision("l'"), Some("le"));
        assert_eq!(expand_elision("Qu'"), Some("que"));
        assert_eq!(expand_elision("jusqu'"), Some("jusque"));
        assert_eq!(expand_elision("aujourd'"), None);
        assert_eq!(expand_elision("le"), None);
    }

    #[test]
    fn test_elided_forms_get_orth() {
        let tokens = run("qu'il l'homme");
        assert_eq!(texts(&tokens), ["qu'", "il", "l'", "homme"]);
        assert_eq!(tokens[0].orth, "que");
        assert_eq!(tokens[2].orth, "le");
        assert!(tokens[1].orth.is_empty());
    }

    #[test]
    fn test_trailing_clitic() {
        let tokens = run("viens-tu");
        assert_eq!(texts(&tokens), ["viens", "tu"]);
        assert_eq!((tokens[0].start, tokens[0].end), (0, 5));
        assert_eq!((tokens[1].start, tokens[1].end), (5, 8));
    }

    #[test]
    fn test_euphonic_t() {
        let tokens = run("a-t-il");
        assert_eq!(texts(&tokens), ["a", "il"]);
        assert_eq!((tokens[0].start, tokens[0].end), (0, 1));
        assert_eq!((tokens[1].start, tokens[1].end), (1, 6));
    }

    #[test]
    fn test_several_clitics() {
        let tokens = run("donne-le-moi !");
        assert_eq!(texts(&tokens), ["donne", "le", "moi", "!"]);
        assert_eq!(tokens[2].end, 12);
    }

    #[test]
    fn test_dictionary_compound_not_split() {
        let tokens = run("rendez-vous peut-être");
        assert_eq!(texts(&tokens), ["rendez-vous", "peut-être"]);
    }
}
