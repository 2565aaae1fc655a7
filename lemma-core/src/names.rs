//! # Fusão de Nomes Próprios
//!
//! Junta em um token só as sequências que formam um nome: `Charles de Gaulle`,
//! `Monsieur Dupont`, `rue Lafayette`, `Louis XIV`.
//!
//! ## Candidatos
//!
//! Um nome começa em um token já etiquetado como nome, ou em um título que
//! pode introduzir um nome: tratamentos e parentesco (`monsieur`, `oncle`,
//! tag SUBpers) e tipos de lugar (`rue`, `lac`, tag SUBplace).
//!
//! ## Sondagem
//!
//! - partícula (`de`, `du`, `la`, `von`...): entra no nome mas nunca o
//!   encerra, então um nome não termina em partícula solta;
//! - token com inicial maiúscula: estende o nome até ele e refina a tag;
//! - qualquer outra coisa encerra a sondagem.
//!
//! Se nenhum fragmento em maiúscula seguir o candidato, os tokens lidos a
//! mais voltam para a entrada e o candidato sai intacto
//! (`Monsieur est arrivé` → `Monsieur` continua SUBpers).

use tracing::trace;

use crate::backtrack::{BacktrackBuffer, Lookahead};
use crate::dictionary::DictionaryStore;
use crate::tag::Tag;
use crate::token::{Token, TokenStream};

/// Conectivos aceitos dentro de um nome.
const PARTICLES: &[&str] = &[
    "de", "du", "des", "d'", "la", "le", "les", "von", "van", "der", "den", "di", "da", "del",
    "della", "dos",
];

pub fn is_particle(form: &str) -> bool {
    PARTICLES.iter().any(|p| p.eq_ignore_ascii_case(form))
}

fn is_candidate(token: &Token) -> bool {
    token.tag.is_name() || token.tag.is_title()
}

/// Hipótese de tag a partir do token inicial.
fn initial_hypothesis(tag: Tag) -> Tag {
    match tag {
        Tag::SubPerson => Tag::NamePerson,
        Tag::SubPlace => Tag::NamePlace,
        other => other,
    }
}

/// Refina a hipótese com a tag de um novo fragmento do nome.
///
/// Um fragmento de pessoa (nome ou prenome do dicionário) sempre puxa para
/// pessoa, mesmo depois de um tipo de lugar.
pub fn combine(hypothesis: Tag, fragment: Tag) -> Tag {
    match (hypothesis, fragment) {
        (_, Tag::NamePerson | Tag::NameFirst) => Tag::NamePerson,
        (Tag::NamePerson, _) => Tag::NamePerson,
        (Tag::NamePlace, _) => Tag::NamePlace,
        (Tag::NameOrg, _) => Tag::NameOrg,
        (Tag::NameFirst, _) => Tag::NamePerson,
        (_, Tag::NamePlace) => Tag::NamePlace,
        _ => Tag::Name,
    }
}

/// Estágio de fusão de nomes próprios.
pub struct ProperNameMerger<'d, S> {
    input: Lookahead<S>,
    dict: &'d DictionaryStore,
    probe: BacktrackBuffer,
    next: Token,
}

impl<'d, S: TokenStream> ProperNameMerger<'d, S> {
    pub fn new(input: S, dict: &'d DictionaryStore) -> Self {
        Self {
            input: Lookahead::new(input),
            dict,
            probe: BacktrackBuffer::new(),
            next: Token::default(),
        }
    }

    /// Retorna quantos tokens da sondagem formam o nome e a tag final.
    fn probe_forward(&mut self, mut hypothesis: Tag) -> (usize, Tag) {
        let mut name_end = 1;
        let mut name_tag = hypothesis;
        while self.input.pull(&mut self.next) {
            self.probe.add_last(&self.next);
            if !self.next.is_word() {
                break;
            }
            if is_particle(&self.next.text) {
                continue;
            }
            if !self.next.is_capitalized() {
                break;
            }
            hypothesis = combine(hypothesis, self.next.tag);
            name_end = self.probe.len();
            name_tag = hypothesis;
        }
        (name_end, name_tag)
    }

    fn merge_into(&mut self, token: &mut Token, len: usize, tag: Tag) {
        token.clear();
        for i in 0..len {
            let Some(part) = self.probe.get(i) else {
                break;
            };
            if i == 0 {
                token.start = part.start;
                token.position_increment = part.position_increment;
            } else if !token.text.ends_with('\'') {
                token.text.push(' ');
            }
            token.text.push_str(&part.text);
            token.end = part.end;
        }
        token.tag = tag;
        token.orth.push_str(&token.text);
        if let Some(entry) = self.dict.lookup_proper(&token.text) {
            token.tag = entry.tag;
            if let Some(orth) = &entry.orth {
                token.orth.clone_from(orth);
            }
            if let Some(lemma) = &entry.lemma {
                token.lemma.push_str(lemma);
            }
        }
        for _ in 0..len {
            self.probe.remove_first(&mut self.next);
        }
    }
}

impl<S: TokenStream> TokenStream for ProperNameMerger<'_, S> {
    fn advance(&mut self, token: &mut Token) -> bool {
        if !self.input.pull(token) {
            return false;
        }
        if !is_candidate(token) {
            return true;
        }

        self.probe.clear();
        self.probe.add_last(token);
        let (name_end, tag) = self.probe_forward(initial_hypothesis(token.tag));

        if name_end > 1 {
            self.merge_into(token, name_end, tag);
            trace!(name = %token.text, tag = %token.tag, "proper name merged");
        } else {
            self.probe.remove_first(&mut self.next);
            trace!(first = %token.text, replayed = self.probe.len(), "name probe rewound");
        }
        self.input.rewind(&mut self.probe);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elision::Elision;
    use crate::lemmatizer::Lemmatizer;
    use crate::token::collect_tokens;
    use crate::tokenizer::Tokenizer;

    fn run(text: &str) -> Vec<Token> {
        let dict = DictionaryStore::french_seed().unwrap();
        let scanner = Tokenizer::with_dictionary(text, &dict);
        let tagged = Lemmatizer::new(Elision::new(scanner, &dict), &dict);
        collect_tokens(&mut ProperNameMerger::new(tagged, &dict))
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_title_and_name() {
        let text = "Monsieur Dupont est arrivé.";
        let tokens = run(text);
        assert_eq!(texts(&tokens), ["Monsieur Dupont", "est", "arrivé", "."]);
        assert_eq!(tokens[0].tag, Tag::NamePerson);
        assert_eq!((tokens[0].start, tokens[0].end), (0, 15));
    }

    #[test]
    fn test_title_alone_rewinds() {
        let tokens = run("Monsieur est arrivé.");
        assert_eq!(texts(&tokens), ["Monsieur", "est", "arrivé", "."]);
        assert_eq!(tokens[0].tag, Tag::SubPerson);
        assert_eq!(tokens[0].orth, "monsieur");
        assert_eq!(tokens[1].tag, Tag::VerbAux);
    }

    #[test]
    fn test_particles() {
        let tokens = run("Charles de Gaulle parle");
        assert_eq!(texts(&tokens), ["Charles de Gaulle", "parle"]);
        assert_eq!(tokens[0].tag, Tag::NamePerson);
    }

    #[test]
    fn test_name_never_ends_on_particle() {
        let tokens = run("Jean de la maison");
        assert_eq!(texts(&tokens), ["Jean", "de", "la", "maison"]);
        assert_eq!(tokens[0].tag, Tag::NameFirst);
        assert_eq!(tokens[1].tag, Tag::Prep);
    }

    #[test]
    fn test_place_type() {
        let tokens = run("la rue Lafayette");
        assert_eq!(texts(&tokens), ["la", "rue Lafayette"]);
        assert_eq!(tokens[1].tag, Tag::NamePlace);
    }

    #[test]
    fn test_proper_dictionary_overrides() {
        let tokens = run("Victor Hugo vit");
        assert_eq!(texts(&tokens), ["Victor Hugo", "vit"]);
        assert_eq!(tokens[0].tag, Tag::NamePerson);
        assert_eq!(tokens[0].lemma, "Victor Hugo");
    }

    #[test]
    fn test_roman_suffix() {
        let tokens = run("Louis XIV");
        assert_eq!(texts(&tokens), ["Louis XIV"]);
        assert_eq!(tokens[0].tag, Tag::NamePerson);
    }

    #[test]
    fn test_combine() {
        assert_eq!(combine(Tag::NamePlace, Tag::NameFirst), Tag::NamePerson);
        assert_eq!(combine(Tag::NamePlace, Tag::Name), Tag::NamePlace);
        assert_eq!(combine(Tag::Name, Tag::Name), Tag::Name);
        assert_eq!(combine(Tag::Name, Tag::NamePlace), Tag::NamePlace);
        assert_eq!(combine(Tag::NameFirst, Tag::Name), Tag::NamePerson);
    }

    #[test]
    fn test_is_particle() {
        assert!(is_particle("De"));
        assert!(is_particle("d'"));
        assert!(!is_particle("Dupont"));
    }
}
