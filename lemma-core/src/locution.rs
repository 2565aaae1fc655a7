//! # Fusão de Locuções
//!
//! Junta sequências de tokens que formam uma expressão fixa registrada na
//! trie de locuções ("chemin de fer", "tout à fait", "aujourd'hui") em um
//! único token que cobre a expressão inteira.
//!
//! ## Sondagem
//!
//! A partir de um token cuja chave é prefixo de alguma locução, o estágio
//! vai puxando tokens e estendendo a chave composta:
//!
//! | Estado na trie | Ação                                                     |
//! |----------------|----------------------------------------------------------|
//! | ausente        | fim da sondagem                                          |
//! | `Branch`       | continua                                                 |
//! | `Leaf`         | guarda como melhor casamento e encerra                   |
//! | `Both`         | guarda como melhor casamento e continua, buscando um mais longo |
//!
//! No fim, os tokens do melhor casamento viram um token só, e o que foi lido
//! a mais volta para a entrada, na mesma ordem. Sem casamento, o primeiro
//! token sai intacto e os demais são relidos: a saída é a mesma que se o
//! estágio não existisse.
//!
//! ## Chave de comparação
//!
//! - forma terminada em apóstrofo: o texto em minúsculas (`D'` → `d'`);
//! - verbo: o lema (`a lieu` → `avoir lieu`), exceto particípios que
//!   precisam ser comparados literalmente (`fait` em "tout à fait");
//! - número e nome próprio: o texto;
//! - demais: a grafia normalizada.

use tracing::trace;

use crate::backtrack::{BacktrackBuffer, Lookahead};
use crate::dictionary::DictionaryStore;
use crate::tag::Tag;
use crate::token::{Token, TokenStream};

/// Formas verbais comparadas pela grafia, nunca pelo lema.
const LITERAL_FORMS: &[&str] = &[
    "été", "fait", "faits", "dit", "dite", "vu", "pu", "su", "avoir", "être", "devoir",
    "pouvoir", "savoir", "voir", "vouloir",
];

/// Acrescenta a chave de comparação de `token` à chave composta.
pub fn append_key(compound: &mut String, token: &Token) {
    if !compound.is_empty() && !compound.ends_with('\'') {
        compound.push(' ');
    }
    if token.text.ends_with('\'') {
        compound.extend(token.text.chars().flat_map(char::to_lowercase));
        return;
    }
    let form = token.orth_or_text();
    let key = if token.tag.is_verb() && !token.lemma.is_empty() && !LITERAL_FORMS.contains(&form) {
        token.lemma.as_str()
    } else if token.tag == Tag::Num || token.tag.is_name() {
        token.text.as_str()
    } else {
        form
    };
    compound.push_str(key);
}

/// Estágio de fusão de locuções.
pub struct LocutionMerger<'d, S> {
    input: Lookahead<S>,
    dict: &'d DictionaryStore,
    probe: BacktrackBuffer,
    next: Token,
    compound: String,
    best: String,
}

impl<'d, S: TokenStream> LocutionMerger<'d, S> {
    pub fn new(input: S, dict: &'d DictionaryStore) -> Self {
        Self {
            input: Lookahead::new(input),
            dict,
            probe: BacktrackBuffer::new(),
            next: Token::default(),
            compound: String::new(),
            best: String::new(),
        }
    }

    /// Sonda a partir do primeiro token (já em `probe`).
    /// Retorna quantos tokens formam o melhor casamento (0 se nenhum).
    fn probe_forward(&mut self, mut best_len: usize) -> usize {
        while self.input.pull(&mut self.next) {
            self.probe.add_last(&self.next);
            if !self.next.is_word() {
                break;
            }
            append_key(&mut self.compound, &self.next);
            match self.dict.trie_status(&self.compound) {
                None => break,
                Some(status) => {
                    if status.is_leaf() {
                        best_len = self.probe.len();
                        self.best.clone_from(&self.compound);
                    }
                    if !status.is_branch() {
                        break;
                    }
                }
            }
        }
        best_len
    }

    /// Funde os `len` primeiros tokens da sondagem em `token`.
    fn merge_into(&mut self, token: &mut Token, len: usize) {
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

        let entry = self
            .dict
            .lookup_common(&self.best)
            .or_else(|| self.dict.lookup_proper(&self.best));
        match entry {
            Some(entry) => {
                token.tag = entry.tag;
                token.orth.push_str(entry.orth.as_deref().unwrap_or(&self.best));
                if let Some(lemma) = &entry.lemma {
                    token.lemma.push_str(lemma);
                }
            }
            None => token.orth.push_str(&self.best),
        }

        for _ in 0..len {
            self.probe.remove_first(&mut self.next);
        }
    }
}

impl<S: TokenStream> TokenStream for LocutionMerger<'_, S> {
    fn advance(&mut self, token: &mut Token) -> bool {
        if !self.input.pull(token) {
            return false;
        }
        if !token.is_word() {
            return true;
        }

        self.compound.clear();
        append_key(&mut self.compound, token);
        let status = match self.dict.trie_status(&self.compound) {
            Some(status) if status.is_branch() => status,
            // prefixo desconhecido, ou locução de um token só (já etiquetada)
            _ => return true,
        };

        self.probe.clear();
        self.probe.add_last(token);
        let mut best_len = 0;
        if status.is_leaf() {
            best_len = 1;
            self.best.clone_from(&self.compound);
        }
        let best_len = self.probe_forward(best_len);

        if best_len > 1 {
            self.merge_into(token, best_len);
            trace!(locution = %self.best, start = token.start, end = token.end, "locution merged");
        } else {
            // o primeiro token já está em `token`
            self.probe.remove_first(&mut self.next);
            trace!(first = %token.text, replayed = self.probe.len(), "locution probe rewound");
        }
        self.input.rewind(&mut self.probe);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryEntry;
    use crate::elision::Elision;
    use crate::lemmatizer::Lemmatizer;
    use crate::token::collect_tokens;
    use crate::tokenizer::Tokenizer;

    fn run(dict: &DictionaryStore, text: &str) -> Vec<Token> {
        let scanner = Tokenizer::with_dictionary(text, dict);
        let tagged = Lemmatizer::new(Elision::new(scanner, dict), dict);
        collect_tokens(&mut LocutionMerger::new(tagged, dict))
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_chemin_de_fer() {
        let dict = DictionaryStore::french_seed().unwrap();
        let text = "Il vit le chemin de fer.";
        let tokens = run(&dict, text);
        assert_eq!(texts(&tokens), ["Il", "vit", "le", "chemin de fer", "."]);
        let merged = &tokens[3];
        assert_eq!(merged.tag, Tag::Sub);
        assert_eq!(merged.lemma, "chemin_de_fer");
        assert_eq!(&text[merged.start..merged.end], "chemin de fer");
        assert_eq!(merged.position_increment, 1);
    }

    #[test]
    fn test_dead_end_replays_unchanged() {
        let dict = DictionaryStore::french_seed().unwrap();
        let tokens = run(&dict, "le chemin de Paris");
        assert_eq!(texts(&tokens), ["le", "chemin", "de", "Paris"]);
        assert_eq!(tokens[1].tag, Tag::Sub);
        assert_eq!(tokens[3].tag, Tag::NamePlace);
    }

    #[test]
    fn test_probe_stops_at_punctuation() {
        let dict = DictionaryStore::french_seed().unwrap();
        let tokens = run(&dict, "chemin de, fer");
        assert_eq!(texts(&tokens), ["chemin", "de", ",", "fer"]);
    }

    #[test]
    fn test_apostrophe_locution() {
        let dict = DictionaryStore::french_seed().unwrap();
        let tokens = run(&dict, "Aujourd'hui, tout à fait, d'abord");
        assert_eq!(texts(&tokens), ["Aujourd'hui", ",", "tout à fait", ",", "d'abord"]);
        assert_eq!(tokens[0].tag, Tag::Adv);
        assert_eq!(tokens[2].lemma, "tout_à_fait");
        assert_eq!(tokens[4].lemma, "d'abord");
    }

    #[test]
    fn test_verb_compared_by_lemma() {
        let dict = DictionaryStore::french_seed().unwrap();
        let tokens = run(&dict, "la fête a lieu");
        assert_eq!(texts(&tokens), ["la", "fête", "a lieu"]);
        assert_eq!(tokens[2].lemma, "avoir_lieu");
        assert_eq!(tokens[2].tag, Tag::Verb);
    }

    #[test]
    fn test_proper_locution() {
        let dict = DictionaryStore::french_seed().unwrap();
        let tokens = run(&dict, "à New York");
        assert_eq!(texts(&tokens), ["à", "New York"]);
        assert_eq!(tokens[1].tag, Tag::NamePlace);
    }

    #[test]
    fn test_longest_match_wins() {
        let mut builder = DictionaryStore::builder();
        builder
            .add_common("pomme", DictionaryEntry::new(Tag::Sub, None, Some("pomme")))
            .add_common(
                "pomme de terre",
                DictionaryEntry::new(Tag::Sub, None, Some("pomme_de_terre")),
            )
            .add_common(
                "pomme de terre cuite",
                DictionaryEntry::new(Tag::Sub, None, Some("pomme_de_terre_cuite")),
            );
        let dict = builder.build().unwrap();

        let tokens = run(&dict, "pomme de terre cuite");
        assert_eq!(texts(&tokens), ["pomme de terre cuite"]);

        // `Both` sem continuação: fica o casamento mais longo já visto
        let tokens = run(&dict, "pomme de terre crue");
        assert_eq!(texts(&tokens), ["pomme de terre", "crue"]);
        assert_eq!(tokens[0].lemma, "pomme_de_terre");
        assert_eq!(tokens[1].start, 15);
    }

    #[test]
    fn test_compound_without_entry() {
        let mut builder = DictionaryStore::builder();
        builder.compound("au revoir");
        let dict = builder.build().unwrap();
        let tokens = run(&dict, "au revoir");
        assert_eq!(texts(&tokens), ["au revoir"]);
        assert_eq!(tokens[0].orth, "au revoir");
        assert_eq!(tokens[0].tag, Tag::Unknown);
    }

    #[test]
    fn test_append_key() {
        let mut key = String::new();
        let mut t = Token::new("D'", Tag::Prep, 0, 2);
        t.orth.push_str("de");
        append_key(&mut key, &t);
        assert_eq!(key, "d'");
        let mut t = Token::new("fait", Tag::VerbPpass, 0, 4);
        t.lemma.push_str("faire");
        append_key(&mut key, &t);
        assert_eq!(key, "d'fait");
    }
}
