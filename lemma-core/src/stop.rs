//! Remoção de stopwords.
//!
//! Tokens de palavra cuja forma (grafia normalizada ou texto, em minúsculas)
//! está no conjunto de stopwords são descartados. O incremento de posição
//! deles é somado ao próximo token mantido, para que as distâncias entre as
//! palavras restantes continuem refletindo o texto original.

use crate::dictionary::DictionaryStore;
use crate::token::{Token, TokenStream};

pub struct StopFilter<'d, S> {
    input: S,
    dict: &'d DictionaryStore,
    lower: String,
}

impl<'d, S: TokenStream> StopFilter<'d, S> {
    pub fn new(input: S, dict: &'d DictionaryStore) -> Self {
        Self {
            input,
            dict,
            lower: String::new(),
        }
    }

    fn is_stop(&mut self, form: &str) -> bool {
        self.lower.clear();
        self.lower.extend(form.chars().flat_map(char::to_lowercase));
        self.dict.is_stopword(&self.lower)
    }

    fn should_skip(&mut self, token: &Token) -> bool {
        if !token.is_word() {
            return false;
        }
        self.is_stop(token.orth_or_text()) || (!token.orth.is_empty() && self.is_stop(&token.text))
    }
}

impl<S: TokenStream> TokenStream for StopFilter<'_, S> {
    fn advance(&mut self, token: &mut Token) -> bool {
        let mut skipped = 0u32;
        while self.input.advance(token) {
            if self.should_skip(token) {
                skipped = skipped.saturating_add(token.position_increment);
                continue;
            }
            token.position_increment = token.position_increment.saturating_add(skipped);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Resource, ResourceKind};
    use crate::tag::Tag;
    use crate::token::{collect_tokens, VecStream};

    fn store() -> DictionaryStore {
        DictionaryStore::load(&[Resource::new(
            ResourceKind::Stopwords,
            "stop",
            "le\nde\nque\n",
        )])
        .unwrap()
    }

    #[test]
    fn test_drops_stopwords_and_accumulates_increments() {
        let dict = store();
        let input = VecStream::new(vec![
            Token::new("Le", Tag::DetArt, 0, 2),
            Token::new("chemin", Tag::Sub, 3, 9),
            Token::new("de", Tag::Prep, 10, 12),
            Token::new("fer", Tag::Sub, 13, 16),
            Token::new(".", Tag::PunctSentence, 16, 17),
        ]);
        let tokens = collect_tokens(&mut StopFilter::new(input, &dict));
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["chemin", "fer", "."]);
        assert_eq!(tokens[0].position_increment, 2);
        assert_eq!(tokens[1].position_increment, 2);
        assert_eq!(tokens[2].position_increment, 1);
    }

    #[test]
    fn test_elided_form_matches_by_orth() {
        let dict = store();
        let mut qu = Token::new("qu'", Tag::Conj, 0, 3);
        qu.orth.push_str("que");
        let input = VecStream::new(vec![qu, Token::new("il", Tag::Pron, 3, 5)]);
        let tokens = collect_tokens(&mut StopFilter::new(input, &dict));
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "il");
        assert_eq!(tokens[0].position_increment, 2);
    }

    #[test]
    fn test_prefix_of_stopword_is_kept() {
        let dict = store();
        let input = VecStream::new(vec![Token::new("lequel", Tag::Pron, 0, 6)]);
        let tokens = collect_tokens(&mut StopFilter::new(input, &dict));
        assert_eq!(tokens.len(), 1);
    }
}
