//! Canal de lemas.
//!
//! Depois de cada token cujo lema difere da grafia, emite um segundo token
//! com o lema como texto, nos mesmos offsets e com incremento de posição 0:
//! os dois ocupam a mesma posição lógica, como sinônimos em um índice.

use crate::token::{Token, TokenStream};

pub struct LemmaChannel<S> {
    input: S,
    pending: Option<Token>,
}

impl<S: TokenStream> LemmaChannel<S> {
    pub fn new(input: S) -> Self {
        Self { input, pending: None }
    }
}

impl<S: TokenStream> TokenStream for LemmaChannel<S> {
    fn advance(&mut self, token: &mut Token) -> bool {
        if let Some(lemma) = self.pending.as_mut() {
            if !lemma.is_empty() {
                std::mem::swap(token, lemma);
                lemma.clear();
                return true;
            }
        }
        if !self.input.advance(token) {
            return false;
        }
        if !token.lemma.is_empty() && token.lemma != token.orth_or_text() {
            let lemma = self.pending.get_or_insert_with(Token::default);
            lemma.clear();
            lemma.text.push_str(&token.lemma);
            lemma.orth.push_str(&token.lemma);
            lemma.lemma.push_str(&token.lemma);
            lemma.tag = token.tag;
            lemma.start = token.start;
            lemma.end = token.end;
            lemma.position_increment = 0;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::Tag;
    use crate::token::{collect_tokens, VecStream};

    #[test]
    fn test_lemma_token_follows_at_same_position() {
        let mut vit = Token::new("vit", Tag::Verb, 3, 6);
        vit.orth.push_str("vit");
        vit.lemma.push_str("vivre");
        let mut le = Token::new("le", Tag::DetArt, 7, 9);
        le.lemma.push_str("le");
        let tokens = collect_tokens(&mut LemmaChannel::new(VecStream::new(vec![vit, le])));

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["vit", "vivre", "le"]);
        assert_eq!(tokens[1].position_increment, 0);
        assert_eq!((tokens[1].start, tokens[1].end), (3, 6));
        assert_eq!(tokens[1].tag, Tag::Verb);
        assert_eq!(tokens[2].position_increment, 1);
    }

    #[test]
    fn test_no_lemma_no_extra_token() {
        let tokens = collect_tokens(&mut LemmaChannel::new(VecStream::new(vec![Token::new(
            "zorglub",
            Tag::Unknown,
            0,
            7,
        )])));
        assert_eq!(tokens.len(), 1);
    }
}
