//! # Pipeline de Análise — Orquestrador dos Estágios
//!
//! O [`Analyzer`] monta a cadeia de estágios a partir da configuração e a
//! aplica a um documento:
//!
//! ```text
//! Tokenizer → Elision? → Lemmatizer → Locuções? ⇄ Nomes? → Stopwords? → Lemas?
//! ```
//!
//! Cada documento ganha uma cadeia própria, com seus buffers de retrocesso
//! e seu estado de início de frase. O [`DictionaryStore`] é o único dado
//! compartilhado: é imutável e fica atrás de um `Arc`, então vários
//! documentos podem ser analisados em paralelo ([`Analyzer::analyze_batch`]).

use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug;

use crate::config::{AnalyzerConfig, MergeOrder};
use crate::dictionary::DictionaryStore;
use crate::elision::Elision;
use crate::error::{ConfigError, LoadError};
use crate::lemma_channel::LemmaChannel;
use crate::lemmatizer::Lemmatizer;
use crate::locution::LocutionMerger;
use crate::names::ProperNameMerger;
use crate::stop::StopFilter;
use crate::token::{collect_tokens, Token, TokenStream};
use crate::tokenizer::Tokenizer;

/// Analisador de textos: dicionário compartilhado mais configuração.
#[derive(Debug, Clone)]
pub struct Analyzer {
    dict: Arc<DictionaryStore>,
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Analisador com a configuração padrão.
    pub fn new(dict: Arc<DictionaryStore>) -> Self {
        Self {
            dict,
            config: AnalyzerConfig::default(),
        }
    }

    pub fn with_config(
        dict: Arc<DictionaryStore>,
        config: AnalyzerConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { dict, config })
    }

    /// Analisador sobre o léxico-semente embutido.
    pub fn french() -> Result<Self, LoadError> {
        Ok(Self::new(Arc::new(DictionaryStore::french_seed()?)))
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &DictionaryStore {
        &self.dict
    }

    /// Cadeia de estágios sobre `text`, consumida sob demanda.
    pub fn stream<'a>(&'a self, text: &'a str) -> Box<dyn TokenStream + 'a> {
        let dict: &'a DictionaryStore = &self.dict;
        let config = &self.config;

        let mut stream: Box<dyn TokenStream + 'a> =
            Box::new(Tokenizer::with_dictionary(text, dict).max_chars(config.max_token_chars));
        if config.split_elisions {
            stream = Box::new(Elision::new(stream, dict));
        }
        stream = Box::new(Lemmatizer::new(stream, dict));

        let locutions = |s: Box<dyn TokenStream + 'a>| -> Box<dyn TokenStream + 'a> {
            if config.locutions {
                Box::new(LocutionMerger::new(s, dict))
            } else {
                s
            }
        };
        let names = |s: Box<dyn TokenStream + 'a>| -> Box<dyn TokenStream + 'a> {
            if config.proper_names {
                Box::new(ProperNameMerger::new(s, dict))
            } else {
                s
            }
        };
        stream = match config.merge_order {
            MergeOrder::LocutionsFirst => names(locutions(stream)),
            MergeOrder::NamesFirst => locutions(names(stream)),
        };

        if config.skip_stopwords {
            stream = Box::new(StopFilter::new(stream, dict));
        }
        if config.lemma_channel {
            stream = Box::new(LemmaChannel::new(stream));
        }
        stream
    }

    /// Analisa um documento inteiro.
    pub fn analyze(&self, text: &str) -> Vec<Token> {
        let mut stream = self.stream(text);
        let tokens = collect_tokens(&mut stream);
        debug!(bytes = text.len(), tokens = tokens.len(), "document analyzed");
        tokens
    }

    /// Analisa vários documentos em paralelo, um pipeline por documento.
    pub fn analyze_batch(&self, texts: &[&str]) -> Vec<Vec<Token>> {
        texts.par_iter().map(|text| self.analyze(text)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::Tag;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_pipeline_basic() {
        let analyzer = Analyzer::french().unwrap();
        let tokens = analyzer.analyze("Monsieur Dupont vit le chemin de fer.");
        assert_eq!(texts(&tokens), ["Monsieur Dupont", "vit", "le", "chemin de fer", "."]);
        assert_eq!(tokens[0].tag, Tag::NamePerson);
        assert_eq!(tokens[3].lemma, "chemin_de_fer");
    }

    #[test]
    fn test_pipeline_empty() {
        let analyzer = Analyzer::french().unwrap();
        assert!(analyzer.analyze("").is_empty());
        assert!(analyzer.analyze("   ").is_empty());
    }

    #[test]
    fn test_disabled_stages() {
        let dict = Arc::new(DictionaryStore::french_seed().unwrap());
        let config = AnalyzerConfig {
            locutions: false,
            proper_names: false,
            split_elisions: false,
            ..AnalyzerConfig::default()
        };
        let analyzer = Analyzer::with_config(dict, config).unwrap();
        let tokens = analyzer.analyze("Monsieur Dupont vit le chemin de fer.");
        assert_eq!(
            texts(&tokens),
            ["Monsieur", "Dupont", "vit", "le", "chemin", "de", "fer", "."]
        );
    }

    #[test]
    fn test_stopwords_and_lemmas() {
        let dict = Arc::new(DictionaryStore::french_seed().unwrap());
        let config = AnalyzerConfig {
            skip_stopwords: true,
            lemma_channel: true,
            ..AnalyzerConfig::default()
        };
        let analyzer = Analyzer::with_config(dict, config).unwrap();
        let tokens = analyzer.analyze("Il vit le chemin de fer.");
        assert_eq!(texts(&tokens), ["vit", "vivre", "chemin de fer", "chemin_de_fer", "."]);
        assert_eq!(tokens[0].position_increment, 2);
        assert_eq!(tokens[1].position_increment, 0);
        assert_eq!(tokens[2].position_increment, 2);
    }

    #[test]
    fn test_names_first_order() {
        let dict = Arc::new(DictionaryStore::french_seed().unwrap());
        let config = AnalyzerConfig {
            merge_order: MergeOrder::NamesFirst,
            ..AnalyzerConfig::default()
        };
        let analyzer = Analyzer::with_config(dict, config).unwrap();
        let tokens = analyzer.analyze("à New York");
        assert_eq!(texts(&tokens), ["à", "New York"]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let dict = Arc::new(DictionaryStore::french_seed().unwrap());
        let config = AnalyzerConfig {
            max_token_chars: 0,
            ..AnalyzerConfig::default()
        };
        assert!(Analyzer::with_config(dict, config).is_err());
    }

    #[test]
    fn test_batch_matches_sequential() {
        let analyzer = Analyzer::french().unwrap();
        let docs = ["Il vit le chemin de fer.", "Monsieur est arrivé.", "XIV", ""];
        let batch = analyzer.analyze_batch(&docs);
        assert_eq!(batch.len(), docs.len());
        for (doc, tokens) in docs.iter().zip(&batch) {
            assert_eq!(&analyzer.analyze(doc), tokens);
        }
    }
}
