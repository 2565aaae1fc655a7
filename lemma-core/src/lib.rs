//! # lemma-core — Análise Lexical e Lematização de Textos em Francês
//!
//! Este crate transforma texto bruto em um fluxo de tokens etiquetados e
//! lematizados, pronto para indexação: cada token traz o texto original, a
//! grafia normalizada, o lema, uma tag morfossintática e seus offsets no
//! texto de origem.
//!
//! ## Arquitetura do Sistema
//!
//! Uma cadeia de estágios em modo *pull*, cada um implementando [`TokenStream`]:
//!
//! 1.  **Tokenização** ([`tokenizer`]): scanner de estados finitos; marcações, entidades,
//!     números, palavras, abreviações e pontuação.
//! 2.  **Elisões** ([`elision`]): `qu'` → `que`, `viens-tu` → `viens` + `tu`.
//! 3.  **Etiquetagem** ([`lemmatizer`]): tag, grafia e lema a partir do [`DictionaryStore`].
//! 4.  **Locuções** ([`locution`]): "chemin de fer" vira um token só.
//! 5.  **Nomes próprios** ([`names`]): "Monsieur Dupont", "Charles de Gaulle".
//! 6.  **Opcionais**: remoção de stopwords ([`stop`]) e canal de lemas ([`lemma_channel`]).
//!
//! Os dois estágios de composição olham tokens à frente e, quando a hipótese
//! falha, devolvem o que leram a mais por meio do [`backtrack::BacktrackBuffer`].
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use lemma_core::{Analyzer, Tag};
//!
//! // 1. Carrega o léxico embutido (nunca parcialmente: erro ou store completo)
//! let analyzer = Analyzer::french().expect("seed lexicon loads");
//!
//! // 2. Analisa um documento
//! let tokens = analyzer.analyze("Il vit le chemin de fer.");
//!
//! // 3. A locução foi fundida em um token só
//! let locution = &tokens[3];
//! assert_eq!(locution.text, "chemin de fer");
//! assert_eq!(locution.tag, Tag::Sub);
//! assert_eq!(locution.lemma, "chemin_de_fer");
//! ```
//!
//! ## Módulos Principais
//!
//! - [`pipeline`]: o [`Analyzer`], que monta a cadeia a partir da [`AnalyzerConfig`].
//! - [`dictionary`]: tabelas, carregador de recursos e trie de locuções.
//! - [`seed`]: léxico-semente em francês.
//! - [`chars`]: classificação de caracteres.

pub mod backtrack;
pub mod chars;
pub mod config;
pub mod dictionary;
pub mod elision;
pub mod entity;
pub mod error;
pub mod lemma_channel;
pub mod lemmatizer;
pub mod locution;
pub mod names;
pub mod pipeline;
pub mod roman;
pub mod seed;
pub mod stop;
pub mod tag;
pub mod token;
pub mod tokenizer;

pub use config::{AnalyzerConfig, MergeOrder};
pub use dictionary::{
    DictionaryBuilder, DictionaryEntry, DictionaryStore, Resource, ResourceKind, TrieStatus,
};
pub use error::{ConfigError, LoadError};
pub use pipeline::Analyzer;
pub use tag::Tag;
pub use token::{collect_tokens, Token, TokenStream};
pub use tokenizer::Tokenizer;
