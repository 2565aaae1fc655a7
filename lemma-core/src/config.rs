//! Configuração do analisador.
//!
//! Todos os campos têm valor padrão, então um JSON parcial (ou `{}`) é
//! válido:
//!
//! ```json
//! { "max_token_chars": 128, "merge_order": "names_first", "skip_stopwords": true }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::tokenizer::DEFAULT_MAX_TOKEN_CHARS;

/// Ordem dos dois estágios de composição.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeOrder {
    /// Locuções antes de nomes próprios ("New York" vem do dicionário pronto)
    #[default]
    LocutionsFirst,
    NamesFirst,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Tamanho máximo de um token, em caracteres
    pub max_token_chars: usize,
    /// Separar clíticos e expandir elisões
    pub split_elisions: bool,
    pub locutions: bool,
    pub proper_names: bool,
    pub merge_order: MergeOrder,
    /// Descartar stopwords da saída
    pub skip_stopwords: bool,
    /// Emitir um token de lema (incremento 0) após cada token lematizado
    pub lemma_channel: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_token_chars: DEFAULT_MAX_TOKEN_CHARS,
            split_elisions: true,
            locutions: true,
            proper_names: true,
            merge_order: MergeOrder::LocutionsFirst,
            skip_stopwords: false,
            lemma_channel: false,
        }
    }
}

impl AnalyzerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AnalyzerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_token_chars == 0 {
            return Err(ConfigError::Invalid("max_token_chars must be at least 1".into()));
        }
        Ok(())
    }
}
