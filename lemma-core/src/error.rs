//! Erros do crate.
//!
//! Só existem duas classes de erro: falha ao montar o dicionário (fatal,
//! sempre antes de qualquer análise) e configuração inválida. O fluxo de
//! tokens em si nunca falha: anomalias de entrada degradam para texto literal.

use std::path::PathBuf;

use thiserror::Error;

/// Falha na construção do [`DictionaryStore`](crate::dictionary::DictionaryStore).
#[derive(Error, Debug)]
pub enum LoadError {
    /// Recurso não pôde ser lido do disco
    #[error("failed to read resource {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Linha malformada
    #[error("{resource}:{line}: {reason}")]
    Syntax {
        resource: String,
        line: usize,
        reason: String,
    },

    /// Registro CSV ilegível (aspas não fechadas, UTF-8 inválido)
    #[error("{resource}: {source}")]
    Csv {
        resource: String,
        #[source]
        source: csv::Error,
    },

    /// Mnemônico de tag desconhecido na coluna TAG
    #[error("{resource}:{line}: unknown tag '{tag}'")]
    UnknownTag {
        resource: String,
        line: usize,
        tag: String,
    },

    /// A tabela de normalização forma um ciclo
    #[error("normalization cycle through '{form}'")]
    NormalizationCycle { form: String },

    /// Falha ao compilar o autômato de stopwords
    #[error("stopword automaton build failed: {0}")]
    Automaton(String),
}

/// Configuração do analisador rejeitada.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}
