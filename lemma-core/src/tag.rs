//! # Categorias Gramaticais (Tags)
//!
//! Enumeração das etiquetas atribuídas a cada token ao longo do pipeline.
//! Cada variante tem um mnemônico curto, o mesmo usado na coluna `TAG` dos
//! recursos de dicionário.
//!
//! | Mnemônico    | Significado                          | Exemplos              |
//! |--------------|--------------------------------------|-----------------------|
//! | `SUB`        | Substantivo comum                    | chemin, pomme         |
//! | `SUBpers`    | Título ou parentesco (pode introduzir nome) | monsieur, oncle |
//! | `SUBplace`   | Tipo de lugar (pode introduzir nome) | rue, place, lac       |
//! | `VERB`       | Verbo                                | vit, est              |
//! | `NAME`       | Nome próprio não resolvido           | Dupont                |
//! | `NAMEpers`   | Pessoa                               | Victor Hugo           |
//! | `NAMEpersf`  | Prenome                              | Victor                |
//! | `NAMEplace`  | Lugar                                | Paris                 |
//! | `PUNcl`      | Pontuação de oração                  | , ; :                 |
//! | `PUNsent`    | Pontuação de frase                   | . ? ! …               |
//! | `XML`        | Marcação                             | `<p>`                 |

use serde::{Deserialize, Serialize};

/// Etiqueta gramatical de um token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tag {
    /// Nenhuma informação (palavra desconhecida ou ainda não etiquetada).
    #[default]
    Unknown,
    /// Marcação (tag XML/HTML bruta).
    Xml,
    /// Número (algarismos ou romanos).
    Num,
    /// Abreviação com ponto.
    Abbr,
    /// Nome próprio sem categoria resolvida.
    Name,
    /// Nome de pessoa completo.
    NamePerson,
    /// Prenome.
    NameFirst,
    /// Nome de lugar.
    NamePlace,
    /// Nome de organização.
    NameOrg,
    /// Substantivo comum.
    Sub,
    /// Substantivo que pode introduzir um nome de pessoa ("Madame", "oncle").
    SubPerson,
    /// Substantivo que pode introduzir um nome de lugar ("rue", "mont").
    SubPlace,
    Adj,
    Verb,
    /// Auxiliar (être, avoir).
    VerbAux,
    /// Particípio passado.
    VerbPpass,
    Adv,
    Det,
    /// Artigo.
    DetArt,
    Prep,
    Pron,
    Conj,
    /// Outra pontuação ou símbolo ("(", "«", "-").
    Punct,
    /// Pontuação de oração: `,` `;` `:`.
    PunctClause,
    /// Pontuação de frase: `.` `?` `!` `…`.
    PunctSentence,
}

impl Tag {
    /// Mnemônico da tag (o mesmo dos recursos de dicionário).
    pub fn label(&self) -> &'static str {
        match self {
            Tag::Unknown => "UNKNOWN",
            Tag::Xml => "XML",
            Tag::Num => "NUM",
            Tag::Abbr => "ABBR",
            Tag::Name => "NAME",
            Tag::NamePerson => "NAMEpers",
            Tag::NameFirst => "NAMEpersf",
            Tag::NamePlace => "NAMEplace",
            Tag::NameOrg => "NAMEorg",
            Tag::Sub => "SUB",
            Tag::SubPerson => "SUBpers",
            Tag::SubPlace => "SUBplace",
            Tag::Adj => "ADJ",
            Tag::Verb => "VERB",
            Tag::VerbAux => "VERBaux",
            Tag::VerbPpass => "VERBppass",
            Tag::Adv => "ADV",
            Tag::Det => "DET",
            Tag::DetArt => "DETart",
            Tag::Prep => "PREP",
            Tag::Pron => "PRO",
            Tag::Conj => "CONJ",
            Tag::Punct => "PUN",
            Tag::PunctClause => "PUNcl",
            Tag::PunctSentence => "PUNsent",
        }
    }

    /// Todas as tags em ordem (para iteração)
    pub fn all() -> [Tag; 25] {
        [
            Tag::Unknown,
            Tag::Xml,
            Tag::Num,
            Tag::Abbr,
            Tag::Name,
            Tag::NamePerson,
            Tag::NameFirst,
            Tag::NamePlace,
            Tag::NameOrg,
            Tag::Sub,
            Tag::SubPerson,
            Tag::SubPlace,
            Tag::Adj,
            Tag::Verb,
            Tag::VerbAux,
            Tag::VerbPpass,
            Tag::Adv,
            Tag::Det,
            Tag::DetArt,
            Tag::Prep,
            Tag::Pron,
            Tag::Conj,
            Tag::Punct,
            Tag::PunctClause,
            Tag::PunctSentence,
        ]
    }

    /// Parseia um mnemônico (ex: "SUBpers" → SubPerson).
    ///
    /// Aceita também o mnemônico em caixa alta ("SUBPERS"), comum em recursos antigos.
    pub fn from_label(s: &str) -> Option<Self> {
        let s = s.trim();
        Tag::all()
            .into_iter()
            .find(|tag| tag.label() == s)
            .or_else(|| Tag::all().into_iter().find(|tag| tag.label().eq_ignore_ascii_case(s)))
    }

    /// Nome próprio de qualquer categoria.
    pub fn is_name(&self) -> bool {
        matches!(
            self,
            Tag::Name | Tag::NamePerson | Tag::NameFirst | Tag::NamePlace | Tag::NameOrg
        )
    }

    pub fn is_verb(&self) -> bool {
        matches!(self, Tag::Verb | Tag::VerbAux | Tag::VerbPpass)
    }

    /// Substantivos que podem abrir uma sequência título + nome.
    pub fn is_title(&self) -> bool {
        matches!(self, Tag::SubPerson | Tag::SubPlace)
    }

    pub fn is_punctuation(&self) -> bool {
        matches!(self, Tag::Punct | Tag::PunctClause | Tag::PunctSentence)
    }

    /// Pontuação que encerra frase ou oração.
    pub fn is_break(&self) -> bool {
        matches!(self, Tag::PunctClause | Tag::PunctSentence)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_labels() {
        assert_eq!(Tag::Sub.label(), "SUB");
        assert_eq!(Tag::NamePerson.label(), "NAMEpers");
        assert_eq!(Tag::PunctSentence.to_string(), "PUNsent");
    }

    #[test]
    fn test_tag_from_label() {
        assert_eq!(Tag::from_label("SUBpers"), Some(Tag::SubPerson));
        assert_eq!(Tag::from_label(" VERB "), Some(Tag::Verb));
        assert_eq!(Tag::from_label("namepersf"), Some(Tag::NameFirst));
        assert_eq!(Tag::from_label("FOO"), None);
    }

    #[test]
    fn test_all_labels_unique_and_round_trip() {
        let all = Tag::all();
        let mut labels: Vec<&str> = all.iter().map(|t| t.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), all.len());
        for tag in all {
            assert_eq!(Tag::from_label(tag.label()), Some(tag));
        }
    }

    #[test]
    fn test_groups() {
        assert!(Tag::NameFirst.is_name());
        assert!(!Tag::SubPerson.is_name());
        assert!(Tag::SubPlace.is_title());
        assert!(Tag::VerbPpass.is_verb());
        assert!(Tag::PunctClause.is_break());
        assert!(!Tag::Punct.is_break());
        assert!(Tag::Punct.is_punctuation());
    }
}
