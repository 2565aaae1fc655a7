//! # Dicionários — Formas Flexionadas, Nomes Próprios e Locuções
//!
//! O [`DictionaryStore`] reúne todas as tabelas consultadas pelo pipeline:
//!
//! - **COMMON**: formas comuns, chaveadas em minúsculas ("chemin", "est").
//! - **PROPER**: nomes próprios, preservando a capitalização ("Paris").
//! - **Normalização**: grafias antigas ou variantes → grafia moderna.
//! - **Abreviações**: forma com ponto → forma por extenso ("M." → "monsieur").
//! - **Trie de locuções**: prefixos de expressões de várias palavras.
//! - **Stopwords**: conjunto de palavras gramaticais.
//!
//! O store é montado uma única vez (via [`DictionaryBuilder`] ou
//! [`DictionaryStore::load`]) e depois só é lido. Como nunca é mutado após a
//! construção, pode ser compartilhado entre threads sem locks.
//!
//! ## Formato dos recursos
//!
//! Tabelas separadas por vírgula ou tabulação, com cabeçalho opcional:
//!
//! ```text
//! GRAPH,TAG,ORTH,LEM
//! chemin de fer,SUB,,chemin_de_fer
//! -est,VERB          ← remove "est" para que um recurso posterior o redefina
//! ```
//!
//! Entradas cujo GRAPH contém espaço ou apóstrofo são registradas também na
//! trie de locuções.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use aho_corasick::{AhoCorasick, Anchored, Input, MatchKind, StartKind};
use tracing::{debug, info, warn};

use crate::chars::canonical_apostrophe;
use crate::error::LoadError;
use crate::tag::Tag;

/// Entrada de dicionário: tag, grafia normalizada e lema opcionais.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub tag: Tag,
    pub orth: Option<String>,
    pub lemma: Option<String>,
}

impl DictionaryEntry {
    pub fn new(tag: Tag, orth: Option<&str>, lemma: Option<&str>) -> Self {
        Self {
            tag,
            orth: orth.map(str::to_string),
            lemma: lemma.map(str::to_string),
        }
    }
}

/// Estado de um prefixo na trie de locuções.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrieStatus {
    /// Alguma locução mais longa continua a partir deste prefixo.
    Branch,
    /// O prefixo é, ele próprio, uma locução registrada.
    Leaf,
    /// As duas coisas.
    Both,
}

impl TrieStatus {
    pub fn is_leaf(self) -> bool {
        matches!(self, TrieStatus::Leaf | TrieStatus::Both)
    }

    pub fn is_branch(self) -> bool {
        matches!(self, TrieStatus::Branch | TrieStatus::Both)
    }

    /// Combina dois estados para o mesmo prefixo.
    pub fn merge(self, other: TrieStatus) -> TrieStatus {
        let leaf = self.is_leaf() || other.is_leaf();
        let branch = self.is_branch() || other.is_branch();
        match (leaf, branch) {
            (true, true) => TrieStatus::Both,
            (true, false) => TrieStatus::Leaf,
            _ => TrieStatus::Branch,
        }
    }
}

/// Conjunto de stopwords, testado por um autômato sobre bytes crus.
#[derive(Debug, Clone)]
pub struct StopSet {
    automaton: Option<AhoCorasick>,
    len: usize,
}

impl StopSet {
    pub fn new<I, S>(words: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        let automaton = if words.is_empty() {
            None
        } else {
            let ac = AhoCorasick::builder()
                .match_kind(MatchKind::LeftmostLongest)
                .start_kind(StartKind::Anchored)
                .build(words.iter())
                .map_err(|e| LoadError::Automaton(e.to_string()))?;
            Some(ac)
        };
        Ok(Self {
            automaton,
            len: words.len(),
        })
    }

    /// Verifica se o trecho inteiro é uma stopword, sem decodificar UTF-8.
    pub fn contains_bytes(&self, span: &[u8]) -> bool {
        let Some(ac) = &self.automaton else {
            return false;
        };
        if span.is_empty() {
            return false;
        }
        ac.find(Input::new(span).anchored(Anchored::Yes))
            .map(|m| m.end() == span.len())
            .unwrap_or(false)
    }
}

/// Tipo de tabela contida em um [`Resource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// `GRAPH,TAG,ORTH,LEM` → dicionário COMMON
    Common,
    /// `GRAPH,TAG,ORTH,LEM` → dicionário PROPER
    Proper,
    /// `GRAPH,ORTH`
    Normalization,
    /// `GRAPH,ORTH` (GRAPH termina com ponto)
    Abbreviations,
    /// uma forma por linha
    Stopwords,
}

/// Um recurso tabular já lido para a memória.
#[derive(Debug, Clone)]
pub struct Resource {
    pub kind: ResourceKind,
    /// Nome usado nas mensagens de erro (geralmente o caminho do arquivo).
    pub name: String,
    pub text: String,
}

impl Resource {
    pub fn new(kind: ResourceKind, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            text: text.into(),
        }
    }

    /// Lê um recurso do disco.
    pub fn from_path(kind: ResourceKind, path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(kind, path.display().to_string(), text))
    }
}

/// Normaliza um GRAPH: apóstrofos retos, espaços simples, nada de espaço após apóstrofo.
pub fn normalize_graph(graph: &str) -> String {
    let straight: String = graph.chars().map(canonical_apostrophe).collect();
    let joined = straight.split_whitespace().collect::<Vec<_>>().join(" ");
    joined.replace("' ", "'")
}

/// Construtor mutável do [`DictionaryStore`].
///
/// Dentro de um mesmo dicionário a primeira definição de um GRAPH prevalece;
/// para sobrescrever, remova antes (linha com `-` no recurso ou
/// [`remove_common`](Self::remove_common)).
#[derive(Debug, Default)]
pub struct DictionaryBuilder {
    common: HashMap<String, DictionaryEntry>,
    proper: HashMap<String, DictionaryEntry>,
    norm: HashMap<String, String>,
    abbreviations: HashMap<String, String>,
    stopwords: Vec<String>,
    compounds: Vec<String>,
}

impl DictionaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_common(&mut self, graph: &str, entry: DictionaryEntry) -> &mut Self {
        let key = normalize_graph(graph);
        if !key.is_empty() {
            self.common.entry(key).or_insert(entry);
        }
        self
    }

    pub fn add_proper(&mut self, graph: &str, entry: DictionaryEntry) -> &mut Self {
        let key = normalize_graph(graph);
        if !key.is_empty() {
            self.proper.entry(key).or_insert(entry);
        }
        self
    }

    pub fn remove_common(&mut self, graph: &str) -> bool {
        self.common.remove(&normalize_graph(graph)).is_some()
    }

    pub fn remove_proper(&mut self, graph: &str) -> bool {
        self.proper.remove(&normalize_graph(graph)).is_some()
    }

    pub fn add_normalization(&mut self, from: &str, to: &str) -> &mut Self {
        let from = normalize_graph(from);
        let to = normalize_graph(to);
        if !from.is_empty() && !to.is_empty() {
            self.norm.entry(from).or_insert(to);
        }
        self
    }

    pub fn add_abbreviation(&mut self, graph: &str, expansion: &str) -> &mut Self {
        let graph = graph.trim();
        if !graph.is_empty() {
            self.abbreviations
                .entry(graph.to_string())
                .or_insert_with(|| expansion.trim().to_string());
        }
        self
    }

    pub fn add_stopword(&mut self, form: &str) -> &mut Self {
        self.stopwords.push(form.trim().to_string());
        self
    }

    /// Registra uma locução na trie sem entrada de dicionário associada.
    pub fn compound(&mut self, phrase: &str) -> &mut Self {
        let phrase = normalize_graph(phrase);
        if !phrase.is_empty() {
            self.compounds.push(phrase);
        }
        self
    }

    /// Aplica um recurso tabular sobre o estado atual.
    ///
    /// Campos entre aspas seguem as regras usuais de CSV, então um GRAPH
    /// pode conter o próprio separador (`"et, ou",CONJ,,et_ou`).
    pub fn load(&mut self, resource: &Resource) -> Result<&mut Self, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .delimiter(delimiter_of(&resource.text))
            .from_reader(resource.text.as_bytes());

        let mut record = csv::StringRecord::new();
        let mut header_checked = false;
        loop {
            let more = reader
                .read_record(&mut record)
                .map_err(|source| LoadError::Csv {
                    resource: resource.name.clone(),
                    source,
                })?;
            if !more {
                break;
            }
            if record.iter().all(str::is_empty) {
                continue;
            }
            let line_no = record.position().map_or(0, |p| p.line() as usize);
            let graph = record.get(0).unwrap_or("");
            if !header_checked {
                header_checked = true;
                if graph.eq_ignore_ascii_case("GRAPH") {
                    continue;
                }
            }
            match resource.kind {
                ResourceKind::Common | ResourceKind::Proper => {
                    self.load_entry(resource, line_no, &record)?;
                }
                ResourceKind::Normalization | ResourceKind::Abbreviations => {
                    let target = record.get(1).unwrap_or("");
                    if graph.is_empty() || target.is_empty() {
                        return Err(syntax(resource, line_no, "expected GRAPH and ORTH"));
                    }
                    if resource.kind == ResourceKind::Normalization {
                        self.add_normalization(graph, target);
                    } else {
                        self.add_abbreviation(graph, target);
                    }
                }
                ResourceKind::Stopwords => {
                    self.add_stopword(graph);
                }
            }
        }
        debug!(resource = %resource.name, kind = ?resource.kind, "resource applied");
        Ok(self)
    }

    fn load_entry(
        &mut self,
        resource: &Resource,
        line: usize,
        record: &csv::StringRecord,
    ) -> Result<(), LoadError> {
        let graph = record.get(0).unwrap_or("");
        if graph.is_empty() {
            return Err(syntax(resource, line, "empty GRAPH"));
        }
        let proper = resource.kind == ResourceKind::Proper;

        if let Some(removed) = graph.strip_prefix('-').filter(|g| !g.is_empty()) {
            let found = if proper {
                self.remove_proper(removed)
            } else {
                self.remove_common(removed)
            };
            if !found {
                warn!(resource = %resource.name, line, graph = removed, "removal of absent entry");
            }
            return Ok(());
        }

        let tag_field = record.get(1).unwrap_or("");
        if tag_field.is_empty() {
            return Err(syntax(resource, line, "missing TAG"));
        }
        let tag = Tag::from_label(tag_field).ok_or_else(|| LoadError::UnknownTag {
            resource: resource.name.clone(),
            line,
            tag: tag_field.to_string(),
        })?;
        let orth = record.get(2).filter(|s| !s.is_empty());
        let lemma = record.get(3).filter(|s| !s.is_empty());
        let entry = DictionaryEntry::new(tag, orth, lemma);
        if proper {
            self.add_proper(graph, entry);
        } else {
            self.add_common(graph, entry);
        }
        Ok(())
    }

    /// Congela o estado atual em um store imutável.
    pub fn build(self) -> Result<DictionaryStore, LoadError> {
        let norm = resolve_chains(&self.norm)?;

        let mut trie: HashMap<String, TrieStatus> = HashMap::new();
        let phrases = self
            .common
            .keys()
            .chain(self.proper.keys())
            .filter(|k| k.contains(' ') || k.contains('\''))
            .chain(self.compounds.iter());
        for phrase in phrases {
            register_compound(&mut trie, phrase);
        }

        let stops = StopSet::new(&self.stopwords)?;
        let store = DictionaryStore {
            common: self.common,
            proper: self.proper,
            norm,
            abbreviations: self.abbreviations,
            trie,
            stops,
        };

        info!(
            common = store.common_len(),
            proper = store.proper_len(),
            normalizations = store.norm.len(),
            abbreviations = store.abbreviations.len(),
            trie_prefixes = store.trie.len(),
            stopwords = store.stops.len,
            "dictionary store built"
        );
        Ok(store)
    }
}

/// Segue as cadeias `a → b → c` para que cada forma aponte direto ao destino final.
fn resolve_chains(norm: &HashMap<String, String>) -> Result<HashMap<String, String>, LoadError> {
    let mut resolved = HashMap::with_capacity(norm.len());
    for (from, to) in norm {
        let mut target = to;
        let mut steps = 0usize;
        while let Some(next) = norm.get(target) {
            if next == target {
                break;
            }
            target = next;
            steps += 1;
            if steps > norm.len() {
                return Err(LoadError::NormalizationCycle { form: from.clone() });
            }
        }
        if target == from {
            if to != from {
                return Err(LoadError::NormalizationCycle { form: from.clone() });
            }
            continue;
        }
        resolved.insert(from.clone(), target.clone());
    }
    Ok(resolved)
}

/// Marca BRANCH em cada prefixo (corte em espaço ou após apóstrofo) e LEAF na frase inteira.
fn register_compound(trie: &mut HashMap<String, TrieStatus>, phrase: &str) {
    let mut mark = |key: &str, status: TrieStatus| {
        trie.entry(key.to_string())
            .and_modify(|s| *s = s.merge(status))
            .or_insert(status);
    };
    for (i, c) in phrase.char_indices() {
        match c {
            ' ' => mark(&phrase[..i], TrieStatus::Branch),
            '\'' if i + 1 < phrase.len() => mark(&phrase[..=i], TrieStatus::Branch),
            _ => {}
        }
    }
    mark(phrase, TrieStatus::Leaf);
}

/// Tabelas imutáveis consultadas pelos estágios do pipeline.
#[derive(Debug)]
pub struct DictionaryStore {
    common: HashMap<String, DictionaryEntry>,
    proper: HashMap<String, DictionaryEntry>,
    norm: HashMap<String, String>,
    abbreviations: HashMap<String, String>,
    trie: HashMap<String, TrieStatus>,
    stops: StopSet,
}

impl DictionaryStore {
    pub fn builder() -> DictionaryBuilder {
        DictionaryBuilder::new()
    }

    /// Monta o store aplicando os recursos em ordem.
    ///
    /// Qualquer recurso corrompido aborta a construção: nunca existe um
    /// store parcialmente carregado.
    pub fn load(resources: &[Resource]) -> Result<Self, LoadError> {
        let mut builder = DictionaryBuilder::new();
        for resource in resources {
            builder.load(resource)?;
        }
        builder.build()
    }

    pub fn lookup_common(&self, form: &str) -> Option<&DictionaryEntry> {
        self.common.get(form)
    }

    pub fn lookup_proper(&self, form: &str) -> Option<&DictionaryEntry> {
        self.proper.get(form)
    }

    /// Grafia moderna de uma forma, se a tabela de normalização a conhecer.
    pub fn normalize(&self, form: &str) -> Option<&str> {
        self.norm.get(form).map(String::as_str)
    }

    /// Como [`normalize`](Self::normalize), mas devolve a própria forma quando não há regra.
    pub fn normalize_or<'a>(&'a self, form: &'a str) -> &'a str {
        self.normalize(form).unwrap_or(form)
    }

    /// Forma por extenso de uma abreviação com ponto ("M." → "monsieur").
    pub fn is_abbreviation(&self, form_with_dot: &str) -> Option<&str> {
        self.abbreviations.get(form_with_dot).map(String::as_str)
    }

    pub fn trie_status(&self, prefix: &str) -> Option<TrieStatus> {
        self.trie.get(prefix).copied()
    }

    /// `form` deve chegar já em minúsculas.
    pub fn is_stopword(&self, form: &str) -> bool {
        self.stops.contains_bytes(form.as_bytes())
    }

    pub fn common_len(&self) -> usize {
        self.common.len()
    }

    pub fn proper_len(&self) -> usize {
        self.proper.len()
    }
}
