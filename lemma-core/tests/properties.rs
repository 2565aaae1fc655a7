use std::sync::Arc;

use lemma_core::{Analyzer, AnalyzerConfig, DictionaryStore, Tokenizer, TrieStatus};
use proptest::prelude::*;

fn seed_analyzer(config: AnalyzerConfig) -> Analyzer {
    Analyzer::with_config(Arc::new(DictionaryStore::french_seed().unwrap()), config).unwrap()
}

/// Palavras do léxico misturadas a fragmentos aleatórios com pontuação.
fn arb_text() -> impl Strategy<Value = String> {
    let vocab = prop::sample::select(vec![
        "Il", "vit", "le", "chemin", "de", "fer", "Monsieur", "Dupont", "est", "arrivé", "l'homme",
        "qu'il", "viens-tu", "a-t-il", "XIV", "3,14", "M.", "J.", "etc.", "...", "?!", "«", "»",
        "aujourd’hui", "tout", "à", "fait", "Charles", "Gaulle", "New", "York",
    ]);
    let word = prop_oneof![
        vocab.prop_map(str::to_string),
        "[a-zA-Zé0-9.,;:!?'()-]{1,10}",
    ];
    let sep = prop::sample::select(vec![" ", "  ", "\n", "\t"]);
    prop::collection::vec((word, sep), 0..16).prop_map(|parts| {
        parts
            .into_iter()
            .flat_map(|(w, s)| [w, s.to_string()])
            .collect::<String>()
    })
}

/// Texto sem nenhuma locução ou nome completo: só prefixos que levam a becos sem saída.
fn arb_dead_end_text() -> impl Strategy<Value = String> {
    let vocab = prop::sample::select(vec![
        "chemin", "chemins", "de", "pomme", "tout", "à", "avoir", "a", "parce", "le", "la",
        "monsieur", "rue", "du", "est", "avenue", ",", ".",
    ]);
    prop::collection::vec(vocab, 0..20).prop_map(|words| words.join(" "))
}

fn arb_phrase() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,5}('[a-z]{1,4})?", 1..5).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn offsets_cover_source(text in arb_text()) {
        let analyzer = seed_analyzer(AnalyzerConfig::default());
        let tokens = analyzer.analyze(&text);
        let mut cursor = 0;
        for token in &tokens {
            prop_assert!(token.start >= cursor, "overlap at {:?}", token);
            prop_assert!(token.start < token.end);
            prop_assert!(text[cursor..token.start].chars().all(char::is_whitespace),
                "non-space gap {:?} before {:?}", &text[cursor..token.start], token);
            cursor = token.end;
        }
        prop_assert!(text[cursor..].chars().all(char::is_whitespace));
    }

    #[test]
    fn scanner_never_panics(text in "\\PC{0,80}") {
        let mut scanner = Tokenizer::new(&text);
        let tokens = lemma_core::collect_tokens(&mut scanner);
        let mut last_end = 0;
        for token in &tokens {
            prop_assert!(token.start >= last_end);
            prop_assert!(token.end <= text.len());
            prop_assert!(text.is_char_boundary(token.start) && text.is_char_boundary(token.end));
            last_end = token.end;
        }
        let analyzer = seed_analyzer(AnalyzerConfig::default());
        let _ = analyzer.analyze(&text);
    }

    #[test]
    fn dead_end_probes_replay_unchanged(text in arb_dead_end_text()) {
        let merged = seed_analyzer(AnalyzerConfig::default()).analyze(&text);
        let plain = seed_analyzer(AnalyzerConfig {
            locutions: false,
            proper_names: false,
            ..AnalyzerConfig::default()
        })
        .analyze(&text);
        prop_assert_eq!(merged, plain);
    }

    #[test]
    fn normalization_is_idempotent(chain in prop::collection::hash_set("[a-z]{2,8}", 2..6)) {
        let chain: Vec<String> = chain.into_iter().collect();
        let mut builder = DictionaryStore::builder();
        // inserção do fim para o começo: a resolução não depende da ordem
        for pair in chain.windows(2).rev() {
            builder.add_normalization(&pair[0], &pair[1]);
        }
        let store = builder.build().unwrap();
        let last = chain.last().unwrap();
        for form in &chain {
            let once = store.normalize_or(form);
            prop_assert_eq!(once, last.as_str());
            prop_assert_eq!(store.normalize_or(once), once);
        }
    }

    #[test]
    fn trie_is_sound(phrases in prop::collection::vec(arb_phrase(), 1..8)) {
        let mut builder = DictionaryStore::builder();
        for phrase in &phrases {
            builder.compound(phrase);
        }
        let store = builder.build().unwrap();
        for phrase in &phrases {
            prop_assert!(store.trie_status(phrase).map(TrieStatus::is_leaf).unwrap_or(false));
            for (i, c) in phrase.char_indices() {
                let prefix = match c {
                    ' ' => &phrase[..i],
                    '\'' if i + 1 < phrase.len() => &phrase[..=i],
                    _ => continue,
                };
                prop_assert!(
                    store.trie_status(prefix).map(TrieStatus::is_branch).unwrap_or(false),
                    "prefix {:?} of {:?}", prefix, phrase
                );
            }
        }
    }
}
