use crate::{AssemblyError, Dictionary, Sense, Slot};

/// Same text, same entry
#[test]
fn test_get_or_create_reuses_entry() {
    let mut dictionary = Dictionary::new(["+N"]);

    let first = dictionary.get_or_create("minôsis").unwrap();
    let second = dictionary.get_or_create("minôsis").unwrap();

    assert_eq!(first, second);
    assert_eq!(dictionary.len(), 1);
    assert_eq!(dictionary.get("minôsis"), Some(first));
}

#[test]
fn test_get_or_create_distinct_texts() {
    let mut dictionary = Dictionary::new(["+N"]);

    let cat = dictionary.get_or_create("minôs").unwrap();
    let kitten = dictionary.get_or_create("minôsis").unwrap();

    assert_ne!(cat, kitten);
    assert_eq!(dictionary.entry(cat).unwrap().head, "minôs");
    assert_eq!(dictionary.entry(kitten).unwrap().head, "minôsis");
}

#[test]
fn test_get_or_create_rejects_empty_text() {
    let mut dictionary = Dictionary::new(Vec::<String>::new());

    let result = dictionary.get_or_create("");

    assert!(matches!(result, Err(AssemblyError::EmptyText)));
    assert!(dictionary.is_empty());
}

/// Warned about but still created
#[test]
fn test_combining_mark_headword_is_kept() {
    let mut dictionary = Dictionary::new(Vec::<String>::new());

    let id = dictionary.get_or_create("\u{0301}ashi").unwrap();

    assert_eq!(dictionary.entry(id).unwrap().head, "\u{0301}ashi");
}

#[test]
fn test_definitions_are_deduplicated() {
    let mut dictionary = Dictionary::new(Vec::<String>::new());
    let id = dictionary.get_or_create("atim").unwrap();

    assert!(dictionary.add_definition(id, "dog", &[]).unwrap());
    assert!(!dictionary.add_definition(id, "dog", &["CW".to_string()]).unwrap());
    assert!(!dictionary.add_definition(id, "   ", &[]).unwrap());
    assert!(dictionary.add_definition(id, "horse", &["CW".to_string()]).unwrap());

    assert_eq!(
        dictionary.entry(id).unwrap().senses,
        vec![
            Sense {
                definition: "dog".to_string(),
                sources: vec!["OS".to_string()],
            },
            Sense {
                definition: "horse".to_string(),
                sources: vec!["CW".to_string()],
            },
        ]
    );
}

#[test]
fn test_default_source_from_config() {
    let config = morphodict_config::dictionary::DictionaryConfig {
        lexical_tags: vec!["+N".to_string()],
        default_source: "MD".to_string(),
    };
    let mut dictionary = Dictionary::from_config(&config);
    let id = dictionary.get_or_create("atim").unwrap();

    dictionary.add_definition(id, "dog", &[]).unwrap();

    assert_eq!(dictionary.default_source(), "MD");
    assert!(dictionary.lexical_tags().contains("+N"));
    assert_eq!(dictionary.entry(id).unwrap().senses[0].sources, vec!["MD"]);
}

#[test]
fn test_entry_mut_after_demotion() {
    let mut dictionary = Dictionary::new(["+V"]);
    let lemma = super::add(&mut dictionary, "wâpiw", super::analysis("wâpiw", &["+V"]), &["s/he sees"]);
    let form = super::add(&mut dictionary, "niwâpin", super::analysis("wâpiw", &["+V"]), &["I see"]);

    dictionary.assign_slugs().unwrap();
    dictionary.determine_lemmas().unwrap();

    assert!(dictionary.entry_mut(lemma).is_ok());
    assert!(matches!(dictionary.entry_mut(form), Err(AssemblyError::Demoted(_))));
    assert!(matches!(dictionary.slot(form), Some(Slot::Wordform(_))));
}
