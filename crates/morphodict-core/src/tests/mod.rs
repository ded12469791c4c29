//! Assembly tests over small hand-built dictionaries

mod store_tests;

use crate::{Analysis, Dictionary, EntryId};

/// Register `head` with `analysis` and definitions
pub(crate) fn add(
    dictionary: &mut Dictionary,
    head: &str,
    analysis: Option<Analysis>,
    definitions: &[&str],
) -> EntryId {
    let id = dictionary.get_or_create(head).unwrap();
    for definition in definitions {
        dictionary.add_definition(id, definition, &[]).unwrap();
    }
    if analysis.is_some() {
        dictionary.entry_mut(id).unwrap().analysis = analysis;
    }
    id
}

/// Analysis without prefix tags
pub(crate) fn analysis(fst_lemma: &str, suffix_tags: &[&str]) -> Option<Analysis> {
    Some(Analysis::new(
        Vec::<String>::new(),
        fst_lemma,
        suffix_tags.iter().copied(),
    ))
}
