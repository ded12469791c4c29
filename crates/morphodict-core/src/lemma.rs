use std::collections::HashSet;

use crate::types::{Analysis, EntryId};

/// Grouping key for lemma election: entries sharing an FST lemma and the
/// same lexical tags are forms of one lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LemmaKey {
    pub fst_lemma: String,
    pub lexical_tags: Vec<String>,
}

impl LemmaKey {
    pub fn new(analysis: &Analysis, lexical_tags: &HashSet<String>) -> Self {
        Self {
            fst_lemma: analysis.fst_lemma().to_string(),
            lexical_tags: extract_lexical_tags(analysis, lexical_tags),
        }
    }
}

/// Lexical tags of `analysis`, deduplicated and sorted
pub fn extract_lexical_tags(analysis: &Analysis, lexical_tags: &HashSet<String>) -> Vec<String> {
    let mut tags: Vec<String> = analysis
        .tags()
        .filter(|t| lexical_tags.contains(*t))
        .map(str::to_string)
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

/// Pick the candidate whose head is closest to `fst_lemma`.
///
/// Distance is Levenshtein over chars. On a tie the earliest candidate wins.
pub fn elect<'a>(
    fst_lemma: &str,
    candidates: impl IntoIterator<Item = (EntryId, &'a str)>,
) -> Option<EntryId> {
    candidates
        .into_iter()
        .min_by_key(|(_, head)| strsim::levenshtein(fst_lemma, head))
        .map(|(id, _)| id)
}
