/// Precondition violations that abort an assembly.
///
/// These point at malformed input data; fix the input and rerun.
#[derive(Debug, thiserror::Error)]
pub enum AssemblyError {
    #[error("Cannot look up an entry by empty text")]
    EmptyText,

    #[error("Entry {head:?} already has slug {slug:?}")]
    SlugAlreadyAssigned { head: String, slug: String },

    #[error("Entry {head:?} has no slug")]
    MissingSlug { head: String },

    #[error("Lemma of wordform {head:?} has no slug")]
    MissingLemmaSlug { head: String },

    #[error("Entry {head:?} has no analysis")]
    MissingAnalysis { head: String },

    #[error("No lemma could be elected for FST lemma {fst_lemma:?}")]
    NoElectableEntry { fst_lemma: String },

    #[error("Entry {0} has already been demoted to a wordform")]
    Demoted(usize),

    #[error("Unknown entry {0}")]
    UnknownEntry(usize),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
