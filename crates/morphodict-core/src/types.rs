use serde::{Deserialize, Serialize};

use crate::error::AssemblyError;

/// FST analysis of a wordform: prefix tags, FST lemma, suffix tags.
///
/// Serializes as a three element JSON array, e.g.
/// `[["PV/e+"], "wâpiw", ["+V", "+AI", "+Ind"]]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Analysis(pub Vec<String>, pub String, pub Vec<String>);

impl Analysis {
    pub fn new(
        prefix_tags: impl IntoIterator<Item = impl Into<String>>,
        fst_lemma: impl Into<String>,
        suffix_tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self(
            prefix_tags.into_iter().map(Into::into).collect(),
            fst_lemma.into(),
            suffix_tags.into_iter().map(Into::into).collect(),
        )
    }

    pub fn fst_lemma(&self) -> &str {
        &self.1
    }

    pub fn suffix_tags(&self) -> &[String] {
        &self.2
    }

    /// Prefix then suffix tags
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.0.iter().chain(self.2.iter()).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    pub definition: String,
    pub sources: Vec<String>,
}

/// Stable handle into a [`Dictionary`](crate::Dictionary), issued by
/// `get_or_create`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(pub(crate) usize);

impl EntryId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Candidate dictionary headword
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordEntry {
    pub head: String,
    pub analysis: Option<Analysis>,
    pub paradigm: Option<String>,
    pub senses: Vec<Sense>,
    pub(crate) slug: Option<String>,
}

impl WordEntry {
    pub fn new(head: impl Into<String>) -> Self {
        Self {
            head: head.into(),
            ..Default::default()
        }
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    /// Add a definition cited to `sources`.
    ///
    /// Blank definitions and exact duplicates are ignored. Returns whether a
    /// sense was added.
    pub fn add_definition(&mut self, definition: &str, sources: &[String]) -> bool {
        if definition.trim().is_empty() {
            return false;
        }
        self.add_sense(Sense {
            definition: definition.to_string(),
            sources: sources.to_vec(),
        })
    }

    /// Add a sense unless one with the same definition text exists
    pub fn add_sense(&mut self, sense: Sense) -> bool {
        if self.senses.iter().any(|s| s.definition == sense.definition) {
            return false;
        }
        self.senses.push(sense);
        true
    }
}

/// Inflected form of a lemma, stored with a handle to the elected lemma entry
#[derive(Debug, Clone, PartialEq)]
pub struct Wordform {
    pub head: String,
    pub analysis: Analysis,
    pub senses: Vec<Sense>,
    pub form_of: EntryId,
}

impl Wordform {
    /// Demote `entry` to a wordform of `lemma`
    pub fn demote(entry: WordEntry, lemma: EntryId) -> Result<Self, AssemblyError> {
        let WordEntry {
            head,
            analysis,
            senses,
            ..
        } = entry;
        let analysis = analysis.ok_or_else(|| AssemblyError::MissingAnalysis {
            head: head.clone(),
        })?;

        Ok(Self {
            head,
            analysis,
            senses,
            form_of: lemma,
        })
    }
}

/// One position in the dictionary's entry sequence
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    Entry(WordEntry),
    Wordform(Wordform),
}

impl Slot {
    pub fn head(&self) -> &str {
        match self {
            Slot::Entry(entry) => &entry.head,
            Slot::Wordform(wordform) => &wordform.head,
        }
    }

    pub fn senses(&self) -> &[Sense] {
        match self {
            Slot::Entry(entry) => &entry.senses,
            Slot::Wordform(wordform) => &wordform.senses,
        }
    }

    pub fn as_entry(&self) -> Option<&WordEntry> {
        match self {
            Slot::Entry(entry) => Some(entry),
            Slot::Wordform(_) => None,
        }
    }

    pub fn as_wordform(&self) -> Option<&Wordform> {
        match self {
            Slot::Entry(_) => None,
            Slot::Wordform(wordform) => Some(wordform),
        }
    }
}
