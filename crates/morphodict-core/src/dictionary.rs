use std::collections::{HashMap, HashSet};

use morphodict_config::dictionary::DictionaryConfig;

use crate::error::AssemblyError;
use crate::export;
use crate::lemma::{self, LemmaKey};
use crate::preprocess::starts_with_combining_mark;
use crate::slug::SlugAllocator;
use crate::types::{EntryId, Slot, WordEntry, Wordform};

/// One dictionary assembly session.
///
/// Entries are registered with [`Dictionary::get_or_create`] and populated
/// through [`Dictionary::entry_mut`]; [`Dictionary::assemble`] then assigns
/// slugs, elects lemmas and renders the importjson document.
#[derive(Debug)]
pub struct Dictionary {
    /// FST tags which distinguish the lexeme, e.g. `+N` and `+V`, as opposed
    /// to tags that distinguish the wordform within a lexeme, e.g. `+Sg`.
    lexical_tags: HashSet<String>,
    default_source: String,
    pub(crate) slots: Vec<Slot>,
    by_text: HashMap<String, EntryId>,
}

impl Dictionary {
    pub fn new(lexical_tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            lexical_tags: lexical_tags.into_iter().map(Into::into).collect(),
            default_source: DictionaryConfig::default().default_source,
            slots: Vec::new(),
            by_text: HashMap::new(),
        }
    }

    pub fn from_config(config: &DictionaryConfig) -> Self {
        let mut dictionary = Self::new(config.lexical_tags.iter().cloned());
        dictionary.default_source = config.default_source.clone();
        dictionary
    }

    pub fn lexical_tags(&self) -> &HashSet<String> {
        &self.lexical_tags
    }

    pub fn default_source(&self) -> &str {
        &self.default_source
    }

    /// Entry for `text`, created on first reference
    pub fn get_or_create(&mut self, text: &str) -> Result<EntryId, AssemblyError> {
        if text.is_empty() {
            return Err(AssemblyError::EmptyText);
        }

        if let Some(&id) = self.by_text.get(text) {
            return Ok(id);
        }

        if starts_with_combining_mark(text) {
            tracing::warn!(text = ?text, "headword begins with a combining character");
        }

        let id = EntryId(self.slots.len());
        self.slots.push(Slot::Entry(WordEntry::new(text)));
        self.by_text.insert(text.to_string(), id);
        Ok(id)
    }

    /// Lookup without creating
    pub fn get(&self, text: &str) -> Option<EntryId> {
        self.by_text.get(text).copied()
    }

    pub fn slot(&self, id: EntryId) -> Option<&Slot> {
        self.slots.get(id.0)
    }

    pub fn entry(&self, id: EntryId) -> Option<&WordEntry> {
        self.slot(id).and_then(Slot::as_entry)
    }

    pub fn entry_mut(&mut self, id: EntryId) -> Result<&mut WordEntry, AssemblyError> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Entry(entry)) => Ok(entry),
            Some(Slot::Wordform(_)) => Err(AssemblyError::Demoted(id.0)),
            None => Err(AssemblyError::UnknownEntry(id.0)),
        }
    }

    /// Add a definition to `id`, citing the default source when `sources`
    /// is empty
    pub fn add_definition(
        &mut self,
        id: EntryId,
        definition: &str,
        sources: &[String],
    ) -> Result<bool, AssemblyError> {
        let sources = if sources.is_empty() {
            vec![self.default_source.clone()]
        } else {
            sources.to_vec()
        };
        Ok(self.entry_mut(id)?.add_definition(definition, &sources))
    }

    /// All slots in insertion order
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Give every lemma candidate a unique slug, in insertion order
    pub fn assign_slugs(&mut self) -> Result<(), AssemblyError> {
        let mut slugs = SlugAllocator::new();

        for slot in &mut self.slots {
            let Slot::Entry(entry) = slot else {
                continue;
            };

            if let Some(slug) = &entry.slug {
                return Err(AssemblyError::SlugAlreadyAssigned {
                    head: entry.head.clone(),
                    slug: slug.clone(),
                });
            }
            entry.slug = Some(slugs.allocate(&entry.head));
        }

        tracing::debug!(count = slugs.len(), "assigned slugs");
        Ok(())
    }

    /// Group entries by FST lemma and lexical tags, elect one entry per group
    /// to be the lemma and demote the rest to wordforms.
    ///
    /// Slugs must already be assigned: an elected lemma's head is rewritten
    /// to its FST lemma, and its slug has to come from the original head.
    pub fn determine_lemmas(&mut self) -> Result<(), AssemblyError> {
        if let Some(entry) = self
            .slots
            .iter()
            .filter_map(Slot::as_entry)
            .find(|entry| entry.slug.is_none())
        {
            return Err(AssemblyError::MissingSlug {
                head: entry.head.clone(),
            });
        }

        let mut groups: Vec<(LemmaKey, Vec<EntryId>)> = Vec::new();
        let mut group_index: HashMap<LemmaKey, usize> = HashMap::new();

        for (index, slot) in self.slots.iter().enumerate() {
            let Slot::Entry(entry) = slot else {
                continue;
            };
            // Unanalyzed entries (phrases, preverbs) stay lemmas
            let Some(analysis) = &entry.analysis else {
                continue;
            };

            let key = LemmaKey::new(analysis, &self.lexical_tags);
            match group_index.get(&key) {
                Some(&g) => groups[g].1.push(EntryId(index)),
                None => {
                    group_index.insert(key.clone(), groups.len());
                    groups.push((key, vec![EntryId(index)]));
                }
            }
        }

        for (key, members) in groups {
            let slots = &self.slots;
            let lemma = lemma::elect(
                &key.fst_lemma,
                members.iter().map(|&id| (id, slots[id.0].head())),
            )
            .ok_or_else(|| AssemblyError::NoElectableEntry {
                fst_lemma: key.fst_lemma.clone(),
            })?;

            let entry = self.entry_mut(lemma)?;
            if entry.head != key.fst_lemma {
                tracing::debug!(head = %entry.head, fst_lemma = %key.fst_lemma, "renaming elected lemma");
            }
            // TODO: keep the original headword once the site supports a
            // headword that differs from the FST lemma
            entry.head = key.fst_lemma.clone();

            for id in members.into_iter().filter(|&id| id != lemma) {
                self.demote(id, lemma)?;
            }
        }

        Ok(())
    }

    fn demote(&mut self, id: EntryId, lemma: EntryId) -> Result<(), AssemblyError> {
        let slot = self
            .slots
            .get_mut(id.0)
            .ok_or(AssemblyError::UnknownEntry(id.0))?;
        let Slot::Entry(entry) = slot else {
            return Err(AssemblyError::Demoted(id.0));
        };

        let wordform = Wordform::demote(std::mem::take(entry), lemma)?;
        *slot = Slot::Wordform(wordform);
        Ok(())
    }

    /// Assign slugs, determine lemmas and return the prettified JSON for the
    /// dictionary as a whole.
    pub fn assemble(mut self) -> Result<String, AssemblyError> {
        self.assign_slugs()?;
        self.determine_lemmas()?;
        let records = self.export()?;
        export::to_json(&records)
    }
}
