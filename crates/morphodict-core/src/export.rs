use serde::{Deserialize, Serialize};

use crate::dictionary::Dictionary;
use crate::error::AssemblyError;
use crate::preprocess::sort_form;
use crate::types::{Analysis, Sense, Slot};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LemmaRecord {
    pub head: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paradigm: Option<String>,
    pub senses: Vec<Sense>,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordformRecord {
    pub head: String,
    pub analysis: Analysis,
    pub senses: Vec<Sense>,
    /// Slug of the lemma this is a form of
    pub form_of: String,
}

/// One element of the importjson array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExportRecord {
    Lemma(LemmaRecord),
    Wordform(WordformRecord),
}

impl ExportRecord {
    pub fn head(&self) -> &str {
        match self {
            ExportRecord::Lemma(lemma) => &lemma.head,
            ExportRecord::Wordform(wordform) => &wordform.head,
        }
    }

    /// Own slug for lemmas, the lemma's slug for wordforms
    pub fn lemma_slug(&self) -> &str {
        match self {
            ExportRecord::Lemma(lemma) => &lemma.slug,
            ExportRecord::Wordform(wordform) => &wordform.form_of,
        }
    }

    /// Order by lemma slug, lemmas before their wordforms, then by wordform
    /// text. Both parts are NFD so accented text sorts the same regardless of
    /// how it was composed.
    ///
    /// The site's python `entry_sort_key` must stay in step with this.
    pub fn sort_key(&self) -> (String, String) {
        let form = match self {
            ExportRecord::Lemma(_) => String::new(),
            ExportRecord::Wordform(wordform) => sort_form(&wordform.head),
        };
        (sort_form(self.lemma_slug()), form)
    }
}

impl Dictionary {
    /// Project the (slugged, lemmatized) slots into sorted export records,
    /// dropping everything without definitions.
    pub fn export(&self) -> Result<Vec<ExportRecord>, AssemblyError> {
        let mut records = Vec::with_capacity(self.slots.len());
        let mut lemmas = 0usize;
        let mut wordforms = 0usize;
        let mut dropped = 0usize;

        for slot in &self.slots {
            if slot.senses().is_empty() {
                tracing::warn!(head = ?slot.head(), "no definitions, dropping entry");
                dropped += 1;
                continue;
            }

            match slot {
                Slot::Entry(entry) => {
                    let slug = entry.slug.clone().ok_or_else(|| AssemblyError::MissingSlug {
                        head: entry.head.clone(),
                    })?;

                    records.push(ExportRecord::Lemma(LemmaRecord {
                        head: entry.head.clone(),
                        analysis: entry.analysis.clone(),
                        paradigm: entry.paradigm.clone(),
                        senses: entry.senses.clone(),
                        slug,
                    }));
                    lemmas += 1;
                }
                Slot::Wordform(wordform) => {
                    let lemma = self
                        .slots
                        .get(wordform.form_of.index())
                        .and_then(Slot::as_entry);
                    let Some((form_of, lemma)) =
                        lemma.and_then(|l| l.slug.clone().map(|slug| (slug, l)))
                    else {
                        return Err(AssemblyError::MissingLemmaSlug {
                            head: wordform.head.clone(),
                        });
                    };

                    if lemma.senses.is_empty() {
                        tracing::warn!(
                            head = ?wordform.head,
                            form_of = %form_of,
                            "lemma has no definitions, dropping wordform"
                        );
                        dropped += 1;
                        continue;
                    }

                    records.push(ExportRecord::Wordform(WordformRecord {
                        head: wordform.head.clone(),
                        analysis: wordform.analysis.clone(),
                        senses: wordform.senses.clone(),
                        form_of,
                    }));
                    wordforms += 1;
                }
            }
        }

        // stable: equal keys keep insertion order
        records.sort_by_cached_key(ExportRecord::sort_key);

        tracing::info!(lemmas, wordforms, dropped, "exported dictionary");
        Ok(records)
    }
}

/// Two-space indented JSON with a trailing newline
pub fn to_json(records: &[ExportRecord]) -> Result<String, AssemblyError> {
    let mut json = serde_json::to_string_pretty(records)?;
    json.push('\n');
    Ok(json)
}
