use std::fmt::Debug;
use std::path::Path;

use morphodict_core::{Analysis, AssemblyError, Dictionary};
use serde::Deserialize;

/// One analyzed wordform, as produced by spreadsheet or corpus ingestion
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    pub head: String,
    #[serde(default)]
    pub analysis: Option<Analysis>,
    #[serde(default)]
    pub paradigm: Option<String>,
    #[serde(default)]
    pub definitions: Vec<String>,
    /// Citations for `definitions`; the configured default when empty
    #[serde(default)]
    pub sources: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: AssemblyError,
    },
}

pub struct RecordLoader;

impl RecordLoader {
    /// Parse a JSON array of records
    pub fn from_json(json: &str) -> Result<Vec<RawRecord>, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Vec<RawRecord>, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        tracing::info!("Loading wordform records from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let records = Self::from_json(&json)?;
        tracing::info!("Loaded {} wordform records", records.len());
        Ok(records)
    }

    /// Register every record with `dictionary`.
    ///
    /// Records sharing a head merge into one entry. Definitions accumulate;
    /// the first analysis and paradigm seen are kept.
    pub fn populate(dictionary: &mut Dictionary, records: &[RawRecord]) -> Result<(), LoadError> {
        for (index, record) in records.iter().enumerate() {
            let at = |source| LoadError::Record { index, source };

            let id = dictionary.get_or_create(&record.head).map_err(at)?;
            for definition in &record.definitions {
                dictionary
                    .add_definition(id, definition, &record.sources)
                    .map_err(at)?;
            }

            let entry = dictionary.entry_mut(id).map_err(at)?;
            merge_first(
                &record.head,
                "analysis",
                &mut entry.analysis,
                record.analysis.as_ref(),
            );
            merge_first(
                &record.head,
                "paradigm",
                &mut entry.paradigm,
                record.paradigm.as_ref(),
            );
        }

        tracing::debug!(entries = dictionary.len(), "populated dictionary");
        Ok(())
    }
}

fn merge_first<T: Clone + PartialEq + Debug>(
    head: &str,
    field: &str,
    current: &mut Option<T>,
    incoming: Option<&T>,
) {
    let Some(incoming) = incoming else {
        return;
    };

    match current.as_ref() {
        Some(existing) if existing != incoming => {
            tracing::warn!(
                head = ?head,
                field,
                kept = ?existing,
                ignored = ?incoming,
                "conflicting values for repeated headword, keeping the first"
            );
        }
        Some(_) => {}
        None => *current = Some(incoming.clone()),
    }
}
