pub mod dictionary;
pub mod error;
pub mod export;
pub mod lemma;
pub mod preprocess;
pub mod slug;
pub mod types;

pub use dictionary::Dictionary;
pub use error::AssemblyError;
pub use export::{ExportRecord, LemmaRecord, WordformRecord};
pub use types::{Analysis, EntryId, Sense, Slot, WordEntry, Wordform};

#[cfg(test)]
mod tests;
