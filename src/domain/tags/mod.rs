//! Phrase table and whole-word tag extraction.

mod extractor;
mod phrase_table;

pub use extractor::extract_tags;
pub use phrase_table::{PhraseTable, PhraseTableError, TagSpec};
