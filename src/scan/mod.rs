//! Class selector extraction and per-class file bookkeeping.

pub mod occurrence;
pub mod selector;

pub use occurrence::ClassOccurrenceMap;
pub use selector::extract_classes;
