//! Which files each class name was found in.

use std::collections::BTreeMap;

/// Class name → files containing it, in the order the files were scanned.
///
/// Every entry has at least one file and never lists a file twice.
/// Iteration is in ascending class-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassOccurrenceMap {
    classes: BTreeMap<String, Vec<String>>,
}

impl ClassOccurrenceMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `file` contains each of `classes`.
    ///
    /// Recording the same file for a class twice has no effect.
    pub fn record_file<I, S>(&mut self, file: &str, classes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for class in classes {
            let files = self.classes.entry(class.into()).or_default();
            if !files.iter().any(|f| f == file) {
                files.push(file.to_string());
            }
        }
    }

    /// Files recorded for `class`, if any.
    #[must_use]
    pub fn files_for(&self, class: &str) -> Option<&[String]> {
        self.classes.get(class).map(Vec::as_slice)
    }

    /// Number of distinct class names seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns `true` if no class has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// All entries, sorted by class name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.classes.iter().map(|(class, files)| (class.as_str(), files.as_slice()))
    }

    /// Entries found in two or more files, sorted by class name.
    pub fn collisions(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.iter().filter(|(_, files)| files.len() > 1)
    }
}
