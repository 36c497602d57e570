use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::log_or_err;
use crate::process::syllables::normalize_word;
use crate::tables::records::{LoadOptions, read_records};
use crate::utils::errors::TableError;

/// Hand-authored syllable counts that take precedence over hyphenation.
///
/// Keys are stored in normalized form, so `"Fire!"` and `"fire"` address
/// the same entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyllableOverrides {
    counts: HashMap<String, u32>,
}

impl SyllableOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the count for `word`.
    pub fn insert(&mut self, word: &str, count: u32) {
        self.counts.insert(normalize_word(word), count);
    }

    /// Looks up an already normalized word.
    pub fn get(&self, normalized: &str) -> Option<u32> {
        self.counts.get(normalized).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Builds the table from `word;count` records.
    ///
    /// Rows whose count is not a non-negative integer are skipped like any
    /// other malformed record. Negative counts are rejected on purpose even
    /// though a plain integer parse would take them: a syllable count is
    /// never below zero. Later rows replace earlier ones.
    pub fn from_reader<R: io::Read>(reader: R, options: &LoadOptions) -> Result<Self, TableError> {
        let mut overrides = Self::new();

        for record in read_records(reader, options)? {
            match record.second.trim().parse::<u32>() {
                Ok(count) => overrides.insert(&record.first, count),
                Err(e) => log_or_err!(
                    options,
                    log::Level::Warn,
                    TableError::MalformedRecord {
                        line: record.line,
                        reason: format!("invalid syllable count {:?}: {e}", record.second),
                    }
                ),
            }
        }

        Ok(overrides)
    }

    /// Loads the table from a file. An absent file yields an empty table.
    pub fn load<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Self, TableError> {
        let path = path.as_ref();

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("{}", TableError::MissingSource(path.display().to_string()));
                return Ok(Self::new());
            }
            Err(e) => return Err(e.into()),
        };

        let overrides = Self::from_reader(io::BufReader::new(file), options)?;
        log::debug!(
            "Loaded {} syllable overrides from {}",
            overrides.len(),
            path.display()
        );

        Ok(overrides)
    }
}

impl<S: AsRef<str>> FromIterator<(S, u32)> for SyllableOverrides {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut overrides = Self::new();
        for (word, count) in iter {
            overrides.insert(word.as_ref(), count);
        }
        overrides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_normalized() {
        let overrides = SyllableOverrides::from_iter([("Fire!", 1), ("O'Clock", 2)]);

        assert_eq!(overrides.get("fire"), Some(1));
        assert_eq!(overrides.get("o'clock"), Some(2));
        assert_eq!(overrides.get("Fire!"), None);
    }

    #[test]
    fn skips_non_numeric_and_negative_counts() -> Result<(), TableError> {
        let data = "hour; 1\npoem;two\narea;-3\nbusiness;2\nbusiness;3\n";
        let overrides = SyllableOverrides::from_reader(data.as_bytes(), &LoadOptions::default())?;

        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides.get("hour"), Some(1));
        assert_eq!(overrides.get("poem"), None);
        assert_eq!(overrides.get("area"), None);
        assert_eq!(overrides.get("business"), Some(3));
        Ok(())
    }

    #[test]
    fn missing_file_is_empty() -> Result<(), TableError> {
        let overrides = SyllableOverrides::load(
            "this/path/does/not/exist/syllable_overrides.csv",
            &LoadOptions::default(),
        )?;

        assert!(overrides.is_empty());
        Ok(())
    }
}
