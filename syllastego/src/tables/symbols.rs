use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::log_or_err;
use crate::tables::records::{LoadOptions, read_records};
use crate::utils::errors::TableError;

/// Bidirectional mapping between packed ids and output symbols.
///
/// Built from `symbol;id` records. The id to symbol direction is what the
/// decoder reads. The reverse direction is keyed per character: a
/// multi-character symbol registers each of its characters under the
/// row's id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    by_id: HashMap<u32, String>,
    by_char: HashMap<char, u32>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `symbol` under `id`. Later registrations win in both
    /// directions.
    pub fn insert(&mut self, symbol: &str, id: u32) {
        for c in symbol.chars() {
            self.by_char.insert(c, id);
        }
        self.by_id.insert(id, symbol.to_string());
    }

    pub fn symbol(&self, id: u32) -> Option<&str> {
        self.by_id.get(&id).map(String::as_str)
    }

    pub fn id_of(&self, symbol: char) -> Option<u32> {
        self.by_char.get(&symbol).copied()
    }

    /// Number of distinct ids.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Largest registered id, if any.
    pub fn max_id(&self) -> Option<u32> {
        self.by_id.keys().copied().max()
    }

    /// Builds the table from `symbol;id` records.
    ///
    /// Both fields are trimmed, except that a symbol made only of
    /// whitespace is kept verbatim so a quoted `" "` can map the space.
    pub fn from_reader<R: io::Read>(reader: R, options: &LoadOptions) -> Result<Self, TableError> {
        let mut table = Self::new();

        for record in read_records(reader, options)? {
            let id = match record.second.trim().parse::<u32>() {
                Ok(id) => id,
                Err(e) => {
                    log_or_err!(
                        options,
                        log::Level::Warn,
                        TableError::MalformedRecord {
                            line: record.line,
                            reason: format!("invalid symbol id {:?}: {e}", record.second),
                        }
                    );
                    continue;
                }
            };

            let trimmed = record.first.trim();
            let symbol = if trimmed.is_empty() {
                record.first.as_str()
            } else {
                trimmed
            };

            table.insert(symbol, id);
        }

        Ok(table)
    }

    /// Loads the table from a file. Unlike overrides, the file must exist.
    pub fn load<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Self, TableError> {
        let path = path.as_ref();
        let file = File::open(path)?;

        let table = Self::from_reader(io::BufReader::new(file), options)?;
        log::debug!("Loaded {} symbols from {}", table.len(), path.display());

        if table.is_empty() {
            log::warn!("Symbol table {} has no usable records", path.display());
        }

        Ok(table)
    }
}

impl<S: AsRef<str>> FromIterator<(S, u32)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (symbol, id) in iter {
            table.insert(symbol.as_ref(), id);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_directions() -> Result<(), TableError> {
        let data = "\" \";0\ne;1\nt ; 2\nh;8\n";
        let table = SymbolTable::from_reader(data.as_bytes(), &LoadOptions::default())?;

        assert_eq!(table.len(), 4);
        assert_eq!(table.symbol(0), Some(" "));
        assert_eq!(table.symbol(2), Some("t"));
        assert_eq!(table.symbol(8), Some("h"));
        assert_eq!(table.symbol(3), None);
        assert_eq!(table.id_of('t'), Some(2));
        assert_eq!(table.id_of(' '), Some(0));
        assert_eq!(table.max_id(), Some(8));
        Ok(())
    }

    #[test]
    fn multi_character_symbols_split_per_character() {
        let table = SymbolTable::from_iter([("aA", 3), ("b", 4)]);

        assert_eq!(table.symbol(3), Some("aA"));
        assert_eq!(table.id_of('a'), Some(3));
        assert_eq!(table.id_of('A'), Some(3));
        assert_eq!(table.id_of('b'), Some(4));
    }

    #[test]
    fn last_registration_wins() {
        let table = SymbolTable::from_iter([("ab", 1), ("b", 2), ("x", 1)]);

        assert_eq!(table.symbol(1), Some("x"));
        assert_eq!(table.id_of('a'), Some(1));
        assert_eq!(table.id_of('b'), Some(2));
    }

    #[test]
    fn skips_non_integer_ids() -> Result<(), TableError> {
        let data = "a;one\nb;2\n";
        let table = SymbolTable::from_reader(data.as_bytes(), &LoadOptions::default())?;

        assert_eq!(table.len(), 1);
        assert_eq!(table.id_of('a'), None);
        Ok(())
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = SymbolTable::load("no/such/characters_to_id.csv", &LoadOptions::default());
        assert!(matches!(result, Err(TableError::Io(_))));
    }
}
