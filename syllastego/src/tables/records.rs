use std::io;

use csv::{ReaderBuilder, Trim};

use crate::log_or_err;
use crate::utils::errors::TableError;

/// Shape of the delimited table sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFormat {
    pub delimiter: u8,
    pub quote: u8,
}

impl Default for TableFormat {
    fn default() -> Self {
        Self {
            delimiter: b';',
            quote: b'"',
        }
    }
}

/// Settings applied while loading a table.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    pub format: TableFormat,

    /// Records are reported at warn level. With the default `Error` fail
    /// level they are skipped; `Warn` makes the first one fatal.
    pub fail_level: log::Level,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            format: TableFormat::default(),
            fail_level: log::Level::Error,
        }
    }
}

/// A two-column row, fields not yet interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub line: u64,
    pub first: String,
    pub second: String,
}

/// Reads every well-shaped two-column record from `reader`.
///
/// Rows with another column count, or that the delimited reader cannot
/// decode, are reported through [`log_or_err!`] and skipped.
pub fn read_records<R: io::Read>(
    reader: R,
    options: &LoadOptions,
) -> Result<Vec<Record>, TableError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.format.delimiter)
        .quote(options.format.quote)
        .has_headers(false)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) if e.is_io_error() => return Err(TableError::Csv(e)),
            Err(e) => {
                let line = e.position().map_or(index as u64 + 1, |p| p.line());
                log_or_err!(
                    options,
                    log::Level::Warn,
                    TableError::MalformedRecord {
                        line,
                        reason: e.to_string(),
                    }
                );
                continue;
            }
        };

        let line = row.position().map_or(index as u64 + 1, |p| p.line());
        if row.len() != 2 {
            log_or_err!(
                options,
                log::Level::Warn,
                TableError::MalformedRecord {
                    line,
                    reason: format!("expected 2 columns, found {}", row.len()),
                }
            );
            continue;
        }

        records.push(Record {
            line,
            first: row[0].to_string(),
            second: row[1].to_string(),
        });
    }

    Ok(records)
}
