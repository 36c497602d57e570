use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use syllastego::process::{DEFAULT_BINARY_GROUP_SIZE, DEFAULT_SYLLABLE_GROUP_SIZE};
use syllastego::tables::{LoadOptions, TableFormat};
use syllastego::utils::hyphenate::DEFAULT_LANGUAGE;

use crate::cli::command::PipelineArgs;

/// Settings read from the YAML configuration file.
///
/// Every field is optional in the file; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub language: String,
    pub delimiter: char,
    pub quote_char: char,
    pub show_syllables: bool,
    pub syllable_group_size: usize,
    pub binary_group_size: usize,
    pub characters_to_id_path: PathBuf,
    pub syllable_override_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            delimiter: ';',
            quote_char: '"',
            show_syllables: true,
            syllable_group_size: DEFAULT_SYLLABLE_GROUP_SIZE,
            binary_group_size: DEFAULT_BINARY_GROUP_SIZE,
            characters_to_id_path: PathBuf::from("data/characters_to_id.csv"),
            syllable_override_path: PathBuf::from("data/syllable_overrides.csv"),
        }
    }
}

impl Config {
    /// Reads the configuration file, or returns the defaults without one.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let yaml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&yaml)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Applies command line values on top of the file values.
    pub fn apply(&mut self, args: &PipelineArgs) {
        if let Some(language) = &args.language {
            self.language = language.clone();
        }
        if let Some(path) = &args.symbols {
            self.characters_to_id_path = path.clone();
        }
        if let Some(path) = &args.overrides {
            self.syllable_override_path = path.clone();
        }
        if let Some(size) = args.syllable_group_size {
            self.syllable_group_size = size;
        }
        if let Some(size) = args.binary_group_size {
            self.binary_group_size = size;
        }
        if let Some(delimiter) = args.delimiter {
            self.delimiter = delimiter;
        }
        if let Some(quote_char) = args.quote_char {
            self.quote_char = quote_char;
        }
    }

    /// Table loading options. Delimiter and quote must be single-byte ASCII.
    pub fn load_options(&self, fail_level: log::Level) -> Result<LoadOptions> {
        Ok(LoadOptions {
            format: TableFormat {
                delimiter: ascii_byte("delimiter", self.delimiter)?,
                quote: ascii_byte("quote_char", self.quote_char)?,
            },
            fail_level,
        })
    }
}

fn ascii_byte(name: &str, c: char) -> Result<u8> {
    if !c.is_ascii() {
        bail!("{name} must be an ASCII character, got {c:?}");
    }
    Ok(c as u8)
}
