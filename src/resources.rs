use anyhow::{Context, Result};
use syllastego::process::decode::Decoder;
use syllastego::tables::{SyllableOverrides, SymbolTable};
use syllastego::utils::hyphenate::StandardHyphenator;

use crate::config::Config;

/// Everything the pipeline reads, loaded once before any decoding.
pub struct Resources {
    pub hyphenator: StandardHyphenator,
    pub overrides: SyllableOverrides,
    pub symbols: SymbolTable,
    syllable_group_size: usize,
    binary_group_size: usize,
    show_syllables: bool,
}

impl Resources {
    pub fn load(config: &Config, fail_level: log::Level) -> Result<Self> {
        let options = config.load_options(fail_level)?;

        let hyphenator = StandardHyphenator::new(&config.language)?;

        let overrides = SyllableOverrides::load(&config.syllable_override_path, &options)
            .with_context(|| {
                format!(
                    "Failed to load syllable overrides from {}",
                    config.syllable_override_path.display()
                )
            })?;

        let symbols = SymbolTable::load(&config.characters_to_id_path, &options)
            .with_context(|| {
                format!(
                    "Failed to load symbol table from {}",
                    config.characters_to_id_path.display()
                )
            })?;

        log::info!(
            "Loaded {} symbols and {} syllable overrides (language: {})",
            symbols.len(),
            overrides.len(),
            config.language
        );

        Ok(Self {
            hyphenator,
            overrides,
            symbols,
            syllable_group_size: config.syllable_group_size,
            binary_group_size: config.binary_group_size,
            show_syllables: config.show_syllables,
        })
    }

    /// A decoder configured from the loaded settings.
    pub fn decoder(&self) -> Decoder<'_, StandardHyphenator> {
        let mut decoder = Decoder::new(&self.hyphenator, &self.overrides, &self.symbols);
        decoder.set_group_sizes(self.syllable_group_size, self.binary_group_size);
        decoder.set_trace(self.show_syllables);
        decoder
    }
}
