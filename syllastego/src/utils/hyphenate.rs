//! Syllable boundary detection.
//!
//! The syllable counter only needs "given a word, mark its syllable
//! boundaries". [`Hyphenate`] is that capability; [`StandardHyphenator`]
//! provides it from the Knuth-Liang pattern dictionaries embedded by the
//! `hyphenation` crate.

use hyphenation::{Hyphenator, Language, Load, Standard};

use crate::utils::errors::HyphenationError;

/// Language used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en_US";

/// Shortest word prefix and suffix a break may leave behind.
pub const HYPHENATION_MINIMA: (usize, usize) = (2, 2);

/// Marks syllable boundaries in a word.
pub trait Hyphenate {
    /// Returns `word` with a `-` inserted at every syllable boundary.
    fn hyphenate(&self, word: &str) -> String;
}

impl<F> Hyphenate for F
where
    F: Fn(&str) -> String,
{
    fn hyphenate(&self, word: &str) -> String {
        self(word)
    }
}

/// Pattern-based hyphenation for a single language.
pub struct StandardHyphenator {
    language: Language,
    dictionary: Standard,
}

impl std::fmt::Debug for StandardHyphenator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardHyphenator")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl StandardHyphenator {
    /// Loads the embedded dictionary for a language code such as `en_US`,
    /// `en-gb` or `de`.
    ///
    /// Breaks are allowed two characters from either end of a word, so a
    /// trailing two-letter syllable ("hap-py") counts on its own.
    pub fn new(code: &str) -> Result<Self, HyphenationError> {
        let language = language_from_code(code)?;
        let mut dictionary =
            Standard::from_embedded(language).map_err(|e| HyphenationError::DictionaryLoad {
                language: code.to_string(),
                reason: e.to_string(),
            })?;
        dictionary.minima = HYPHENATION_MINIMA;

        log::debug!("Loaded hyphenation dictionary for {code}");

        Ok(Self {
            language,
            dictionary,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl Hyphenate for StandardHyphenator {
    fn hyphenate(&self, word: &str) -> String {
        let hyphenated = self.dictionary.hyphenate(word);

        let mut marked = String::with_capacity(word.len() + hyphenated.breaks.len());
        let mut last = 0;
        for &at in &hyphenated.breaks {
            marked.push_str(&word[last..at]);
            marked.push('-');
            last = at;
        }
        marked.push_str(&word[last..]);

        marked
    }
}

/// Maps a locale-style code onto an embedded dictionary language.
///
/// Codes are matched case-insensitively and `_` is treated like `-`.
pub fn language_from_code(code: &str) -> Result<Language, HyphenationError> {
    let normalized = code.trim().to_ascii_lowercase().replace('_', "-");

    let language = match normalized.as_str() {
        "en" | "en-us" => Language::EnglishUS,
        "en-gb" => Language::EnglishGB,
        "fr" | "fr-fr" => Language::French,
        "de" | "de-de" | "de-1996" => Language::German1996,
        "es" | "es-es" => Language::Spanish,
        "it" | "it-it" => Language::Italian,
        "nl" | "nl-nl" => Language::Dutch,
        "pt" | "pt-pt" | "pt-br" => Language::Portuguese,
        "sv" | "sv-se" => Language::Swedish,
        "da" | "da-dk" => Language::Danish,
        "nb" | "no" | "nb-no" => Language::NorwegianBokmal,
        "fi" | "fi-fi" => Language::Finnish,
        "pl" | "pl-pl" => Language::Polish,
        "cs" | "cs-cz" => Language::Czech,
        "hu" | "hu-hu" => Language::Hungarian,
        _ => return Err(HyphenationError::UnsupportedLanguage(code.to_string())),
    };

    Ok(language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes() -> Result<(), HyphenationError> {
        assert_eq!(language_from_code("en_US")?, Language::EnglishUS);
        assert_eq!(language_from_code("EN-us")?, Language::EnglishUS);
        assert_eq!(language_from_code("en_GB")?, Language::EnglishGB);
        assert!(matches!(
            language_from_code("tlh"),
            Err(HyphenationError::UnsupportedLanguage(_))
        ));
        Ok(())
    }

    #[test]
    fn closure_as_hyphenator() {
        let split_pairs = |word: &str| {
            word.as_bytes()
                .chunks(2)
                .map(|c| String::from_utf8_lossy(c).into_owned())
                .collect::<Vec<_>>()
                .join("-")
        };

        assert_eq!(split_pairs.hyphenate("abcde"), "ab-cd-e");
    }

    #[test]
    fn english_marks_boundaries() -> Result<(), HyphenationError> {
        let hyphenator = StandardHyphenator::new(DEFAULT_LANGUAGE)?;

        let marked = hyphenator.hyphenate("hyphenation");
        assert!(marked.contains('-'));
        assert_eq!(marked.replace('-', ""), "hyphenation");

        assert_eq!(hyphenator.hyphenate("cat"), "cat");
        Ok(())
    }
}
