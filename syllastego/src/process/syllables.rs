use std::fmt::Display;

use crate::tables::SyllableOverrides;
use crate::utils::hyphenate::Hyphenate;

/// Log target of the per-word syllable trace.
pub const TRACE_TARGET: &str = "syllastego::trace";

/// Reduces a token to its lookup form: ASCII letters and apostrophes,
/// lowercased. Everything else is dropped.
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == '\'')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Where a syllable count came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountSource {
    /// The token had nothing left after normalization.
    Empty,
    Override,
    Hyphenation,
}

/// Syllable analysis of a single token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSyllables {
    pub normalized: String,

    /// Hyphen-marked form, present only when hyphenation was consulted.
    pub hyphenated: Option<String>,

    pub count: u32,
    pub source: CountSource,
}

impl Display for WordSyllables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.source, &self.hyphenated) {
            (CountSource::Hyphenation, Some(hyphenated)) => {
                write!(f, "{hyphenated}\t{}", self.count)
            }
            (CountSource::Override, _) => {
                write!(f, "{}\t{} (override)", self.normalized, self.count)
            }
            _ => write!(f, "{}\t{}", self.normalized, self.count),
        }
    }
}

/// Counts syllables per word, overrides first, hyphenation second.
pub struct SyllableCounter<'a, H: Hyphenate + ?Sized> {
    hyphenator: &'a H,
    overrides: &'a SyllableOverrides,
    trace: bool,
}

impl<'a, H: Hyphenate + ?Sized> SyllableCounter<'a, H> {
    /// Creates a counter with the syllable trace enabled.
    pub fn new(hyphenator: &'a H, overrides: &'a SyllableOverrides) -> Self {
        Self {
            hyphenator,
            overrides,
            trace: true,
        }
    }

    /// Toggles the per-word trace. Counts are unaffected.
    pub fn set_trace(&mut self, trace: bool) {
        self.trace = trace;
    }

    pub fn trace(&self) -> bool {
        self.trace
    }

    /// Analyses one token without emitting the trace.
    pub fn inspect(&self, word: &str) -> WordSyllables {
        let normalized = normalize_word(word);

        if normalized.is_empty() {
            return WordSyllables {
                normalized,
                hyphenated: None,
                count: 0,
                source: CountSource::Empty,
            };
        }

        if let Some(count) = self.overrides.get(&normalized) {
            return WordSyllables {
                normalized,
                hyphenated: None,
                count,
                source: CountSource::Override,
            };
        }

        let hyphenated = self.hyphenator.hyphenate(&normalized);
        let count = (hyphenated.split('-').count() as u32).max(1);

        WordSyllables {
            normalized,
            hyphenated: Some(hyphenated),
            count,
            source: CountSource::Hyphenation,
        }
    }

    pub fn count_syllables(&self, word: &str) -> u32 {
        let syllables = self.inspect(word);

        if self.trace && syllables.source != CountSource::Empty {
            log::info!(target: TRACE_TARGET, "{syllables}");
        }

        syllables.count
    }

    /// Counts every whitespace-separated word of `text`, in order.
    pub fn syllables_from_string(&self, text: &str) -> Vec<u32> {
        text.split_whitespace()
            .map(|word| self.count_syllables(word))
            .collect()
    }

    /// Per-word analysis of `text`, in order.
    pub fn inspect_text(&self, text: &str) -> Vec<WordSyllables> {
        text.split_whitespace()
            .map(|word| self.inspect(word))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vowel_groups(word: &str) -> String {
        // Break before a consonant that opens a new vowel group.
        let chars = word.chars().collect::<Vec<_>>();
        let is_vowel = |c: char| "aeiouy".contains(c);

        let mut out = String::new();
        for (i, &c) in chars.iter().enumerate() {
            let opens_group = !is_vowel(c)
                && chars.get(i + 1).is_some_and(|&next| is_vowel(next))
                && chars[..i].iter().any(|&prev| is_vowel(prev));
            if opens_group {
                out.push('-');
            }
            out.push(c);
        }
        out
    }

    #[test]
    fn normalization() {
        assert_eq!(normalize_word("Don't!"), "don't");
        assert_eq!(normalize_word("e-mail,"), "email");
        assert_eq!(normalize_word("café"), "caf");
        assert_eq!(normalize_word("1984"), "");

        let once = normalize_word("It's-OK?");
        assert_eq!(normalize_word(&once), once);
    }

    #[test]
    fn empty_words_count_zero() {
        let overrides = SyllableOverrides::new();
        let counter = SyllableCounter::new(&vowel_groups, &overrides);

        assert_eq!(counter.count_syllables("--"), 0);
        assert_eq!(counter.count_syllables("42"), 0);
        assert_eq!(counter.inspect("...").source, CountSource::Empty);
    }

    #[test]
    fn floor_of_one_for_non_empty_words() {
        let overrides = SyllableOverrides::new();
        let unbroken = |word: &str| word.to_string();
        let counter = SyllableCounter::new(&unbroken, &overrides);

        assert_eq!(counter.count_syllables("strengths"), 1);
        assert_eq!(counter.count_syllables("a"), 1);
    }

    #[test]
    fn override_bypasses_hyphenation() {
        let overrides = SyllableOverrides::from_iter([("fire", 1), ("silence", 0), ("ok", 40)]);
        let counter = SyllableCounter::new(&vowel_groups, &overrides);

        assert_eq!(counter.count_syllables("Fire."), 1);
        assert_eq!(counter.count_syllables("silence"), 0);
        assert_eq!(counter.count_syllables("OK"), 40);

        let inspected = counter.inspect("fire");
        assert_eq!(inspected.source, CountSource::Override);
        assert_eq!(inspected.hyphenated, None);
        assert_eq!(inspected.to_string(), "fire\t1 (override)");
    }

    #[test]
    fn trace_toggle_keeps_counts() {
        let overrides = SyllableOverrides::new();
        let mut counter = SyllableCounter::new(&vowel_groups, &overrides);
        let traced = counter.syllables_from_string("banana republic");

        counter.set_trace(false);
        assert!(!counter.trace());
        assert_eq!(counter.syllables_from_string("banana republic"), traced);
    }

    #[test]
    fn text_preserves_word_order() {
        let overrides = SyllableOverrides::new();
        let counter = SyllableCounter::new(&vowel_groups, &overrides);

        assert_eq!(
            counter.syllables_from_string("banana  cat\tpotato!"),
            vec![3, 1, 3]
        );
        assert_eq!(counter.inspect("banana").to_string(), "ba-na-na\t3");
        assert!(counter.syllables_from_string("").is_empty());
        assert!(counter.syllables_from_string(" \n\t ").is_empty());
    }
}
