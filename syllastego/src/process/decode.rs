use crate::process::extract::{Parity, Reducer, extract_bits};
use crate::process::lookup::{decode_symbols, encode_symbols};
use crate::process::pack::{check_binary_group_size, pack_bits, unpack_integers};
use crate::process::syllables::SyllableCounter;
use crate::process::{DEFAULT_BINARY_GROUP_SIZE, DEFAULT_SYLLABLE_GROUP_SIZE};
use crate::tables::{SyllableOverrides, SymbolTable};
use crate::utils::errors::DecodeError;
use crate::utils::framing::check_group_size;
use crate::utils::hyphenate::Hyphenate;

/// Recovers the symbols hidden in a carrier text.
///
/// Runs syllable counting, bit extraction, bit packing and symbol lookup in
/// that order, each stage over the complete output of the previous one.
/// The decoder only borrows its tables, so many decoders can share them.
///
/// # Example
///
/// ```rust,no_run
/// use syllastego::process::decode::Decoder;
/// use syllastego::tables::{LoadOptions, SyllableOverrides, SymbolTable};
/// use syllastego::utils::hyphenate::StandardHyphenator;
///
/// let options = LoadOptions::default();
/// let hyphenator = StandardHyphenator::new("en_US")?;
/// let overrides = SyllableOverrides::load("data/syllable_overrides.csv", &options)?;
/// let symbols = SymbolTable::load("data/characters_to_id.csv", &options)?;
///
/// let mut decoder = Decoder::new(&hyphenator, &overrides, &symbols);
/// decoder.set_trace(false);
///
/// let message = decoder.decode(syllastego::process::EXAMPLE_TEXT)?;
/// println!("{}", message.concat());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Decoder<'a, H: Hyphenate + ?Sized> {
    counter: SyllableCounter<'a, H>,
    symbols: &'a SymbolTable,
    syllable_group_size: usize,
    binary_group_size: usize,
    reducer: Box<dyn Reducer + 'a>,
}

impl<'a, H: Hyphenate + ?Sized> Decoder<'a, H> {
    /// Creates a decoder with 4-word syllable groups, 4-bit ids, the parity
    /// reducer and the syllable trace enabled.
    pub fn new(
        hyphenator: &'a H,
        overrides: &'a SyllableOverrides,
        symbols: &'a SymbolTable,
    ) -> Self {
        Self {
            counter: SyllableCounter::new(hyphenator, overrides),
            symbols,
            syllable_group_size: DEFAULT_SYLLABLE_GROUP_SIZE,
            binary_group_size: DEFAULT_BINARY_GROUP_SIZE,
            reducer: Box::new(Parity),
        }
    }

    /// Sets the number of words reduced to one bit and the number of bits
    /// packed into one id.
    pub fn set_group_sizes(&mut self, syllable_group_size: usize, binary_group_size: usize) {
        self.syllable_group_size = syllable_group_size;
        self.binary_group_size = binary_group_size;
    }

    pub fn set_reducer<R: Reducer + 'a>(&mut self, reducer: R) {
        self.reducer = Box::new(reducer);
    }

    /// Toggles the per-word syllable trace.
    pub fn set_trace(&mut self, trace: bool) {
        self.counter.set_trace(trace);
    }

    pub fn counter(&self) -> &SyllableCounter<'a, H> {
        &self.counter
    }

    pub fn syllable_group_size(&self) -> usize {
        self.syllable_group_size
    }

    pub fn binary_group_size(&self) -> usize {
        self.binary_group_size
    }

    /// Decodes `text` into its symbol sequence.
    pub fn decode(&self, text: &str) -> Result<Vec<String>, DecodeError> {
        Ok(self.decode_report(text)?.symbols)
    }

    /// Decodes `text`, keeping every intermediate sequence.
    pub fn decode_report(&self, text: &str) -> Result<DecodeReport, DecodeError> {
        check_group_size(self.syllable_group_size)?;
        check_binary_group_size(self.binary_group_size)?;

        let syllables = self.counter.syllables_from_string(text);
        let bits = extract_bits(&syllables, self.syllable_group_size, self.reducer.as_ref())?;
        let ids = pack_bits(&bits, self.binary_group_size)?;
        let symbols = decode_symbols(&ids, self.symbols)?;

        log::debug!(
            "Decoded {} words into {} bits, {} ids",
            syllables.len(),
            bits.len(),
            ids.len()
        );

        Ok(DecodeReport {
            syllables,
            bits,
            ids,
            symbols,
        })
    }

    /// Describes what a carrier text for `message` has to look like.
    ///
    /// No prose is produced: the plan lists the ids, the bit pattern and the
    /// minimum number of words.
    pub fn plan(&self, message: &str) -> Result<EncodePlan, DecodeError> {
        check_group_size(self.syllable_group_size)?;

        let ids = encode_symbols(message, self.symbols)?;
        let bits = unpack_integers(&ids, self.binary_group_size)?;
        let words_required = bits.len() * self.syllable_group_size;

        Ok(EncodePlan {
            ids,
            bits,
            words_required,
        })
    }
}

/// Every stage's output for one decoded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeReport {
    /// Syllable count per word.
    pub syllables: Vec<u32>,

    /// One bit per complete syllable group.
    pub bits: Vec<u8>,

    /// One id per complete bit group.
    pub ids: Vec<u32>,

    pub symbols: Vec<String>,
}

impl DecodeReport {
    /// The decoded symbols joined into a single string.
    pub fn message(&self) -> String {
        self.symbols.concat()
    }
}

/// Requirements for a carrier text of a given message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodePlan {
    pub ids: Vec<u32>,

    /// Parity each syllable group has to reduce to.
    pub bits: Vec<u8>,

    pub words_required: usize,
}

/// Decodes `text` with the parity reducer and the syllable trace enabled.
pub fn decode<H: Hyphenate + ?Sized>(
    text: &str,
    hyphenator: &H,
    overrides: &SyllableOverrides,
    symbols: &SymbolTable,
    syllable_group_size: usize,
    binary_group_size: usize,
) -> Result<Vec<String>, DecodeError> {
    let mut decoder = Decoder::new(hyphenator, overrides, symbols);
    decoder.set_group_sizes(syllable_group_size, binary_group_size);
    decoder.decode(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One syllable per letter.
    fn per_letter(word: &str) -> String {
        word.chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join("-")
    }

    fn symbols() -> SymbolTable {
        SymbolTable::from_iter([("h", 8), ("i", 5), ("e", 1)])
    }

    #[test]
    fn end_to_end() -> Result<(), DecodeError> {
        let text = "a ab a abc  a a ab ab  abc a a a  ab a abc a";
        let overrides = SyllableOverrides::new();
        let symbols = symbols();
        let decoder = Decoder::new(&per_letter, &overrides, &symbols);

        let report = decoder.decode_report(text)?;
        assert_eq!(
            report.syllables,
            vec![1, 2, 1, 3, 1, 1, 2, 2, 3, 1, 1, 1, 2, 1, 3, 1]
        );
        assert_eq!(report.bits, vec![1, 0, 0, 0]);
        assert_eq!(report.ids, vec![8]);
        assert_eq!(report.symbols, vec!["h"]);
        assert_eq!(report.message(), "h");

        assert_eq!(decode(text, &per_letter, &overrides, &symbols, 4, 4)?, vec!["h"]);
        Ok(())
    }

    #[test]
    fn overrides_feed_the_pipeline() -> Result<(), DecodeError> {
        // "zz" would be two syllables; the override makes the last bit odd.
        let overrides = SyllableOverrides::from_iter([("zz", 3)]);
        let symbols = symbols();
        let mut decoder = Decoder::new(&per_letter, &overrides, &symbols);
        decoder.set_group_sizes(1, 4);

        assert_eq!(decoder.decode("ab ab ab zz")?, vec!["e"]);
        Ok(())
    }

    #[test]
    fn empty_text_decodes_to_nothing() -> Result<(), DecodeError> {
        let overrides = SyllableOverrides::new();
        let symbols = SymbolTable::new();
        let decoder = Decoder::new(&per_letter, &overrides, &symbols);

        assert!(decoder.decode("")?.is_empty());
        assert!(decoder.decode("  \n ")?.is_empty());
        Ok(())
    }

    #[test]
    fn deterministic() -> Result<(), DecodeError> {
        let text = "the quick brown fox jumps over the lazy dog again and again until it is tired";
        let overrides = SyllableOverrides::new();
        let symbols = SymbolTable::from_iter((0..16).map(|id| (format!("{id:x}"), id)));
        let decoder = Decoder::new(&per_letter, &overrides, &symbols);

        assert_eq!(decoder.decode_report(text)?, decoder.decode_report(text)?);
        Ok(())
    }

    #[test]
    fn missing_symbol_fails_whole_call() {
        let overrides = SyllableOverrides::new();
        let symbols = symbols();
        let mut decoder = Decoder::new(&per_letter, &overrides, &symbols);
        decoder.set_group_sizes(1, 4);

        // ids 8 then 15
        let result = decoder.decode("a bb bb bb a a a a");
        assert_eq!(
            result,
            Err(DecodeError::LookupFailure {
                id: 15,
                position: 1,
            })
        );
    }

    #[test]
    fn invalid_group_sizes() {
        let overrides = SyllableOverrides::new();
        let symbols = symbols();
        let mut decoder = Decoder::new(&per_letter, &overrides, &symbols);

        decoder.set_group_sizes(0, 4);
        assert!(matches!(
            decoder.decode("a b c d"),
            Err(DecodeError::InvalidGroupSize { size: 0, .. })
        ));

        decoder.set_group_sizes(4, 33);
        assert!(matches!(
            decoder.decode("a b c d"),
            Err(DecodeError::InvalidGroupSize { size: 33, .. })
        ));
    }

    #[test]
    fn custom_reducer() -> Result<(), DecodeError> {
        let overrides = SyllableOverrides::new();
        let symbols = symbols();
        let mut decoder = Decoder::new(&per_letter, &overrides, &symbols);
        decoder.set_group_sizes(1, 4);
        decoder.set_reducer(|sum: u64| u8::from(sum > 2));

        assert_eq!(decoder.decode("abc a a a")?, vec!["h"]);
        Ok(())
    }

    #[test]
    fn plan_matches_decoder_framing() -> Result<(), DecodeError> {
        let overrides = SyllableOverrides::new();
        let symbols = symbols();
        let decoder = Decoder::new(&per_letter, &overrides, &symbols);

        let plan = decoder.plan("hi")?;
        assert_eq!(plan.ids, vec![8, 5]);
        assert_eq!(plan.bits, vec![1, 0, 0, 0, 0, 1, 0, 1]);
        assert_eq!(plan.words_required, 32);
        Ok(())
    }
}
