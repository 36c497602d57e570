/// Per-word syllable counting.
///
/// Provides the [`SyllableCounter`](syllables::SyllableCounter), which
/// consults the override table before falling back to hyphenation.
pub mod syllables;

/// Reduction of syllable groups to bits.
///
/// Provides [`extract_bits`](extract::extract_bits) and the pluggable
/// [`Reducer`](extract::Reducer) strategy.
pub mod extract;

/// MSB-first packing of bit groups into ids, and the reverse expansion.
pub mod pack;

/// Id to symbol lookup, and symbol to id for planning carrier texts.
pub mod lookup;

/// The complete pipeline.
///
/// Provides the [`Decoder`](decode::Decoder) and the
/// [`decode`](decode::decode) convenience function.
pub mod decode;

/// Words reduced to one bit, unless configured otherwise.
pub const DEFAULT_SYLLABLE_GROUP_SIZE: usize = 4;

/// Bits packed into one id, unless configured otherwise.
pub const DEFAULT_BINARY_GROUP_SIZE: usize = 4;

pub const EXAMPLE_TEXT: &str = "Today I went shopping at the local store. I started acting \
strangely which was kinda dumb. I ate some food from the pyrotechnics store and now I'm \
stuffed. It was real fun.";
