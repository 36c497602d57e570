//! Decoder for messages hidden in the syllable parity of ordinary prose.
//!
//! ## Technical Overview
//!
//! A carrier text hides one bit in every group of words: the parity of the
//! group's total syllable count. Consecutive bits form ids, and ids map to
//! symbols through a lookup table.
//!
//! ### Pipeline
//!
//! 1. **Syllable counting** ([`process::syllables`]): each whitespace-separated
//!    word is normalized and counted, manual overrides first, hyphenation
//!    patterns second.
//! 2. **Bit extraction** ([`process::extract`]): fixed groups of counts are
//!    reduced to one bit each (parity by default).
//! 3. **Bit packing** ([`process::pack`]): fixed groups of bits become ids,
//!    most significant bit first.
//! 4. **Symbol lookup** ([`process::lookup`]): ids become symbols. An
//!    unknown id aborts the decode.
//!
//! Every stage uses fixed framing: a trailing group shorter than the group
//! size is dropped without padding.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use syllastego::process::{EXAMPLE_TEXT, decode::Decoder};
//! use syllastego::tables::{LoadOptions, SyllableOverrides, SymbolTable};
//! use syllastego::utils::hyphenate::StandardHyphenator;
//!
//! // Setup: load the tables once
//! let options = LoadOptions::default();
//! let hyphenator = StandardHyphenator::new("en_US")?;
//! let overrides = SyllableOverrides::load("data/syllable_overrides.csv", &options)?;
//! let symbols = SymbolTable::load("data/characters_to_id.csv", &options)?;
//!
//! // Decode any number of texts against them
//! let decoder = Decoder::new(&hyphenator, &overrides, &symbols);
//! let report = decoder.decode_report(EXAMPLE_TEXT)?;
//!
//! println!("bits: {:?}", report.bits);
//! println!("message: {}", report.message());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Decode pipeline stages.
///
/// 1. **Syllables** ([`process::syllables`]): word normalization and counting.
/// 2. **Extraction** ([`process::extract`]): syllable groups to bits.
/// 3. **Packing** ([`process::pack`]): bit groups to ids.
/// 4. **Lookup** ([`process::lookup`]): ids to symbols.
/// 5. **Decoding** ([`process::decode`]): the stages composed.
pub mod process;

/// Lookup tables built once during setup.
///
/// - **Overrides** ([`tables::overrides`]): word to syllable count
/// - **Symbols** ([`tables::symbols`]): id to symbol and back
/// - **Records** ([`tables::records`]): delimited record reading
pub mod tables;

/// Utility functions and supporting infrastructure.
///
/// - **Framing** ([`utils::framing`]): fixed window grouping
/// - **Hyphenation** ([`utils::hyphenate`]): syllable boundary detection
/// - **Error Handling** ([`utils::errors`]): Error types
pub mod utils;
