/// Delimited two-column record reading shared by both tables.
pub mod records;

/// Word to syllable count corrections.
///
/// Provides [`SyllableOverrides`](overrides::SyllableOverrides), consulted
/// before hyphenation when counting syllables.
pub mod overrides;

/// Id to symbol mapping and its per-character inverse.
///
/// Provides [`SymbolTable`](symbols::SymbolTable), the decoder's final lookup.
pub mod symbols;

pub use overrides::SyllableOverrides;
pub use records::{LoadOptions, TableFormat};
pub use symbols::SymbolTable;
