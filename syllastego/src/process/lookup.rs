use crate::tables::SymbolTable;
use crate::utils::errors::DecodeError;

/// Maps each packed id to its symbol, in order.
///
/// The first id without a mapping aborts the whole call: skipping it would
/// shift every later symbol out of step with the message.
pub fn decode_symbols(ids: &[u32], table: &SymbolTable) -> Result<Vec<String>, DecodeError> {
    ids.iter()
        .enumerate()
        .map(|(position, &id)| {
            table
                .symbol(id)
                .map(str::to_owned)
                .ok_or(DecodeError::LookupFailure { id, position })
        })
        .collect()
}

/// Maps each character of `message` to its id, in order.
pub fn encode_symbols(message: &str, table: &SymbolTable) -> Result<Vec<u32>, DecodeError> {
    message
        .chars()
        .enumerate()
        .map(|(position, symbol)| {
            table
                .id_of(symbol)
                .ok_or(DecodeError::UnknownSymbol { symbol, position })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SymbolTable {
        SymbolTable::from_iter([(" ", 0), ("e", 1), ("h", 8), ("i", 5), ("!?", 15)])
    }

    #[test]
    fn decodes_in_order() -> Result<(), DecodeError> {
        assert_eq!(decode_symbols(&[8, 5, 15], &table())?, vec!["h", "i", "!?"]);
        assert!(decode_symbols(&[], &table())?.is_empty());
        Ok(())
    }

    #[test]
    fn missing_id_aborts() {
        assert_eq!(
            decode_symbols(&[8, 5, 9, 1, 12], &table()),
            Err(DecodeError::LookupFailure { id: 9, position: 2 })
        );
    }

    #[test]
    fn encodes_characters() -> Result<(), DecodeError> {
        assert_eq!(encode_symbols("hi he!", &table())?, vec![8, 5, 0, 8, 1, 15]);
        assert_eq!(
            encode_symbols("hex", &table()),
            Err(DecodeError::UnknownSymbol {
                symbol: 'x',
                position: 2,
            })
        );
        Ok(())
    }
}
