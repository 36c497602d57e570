#[macro_export]
macro_rules! log_or_err {
    ($state:expr, $level:expr, $err:expr $(,)?) => {{
        if $level <= $state.fail_level {
            return Err($err);
        } else {
            match $level {
                ::log::Level::Error => ::log::error!("{}", $err),
                ::log::Level::Warn => ::log::warn!("{}", $err),
                ::log::Level::Info => ::log::info!("{}", $err),
                ::log::Level::Debug => ::log::debug!("{}", $err),
                ::log::Level::Trace => ::log::trace!("{}", $err),
            }
        }
    }};
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("No symbol mapped to id {id} at position {position}")]
    LookupFailure { id: u32, position: usize },

    #[error("Invalid group size {size}: {reason}")]
    InvalidGroupSize { size: usize, reason: &'static str },

    #[error("No id mapped to symbol {symbol:?} at position {position}")]
    UnknownSymbol { symbol: char, position: usize },

    #[error("id {id} at position {position} does not fit in {group_size} bits")]
    IdTooWide {
        id: u32,
        position: usize,
        group_size: usize,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum TableError {
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("Table source {0} not found, using an empty table")]
    MissingSource(String),

    #[error("I/O error while reading table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Delimited reader failed: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum HyphenationError {
    #[error("Unsupported hyphenation language: {0}")]
    UnsupportedLanguage(String),

    #[error("Failed to load hyphenation dictionary for {language}: {reason}")]
    DictionaryLoad { language: String, reason: String },
}
