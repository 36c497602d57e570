use std::path::PathBuf;

use clap::{Args, Parser as ClapParser, Subcommand, ValueEnum};

#[derive(Debug, ClapParser)]
#[command(
    name       = env!("CARGO_PKG_NAME"),
    version    = env!("CARGO_PKG_VERSION"),
    author     = env!("CARGO_PKG_AUTHORS"),
    about      = "Tools for inspecting and decoding syllable-parity carrier texts",
    long_about = None,
)]
pub struct Cli {
    /// Set the log level
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub loglevel: LogLevel,

    /// Treat malformed table records as fatal errors instead of skipping them.
    #[arg(long, global = true)]
    pub strict: bool,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// YAML configuration file. Command line options take precedence.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Choose an operation to perform.
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode the message hidden in a carrier text.
    Decode(DecodeArgs),

    /// Print the syllable analysis of every word
    Syllables(SyllablesArgs),

    /// Print the ids and parity pattern a carrier text needs for a message.
    Encode(EncodeArgs),
}

#[derive(Debug, Args)]
pub struct TextArgs {
    /// Carrier text file (use "-" for stdin). Defaults to a built-in example.
    #[arg(value_name = "INPUT", conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Carrier text given inline.
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,
}

#[derive(Debug, Default, Args)]
pub struct PipelineArgs {
    /// Hyphenation language (e.g. en_US, en_GB, de).
    #[arg(long, value_name = "CODE")]
    pub language: Option<String>,

    /// Symbol table (symbol;id records).
    #[arg(long, value_name = "PATH")]
    pub symbols: Option<PathBuf>,

    /// Syllable override table (word;count records).
    #[arg(long, value_name = "PATH")]
    pub overrides: Option<PathBuf>,

    /// Words reduced to one bit.
    #[arg(long, value_name = "N")]
    pub syllable_group_size: Option<usize>,

    /// Bits packed into one id.
    #[arg(long, value_name = "N")]
    pub binary_group_size: Option<usize>,

    /// Field delimiter of the table files.
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Quote character of the table files.
    #[arg(long, value_name = "CHAR")]
    pub quote_char: Option<char>,
}

#[derive(Debug, Args)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub text: TextArgs,

    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Do not log the per-word syllable trace.
    #[arg(long)]
    pub no_trace: bool,

    /// How to print the decoded symbols.
    #[arg(long, value_enum, default_value_t = OutputFormat::Joined)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct SyllablesArgs {
    #[command(flatten)]
    pub text: TextArgs,

    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Message to plan a carrier text for.
    #[arg(value_name = "MESSAGE")]
    pub message: String,

    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    /// Disable logging output.
    Off,
    /// No output except errors.
    Error,
    /// Show warnings and errors.
    Warn,
    /// Show info, warnings and errors (default).
    Info,
    /// Show debug, info, warnings and errors.
    Debug,
    /// Show all log messages including trace.
    Trace,
}

impl LogLevel {
    /// Convert LogLevel to log::LevelFilter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormat {
    /// Colorized human-readable text.
    Plain,
    /// Structured JSON per log record.
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum OutputFormat {
    /// Symbols concatenated into one string.
    Joined,
    /// Symbols as a list.
    List,
    /// Every stage: syllable counts, bits, ids and symbols.
    Report,
}
