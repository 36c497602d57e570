use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use syllastego::process::EXAMPLE_TEXT;

use crate::cli::command::TextArgs;

/// Unified input reader that handles both file and pipe input with buffered reading
pub struct InputReader {
    reader: Box<dyn Read>,
    is_pipe: bool,
}

impl InputReader {
    /// Create a new InputReader from a path
    /// Use "-" for stdin pipe input
    pub fn new<P: AsRef<Path>>(input_path: P) -> Result<Self> {
        let path_str = input_path.as_ref().to_string_lossy();
        let is_pipe = path_str == "-";

        let reader: Box<dyn Read> = if is_pipe {
            Box::new(io::stdin().lock())
        } else {
            let file = File::open(input_path.as_ref())
                .with_context(|| format!("Failed to open {path_str}"))?;
            Box::new(BufReader::new(file))
        };

        Ok(Self { reader, is_pipe })
    }

    /// Check if this is pipe input
    pub fn is_pipe(&self) -> bool {
        self.is_pipe
    }

    /// Read the remaining input as UTF-8 text
    pub fn read_text(&mut self) -> Result<String> {
        let mut text = String::new();
        self.reader
            .read_to_string(&mut text)
            .context("Failed to read carrier text")?;
        Ok(text)
    }
}

/// Resolves the carrier text: inline text, then input file or stdin, then
/// the built-in example.
pub fn carrier_text(args: &TextArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    let Some(input) = &args.input else {
        log::info!("No input given, using the built-in example text");
        return Ok(EXAMPLE_TEXT.to_string());
    };

    let mut reader = InputReader::new(input)?;
    if reader.is_pipe() {
        log::debug!("Reading carrier text from stdin");
    }

    reader.read_text()
}
