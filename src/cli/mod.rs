pub mod command;
pub mod decode;
pub mod encode;
pub mod syllables;

use anyhow::Result;
use log::Level;

use crate::cli::command::{Cli, PipelineArgs};
use crate::config::Config;
use crate::resources::Resources;

/// Loads configuration and tables for a subcommand.
pub(crate) fn setup(cli: &Cli, pipeline: &PipelineArgs) -> Result<(Config, Resources)> {
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply(pipeline);

    // Configure fail level based on strict mode
    let fail_level = if cli.strict { Level::Warn } else { Level::Error };

    let resources = Resources::load(&config, fail_level)?;
    Ok((config, resources))
}

/// Joins numbers in groups of `group_size`, groups separated by a space.
pub(crate) fn grouped<T: std::fmt::Display>(values: &[T], group_size: usize) -> String {
    values
        .chunks(group_size.max(1))
        .map(|chunk| chunk.iter().map(ToString::to_string).collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        assert_eq!(grouped(&[1u8, 0, 0, 0, 0, 1, 0, 1], 4), "1000 0101");
        assert_eq!(grouped(&[1u8, 1, 0], 2), "11 0");
        assert_eq!(grouped::<u8>(&[], 4), "");
    }
}
