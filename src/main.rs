use anyhow::Result;
use clap::Parser as ClapParser;

use cli::command::{Cli, Commands, LogFormat};
use cli::decode::cmd_decode;
use cli::encode::cmd_encode;
use cli::syllables::cmd_syllables;

mod cli;
mod config;
mod input;
mod resources;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let base_level = cli.loglevel.to_level_filter();

    let mut env_builder = env_logger::Builder::from_default_env();
    env_builder.filter_level(base_level);
    match cli.log_format {
        LogFormat::Plain => {
            env_builder.format_timestamp_secs();
        }
        LogFormat::Json => {
            env_builder.format(|buf, record| {
                use std::io::Write;
                let line = json_line(
                    &buf.timestamp().to_string(),
                    record.level(),
                    record.target(),
                    &record.args().to_string(),
                );
                writeln!(buf, "{line}")
            });
        }
    }
    env_builder.try_init()?;

    match cli.command {
        Commands::Decode(ref args) => cmd_decode(args, &cli)?,
        Commands::Syllables(ref args) => cmd_syllables(args, &cli)?,
        Commands::Encode(ref args) => cmd_encode(args, &cli)?,
    }

    Ok(())
}

/// One log record as a single JSON object.
fn json_line(ts: &str, level: log::Level, target: &str, msg: &str) -> String {
    serde_json::json!({
        "ts": ts,
        "lvl": level.as_str(),
        "target": target,
        "msg": msg,
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_log_lines_escape_control_characters() -> Result<()> {
        let msg = "word \"quoted\"\tcolored \u{1b}[31m";
        let line = json_line("2026-01-01T00:00:00Z", log::Level::Warn, "syllastego", msg);

        assert!(!line.contains('\u{1b}'));
        let value: serde_json::Value = serde_json::from_str(&line)?;
        assert_eq!(value["msg"], msg);
        assert_eq!(value["lvl"], "WARN");
        assert_eq!(value["target"], "syllastego");
        Ok(())
    }
}
