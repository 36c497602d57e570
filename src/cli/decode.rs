use anyhow::Result;
use syllastego::utils::framing::window_count;

use super::command::{Cli, DecodeArgs, OutputFormat};
use super::{grouped, setup};
use crate::input::carrier_text;

pub fn cmd_decode(args: &DecodeArgs, cli: &Cli) -> Result<()> {
    let (config, resources) = setup(cli, &args.pipeline)?;
    let text = carrier_text(&args.text)?;

    log::info!(
        "Decoding carrier text: {} words (syllable groups: {}, binary groups: {}, strict mode: {})",
        text.split_whitespace().count(),
        config.syllable_group_size,
        config.binary_group_size,
        cli.strict
    );

    let mut decoder = resources.decoder();
    if args.no_trace {
        decoder.set_trace(false);
    }

    let report = decoder.decode_report(&text)?;

    let dropped_words = report.syllables.len()
        - window_count(report.syllables.len(), config.syllable_group_size)
            * config.syllable_group_size;
    let dropped_bits = report.bits.len()
        - window_count(report.bits.len(), config.binary_group_size) * config.binary_group_size;
    if dropped_words > 0 || dropped_bits > 0 {
        log::debug!(
            "Trailing partial groups dropped: {dropped_words} words, {dropped_bits} bits"
        );
    }

    match args.format {
        OutputFormat::Joined => println!("{}", report.message()),
        OutputFormat::List => println!("{:?}", report.symbols),
        OutputFormat::Report => {
            println!("Decode Report");
            println!("  Words                     {}", report.syllables.len());
            println!(
                "  Syllables                 {}",
                report
                    .syllables
                    .chunks(config.syllable_group_size)
                    .map(|group| format!("{group:?}"))
                    .collect::<Vec<_>>()
                    .join(" ")
            );
            println!(
                "  Bits                      {}",
                grouped(&report.bits, config.binary_group_size)
            );
            println!("  Ids                       {:?}", report.ids);
            println!("  Symbols                   {:?}", report.symbols);
            println!("  Message                   {}", report.message());
            println!();
        }
    }

    Ok(())
}
