use anyhow::Result;
use syllastego::process::syllables::CountSource;
use syllastego::utils::framing::window_count;

use super::command::{Cli, SyllablesArgs};
use super::setup;
use crate::input::carrier_text;

pub fn cmd_syllables(args: &SyllablesArgs, cli: &Cli) -> Result<()> {
    let (config, resources) = setup(cli, &args.pipeline)?;
    let text = carrier_text(&args.text)?;

    let decoder = resources.decoder();
    let words = text.split_whitespace().collect::<Vec<_>>();
    let analysis = decoder.counter().inspect_text(&text);

    println!("Syllable Analysis");
    println!("=================");
    println!();

    let mut group_sum = 0u64;
    for (index, (word, syllables)) in words.iter().zip(&analysis).enumerate() {
        let (form, source) = match syllables.source {
            CountSource::Empty => ("", "empty"),
            CountSource::Override => (syllables.normalized.as_str(), "override"),
            CountSource::Hyphenation => (
                syllables.hyphenated.as_deref().unwrap_or_default(),
                "hyphenation",
            ),
        };
        println!(
            "  {index:>5}  {word:<24} {form:<24} {:>3}  {source}",
            syllables.count
        );

        group_sum += u64::from(syllables.count);
        if (index + 1) % config.syllable_group_size.max(1) == 0 {
            println!("         group sum {group_sum} -> bit {}", group_sum & 1);
            group_sum = 0;
        }
    }

    let overridden = analysis
        .iter()
        .filter(|s| s.source == CountSource::Override)
        .count();
    let total = analysis.iter().map(|s| u64::from(s.count)).sum::<u64>();

    println!();
    println!("Analysis Summary");
    println!("  Words                     {}", analysis.len());
    println!("  Syllables                 {total}");
    println!("  Overridden words          {overridden}");
    println!(
        "  Complete syllable groups  {}",
        window_count(analysis.len(), config.syllable_group_size)
    );
    println!();

    Ok(())
}
