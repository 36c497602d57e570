use anyhow::Result;

use super::command::{Cli, EncodeArgs};
use super::{grouped, setup};

pub fn cmd_encode(args: &EncodeArgs, cli: &Cli) -> Result<()> {
    let (config, resources) = setup(cli, &args.pipeline)?;

    let plan = resources.decoder().plan(&args.message)?;

    let parities = plan
        .bits
        .iter()
        .map(|&bit| if bit == 0 { "even" } else { "odd" })
        .collect::<Vec<_>>();

    println!("Carrier Requirements");
    println!("  Message                   {:?}", args.message);
    println!("  Ids                       {:?}", plan.ids);
    println!(
        "  Bits                      {}",
        grouped(&plan.bits, config.binary_group_size)
    );
    println!(
        "  Words required            {} ({} groups of {})",
        plan.words_required,
        plan.bits.len(),
        config.syllable_group_size
    );
    println!("  Group parities            {}", parities.join(" "));
    println!();

    Ok(())
}
