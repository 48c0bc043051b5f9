//! `tvl new` — create a character and save it.

use std::path::Path;

use colored::Colorize;
use tvl_core::{DiceRng, create_record, generate_all_characteristics, generate_name};

use crate::commands::save_record;
use crate::error::CliResult;

/// Roll up a fresh character and write it to `path`.
pub fn run(path: &Path, seed: u64) -> CliResult<()> {
    let mut record = create_record(seed);
    let mut rng = DiceRng::from_seed(seed);
    record.name = generate_name(&mut rng);
    generate_all_characteristics(&mut rng, &mut record);
    save_record(path, &record)?;

    println!(
        "{} {} (age {}, UPP {})",
        "created".green().bold(),
        record.name,
        record.age,
        record.characteristics.upp()
    );
    println!("saved to {}", path.display());
    println!("next: tvl run --file {}", path.display());
    Ok(())
}
