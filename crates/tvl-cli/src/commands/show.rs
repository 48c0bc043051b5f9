//! `tvl show` — print a saved character sheet.

use std::path::Path;

use colored::Colorize;
use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use tvl_core::{Characteristic, rank_title};

use crate::commands::load_record;
use crate::error::CliResult;

/// Print the character in `path`, optionally with the full event history.
pub fn run(path: &Path, history: bool) -> CliResult<()> {
    let record = load_record(path)?;

    println!("{}", record.name.bold());
    match record.career {
        Some(career) => {
            let title = rank_title(career, record.rank);
            if title.is_empty() {
                println!("{career}, rank {}", record.rank);
            } else {
                println!("{career}, {title} (rank {})", record.rank);
            }
        }
        None => println!("{}", "no career yet".dimmed()),
    }
    println!(
        "age {}, {} terms served, phase {}",
        record.age,
        record.terms_served,
        record.current_phase()
    );

    let mut characteristics = Table::new();
    characteristics.load_preset(UTF8_FULL_CONDENSED);
    characteristics.set_header(Characteristic::all().iter().map(|c| c.abbrev()));
    characteristics.add_row(
        Characteristic::all()
            .iter()
            .map(|c| record.characteristics.get(*c).to_string()),
    );
    println!("{characteristics}");
    println!("UPP {}", record.characteristics.upp());

    if !record.skills.is_empty() {
        let mut skills = Table::new();
        skills.load_preset(UTF8_FULL_CONDENSED);
        skills.set_header(["Skill", "Level"]);
        for (name, level) in &record.skills {
            skills.add_row([name.clone(), level.to_string()]);
        }
        println!("{skills}");
    }

    if let Some(benefits) = &record.mustering_out_benefits {
        println!(
            "{} Cr{}",
            "mustered out:".green().bold(),
            benefits.cash
        );
        for (item, count) in &benefits.items {
            if *count > 1 {
                println!("  {item} x{count}");
            } else {
                println!("  {item}");
            }
        }
        for (characteristic, amount) in &benefits.characteristic_boosts {
            println!("  +{amount} {characteristic}");
        }
    }

    if history {
        let mut events = Table::new();
        events.load_preset(UTF8_FULL_CONDENSED);
        events.set_header(["#", "Event", "Detail"]);
        for (index, event) in record.career_history.iter().enumerate() {
            events.add_row([
                index.to_string(),
                event.kind().to_string(),
                event.to_string(),
            ]);
        }
        println!("{events}");
    } else if !record.career_history.is_empty() {
        println!(
            "{} events recorded (use --history to list them)",
            record.career_history.len()
        );
    }

    Ok(())
}
