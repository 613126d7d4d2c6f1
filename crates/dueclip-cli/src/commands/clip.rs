use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::{OwoColorize, Style};

use dueclip_core::date;
use dueclip_core::extract::extract;
use dueclip_core::models::Item;
use dueclip_core::store::Store;

use crate::cli::ClipCommand;
use crate::config::Config;
use crate::util::load_data;

pub fn clip_text(
    store: &mut impl Store,
    config: &Config,
    command: ClipCommand,
    today: NaiveDate,
) -> Result<()> {
    let kind = command.kind.map(Into::into).unwrap_or(config.default_kind);
    let extracted = extract(&command.text, today);

    let Some(canonical) = extracted.date else {
        // No date detected is a normal outcome, not an error: report the
        // title and ask for an explicit date instead of guessing one.
        let info_style = Style::new().blue();
        println!("{} {}", "Title:".style(info_style), extracted.title);
        println!("No date found in the text. Add the item with an explicit date:");
        println!("  dueclip add \"{}\" <DATE> --kind {}", extracted.title, kind);
        return Ok(());
    };

    let mut data = load_data(store, config)?;
    let item = Item::new(extracted.title, canonical.clone());
    let name = item.name.clone();
    let item_id = item.id;

    data.items_mut(kind).push(item);
    store.set(&config.storage_key, &data)?;

    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();
    println!(
        "{} Added {} item: {}",
        "✓".style(success_style),
        kind,
        name.bright_white().bold()
    );
    println!(
        "  {} Due: {} ({})",
        "→".style(info_style),
        date::format_display(&canonical).cyan(),
        date::classify(&canonical, today)
    );
    println!("  {} Item ID: {}", "→".style(info_style), item_id);
    Ok(())
}
