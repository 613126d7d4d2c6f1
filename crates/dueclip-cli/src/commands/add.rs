use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use owo_colors::{OwoColorize, Style};

use dueclip_core::date;
use dueclip_core::error::CoreError;
use dueclip_core::models::Item;
use dueclip_core::store::Store;

use crate::cli::AddCommand;
use crate::config::Config;
use crate::util::load_data;

pub fn add_item(
    store: &mut impl Store,
    config: &Config,
    command: AddCommand,
    today: NaiveDate,
) -> Result<()> {
    let kind = command.kind.map(Into::into).unwrap_or(config.default_kind);

    let Some(parsed) = date::parse(&command.date, today) else {
        return Err(anyhow!(CoreError::InvalidInput(format!(
            "Unrecognized date: '{}'. Supported forms include 2026-02-15, 02/15/2026, Feb 15 2026, 15 Feb, or 2/15.",
            command.date
        ))));
    };
    let canonical = parsed.to_canonical();

    let mut data = load_data(store, config)?;
    let item = Item::new(command.name, canonical.clone());
    let name = item.name.clone();
    let item_id = item.id;

    data.items_mut(kind).push(item);
    store.set(&config.storage_key, &data)?;

    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();
    println!(
        "{} Created {} item: {}",
        "✓".style(success_style),
        kind,
        name.bright_white().bold()
    );
    println!(
        "  {} Due: {}",
        "→".style(info_style),
        date::format_display(&canonical).cyan()
    );
    println!("  {} Item ID: {}", "→".style(info_style), item_id);
    Ok(())
}
