use anyhow::{anyhow, Result};
use owo_colors::{OwoColorize, Style};

use dueclip_core::error::CoreError;
use dueclip_core::store::Store;

use crate::cli::DoneCommand;
use crate::config::Config;
use crate::util::{load_data, resolve_item_id};

pub fn toggle_item(store: &mut impl Store, config: &Config, command: DoneCommand) -> Result<()> {
    let kind = command.kind.map(Into::into).unwrap_or(config.default_kind);

    let mut data = load_data(store, config)?;
    let item_id = resolve_item_id(&data, kind, &command.id)?;

    let Some(item) = data.items_mut(kind).iter_mut().find(|i| i.id == item_id) else {
        return Err(anyhow!(CoreError::NotFound(format!(
            "Item '{}' disappeared while updating",
            item_id
        ))));
    };
    item.completed = !item.completed;
    let name = item.name.clone();
    let completed = item.completed;

    store.set(&config.storage_key, &data)?;

    let success_style = Style::new().green().bold();
    if completed {
        println!(
            "{} Completed: {}",
            "✓".style(success_style),
            name.bright_white().bold()
        );
    } else {
        println!("{} Reopened: {}", "↺".yellow().bold(), name.bright_white().bold());
    }
    Ok(())
}
