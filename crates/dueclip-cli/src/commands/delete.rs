use anyhow::{anyhow, Result};
use dialoguer::Confirm;
use owo_colors::{OwoColorize, Style};

use dueclip_core::error::CoreError;
use dueclip_core::store::Store;

use crate::cli::DeleteCommand;
use crate::config::Config;
use crate::util::{load_data, resolve_item_id};

pub fn delete_item(store: &mut impl Store, config: &Config, command: DeleteCommand) -> Result<()> {
    let kind = command.kind.map(Into::into).unwrap_or(config.default_kind);

    let mut data = load_data(store, config)?;
    let item_id = resolve_item_id(&data, kind, &command.id)?;
    let name = data
        .items(kind)
        .iter()
        .find(|i| i.id == item_id)
        .map(|i| i.name.clone())
        .ok_or_else(|| anyhow!(CoreError::NotFound(format!("Item '{}' not found", item_id))))?;

    if !command.force {
        let confirmation = Confirm::new()
            .with_prompt(format!("Are you sure you want to delete '{}'?", name))
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmation {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    data.items_mut(kind).retain(|i| i.id != item_id);
    store.set(&config.storage_key, &data)?;

    let success_style = Style::new().green().bold();
    println!(
        "{} Deleted: {}",
        "✓".style(success_style),
        name.bright_white().bold()
    );
    Ok(())
}
