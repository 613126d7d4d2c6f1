use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use dueclip_core::models::ItemKind;
use dueclip_core::store::Store;

use crate::cli::ListCommand;
use crate::config::Config;
use crate::util::load_data;
use crate::views::table;

pub fn list_items(
    store: &impl Store,
    config: &Config,
    command: ListCommand,
    today: NaiveDate,
) -> Result<()> {
    let data = load_data(store, config)?;

    let kinds: Vec<ItemKind> = if command.all {
        vec![ItemKind::Assignments, ItemKind::Exams]
    } else {
        vec![command.kind.map(Into::into).unwrap_or(config.default_kind)]
    };

    for kind in kinds {
        if command.all {
            println!("{}", kind.to_string().bold());
        }
        table::display_items(&data.sorted_items(kind), today);
    }
    Ok(())
}
