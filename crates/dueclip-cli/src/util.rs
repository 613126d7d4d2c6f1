use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use uuid::Uuid;

use dueclip_core::error::CoreError;
use dueclip_core::models::{ItemKind, TrackerData};
use dueclip_core::store::Store;

use crate::config::Config;

/// Resolves the reference date: the --today flag when given, the local
/// calendar date otherwise.
pub fn resolve_today(flag: Option<&str>) -> Result<NaiveDate> {
    match flag {
        None => Ok(Local::now().date_naive()),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
            anyhow!(CoreError::InvalidInput(format!(
                "Invalid --today value '{}'. Expected YYYY-MM-DD.",
                value
            )))
        }),
    }
}

pub fn load_data(store: &impl Store, config: &Config) -> Result<TrackerData> {
    Ok(store.get(&config.storage_key)?.unwrap_or_default())
}

pub fn resolve_item_id(data: &TrackerData, kind: ItemKind, short_id: &str) -> Result<Uuid> {
    if short_id.len() < 2 {
        return Err(anyhow!(CoreError::InvalidInput(
            "Short ID must be at least 2 characters long.".to_string()
        )));
    }
    let items = data.find_by_id_prefix(kind, short_id);
    if items.len() == 1 {
        Ok(items[0].id)
    } else if items.is_empty() {
        Err(anyhow!(CoreError::NotFound(format!(
            "No {} item found with ID prefix '{}'",
            kind, short_id
        ))))
    } else {
        let item_info: Vec<(String, String)> = items
            .into_iter()
            .map(|i| (i.id.to_string(), i.name.clone()))
            .collect();
        Err(anyhow!(CoreError::AmbiguousId(item_info)))
    }
}
