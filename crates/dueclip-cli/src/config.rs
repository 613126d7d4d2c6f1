use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::path::PathBuf;

use dueclip_core::models::ItemKind;
use dueclip_core::store::DEFAULT_STORAGE_KEY;

#[derive(Deserialize, Debug)]
pub struct Config {
    /// Path of the JSON data file.
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    /// Key under which the tracker record is stored.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// List used when no --kind is given.
    #[serde(default)]
    pub default_kind: ItemKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            storage_key: default_storage_key(),
            default_kind: ItemKind::default(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file("dueclip.toml"))
            .merge(Env::prefixed("DUECLIP_"))
            .extract()
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("dueclip.json")
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}
