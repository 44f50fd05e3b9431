use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "./config/config.toml";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub debug: bool,
    pub leg: LegConfig,
}

#[derive(Debug, Deserialize)]
pub struct LegConfig {
    pub number: u8,
    pub name: String,
}

impl Config {
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        log::debug!("Getting config from path: {:?}", path);
        let config_string = std::fs::read_to_string(path)?;

        Ok(toml::from_str(&config_string)?)
    }
}
