use lw_gateways::date::DateLocale;
use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = include_str!("lernwerk.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub lifecycle: Option<Lifecycle>,
    pub store: Option<Store>,
    pub display: Option<Display>,
    pub clipboard: Option<Clipboard>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Lifecycle {
    pub overdue_after_days: i64,
    pub aging_after_days: i64,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Config::default()
            .lifecycle
            .expect("Lifecycle configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Store {
    pub document_file: PathBuf,
}

impl Default for Store {
    fn default() -> Self {
        Config::default().store.expect("Store configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Display {
    pub locale: Option<DateLocale>,
    pub utc_offset_hours: Option<i8>,
}

impl Default for Display {
    fn default() -> Self {
        Config::default().display.expect("Display configuration")
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Clipboard {
    pub command: Option<String>,
}
