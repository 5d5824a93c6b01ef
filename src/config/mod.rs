use anyhow::{anyhow, Result};
use lw_core::lifecycle::LifecycleThresholds;
use lw_gateways::{
    clipboard::ClipboardCommand,
    date::{offset_from_hours, DateFormatter},
};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "lernwerk.toml";

const ENV_NAME_DOCUMENT_FILE: &str = "LERNWERK_DOCUMENT_FILE";

pub struct Config {
    pub lifecycle: LifecycleThresholds,
    pub store: Store,
    pub display: Display,
    pub clipboard: Option<ClipboardCommand>,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(document_file) = env::var(ENV_NAME_DOCUMENT_FILE) {
            cfg.store.document_file = document_file.into();
        }
        Ok(cfg)
    }
}

pub struct Store {
    /// JSON file that keeps all learning units and comments.
    pub document_file: PathBuf,
}

pub struct Display {
    pub date_formatter: DateFormatter,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            lifecycle,
            store,
            display,
            clipboard,
        } = from;

        let raw::Lifecycle {
            overdue_after_days,
            aging_after_days,
        } = lifecycle.unwrap_or_default();
        if aging_after_days < 0 || overdue_after_days < 0 {
            return Err(anyhow!("Negative lifecycle thresholds"));
        }
        if aging_after_days > overdue_after_days {
            return Err(anyhow!(
                "Comments must not age ({aging_after_days} days) after becoming overdue ({overdue_after_days} days)"
            ));
        }
        let lifecycle = LifecycleThresholds {
            overdue_after_days,
            aging_after_days,
        };

        let raw::Store { document_file } = store.unwrap_or_default();
        let store = Store { document_file };

        let raw::Display {
            locale,
            utc_offset_hours,
        } = display.unwrap_or_default();
        let locale = locale.unwrap_or_default();
        let date_formatter = match utc_offset_hours {
            Some(hours) => DateFormatter {
                locale,
                offset: offset_from_hours(hours)?,
            },
            None => DateFormatter::local(locale),
        };
        let display = Display { date_formatter };

        let raw::Clipboard { command } = clipboard.unwrap_or_default();
        let clipboard = command.as_deref().and_then(ClipboardCommand::parse);
        if let Some(cmd) = &clipboard {
            log::debug!("Use clipboard program {}", cmd.program());
        }

        Ok(Self {
            lifecycle,
            store,
            display,
            clipboard,
        })
    }
}
