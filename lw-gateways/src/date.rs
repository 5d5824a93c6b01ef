use lw_entities::time::Timestamp;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::{format_description::FormatItem, macros::format_description, UtcOffset};

const DATE_TIME_FORMAT_DE: &[FormatItem] =
    format_description!("[day].[month].[year], [hour]:[minute]");

const DATE_TIME_FORMAT_ISO: &[FormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DateLocale {
    /// `DD.MM.YYYY, HH:MM`
    #[default]
    De,
    /// `YYYY-MM-DD HH:MM`
    Iso,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormatter {
    pub locale: DateLocale,
    pub offset: UtcOffset,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self {
            locale: DateLocale::default(),
            offset: UtcOffset::UTC,
        }
    }
}

impl DateFormatter {
    /// Uses the offset of the local time zone if it can be determined.
    pub fn local(locale: DateLocale) -> Self {
        let offset = UtcOffset::current_local_offset().unwrap_or_else(|err| {
            log::debug!("Local UTC offset is not available: {err}");
            UtcOffset::UTC
        });
        Self { locale, offset }
    }

    pub fn format(&self, ts: Timestamp) -> String {
        let format = match self.locale {
            DateLocale::De => DATE_TIME_FORMAT_DE,
            DateLocale::Iso => DATE_TIME_FORMAT_ISO,
        };
        ts.to_offset(self.offset)
            .format(format)
            .unwrap_or_else(|err| {
                log::warn!("Failed to format timestamp {ts}: {err}");
                ts.to_string()
            })
    }
}

pub fn offset_from_hours(hours: i8) -> anyhow::Result<UtcOffset> {
    Ok(UtcOffset::from_hms(hours, 0, 0)?)
}
