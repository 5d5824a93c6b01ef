use itertools::Itertools;
use lw_entities::{learning_unit::BasicMetadata, presentation::PresentationFile};
use thiserror::Error;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

pub const PRESENTATION_MEDIA_TYPES: &[&str] = &[
    "application/pdf",
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "application/vnd.oasis.opendocument.presentation",
    "application/vnd.apple.keynote",
];

pub fn is_presentation_media_type(media_type: &str) -> bool {
    // Ignore parameters like "; charset=..."
    let essence = media_type.split(';').next().unwrap_or_default().trim();
    PRESENTATION_MEDIA_TYPES
        .iter()
        .any(|t| t.eq_ignore_ascii_case(essence))
}

/// Split by whitespace, strip the reserved `#`, lowercase, sort and dedup.
pub fn normalize_tags<'a>(tags: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    tags.into_iter()
        .flat_map(str::split_whitespace)
        .map(|t| t.replace('#', ""))
        .filter_map(|t| match t.trim() {
            t if t.is_empty() => None,
            t => Some(t.to_lowercase()),
        })
        .sorted_unstable()
        .dedup()
        .collect()
}

fn non_empty_trimmed(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetadataInvalidation {
    #[error("Missing title")]
    Title,
    #[error("The duration must be positive")]
    Duration,
}

impl Validate for BasicMetadata {
    type Error = MetadataInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.title.trim().is_empty() {
            return Err(Self::Error::Title);
        }
        if self.duration_minutes == Some(0) {
            return Err(Self::Error::Duration);
        }
        Ok(())
    }
}

impl AutoCorrect for BasicMetadata {
    fn auto_correct(self) -> Self {
        let Self {
            title,
            subject,
            grade_level,
            duration_minutes,
            tags,
        } = self;
        Self {
            title: title.trim().to_owned(),
            subject: non_empty_trimmed(subject),
            grade_level: non_empty_trimmed(grade_level),
            duration_minutes,
            tags: normalize_tags(tags.iter().map(String::as_str)),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PresentationInvalidation {
    #[error("Missing file name")]
    FileName,
    #[error("Unsupported media type: {0}")]
    MediaType(String),
}

impl Validate for PresentationFile {
    type Error = PresentationInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.file_name.trim().is_empty() {
            return Err(Self::Error::FileName);
        }
        if !is_presentation_media_type(&self.media_type) {
            return Err(Self::Error::MediaType(self.media_type.clone()));
        }
        Ok(())
    }
}
