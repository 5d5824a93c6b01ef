use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::InvalidTimestamp;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub avatar: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id                : String,
    pub context           : String,
    pub author            : Author,
    /// Unix timestamp in milliseconds
    pub created_at        : i64,
    pub content           : String,
    pub is_for_discussion : bool,
    pub is_processed      : bool,
    #[serde(default)]
    pub resolution        : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A comment with the state derived at the time of the request.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedComment {
    #[serde(flatten)]
    pub comment: Comment,
    pub priority: Priority,
    pub is_overdue: bool,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct BasicMetadata {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub grade_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct PresentationFile {
    pub file_name: String,
    pub media_type: String,
    pub size_bytes: u64,
    pub uploaded_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub id: String,
    pub created_at: i64,
    pub text: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct LearningUnit {
    pub id           : String,
    pub created_at   : i64,
    pub updated_at   : i64,
    pub metadata     : BasicMetadata,
    #[serde(default)]
    pub explanation  : String,
    #[serde(default)]
    pub notes        : String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub presentation : Option<PresentationFile>,
    #[serde(default)]
    pub snippets     : Vec<Snippet>,
}

/// Everything the document store owns, e.g. for saving it into a file.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub learning_units: Vec<LearningUnit>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}
