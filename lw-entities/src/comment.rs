use strum::{Display, EnumCount, EnumIter, EnumString};

use crate::{author::*, id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id                : Id,
    // Opaque label of the annotated thing, e.g. a learning unit or one of its fields
    pub context           : String,
    pub author            : Author,
    pub created_at        : Timestamp,
    pub content           : String,
    pub is_for_discussion : bool,
    pub is_processed      : bool,
    pub resolution        : String,
}

/// Partial update of the mutable fields of a [`Comment`].
///
/// The content, the author and the creation time of a comment
/// can not be changed.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommentUpdate {
    pub is_for_discussion : Option<bool>,
    pub is_processed      : Option<bool>,
    pub resolution        : Option<String>,
}

impl CommentUpdate {
    pub fn is_empty(&self) -> bool {
        let Self {
            is_for_discussion,
            is_processed,
            resolution,
        } = self;
        is_for_discussion.is_none() && is_processed.is_none() && resolution.is_none()
    }

    pub fn for_discussion(is_for_discussion: bool) -> Self {
        Self {
            is_for_discussion: Some(is_for_discussion),
            ..Default::default()
        }
    }

    pub fn processed(is_processed: bool) -> Self {
        Self {
            is_processed: Some(is_processed),
            ..Default::default()
        }
    }

    pub fn resolution(resolution: impl Into<String>) -> Self {
        Self {
            resolution: Some(resolution.into()),
            ..Default::default()
        }
    }

    /// Shallow merge onto the given comment.
    pub fn apply_to(self, comment: &mut Comment) {
        let Self {
            is_for_discussion,
            is_processed,
            resolution,
        } = self;
        if let Some(is_for_discussion) = is_for_discussion {
            comment.is_for_discussion = is_for_discussion;
        }
        if let Some(is_processed) = is_processed {
            comment.is_processed = is_processed;
        }
        if let Some(resolution) = resolution {
            comment.resolution = resolution;
        }
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter, EnumCount)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Priority {
    Low,
    Medium,
    High,
}
