use super::*;
use lw_entities as e;
use thiserror::Error;

use e::time::Timestamp;

#[derive(Debug, Error)]
#[error("Invalid timestamp: {0}")]
pub struct InvalidTimestamp(i64);

fn timestamp(millis: i64) -> Result<Timestamp, InvalidTimestamp> {
    Timestamp::try_from_millis(millis).map_err(|_| InvalidTimestamp(millis))
}

impl From<e::author::Author> for Author {
    fn from(from: e::author::Author) -> Self {
        let e::author::Author { id, name, avatar } = from;
        Self {
            id: id.into(),
            name,
            avatar,
        }
    }
}

impl From<Author> for e::author::Author {
    fn from(from: Author) -> Self {
        let Author { id, name, avatar } = from;
        Self {
            id: id.into(),
            name,
            avatar,
        }
    }
}

impl From<e::comment::Comment> for Comment {
    fn from(from: e::comment::Comment) -> Self {
        let e::comment::Comment {
            id,
            context,
            author,
            created_at,
            content,
            is_for_discussion,
            is_processed,
            resolution,
        } = from;
        Self {
            id: id.into(),
            context,
            author: author.into(),
            created_at: created_at.into_millis(),
            content,
            is_for_discussion,
            is_processed,
            resolution,
        }
    }
}

impl TryFrom<Comment> for e::comment::Comment {
    type Error = InvalidTimestamp;
    fn try_from(from: Comment) -> Result<Self, Self::Error> {
        let Comment {
            id,
            context,
            author,
            created_at,
            content,
            is_for_discussion,
            is_processed,
            resolution,
        } = from;
        Ok(Self {
            id: id.into(),
            context,
            author: author.into(),
            created_at: timestamp(created_at)?,
            content,
            is_for_discussion,
            is_processed,
            resolution,
        })
    }
}

impl From<e::comment::Priority> for Priority {
    fn from(from: e::comment::Priority) -> Self {
        use e::comment::Priority as E;
        match from {
            E::Low => Self::Low,
            E::Medium => Self::Medium,
            E::High => Self::High,
        }
    }
}

impl From<e::learning_unit::BasicMetadata> for BasicMetadata {
    fn from(from: e::learning_unit::BasicMetadata) -> Self {
        let e::learning_unit::BasicMetadata {
            title,
            subject,
            grade_level,
            duration_minutes,
            tags,
        } = from;
        Self {
            title,
            subject,
            grade_level,
            duration_minutes,
            tags,
        }
    }
}

impl From<BasicMetadata> for e::learning_unit::BasicMetadata {
    fn from(from: BasicMetadata) -> Self {
        let BasicMetadata {
            title,
            subject,
            grade_level,
            duration_minutes,
            tags,
        } = from;
        Self {
            title,
            subject,
            grade_level,
            duration_minutes,
            tags,
        }
    }
}

impl From<e::presentation::PresentationFile> for PresentationFile {
    fn from(from: e::presentation::PresentationFile) -> Self {
        let e::presentation::PresentationFile {
            file_name,
            media_type,
            size_bytes,
            uploaded_at,
        } = from;
        Self {
            file_name,
            media_type,
            size_bytes,
            uploaded_at: uploaded_at.into_millis(),
        }
    }
}

impl TryFrom<PresentationFile> for e::presentation::PresentationFile {
    type Error = InvalidTimestamp;
    fn try_from(from: PresentationFile) -> Result<Self, Self::Error> {
        let PresentationFile {
            file_name,
            media_type,
            size_bytes,
            uploaded_at,
        } = from;
        Ok(Self {
            file_name,
            media_type,
            size_bytes,
            uploaded_at: timestamp(uploaded_at)?,
        })
    }
}

impl From<e::snippet::Snippet> for Snippet {
    fn from(from: e::snippet::Snippet) -> Self {
        let e::snippet::Snippet {
            id,
            created_at,
            text,
        } = from;
        Self {
            id: id.into(),
            created_at: created_at.into_millis(),
            text,
        }
    }
}

impl TryFrom<Snippet> for e::snippet::Snippet {
    type Error = InvalidTimestamp;
    fn try_from(from: Snippet) -> Result<Self, Self::Error> {
        let Snippet {
            id,
            created_at,
            text,
        } = from;
        Ok(Self {
            id: id.into(),
            created_at: timestamp(created_at)?,
            text,
        })
    }
}

impl From<e::learning_unit::LearningUnit> for LearningUnit {
    fn from(from: e::learning_unit::LearningUnit) -> Self {
        let e::learning_unit::LearningUnit {
            id,
            created_at,
            updated_at,
            metadata,
            explanation,
            notes,
            presentation,
            snippets,
        } = from;
        Self {
            id: id.into(),
            created_at: created_at.into_millis(),
            updated_at: updated_at.into_millis(),
            metadata: metadata.into(),
            explanation,
            notes,
            presentation: presentation.map(Into::into),
            snippets: snippets.into_iter().map(Into::into).collect(),
        }
    }
}

impl TryFrom<LearningUnit> for e::learning_unit::LearningUnit {
    type Error = InvalidTimestamp;
    fn try_from(from: LearningUnit) -> Result<Self, Self::Error> {
        let LearningUnit {
            id,
            created_at,
            updated_at,
            metadata,
            explanation,
            notes,
            presentation,
            snippets,
        } = from;
        Ok(Self {
            id: id.into(),
            created_at: timestamp(created_at)?,
            updated_at: timestamp(updated_at)?,
            metadata: metadata.into(),
            explanation,
            notes,
            presentation: presentation.map(TryInto::try_into).transpose()?,
            snippets: snippets
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_, _>>()?,
        })
    }
}
