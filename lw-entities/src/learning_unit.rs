use crate::{id::*, presentation::*, snippet::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BasicMetadata {
    pub title            : String,
    pub subject          : Option<String>,
    pub grade_level      : Option<String>,
    pub duration_minutes : Option<u32>,
    pub tags             : Vec<String>,
}

/// The record that all editor panels operate on.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningUnit {
    pub id           : Id,
    pub created_at   : Timestamp,
    pub updated_at   : Timestamp,
    pub metadata     : BasicMetadata,
    pub explanation  : String,
    pub notes        : String,
    pub presentation : Option<PresentationFile>,
    pub snippets     : Vec<Snippet>,
}

impl LearningUnit {
    pub fn snippet(&self, id: &str) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.id == id)
    }

    /// Bump the modification time, never moving it backwards.
    pub fn touch(&mut self, now: Timestamp) {
        self.updated_at = self.updated_at.max(now);
    }
}
