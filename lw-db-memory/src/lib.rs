//! Document store that keeps all records in memory.
//!
//! Loading and saving the records is left to the owner,
//! see [`InMemoryDb::from_records`] and [`InMemoryDb::into_records`].

use lw_core::{entities::*, repositories::*};
use parking_lot::RwLock;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Default)]
pub struct InMemoryDb {
    learning_units: RwLock<Vec<LearningUnit>>,
    comments: RwLock<Vec<Comment>>,
}

impl InMemoryDb {
    pub fn from_records(learning_units: Vec<LearningUnit>, comments: Vec<Comment>) -> Self {
        log::debug!(
            "Loaded {} learning units and {} comments",
            learning_units.len(),
            comments.len()
        );
        Self {
            learning_units: RwLock::new(learning_units),
            comments: RwLock::new(comments),
        }
    }

    pub fn into_records(self) -> (Vec<LearningUnit>, Vec<Comment>) {
        let Self {
            learning_units,
            comments,
        } = self;
        (learning_units.into_inner(), comments.into_inner())
    }

    pub fn count_comments(&self) -> usize {
        self.comments.read().len()
    }
}

impl CommentRepo for InMemoryDb {
    fn create_comment(&self, comment: Comment) -> Result<()> {
        let mut comments = self.comments.write();
        if comments.iter().any(|c| c.id == comment.id) {
            return Err(Error::AlreadyExists);
        }
        comments.push(comment);
        Ok(())
    }

    fn load_comment(&self, id: &str) -> Result<Comment> {
        self.comments
            .read()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn load_comments_of_context(&self, context: &str) -> Result<Vec<Comment>> {
        Ok(self
            .comments
            .read()
            .iter()
            .filter(|c| c.context == context)
            .cloned()
            .collect())
    }

    fn update_comment(&self, comment: &Comment) -> Result<()> {
        let mut comments = self.comments.write();
        let existing = comments
            .iter_mut()
            .find(|c| c.id == comment.id)
            .ok_or(Error::NotFound)?;
        *existing = comment.clone();
        Ok(())
    }

    fn delete_comment(&self, id: &str) -> Result<()> {
        let mut comments = self.comments.write();
        let index = comments
            .iter()
            .position(|c| c.id == id)
            .ok_or(Error::NotFound)?;
        comments.remove(index);
        Ok(())
    }
}

impl LearningUnitRepo for InMemoryDb {
    fn create_learning_unit(&self, unit: LearningUnit) -> Result<()> {
        let mut units = self.learning_units.write();
        if units.iter().any(|u| u.id == unit.id) {
            return Err(Error::AlreadyExists);
        }
        units.push(unit);
        Ok(())
    }

    fn load_learning_unit(&self, id: &str) -> Result<LearningUnit> {
        self.learning_units
            .read()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn all_learning_units(&self) -> Result<Vec<LearningUnit>> {
        Ok(self.learning_units.read().clone())
    }

    fn update_learning_unit(&self, unit: &LearningUnit) -> Result<()> {
        let mut units = self.learning_units.write();
        let existing = units
            .iter_mut()
            .find(|u| u.id == unit.id)
            .ok_or(Error::NotFound)?;
        *existing = unit.clone();
        Ok(())
    }
}
