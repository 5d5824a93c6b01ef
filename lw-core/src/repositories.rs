// Low-level storage access traits.
// Each repository is responsible for a single entity.
// Related entities are only referenced by their id and
// never modified or loaded by another repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// The annotation store.
///
/// Keeps one ordered sequence of comments per context.
pub trait CommentRepo {
    fn create_comment(&self, comment: Comment) -> Result<()>;

    fn load_comment(&self, id: &str) -> Result<Comment>;

    // In insertion order, i.e. oldest first
    fn load_comments_of_context(&self, context: &str) -> Result<Vec<Comment>>;

    fn update_comment(&self, comment: &Comment) -> Result<()>;

    fn delete_comment(&self, id: &str) -> Result<()>;

    fn try_load_comment(&self, id: &str) -> Result<Option<Comment>> {
        match self.load_comment(id) {
            Ok(comment) => Ok(Some(comment)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

/// The document store that owns the learning unit records.
pub trait LearningUnitRepo {
    fn create_learning_unit(&self, unit: LearningUnit) -> Result<()>;

    fn load_learning_unit(&self, id: &str) -> Result<LearningUnit>;

    fn all_learning_units(&self) -> Result<Vec<LearningUnit>>;

    fn update_learning_unit(&self, unit: &LearningUnit) -> Result<()>;
}
