use super::prelude::*;
use crate::gateways::notify::{Notification, Notifier};
use std::cell::RefCell;

type RepoResult<T> = std::result::Result<T, RepoError>;

pub use crate::repositories::Error as RepoError;

#[derive(Default)]
pub struct MockDb {
    pub comments: RefCell<Vec<Comment>>,
    pub learning_units: RefCell<Vec<LearningUnit>>,
}

impl CommentRepo for MockDb {
    fn create_comment(&self, comment: Comment) -> RepoResult<()> {
        if self.comments.borrow().iter().any(|c| c.id == comment.id) {
            return Err(RepoError::AlreadyExists);
        }
        self.comments.borrow_mut().push(comment);
        Ok(())
    }

    fn load_comment(&self, id: &str) -> RepoResult<Comment> {
        self.comments
            .borrow()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn load_comments_of_context(&self, context: &str) -> RepoResult<Vec<Comment>> {
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.context == context)
            .cloned()
            .collect())
    }

    fn update_comment(&self, comment: &Comment) -> RepoResult<()> {
        let mut comments = self.comments.borrow_mut();
        let existing = comments
            .iter_mut()
            .find(|c| c.id == comment.id)
            .ok_or(RepoError::NotFound)?;
        *existing = comment.clone();
        Ok(())
    }

    fn delete_comment(&self, id: &str) -> RepoResult<()> {
        let mut comments = self.comments.borrow_mut();
        let len = comments.len();
        comments.retain(|c| c.id != id);
        if comments.len() == len {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

impl LearningUnitRepo for MockDb {
    fn create_learning_unit(&self, unit: LearningUnit) -> RepoResult<()> {
        if self.learning_units.borrow().iter().any(|u| u.id == unit.id) {
            return Err(RepoError::AlreadyExists);
        }
        self.learning_units.borrow_mut().push(unit);
        Ok(())
    }

    fn load_learning_unit(&self, id: &str) -> RepoResult<LearningUnit> {
        self.learning_units
            .borrow()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_learning_units(&self) -> RepoResult<Vec<LearningUnit>> {
        Ok(self.learning_units.borrow().clone())
    }

    fn update_learning_unit(&self, unit: &LearningUnit) -> RepoResult<()> {
        let mut units = self.learning_units.borrow_mut();
        let existing = units
            .iter_mut()
            .find(|u| u.id == unit.id)
            .ok_or(RepoError::NotFound)?;
        *existing = unit.clone();
        Ok(())
    }
}

#[derive(Default)]
pub struct MockNotifier {
    pub notifications: RefCell<Vec<Notification>>,
    pub clipboard: RefCell<Option<String>>,
    pub clipboard_unavailable: bool,
}

impl Notifier for MockNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }

    fn copy_to_clipboard(&self, text: &str) -> anyhow::Result<()> {
        if self.clipboard_unavailable {
            anyhow::bail!("no clipboard");
        }
        *self.clipboard.borrow_mut() = Some(text.to_owned());
        Ok(())
    }
}

pub fn author(id: &str) -> Author {
    Author {
        id: id.into(),
        name: format!("User {id}"),
        avatar: None,
    }
}

pub fn t0() -> Timestamp {
    Timestamp::try_from_secs(1_700_000_000).unwrap()
}
