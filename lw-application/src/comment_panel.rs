use super::*;
use lw_core::{
    lifecycle::{CommentSummary, LifecycleThresholds},
    RepoError,
};

/// The resolution of a single comment that is currently being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionEdit {
    pub comment_id: Id,
    pub text: String,
}

/// A comment as shown in the list of the comment panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub comment: usecases::AnnotatedComment,
    pub can_delete: bool,
    pub is_editing: bool,
}

/// Session state of the comment panel of a single context.
///
/// The comments themselves are owned by the document store. The panel
/// only keeps the draft of a new comment and the resolution that is
/// currently being edited.
#[derive(Debug, Clone)]
pub struct CommentPanel {
    context: String,
    current_user: Author,
    placeholder: Option<String>,
    thresholds: LifecycleThresholds,
    draft: String,
    editing: Option<ResolutionEdit>,
}

impl CommentPanel {
    pub fn new(context: impl Into<String>, current_user: Author) -> Self {
        Self {
            context: context.into(),
            current_user,
            placeholder: None,
            thresholds: LifecycleThresholds::default(),
            draft: String::new(),
            editing: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_thresholds(mut self, thresholds: LifecycleThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn current_user(&self) -> &Author {
        &self.current_user
    }

    pub fn placeholder(&self) -> String {
        self.placeholder
            .clone()
            .unwrap_or_else(|| format!("Kommentar zu {} hinzufügen", self.context))
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub fn can_submit(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Turn the draft into a new comment.
    ///
    /// A blank draft is ignored and kept as is.
    pub fn submit(&mut self, db: &InMemoryDb) -> Result<Option<Comment>> {
        if !self.can_submit() {
            debug!("Ignoring empty comment draft for '{}'", self.context);
            return Ok(None);
        }
        let new_comment = usecases::NewComment {
            context: self.context.clone(),
            author: self.current_user.clone(),
            content: self.draft.clone(),
        };
        let comment = usecases::add_comment(db, new_comment, Timestamp::now())?;
        self.draft.clear();
        Ok(Some(comment))
    }

    pub fn comments(&self, db: &InMemoryDb, now: Timestamp) -> Result<Vec<CommentView>> {
        let views = usecases::load_annotated_comments(db, &self.context, now, &self.thresholds)?
            .into_iter()
            .map(|annotated| {
                let can_delete =
                    usecases::may_delete_comment(&annotated.comment, &self.current_user.id);
                let is_editing = self
                    .editing
                    .as_ref()
                    .map(|e| e.comment_id == annotated.comment.id)
                    .unwrap_or(false);
                CommentView {
                    comment: annotated,
                    can_delete,
                    is_editing,
                }
            })
            .collect();
        Ok(views)
    }

    pub fn summary(&self, db: &InMemoryDb, now: Timestamp) -> Result<CommentSummary> {
        let comments = usecases::load_comments(db, &self.context)?;
        Ok(lifecycle::summarize(&comments, now, &self.thresholds))
    }

    pub fn editing(&self) -> Option<&ResolutionEdit> {
        self.editing.as_ref()
    }

    /// Open the resolution of a comment for editing.
    ///
    /// Any other resolution that is currently being edited is discarded.
    /// Returns `false` if the comment does not exist in this context.
    pub fn start_editing_resolution(&mut self, db: &InMemoryDb, id: &str) -> Result<bool> {
        let Some(comment) = self.load_comment(db, id)? else {
            debug!("Cannot edit the resolution of unknown comment {id}");
            return Ok(false);
        };
        self.editing = Some(ResolutionEdit {
            comment_id: comment.id,
            text: comment.resolution,
        });
        Ok(true)
    }

    pub fn edit_resolution(&mut self, text: impl Into<String>) {
        if let Some(edit) = &mut self.editing {
            edit.text = text.into();
        }
    }

    pub fn cancel_editing(&mut self) {
        self.editing = None;
    }

    /// Store the edited resolution and leave the edit mode.
    pub fn save_resolution(&mut self, db: &InMemoryDb) -> Result<Option<Comment>> {
        let Some(ResolutionEdit { comment_id, text }) = self.editing.clone() else {
            return Ok(None);
        };
        self.update(db, comment_id.as_str(), CommentUpdate::resolution(text))
    }

    pub fn update(
        &mut self,
        db: &InMemoryDb,
        id: &str,
        update: CommentUpdate,
    ) -> Result<Option<Comment>> {
        if self.load_comment(db, id)?.is_none() {
            debug!("No comment {id} in '{}' to update", self.context);
            return Ok(None);
        }
        let updates_resolution = update.resolution.is_some();
        let updated = usecases::update_comment(db, id, update)?;
        if updates_resolution && updated.is_some() && self.is_editing(id) {
            self.editing = None;
        }
        Ok(updated)
    }

    pub fn toggle_for_discussion(&self, db: &InMemoryDb, id: &str) -> Result<Option<Comment>> {
        if self.load_comment(db, id)?.is_none() {
            return Ok(None);
        }
        Ok(usecases::toggle_for_discussion(db, id)?)
    }

    pub fn toggle_processed(&self, db: &InMemoryDb, id: &str) -> Result<Option<Comment>> {
        if self.load_comment(db, id)?.is_none() {
            return Ok(None);
        }
        Ok(usecases::toggle_processed(db, id)?)
    }

    /// Delete a comment of the current user.
    pub fn delete(&mut self, db: &InMemoryDb, id: &str) -> Result<Comment> {
        if self.load_comment(db, id)?.is_none() {
            return Err(RepoError::NotFound.into());
        }
        let deleted = usecases::delete_comment(db, id, &self.current_user.id)?;
        if self.is_editing(id) {
            self.editing = None;
        }
        Ok(deleted)
    }

    /// Comments of other contexts are invisible for this panel.
    fn load_comment(&self, db: &InMemoryDb, id: &str) -> Result<Option<Comment>> {
        Ok(db
            .try_load_comment(id)?
            .filter(|c| c.context == self.context))
    }

    fn is_editing(&self, id: &str) -> bool {
        self.editing
            .as_ref()
            .map(|e| e.comment_id == id)
            .unwrap_or(false)
    }
}
