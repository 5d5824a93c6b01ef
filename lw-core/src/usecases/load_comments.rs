use super::prelude::*;
use crate::lifecycle::LifecycleThresholds;

/// A comment together with its derived state at a certain point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedComment {
    pub comment: Comment,
    pub priority: Priority,
    pub is_overdue: bool,
    pub days_since_created: i64,
}

impl AnnotatedComment {
    pub fn new(comment: Comment, now: Timestamp, thresholds: &LifecycleThresholds) -> Self {
        let priority = thresholds.priority(&comment, now);
        let is_overdue = thresholds.is_overdue(&comment, now);
        let days_since_created = crate::lifecycle::days_since_created(&comment, now);
        Self {
            comment,
            priority,
            is_overdue,
            days_since_created,
        }
    }
}

pub fn load_comments<R>(repo: &R, context: &str) -> Result<Vec<Comment>>
where
    R: CommentRepo,
{
    Ok(repo.load_comments_of_context(context)?)
}

pub fn load_annotated_comments<R>(
    repo: &R,
    context: &str,
    now: Timestamp,
    thresholds: &LifecycleThresholds,
) -> Result<Vec<AnnotatedComment>>
where
    R: CommentRepo,
{
    Ok(load_comments(repo, context)?
        .into_iter()
        .map(|c| AnnotatedComment::new(c, now, thresholds))
        .collect())
}
