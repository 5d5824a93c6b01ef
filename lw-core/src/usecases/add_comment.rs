use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewComment {
    pub context: String,
    pub author: Author,
    pub content: String,
}

/// Create a new comment that is open for discussion and append it
/// to the comments of its context.
pub fn add_comment<R>(repo: &R, new_comment: NewComment, now: Timestamp) -> Result<Comment>
where
    R: CommentRepo,
{
    let NewComment {
        context,
        author,
        content,
    } = new_comment;
    let content = content.trim();
    if content.is_empty() {
        return Err(Error::EmptyComment);
    }
    if context.trim().is_empty() {
        return Err(Error::CommentContext);
    }
    if !author.id.is_valid() {
        return Err(Error::Author);
    }
    let comment = Comment {
        id: Id::new(),
        context,
        author,
        created_at: now,
        content: content.to_owned(),
        is_for_discussion: true,
        is_processed: false,
        resolution: String::new(),
    };
    log::info!(
        "Adding comment {} to '{}' by {}",
        comment.id,
        comment.context,
        comment.author.id
    );
    repo.create_comment(comment.clone())?;
    Ok(comment)
}
