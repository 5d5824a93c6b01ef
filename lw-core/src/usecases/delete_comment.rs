use super::prelude::*;

/// Only the author of a comment may delete it.
pub fn may_delete_comment(comment: &Comment, user_id: &Id) -> bool {
    user_id.is_valid() && comment.author.id == *user_id
}

pub fn delete_comment<R>(repo: &R, id: &str, requesting_user_id: &Id) -> Result<Comment>
where
    R: CommentRepo,
{
    let comment = repo.load_comment(id)?;
    if !may_delete_comment(&comment, requesting_user_id) {
        log::warn!("User {requesting_user_id} is not allowed to delete comment {id}");
        return Err(Error::Forbidden);
    }
    log::info!("Deleting comment {id}");
    repo.delete_comment(id)?;
    Ok(comment)
}
