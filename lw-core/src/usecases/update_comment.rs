use super::prelude::*;

/// Merge the given fields into an existing comment.
///
/// Returns `None` if no comment with the given id exists.
pub fn update_comment<R>(repo: &R, id: &str, update: CommentUpdate) -> Result<Option<Comment>>
where
    R: CommentRepo,
{
    let Some(mut comment) = repo.try_load_comment(id)? else {
        log::debug!("No comment {id} to update");
        return Ok(None);
    };
    if update.is_empty() {
        return Ok(Some(comment));
    }
    log::info!("Updating comment {id}: {update:?}");
    update.apply_to(&mut comment);
    repo.update_comment(&comment)?;
    Ok(Some(comment))
}

pub fn toggle_for_discussion<R>(repo: &R, id: &str) -> Result<Option<Comment>>
where
    R: CommentRepo,
{
    let Some(comment) = repo.try_load_comment(id)? else {
        log::debug!("No comment {id} to toggle");
        return Ok(None);
    };
    update_comment(
        repo,
        id,
        CommentUpdate::for_discussion(!comment.is_for_discussion),
    )
}

pub fn toggle_processed<R>(repo: &R, id: &str) -> Result<Option<Comment>>
where
    R: CommentRepo,
{
    let Some(comment) = repo.try_load_comment(id)? else {
        log::debug!("No comment {id} to toggle");
        return Ok(None);
    };
    update_comment(repo, id, CommentUpdate::processed(!comment.is_processed))
}
