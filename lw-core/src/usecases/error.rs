use crate::{
    repositories,
    util::validate::{MetadataInvalidation, PresentationInvalidation},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Empty comment")]
    EmptyComment,
    #[error("Missing comment context")]
    CommentContext,
    #[error("Invalid author")]
    Author,
    #[error("The title is invalid")]
    Title,
    #[error("The duration is invalid")]
    Duration,
    #[error("Missing file name")]
    FileName,
    #[error("Unsupported media type")]
    MediaType,
    #[error("Empty snippet")]
    EmptySnippet,
    #[error("The snippet does not exist")]
    SnippetNotFound,
    #[error("This is not allowed")]
    Forbidden,
    #[error("The clipboard is not available")]
    Clipboard(#[source] anyhow::Error),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<MetadataInvalidation> for Error {
    fn from(err: MetadataInvalidation) -> Self {
        match err {
            MetadataInvalidation::Title => Self::Title,
            MetadataInvalidation::Duration => Self::Duration,
        }
    }
}

impl From<PresentationInvalidation> for Error {
    fn from(err: PresentationInvalidation) -> Self {
        match err {
            PresentationInvalidation::FileName => Self::FileName,
            PresentationInvalidation::MediaType(_) => Self::MediaType,
        }
    }
}
