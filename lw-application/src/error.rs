use lw_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use std::io;
use thiserror::Error;

pub use lw_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Document(#[from] lw_boundary::InvalidTimestamp),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<ParameterError> for BError {
    fn from(err: ParameterError) -> Self {
        match err {
            ParameterError::Repo(err) => Self::Repo(err),
            err => Self::Parameter(err),
        }
    }
}

impl AppError {
    pub fn is_forbidden(&self) -> bool {
        matches!(
            self,
            Self::Business(BError::Parameter(ParameterError::Forbidden))
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Business(BError::Repo(RepoError::NotFound)))
    }
}
