#[macro_use]
extern crate log;

mod comment_panel;
mod document;
mod learning_unit;

pub mod prelude {
    pub use super::{comment_panel::*, document::*, learning_unit::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use lw_core::{entities::*, lifecycle, repositories::*, usecases};
pub(crate) use lw_db_memory::InMemoryDb;

#[cfg(test)]
pub(crate) mod tests;
