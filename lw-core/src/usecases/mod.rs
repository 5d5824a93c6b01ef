mod add_comment;
mod delete_comment;
mod edit_learning_unit;
mod error;
mod learning_unit;
mod load_comments;
mod snippets;
mod update_comment;

#[cfg(test)]
pub mod tests;

pub use self::{
    add_comment::*, delete_comment::*, edit_learning_unit::*, error::Error, learning_unit::*,
    load_comments::*, snippets::*, update_comment::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
