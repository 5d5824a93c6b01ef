use crate::{id::*, time::*};

/// A short text derived from a learning unit, e.g. for handouts.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub id         : Id,
    pub created_at : Timestamp,
    pub text       : String,
}
