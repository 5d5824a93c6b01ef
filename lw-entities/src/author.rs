use crate::id::*;

/// The user who writes comments or edits a learning unit.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id     : Id,
    pub name   : String,
    // Reference to an avatar image, e.g. a URL
    pub avatar : Option<String>,
}

impl Author {
    /// The first letter of the display name, shown instead of a missing avatar.
    pub fn initial(&self) -> Option<char> {
        self.name.trim().chars().next().map(|c| c.to_ascii_uppercase())
    }
}
