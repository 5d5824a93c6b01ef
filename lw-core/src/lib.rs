pub mod gateways;
pub mod lifecycle;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use lw_entities::{
        author::*, comment::*, id::*, learning_unit::*, presentation::*, snippet::*, time::*,
    };
}

pub use self::repositories::Error as RepoError;
