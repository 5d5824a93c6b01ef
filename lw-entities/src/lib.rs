#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # lw-entities
//!
//! Reusable, agnostic domain entities for Lernwerk.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod author;
pub mod comment;
pub mod id;
pub mod learning_unit;
pub mod presentation;
pub mod snippet;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
