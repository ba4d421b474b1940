//! Vocabulary shared by the sort engine and its front-ends.

pub mod domain;
pub mod error;
pub mod protocol;
