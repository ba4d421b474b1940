//! Bridge between the terminal front-end and the sort worker thread.

pub mod commands;
pub mod runtime;
