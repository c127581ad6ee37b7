//! Shared helpers for request extraction, identifier parsing and field validation.

pub mod extract;
pub mod parse;
pub mod validate;
