//! Terminal presentation layer.

pub mod formatters;
