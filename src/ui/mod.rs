//! Terminal input: readline wrapper for interactive sessions.

pub mod readline;
