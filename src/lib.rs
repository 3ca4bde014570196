//! Tally - interactive stock portfolio tracker
//!
//! This library provides an interactive session for recording quantities of
//! stock symbols against an in-memory price catalog, computing the total
//! investment value, and exporting the breakdown to text or CSV reports.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod export;
pub mod reports;
pub mod session;
pub mod ui;
pub mod utils;
