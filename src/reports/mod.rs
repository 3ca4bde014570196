//! Report generation: derives display/export data from session state.

pub mod summary;

pub use summary::{summarize, ReportLine, SummaryReport};
