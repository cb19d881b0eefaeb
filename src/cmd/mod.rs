//! Command handlers for the bundle-size-report CLI
//!
//! Each submodule handles one CLI command.

pub mod completions;
pub mod report;

pub use completions::cmd_completions;
pub use report::{cmd_report, prepare_report, run_report, ReportOptions};
