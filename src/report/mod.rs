//! Size report engine
//!
//! Provides:
//! - Build output scanning (file, or directory one level deep)
//! - Glob filtering of reported file names
//! - Comparison against a baseline build
//! - Markdown table rendering

pub mod diff;
pub mod filter;
pub mod scanner;
pub mod table;
pub mod types;

pub use diff::compare;
pub use filter::GlobFilter;
pub use scanner::{scan, scan_with_fs};
pub use table::{render_markdown, REPORT_MARKER};
pub use types::{DiffRow, ReportTable, SizeEntry, SizeReport, TableMode};
