#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! bundle-size-report library
//!
//! Measures the files of a build output directory, optionally compares them
//! with a baseline build, and keeps a single size report comment up to date
//! on the pull request. It can be used programmatically in addition to the
//! CLI interface.
//!
//! # Basic Example
//!
//! Comparing two scans and rendering the comment body:
//!
//! ```
//! use bundle_size_report::report::{compare, render_markdown, SizeEntry, SizeReport};
//!
//! let current = SizeReport::new(vec![
//!     SizeEntry::new("app.js", 2_048_000),
//!     SizeEntry::new("vendor.js", 512_000),
//! ]);
//! let baseline = SizeReport::new(vec![SizeEntry::new("app.js", 1_536_000)]);
//!
//! let body = render_markdown(&compare(&current, Some(&baseline)));
//!
//! assert!(body.contains("| **app.js** | 1.95 MB | 1.46 MB | +500.00 KB 🔼 |"));
//! assert!(body.contains("| **vendor.js** | 500.00 KB | N/A | N/A |"));
//! ```
//!
//! # Advanced Example: Filtering
//!
//! Glob patterns select which files the table lists; `!` excludes:
//!
//! ```
//! use bundle_size_report::report::{GlobFilter, SizeEntry, SizeReport};
//!
//! let filter = GlobFilter::new(&["*.js", "!*.min.js"])?;
//! let report = SizeReport::new(vec![
//!     SizeEntry::new("app.js", 10),
//!     SizeEntry::new("app.min.js", 5),
//!     SizeEntry::new("style.css", 3),
//! ]);
//!
//! let names: Vec<_> = filter.apply(&report).entries().iter().map(|e| e.name.clone()).collect();
//! assert_eq!(names, vec!["app.js"]);
//! # Ok::<(), bundle_size_report::error::ReportError>(())
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Report inputs
pub mod config;
/// Error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Pull request comments and the Actions runtime
pub mod github;
/// Infrastructure traits for filesystem access
pub mod infra;
/// JSON output for CI/CD integration
pub mod output;
/// Scanning, filtering, comparison and rendering
pub mod report;
