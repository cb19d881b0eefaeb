//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Build output fixtures on disk
//! - Webhook payload files for pull request and push runs
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::fixtures::DistBuilder;
//!
//! let (_tmp, dist) = DistBuilder::new("dist").file("app.js", 1024).build().unwrap();
//! ```

pub mod fixtures;

/// Variables that must not leak from the host runner into a test process
#[allow(dead_code)]
pub const ACTIONS_VARS: &[&str] = &[
    "GITHUB_ACTIONS",
    "GITHUB_API_URL",
    "GITHUB_EVENT_NAME",
    "GITHUB_EVENT_PATH",
    "GITHUB_OUTPUT",
    "GITHUB_REPOSITORY",
    "INPUT_TOKEN",
    "INPUT_PATH",
    "INPUT_DIFF_PATH",
    "INPUT_FILE_GLOB_PATTERN",
    "INPUT_UPDATE_COMMENT",
];
