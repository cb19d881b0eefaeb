//! Error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes and recovery actions
//! - Proper exit codes for CI/CD
//!
//! # Examples
//!
//! ```
//! use bundle_size_report::error::ReportError;
//! use std::path::PathBuf;
//!
//! let err = ReportError::PathNotFound {
//!     path: PathBuf::from("dist"),
//! };
//!
//! assert_eq!(err.exit_code(), 66);
//! assert!(err.suggestion().unwrap().contains("dist"));
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or publishing a size report
#[derive(Error, Debug)]
pub enum ReportError {
    /// Scanned path does not exist
    #[error("Path not found: {path}")]
    PathNotFound {
        /// Path that was scanned
        path: PathBuf,
    },

    /// Scanned path could not be read
    #[error("Permission denied: {path}")]
    PermissionDenied {
        /// Path that was scanned
        path: PathBuf,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// A file glob pattern could not be compiled
    #[error("Invalid file glob pattern: '{pattern}'")]
    InvalidGlob {
        /// Pattern as given by the user
        pattern: String,
        #[source]
        /// globset error source
        source: globset::Error,
    },

    /// Required input was not supplied
    #[error("Missing required input: {name}")]
    MissingInput {
        /// Input name (as declared in action.yml)
        name: String,
    },

    /// An input was supplied but its value is not usable
    #[error("Invalid value '{value}' for input {name}")]
    InvalidInput {
        /// Input name (as declared in action.yml)
        name: String,
        /// Value as given
        value: String,
    },

    /// The GitHub Actions run context is malformed
    #[error("Invalid run context: {message}")]
    InvalidContext {
        /// What was wrong
        message: String,
    },

    /// A comment store call failed
    #[error("GitHub API request failed while {operation}: {message}")]
    Remote {
        /// What the client was doing ("listing comments", ...)
        operation: String,
        /// HTTP status, if a response was received
        status: Option<u16>,
        /// Error message from the API or transport
        message: String,
    },
}

impl ReportError {
    /// Classify an I/O error raised while scanning `path`.
    ///
    /// Missing paths and permission failures get their own variants so the
    /// caller sees them without digging into the source chain.
    pub fn from_scan(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::PathNotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io {
                context: format!("scanning {}", path.display()),
                source,
            },
        }
    }

    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_size_report::error::ReportError;
    ///
    /// let error = ReportError::MissingInput {
    ///     name: "token".to_string(),
    /// };
    ///
    /// assert!(error.suggestion().unwrap().contains("secrets.GITHUB_TOKEN"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::PathNotFound { path } => Some(format!(
                "Ensure {} exists; run the build step before reporting sizes",
                path.display()
            )),
            Self::PermissionDenied { path } => Some(format!(
                "Check that the runner user can read {}",
                path.display()
            )),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
            Self::InvalidGlob { .. } => Some(
                "Patterns use shell glob syntax, e.g. '*.js' or '!*.map'; separate them with commas or newlines"
                    .to_string(),
            ),
            Self::MissingInput { name } if name == "token" => Some(
                "Pass the workflow token: with: token: ${{ secrets.GITHUB_TOKEN }}".to_string(),
            ),
            Self::MissingInput { name } => Some(format!(
                "Set the '{}' input in the workflow step (or pass --{})",
                name,
                name.replace('_', "-")
            )),
            Self::InvalidInput { name, .. } => Some(format!(
                "Use true or false for '{}' (yes/no, on/off and 1/0 also work), or leave it empty for the default",
                name
            )),
            Self::InvalidContext { .. } => Some(
                "Run inside GitHub Actions, or use --dry-run to render the report locally"
                    .to_string(),
            ),
            Self::Remote { status, .. } => match status {
                Some(401) => Some("The token was rejected; check that it has not expired".to_string()),
                Some(403) | Some(404) => Some(
                    "Grant the workflow 'pull-requests: write' and 'issues: write' permissions"
                        .to_string(),
                ),
                _ => Some("Check network access to the GitHub API and retry the job".to_string()),
            },
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Returns Unix-style exit codes based on the error type, following sysexits.h conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_size_report::error::ReportError;
    ///
    /// let error = ReportError::Remote {
    ///     operation: "creating comment".to_string(),
    ///     status: Some(500),
    ///     message: "Server Error".to_string(),
    /// };
    ///
    /// assert_eq!(error.exit_code(), 1); // CI should fail
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::PathNotFound { .. } => 66,     // EX_NOINPUT
            Self::PermissionDenied { .. } => 77, // EX_NOPERM
            Self::Io { .. } => 74,               // EX_IOERR
            Self::InvalidGlob { .. } => 65,      // EX_DATAERR
            Self::MissingInput { .. } => 64,     // EX_USAGE
            Self::InvalidInput { .. } => 64,     // EX_USAGE
            Self::InvalidContext { .. } => 78,   // EX_CONFIG
            Self::Remote { .. } => 1,            // Generic error (CI should fail)
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(report_error) = Self::find_report_error(error) {
            if let Some(suggestion) = report_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        Self::find_report_error(error)
            .map(ReportError::exit_code)
            .unwrap_or(1)
    }

    /// The first `ReportError` in the chain; commands wrap them in `.context()`.
    fn find_report_error(error: &anyhow::Error) -> Option<&ReportError> {
        error.chain().find_map(|e| e.downcast_ref::<ReportError>())
    }
}
