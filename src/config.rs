//! Report configuration
//!
//! Values arrive from CLI flags or from the `INPUT_*` variables the Actions
//! runner sets. Unset inputs reach us as empty strings, so everything here
//! treats blank values as absent.

use crate::error::ReportError;
use crate::github::UpdatePolicy;
use crate::report::GlobFilter;
use std::fmt;
use std::path::PathBuf;

/// Parsed inputs for one report run
#[derive(Clone)]
pub struct ReportConfig {
    /// Token used for the comment API
    pub token: Option<String>,
    /// Current build output (file or directory)
    pub path: PathBuf,
    /// Baseline build output; `None` selects single-build mode
    pub diff_path: Option<PathBuf>,
    /// Include/exclude globs for file names; empty keeps everything
    pub file_glob_patterns: Vec<String>,
    /// What to do with an earlier report comment
    pub update_policy: UpdatePolicy,
}

impl ReportConfig {
    /// Create a config for `path` with every optional input unset
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_size_report::config::ReportConfig;
    ///
    /// let config = ReportConfig::new("dist")?
    ///     .with_diff_path(Some("base/dist"))
    ///     .with_patterns(&["*.js, *.css", "!*.map"]);
    ///
    /// assert_eq!(config.file_glob_patterns, vec!["*.js", "*.css", "!*.map"]);
    /// assert!(config.diff_path.is_some());
    /// # Ok::<(), bundle_size_report::error::ReportError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `MissingInput` if `path` is blank.
    pub fn new(path: &str) -> Result<Self, ReportError> {
        let path = non_blank(Some(path)).ok_or_else(|| ReportError::MissingInput {
            name: "path".to_string(),
        })?;

        Ok(Self {
            token: None,
            path: PathBuf::from(path),
            diff_path: None,
            file_glob_patterns: Vec::new(),
            update_policy: UpdatePolicy::default(),
        })
    }

    /// Set the API token (blank means unset)
    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = non_blank(token).map(str::to_string);
        self
    }

    /// Set the baseline path (blank means no baseline)
    pub fn with_diff_path(mut self, diff_path: Option<&str>) -> Self {
        self.diff_path = non_blank(diff_path).map(PathBuf::from);
        self
    }

    /// Set glob patterns; each value may hold several, split on commas or newlines
    pub fn with_patterns<S: AsRef<str>>(mut self, raw: &[S]) -> Self {
        self.file_glob_patterns = split_patterns(raw);
        self
    }

    /// Set the update policy from the `update_comment` flag
    pub fn with_update_comment(mut self, update_comment: bool) -> Self {
        self.update_policy = UpdatePolicy::from(update_comment);
        self
    }

    /// Set the update policy from the raw `update_comment` input
    ///
    /// Blank means unset and keeps the default policy.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a value that is not a recognised boolean.
    pub fn with_update_comment_input(self, raw: Option<&str>) -> Result<Self, ReportError> {
        match non_blank(raw) {
            Some(value) => Ok(self.with_update_comment(parse_bool_input("update_comment", value)?)),
            None => Ok(self),
        }
    }

    /// Compile the configured patterns
    pub fn glob_filter(&self) -> Result<GlobFilter, ReportError> {
        GlobFilter::new(&self.file_glob_patterns)
    }

    /// Token, or `MissingInput` if none was given
    pub fn require_token(&self) -> Result<&str, ReportError> {
        self.token
            .as_deref()
            .ok_or_else(|| ReportError::MissingInput {
                name: "token".to_string(),
            })
    }
}

impl fmt::Debug for ReportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportConfig")
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("path", &self.path)
            .field("diff_path", &self.diff_path)
            .field("file_glob_patterns", &self.file_glob_patterns)
            .field("update_policy", &self.update_policy)
            .finish()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parse a boolean action input: true/false, yes/no, on/off or 1/0 in any case
pub fn parse_bool_input(name: &str, value: &str) -> Result<bool, ReportError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ReportError::InvalidInput {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Split raw pattern inputs on commas and newlines, dropping blanks
///
/// Brace alternations (`*.{js,css}`) keep their commas.
pub fn split_patterns<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut patterns = Vec::new();
    for value in raw {
        let mut depth = 0usize;
        let mut current = String::new();
        for c in value.as_ref().chars() {
            match c {
                '{' => {
                    depth += 1;
                    current.push(c);
                }
                '}' => {
                    depth = depth.saturating_sub(1);
                    current.push(c);
                }
                ',' if depth == 0 => patterns.push(std::mem::take(&mut current)),
                '\n' | '\r' => patterns.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
        patterns.push(current);
    }

    patterns
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}
