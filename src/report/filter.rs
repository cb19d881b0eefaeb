//! File name filtering with shell globs
//!
//! Patterns are OR-ed together. A leading `!` turns a pattern into an
//! exclusion that wins over any include. With no include patterns every
//! entry is a candidate, so an empty pattern list keeps everything.

use super::types::SizeReport;
use crate::error::ReportError;
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Compiled include/exclude glob patterns
#[derive(Debug, Clone)]
pub struct GlobFilter {
    include: Option<GlobSet>,
    exclude: Option<GlobSet>,
}

impl GlobFilter {
    /// Build a filter from user patterns
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_size_report::report::{GlobFilter, SizeEntry, SizeReport};
    ///
    /// let filter = GlobFilter::new(&["*.js", "!*.test.js"])?;
    /// let report = SizeReport::new(vec![
    ///     SizeEntry::new("app.js", 10),
    ///     SizeEntry::new("app.test.js", 5),
    ///     SizeEntry::new("style.css", 3),
    /// ]);
    ///
    /// let kept = filter.apply(&report);
    /// assert_eq!(kept.len(), 1);
    /// assert_eq!(kept.entries()[0].name, "app.js");
    /// # Ok::<(), bundle_size_report::error::ReportError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `InvalidGlob` for the first pattern that fails to compile.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ReportError> {
        let mut include = Vec::new();
        let mut exclude = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref().trim();
            if pattern.is_empty() {
                continue;
            }
            match pattern.strip_prefix('!') {
                Some(negated) => exclude.push(negated),
                None => include.push(pattern),
            }
        }

        Ok(Self {
            include: build_globset(&include)?,
            exclude: build_globset(&exclude)?,
        })
    }

    /// Filter that keeps every entry
    pub fn match_all() -> Self {
        Self {
            include: None,
            exclude: None,
        }
    }

    /// True if `name` passes the filter
    pub fn is_match(&self, name: &str) -> bool {
        let included = self.include.as_ref().is_none_or(|set| set.is_match(name));
        let excluded = self.exclude.as_ref().is_some_and(|set| set.is_match(name));
        included && !excluded
    }

    /// Keep the entries whose name passes, preserving order
    pub fn apply(&self, report: &SizeReport) -> SizeReport {
        report
            .entries()
            .iter()
            .filter(|e| self.is_match(&e.name))
            .cloned()
            .collect()
    }
}

impl Default for GlobFilter {
    fn default() -> Self {
        Self::match_all()
    }
}

/// Compile patterns into one set; `None` when there are none.
fn build_globset(patterns: &[&str]) -> Result<Option<GlobSet>, ReportError> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| ReportError::InvalidGlob {
            pattern: pattern.to_string(),
            source,
        })?;
        builder.add(glob);
    }

    builder
        .build()
        .map(Some)
        .map_err(|source| ReportError::InvalidGlob {
            pattern: patterns.join(", "),
            source,
        })
}
