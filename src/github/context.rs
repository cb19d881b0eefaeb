//! GitHub Actions run context
//!
//! Reads the `GITHUB_*` variables the runner sets and the webhook payload it
//! writes to `GITHUB_EVENT_PATH`.

use super::client::DEFAULT_API_URL;
use super::reconciler::CommentTarget;
use super::store::{IssueRef, RepoRef};
use crate::error::ReportError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Everything the report command needs to know about the current run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionContext {
    /// Repository the workflow runs in
    pub repo: Option<RepoRef>,
    /// Pull request number, if the triggering event was a pull request
    pub pull_request: Option<u64>,
    /// Triggering event name (`pull_request`, `push`, ...)
    pub event_name: Option<String>,
    /// REST API base URL
    pub api_url: String,
    /// File that step outputs are appended to
    pub output_file: Option<PathBuf>,
    /// True when running on an Actions runner
    pub in_actions: bool,
}

#[derive(Deserialize)]
struct EventPayload {
    #[serde(default)]
    pull_request: Option<PullRequestPayload>,
}

#[derive(Deserialize)]
struct PullRequestPayload {
    number: u64,
}

impl ActionContext {
    /// Read the context from the process environment
    pub fn from_env() -> Result<Self, ReportError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the context through a custom variable lookup
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_size_report::github::ActionContext;
    ///
    /// let ctx = ActionContext::from_lookup(|key| match key {
    ///     "GITHUB_REPOSITORY" => Some("octo/site".to_string()),
    ///     "GITHUB_EVENT_NAME" => Some("push".to_string()),
    ///     _ => None,
    /// })?;
    ///
    /// assert_eq!(ctx.repo.unwrap().owner, "octo");
    /// assert_eq!(ctx.pull_request, None);
    /// assert_eq!(ctx.api_url, "https://api.github.com");
    /// # Ok::<(), bundle_size_report::error::ReportError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `InvalidContext` for a malformed repository name or event
    /// payload, and `Io` if the payload file cannot be read.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ReportError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let repo = var("GITHUB_REPOSITORY")
            .map(|r| RepoRef::parse(&r))
            .transpose()?;

        let pull_request = match var("GITHUB_EVENT_PATH") {
            Some(path) => read_pull_request_number(Path::new(&path))?,
            None => None,
        };

        Ok(Self {
            repo,
            pull_request,
            event_name: var("GITHUB_EVENT_NAME"),
            api_url: var("GITHUB_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            output_file: var("GITHUB_OUTPUT").map(PathBuf::from),
            in_actions: var("GITHUB_ACTIONS").is_some_and(|v| v == "true"),
        })
    }

    /// Where the report comment should go
    ///
    /// # Errors
    ///
    /// Returns `InvalidContext` for a pull request run without `GITHUB_REPOSITORY`.
    pub fn comment_target(&self) -> Result<CommentTarget, ReportError> {
        let Some(number) = self.pull_request else {
            return Ok(CommentTarget::NoPullRequest);
        };
        let repo = self.repo.clone().ok_or_else(|| ReportError::InvalidContext {
            message: "GITHUB_REPOSITORY is not set".to_string(),
        })?;
        Ok(CommentTarget::PullRequest(IssueRef { repo, number }))
    }
}

fn read_pull_request_number(path: &Path) -> Result<Option<u64>, ReportError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        context: format!("reading event payload {}", path.display()),
        source,
    })?;

    let payload: EventPayload =
        serde_json::from_str(&contents).map_err(|e| ReportError::InvalidContext {
            message: format!("event payload {} is not valid JSON: {}", path.display(), e),
        })?;

    Ok(payload.pull_request.map(|pr| pr.number))
}
