//! Idempotent report comment publishing
//!
//! A pull request should carry one report comment, recognised by its author
//! (the Actions bot) and by the report marker at the start of its body.

use super::store::{paginate, Comment, CommentStore, IssueRef};
use crate::error::ReportError;
use crate::report::REPORT_MARKER;
use log::{debug, info};

/// Login of the account `GITHUB_TOKEN` posts as
pub const BOT_LOGIN: &str = "github-actions[bot]";

/// Account type of [`BOT_LOGIN`]
pub const BOT_TYPE: &str = "Bot";

/// What to do when a report comment already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdatePolicy {
    /// Replace the existing comment's body
    #[default]
    UpdateExisting,
    /// Leave it alone and post another comment
    AlwaysCreate,
}

impl From<bool> for UpdatePolicy {
    /// Maps the `update_comment` input
    fn from(update_comment: bool) -> Self {
        if update_comment {
            Self::UpdateExisting
        } else {
            Self::AlwaysCreate
        }
    }
}

/// Where the report should go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentTarget {
    /// Run triggered by a pull request
    PullRequest(IssueRef),
    /// Run triggered by something else (e.g. a push); nothing is posted
    NoPullRequest,
}

/// Result of a reconcile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// A new comment was posted
    Created,
    /// An existing comment was rewritten
    Updated {
        /// Id of the rewritten comment
        comment_id: u64,
    },
    /// Not a pull request; no API call was made
    Skipped,
}

/// True if `comment` is a report posted by the Actions bot
pub fn is_report_comment(comment: &Comment) -> bool {
    let by_bot = comment
        .user
        .as_ref()
        .is_some_and(|u| u.login == BOT_LOGIN && u.kind == BOT_TYPE);
    let has_marker = comment
        .body
        .as_deref()
        .is_some_and(|b| b.starts_with(REPORT_MARKER));
    by_bot && has_marker
}

/// Find the first earlier report comment on `issue`
///
/// Walks the comment pages in order and stops at the first match, so pages
/// after it are never requested.
///
/// # Errors
///
/// Returns the store's `Remote` error if any page fails to load.
pub fn find_report_comment<S: CommentStore + ?Sized>(
    store: &S,
    issue: &IssueRef,
) -> Result<Option<Comment>, ReportError> {
    for (index, page) in paginate(store, issue).enumerate() {
        let page = page?;
        debug!("Searching page {} ({} comments)", index + 1, page.len());
        if let Some(found) = page.into_iter().find(is_report_comment) {
            return Ok(Some(found));
        }
    }
    Ok(None)
}

/// Make sure the report comment on the target carries `body`
///
/// # Examples
///
/// ```no_run
/// use bundle_size_report::github::{
///     reconcile, CommentTarget, GitHubClient, IssueRef, RepoRef, UpdatePolicy,
/// };
///
/// let client = GitHubClient::new("https://api.github.com", "ghp_example")?;
/// let issue = IssueRef { repo: RepoRef::parse("octo/site")?, number: 7 };
///
/// reconcile(&client, &CommentTarget::PullRequest(issue), "body", UpdatePolicy::UpdateExisting)?;
/// # Ok::<(), bundle_size_report::error::ReportError>(())
/// ```
///
/// # Errors
///
/// Any comment store failure is returned unchanged; nothing is retried.
pub fn reconcile<S: CommentStore + ?Sized>(
    store: &S,
    target: &CommentTarget,
    body: &str,
    policy: UpdatePolicy,
) -> Result<ReconcileOutcome, ReportError> {
    let issue = match target {
        CommentTarget::PullRequest(issue) => issue,
        CommentTarget::NoPullRequest => {
            info!("Not a pull request; skipping the size comment");
            return Ok(ReconcileOutcome::Skipped);
        }
    };

    let existing = find_report_comment(store, issue)?;

    match (existing, policy) {
        (Some(comment), UpdatePolicy::UpdateExisting) => {
            info!("Updating size comment {} on {}", comment.id, issue);
            store.update_comment(&issue.repo, comment.id, body)?;
            Ok(ReconcileOutcome::Updated {
                comment_id: comment.id,
            })
        }
        (existing, _) => {
            if let Some(comment) = existing {
                debug!(
                    "Found size comment {} but updates are disabled; posting a new one",
                    comment.id
                );
            }
            info!("Creating size comment on {}", issue);
            store.create_comment(issue, body)?;
            Ok(ReconcileOutcome::Created)
        }
    }
}
