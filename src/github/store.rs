//! Comment store abstraction
//!
//! The reconciler talks to pull request comments only through
//! [`CommentStore`], so tests can swap the REST client for an in-memory one.

use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Repository coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    /// Owner (user or organisation)
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl RepoRef {
    /// Parse `owner/repo` (the format of `GITHUB_REPOSITORY`)
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_size_report::github::RepoRef;
    ///
    /// let repo = RepoRef::parse("octo-org/website").unwrap();
    /// assert_eq!(repo.owner, "octo-org");
    /// assert_eq!(repo.repo, "website");
    /// assert!(RepoRef::parse("no-slash").is_err());
    /// ```
    pub fn parse(full_name: &str) -> Result<Self, ReportError> {
        match full_name.trim().split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(Self {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                })
            }
            _ => Err(ReportError::InvalidContext {
                message: format!("expected 'owner/repo', got '{}'", full_name),
            }),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// An issue or pull request (they share the comment API)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRef {
    /// Repository the issue belongs to
    pub repo: RepoRef,
    /// Issue or pull request number
    pub number: u64,
}

impl fmt::Display for IssueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.repo, self.number)
    }
}

/// Comment author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Login name, e.g. `github-actions[bot]`
    pub login: String,
    /// Account type, e.g. `User` or `Bot`
    #[serde(rename = "type")]
    pub kind: String,
}

/// An issue comment as returned by the REST API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment id
    pub id: u64,
    /// Author; `None` for deleted accounts
    #[serde(default)]
    pub user: Option<Author>,
    /// Markdown body
    #[serde(default)]
    pub body: Option<String>,
}

/// One page of a comment listing
#[derive(Debug, Clone, Default)]
pub struct CommentPage {
    /// Comments on this page, oldest first
    pub comments: Vec<Comment>,
    /// Page number to request next, if there is one
    pub next_page: Option<u32>,
}

/// Trait for listing, creating and updating issue comments.
pub trait CommentStore {
    /// Fetch one page of comments (pages start at 1)
    fn list_comments(&self, issue: &IssueRef, page: u32) -> Result<CommentPage, ReportError>;

    /// Post a new comment
    fn create_comment(&self, issue: &IssueRef, body: &str) -> Result<(), ReportError>;

    /// Replace the body of an existing comment
    fn update_comment(&self, repo: &RepoRef, comment_id: u64, body: &str)
        -> Result<(), ReportError>;
}

impl<T: CommentStore + ?Sized> CommentStore for &T {
    fn list_comments(&self, issue: &IssueRef, page: u32) -> Result<CommentPage, ReportError> {
        (**self).list_comments(issue, page)
    }

    fn create_comment(&self, issue: &IssueRef, body: &str) -> Result<(), ReportError> {
        (**self).create_comment(issue, body)
    }

    fn update_comment(
        &self,
        repo: &RepoRef,
        comment_id: u64,
        body: &str,
    ) -> Result<(), ReportError> {
        (**self).update_comment(repo, comment_id, body)
    }
}

/// Lazily walk every page of comments on an issue
///
/// Pages are fetched on demand, so a caller that stops iterating early never
/// requests the rest. Iteration ends after the first error.
pub fn paginate<'a, S: CommentStore + ?Sized>(store: &'a S, issue: &'a IssueRef) -> Pages<'a, S> {
    Pages {
        store,
        issue,
        next: Some(1),
    }
}

/// Iterator returned by [`paginate`]
pub struct Pages<'a, S: ?Sized> {
    store: &'a S,
    issue: &'a IssueRef,
    next: Option<u32>,
}

impl<S: CommentStore + ?Sized> Iterator for Pages<'_, S> {
    type Item = Result<Vec<Comment>, ReportError>;

    fn next(&mut self) -> Option<Self::Item> {
        let page = self.next.take()?;
        match self.store.list_comments(self.issue, page) {
            Ok(CommentPage {
                comments,
                next_page,
            }) => {
                // Guard against a store that never advances
                self.next = next_page.filter(|n| *n > page);
                Some(Ok(comments))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
