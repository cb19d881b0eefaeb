//! GitHub integration
//!
//! Provides:
//! - The comment store abstraction and its REST implementation
//! - Idempotent report comment reconciliation
//! - Actions run context, workflow commands and step outputs

pub mod client;
pub mod context;
pub mod reconciler;
pub mod store;
pub mod workflow;

#[cfg(test)]
pub(crate) mod testing;

pub use client::GitHubClient;
pub use context::ActionContext;
pub use reconciler::{
    find_report_comment, reconcile, CommentTarget, ReconcileOutcome, UpdatePolicy,
};
pub use store::{paginate, Author, Comment, CommentPage, CommentStore, IssueRef, RepoRef};
