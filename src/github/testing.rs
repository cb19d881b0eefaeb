//! In-memory comment store for reconciler tests

use super::store::{Author, Comment, CommentPage, CommentStore, IssueRef, RepoRef};
use crate::error::ReportError;
use std::cell::{Cell, RefCell};

/// Pages of comments held in memory, with every write recorded.
#[derive(Debug, Default)]
pub(crate) struct MemoryCommentStore {
    pages: RefCell<Vec<Vec<Comment>>>,
    list_calls: Cell<usize>,
    created: RefCell<Vec<(IssueRef, String)>>,
    updated: RefCell<Vec<(u64, String)>>,
    fail_listing: bool,
    fail_writes: bool,
}

impl MemoryCommentStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// `pages` pages of `per_page` comments from a human user.
    pub(crate) fn with_pages(pages: usize, per_page: usize) -> Self {
        let store = Self::new();
        {
            let mut all = store.pages.borrow_mut();
            for p in 0..pages {
                all.push(
                    (0..per_page)
                        .map(|i| {
                            let id = (p * per_page + i + 1) as u64;
                            user_comment(id, "octocat", "User", &format!("comment {id}"))
                        })
                        .collect(),
                );
            }
        }
        store
    }

    /// Put `comment` at the end of page `page` (1-based), adding pages as needed.
    pub(crate) fn with_comment_on_page(self, page: usize, comment: Comment) -> Self {
        {
            let mut all = self.pages.borrow_mut();
            while all.len() < page {
                all.push(Vec::new());
            }
            all[page - 1].push(comment);
        }
        self
    }

    pub(crate) fn fail_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    pub(crate) fn fail_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.get()
    }

    pub(crate) fn created(&self) -> Vec<(IssueRef, String)> {
        self.created.borrow().clone()
    }

    pub(crate) fn updated(&self) -> Vec<(u64, String)> {
        self.updated.borrow().clone()
    }

    pub(crate) fn comment(&self, id: u64) -> Option<Comment> {
        self.pages
            .borrow()
            .iter()
            .flatten()
            .find(|c| c.id == id)
            .cloned()
    }

    fn remote_error(operation: &str) -> ReportError {
        ReportError::Remote {
            operation: operation.to_string(),
            status: Some(500),
            message: "Server Error".to_string(),
        }
    }
}

impl CommentStore for MemoryCommentStore {
    fn list_comments(&self, _issue: &IssueRef, page: u32) -> Result<CommentPage, ReportError> {
        self.list_calls.set(self.list_calls.get() + 1);
        if self.fail_listing {
            return Err(Self::remote_error("listing comments"));
        }

        let pages = self.pages.borrow();
        let idx = page as usize - 1;
        Ok(CommentPage {
            comments: pages.get(idx).cloned().unwrap_or_default(),
            next_page: (idx + 1 < pages.len()).then_some(page + 1),
        })
    }

    fn create_comment(&self, issue: &IssueRef, body: &str) -> Result<(), ReportError> {
        if self.fail_writes {
            return Err(Self::remote_error("creating comment"));
        }
        self.created
            .borrow_mut()
            .push((issue.clone(), body.to_string()));
        Ok(())
    }

    fn update_comment(
        &self,
        _repo: &RepoRef,
        comment_id: u64,
        body: &str,
    ) -> Result<(), ReportError> {
        if self.fail_writes {
            return Err(Self::remote_error("updating comment"));
        }
        self.updated
            .borrow_mut()
            .push((comment_id, body.to_string()));
        for comment in self.pages.borrow_mut().iter_mut().flatten() {
            if comment.id == comment_id {
                comment.body = Some(body.to_string());
            }
        }
        Ok(())
    }
}

pub(crate) fn user_comment(id: u64, login: &str, kind: &str, body: &str) -> Comment {
    Comment {
        id,
        user: Some(Author {
            login: login.to_string(),
            kind: kind.to_string(),
        }),
        body: Some(body.to_string()),
    }
}
