//! GitHub REST implementation of [`CommentStore`]

use super::store::{Comment, CommentPage, CommentStore, IssueRef, RepoRef};
use crate::error::ReportError;
use log::debug;
use regex::Regex;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, LINK, USER_AGENT};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;

/// Default REST endpoint (overridden by `GITHUB_API_URL` on GHES)
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Comments requested per page (the API maximum)
const PER_PAGE: u32 = 100;

/// Blocking GitHub REST client for issue comments
pub struct GitHubClient {
    http: Client,
    api_url: String,
}

#[derive(Serialize)]
struct CommentBody<'a> {
    body: &'a str,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GitHubClient {
    /// Create a client authenticated with `token`
    ///
    /// # Errors
    ///
    /// Returns `MissingInput` for an empty token, or `Remote` if the HTTP
    /// client cannot be built.
    pub fn new(api_url: &str, token: &str) -> Result<Self, ReportError> {
        if token.trim().is_empty() {
            return Err(ReportError::MissingInput {
                name: "token".to_string(),
            });
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.trim())).map_err(|e| {
            ReportError::InvalidContext {
                message: format!("token contains invalid characters: {}", e),
            }
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("bundle-size-report/", env!("CARGO_PKG_VERSION"))),
        );

        let http = Client::builder()
            .default_headers(headers)
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ReportError::Remote {
                operation: "creating HTTP client".to_string(),
                status: None,
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    fn issue_comments_url(&self, issue: &IssueRef) -> String {
        format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.api_url, issue.repo.owner, issue.repo.repo, issue.number
        )
    }

    /// Send a request and turn transport failures and non-2xx statuses into `Remote`
    fn send(&self, request: RequestBuilder, operation: &str) -> Result<Response, ReportError> {
        let response = request.send().map_err(|e| ReportError::Remote {
            operation: operation.to_string(),
            status: None,
            message: e.to_string(),
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&text)
            .map(|b| b.message)
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("request failed").to_string());

        Err(ReportError::Remote {
            operation: operation.to_string(),
            status: Some(status.as_u16()),
            message,
        })
    }
}

impl CommentStore for GitHubClient {
    fn list_comments(&self, issue: &IssueRef, page: u32) -> Result<CommentPage, ReportError> {
        const OPERATION: &str = "listing comments";

        let request = self
            .http
            .get(self.issue_comments_url(issue))
            .query(&[("per_page", PER_PAGE), ("page", page)]);
        let response = self.send(request, OPERATION)?;

        let next_page = response
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .and_then(next_page_from_link);

        let comments: Vec<Comment> = response.json().map_err(|e| ReportError::Remote {
            operation: OPERATION.to_string(),
            status: None,
            message: format!("unexpected response body: {}", e),
        })?;

        debug!(
            "Fetched page {} of comments on {} ({} comments, next: {:?})",
            page,
            issue,
            comments.len(),
            next_page
        );

        Ok(CommentPage {
            comments,
            next_page,
        })
    }

    fn create_comment(&self, issue: &IssueRef, body: &str) -> Result<(), ReportError> {
        let request = self
            .http
            .post(self.issue_comments_url(issue))
            .json(&CommentBody { body });
        self.send(request, "creating comment")?;
        Ok(())
    }

    fn update_comment(
        &self,
        repo: &RepoRef,
        comment_id: u64,
        body: &str,
    ) -> Result<(), ReportError> {
        let url = format!(
            "{}/repos/{}/{}/issues/comments/{}",
            self.api_url, repo.owner, repo.repo, comment_id
        );
        let request = self.http.patch(url).json(&CommentBody { body });
        self.send(request, "updating comment")?;
        Ok(())
    }
}

/// Extract the `page` query value of the `rel="next"` entry of a Link header
fn next_page_from_link(link: &str) -> Option<u32> {
    static NEXT: OnceLock<Regex> = OnceLock::new();
    let re = NEXT.get_or_init(|| {
        Regex::new(r#"<[^>]*[?&]page=(\d+)[^>]*>\s*;\s*rel="next""#)
            .expect("link header regex is valid")
    });

    link.split(',')
        .find_map(|part| re.captures(part))
        .and_then(|caps| caps[1].parse().ok())
}
