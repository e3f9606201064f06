//! Data models representing review comments and pull request metadata.
//!
//! Types prefixed with `Api` are internal deserialisation targets that
//! convert into public domain types.

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Pull request metadata needed to enrich a review comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestMetadata {
    /// Pull request number.
    pub number: u64,
    /// Title of the pull request.
    pub title: Option<String>,
    /// Author login if present.
    pub author: Option<String>,
}

/// Pull request review comment (distinct from issue comments).
///
/// Review comments are attached to specific lines in a pull request diff,
/// whereas issue comments are general discussion on the PR.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewComment {
    /// Comment identifier.
    pub id: u64,
    /// Comment body.
    pub body: Option<String>,
    /// Author login.
    pub author: Option<String>,
    /// File path the comment is attached to.
    pub file_path: Option<String>,
    /// API URL of the pull request the comment belongs to.
    pub pull_request_url: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUser {
    pub(super) login: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequest {
    pub(super) number: u64,
    pub(super) title: Option<String>,
    pub(super) user: Option<ApiUser>,
}

/// API response type for repository review comments.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiReviewComment {
    pub(super) id: u64,
    pub(super) body: Option<String>,
    pub(super) user: Option<ApiUser>,
    pub(super) path: Option<String>,
    pub(super) pull_request_url: Option<String>,
    pub(super) created_at: Option<DateTime<Utc>>,
}

impl From<ApiPullRequest> for PullRequestMetadata {
    fn from(value: ApiPullRequest) -> Self {
        Self {
            number: value.number,
            title: value.title,
            author: value.user.and_then(|user| user.login),
        }
    }
}

impl From<ApiReviewComment> for ReviewComment {
    fn from(value: ApiReviewComment) -> Self {
        Self {
            id: value.id,
            body: value.body,
            author: value.user.and_then(|user| user.login),
            file_path: value.path,
            pull_request_url: value.pull_request_url,
            created_at: value.created_at,
        }
    }
}
