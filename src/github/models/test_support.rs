//! Test helpers for constructing review comment and pull request fixtures.
//!
//! # Examples
//!
//! ```
//! use review_comments::github::models::test_support::{pull_request, review_comment};
//!
//! let comment = review_comment(1, 5, "looks good", "bob");
//! assert_eq!(
//!     comment.pull_request_url.as_deref(),
//!     Some("https://api.github.com/repos/acme/widgets/pulls/5")
//! );
//!
//! let pr = pull_request(5, "Fix bug", "alice");
//! assert_eq!(pr.title.as_deref(), Some("Fix bug"));
//! ```

use super::{PullRequestMetadata, ReviewComment};

/// Builds the API URL GitHub reports for pull request `number` of
/// `acme/widgets`.
#[must_use]
pub fn pull_request_url(number: u64) -> String {
    format!("https://api.github.com/repos/acme/widgets/pulls/{number}")
}

/// Constructs a `ReviewComment` on pull request `number` with a body and
/// commenter. Remaining fields are left unset.
#[must_use]
pub fn review_comment(id: u64, number: u64, body: &str, commenter: &str) -> ReviewComment {
    ReviewComment {
        id,
        body: Some(body.to_owned()),
        author: Some(commenter.to_owned()),
        pull_request_url: Some(pull_request_url(number)),
        ..Default::default()
    }
}

/// Constructs pull request metadata with a title and author.
#[must_use]
pub fn pull_request(number: u64, title: &str, author: &str) -> PullRequestMetadata {
    PullRequestMetadata {
        number,
        title: Some(title.to_owned()),
        author: Some(author.to_owned()),
    }
}

/// Builds the JSON body GitHub returns for one repository review comment.
#[must_use]
pub fn review_comment_json(
    id: u64,
    number: u64,
    body: &str,
    commenter: &str,
    path: &str,
) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "body": body,
        "user": { "login": commenter },
        "path": path,
        "pull_request_url": pull_request_url(number),
        "created_at": "2025-01-15T10:00:00Z"
    })
}

/// Builds the JSON body GitHub returns for a pull request.
#[must_use]
pub fn pull_request_json(number: u64, title: &str, author: &str) -> serde_json::Value {
    serde_json::json!({
        "number": number,
        "title": title,
        "state": "open",
        "user": { "login": author }
    })
}
