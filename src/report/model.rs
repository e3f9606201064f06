//! Report rows and their CSV rendering.

use chrono::{DateTime, Utc};

use crate::github::{PullRequestMetadata, PullRequestNumber, ReviewComment};

/// Header line written at the top of every report.
///
/// The stray space before `FileName` is part of the established column
/// layout.
pub const REPORT_HEADER: &str =
    "PullRequest,Title Description,Comment,Developer,Reviewer, FileName,Commented_at";

/// One row of the report: a review comment joined with its pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewCommentRecord {
    /// Pull request number as text.
    pub pull_request_number: String,
    /// Title of the pull request.
    pub pull_request_title: String,
    /// Review comment body.
    pub comment_body: String,
    /// Login of the pull request author.
    pub pull_request_author: String,
    /// Login of the reviewer who wrote the comment.
    pub commenter_login: String,
    /// File the comment is attached to.
    pub file_path: String,
    /// Creation time, see [`format_timestamp`].
    pub created_at: String,
}

impl ReviewCommentRecord {
    /// Joins a review comment with the pull request it belongs to. Missing
    /// optional values become empty strings.
    #[must_use]
    pub fn new(
        number: PullRequestNumber,
        pull_request: &PullRequestMetadata,
        comment: &ReviewComment,
    ) -> Self {
        Self {
            pull_request_number: number.get().to_string(),
            pull_request_title: pull_request.title.clone().unwrap_or_default(),
            comment_body: comment.body.clone().unwrap_or_default(),
            pull_request_author: pull_request.author.clone().unwrap_or_default(),
            commenter_login: comment.author.clone().unwrap_or_default(),
            file_path: comment.file_path.clone().unwrap_or_default(),
            created_at: comment
                .created_at
                .as_ref()
                .map(format_timestamp)
                .unwrap_or_default(),
        }
    }

    /// Renders the record as one CSV line, without the trailing newline.
    ///
    /// Commas inside values are replaced with spaces; nothing else is
    /// escaped.
    ///
    /// # Example
    ///
    /// ```
    /// use review_comments::ReviewCommentRecord;
    ///
    /// let record = ReviewCommentRecord {
    ///     pull_request_number: "5".to_owned(),
    ///     pull_request_title: "Fix, bug".to_owned(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(record.to_csv_line(), "5,Fix  bug,,,,,");
    /// ```
    #[must_use]
    pub fn to_csv_line(&self) -> String {
        [
            &self.pull_request_number,
            &self.pull_request_title,
            &self.comment_body,
            &self.pull_request_author,
            &self.commenter_login,
            &self.file_path,
            &self.created_at,
        ]
        .map(|value| strip_commas(value))
        .join(",")
    }
}

/// Replaces every literal comma with a single space.
#[must_use]
pub fn strip_commas(value: &str) -> String {
    value.replace(',', " ")
}

/// Formats a timestamp in the en-US general date/time pattern, for example
/// `1/15/2025 10:00:00 AM`.
#[must_use]
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%-m/%-d/%Y %-I:%M:%S %p").to_string()
}
