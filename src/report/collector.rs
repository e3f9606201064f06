//! Joins repository review comments with their pull requests.

use crate::github::{
    ExportError, PullRequestGateway, PullRequestNumber, RepositoryLocator, ReviewComment,
    ReviewCommentGateway,
};
use crate::progress::ProgressSink;

use super::model::ReviewCommentRecord;

/// Description shown next to the progress bar while rows are built.
const PROGRESS_DESCRIPTION: &str = "Processing";

/// Lists every review comment in a repository and enriches each one with its
/// pull request's title and author.
pub struct ReviewCommentCollector<'run, Comments, Pulls>
where
    Comments: ReviewCommentGateway,
    Pulls: PullRequestGateway,
{
    comments: &'run Comments,
    pulls: &'run Pulls,
    progress: &'run dyn ProgressSink,
}

impl<'run, Comments, Pulls> ReviewCommentCollector<'run, Comments, Pulls>
where
    Comments: ReviewCommentGateway,
    Pulls: PullRequestGateway,
{
    /// Creates a collector over the two gateways, reporting to `progress`.
    #[must_use]
    pub const fn new(
        comments: &'run Comments,
        pulls: &'run Pulls,
        progress: &'run dyn ProgressSink,
    ) -> Self {
        Self {
            comments,
            pulls,
            progress,
        }
    }

    /// Builds one record per review comment, in the order GitHub listed
    /// them.
    ///
    /// Pull requests are looked up one comment at a time. The first failure
    /// aborts the whole collection; no partial result is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::MalformedReference`] when a comment's pull
    /// request URL does not end in a number, or any gateway error.
    pub async fn collect(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<Vec<ReviewCommentRecord>, ExportError> {
        self.progress
            .status("Reading the PRs from GitHub, this should take few seconds....");
        let comments = self.comments.list_review_comments(locator).await?;
        self.progress.status(
            "Successfully retrieved the PRs, started writing the review comments to the CSV file...",
        );

        let total = comments.len();
        let mut records = Vec::with_capacity(total);
        for (index, comment) in comments.iter().enumerate() {
            records.push(self.enrich(locator, comment).await?);
            self.progress.report(PROGRESS_DESCRIPTION, index, total);
        }
        self.progress.finish();

        tracing::debug!(
            "collected {} review comment rows for {}/{}",
            records.len(),
            locator.owner().as_str(),
            locator.repository().as_str()
        );
        Ok(records)
    }

    async fn enrich(
        &self,
        locator: &RepositoryLocator,
        comment: &ReviewComment,
    ) -> Result<ReviewCommentRecord, ExportError> {
        let reference = comment.pull_request_url.as_deref().unwrap_or_default();
        let number = PullRequestNumber::from_reference_url(reference)?;
        let pull_request = self.pulls.pull_request(locator, number).await?;
        Ok(ReviewCommentRecord::new(number, &pull_request, comment))
    }
}
