//! Octocrab implementation of the repository review comment listing.

use async_trait::async_trait;
use octocrab::Page;

use crate::github::error::ExportError;
use crate::github::locator::RepositoryLocator;
use crate::github::models::{ApiReviewComment, ReviewComment};

use super::ReviewCommentGateway;
use super::error_mapping::map_octocrab_error;
use super::pull_request::OctocrabGateway;

impl OctocrabGateway {
    /// Fetches all review comments for a repository.
    ///
    /// The first page is requested explicitly and the remaining pages are
    /// followed through the `Link` header by [`octocrab::Octocrab::all_pages`],
    /// so the result preserves GitHub's ordering across page boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] when any of the following conditions occur:
    ///
    /// - **Network/HTTP failures**: connection errors or other transport
    ///   issues when communicating with the GitHub API.
    /// - **Authentication/authorisation errors**: invalid or expired personal
    ///   access token, or insufficient permissions to read the repository.
    /// - **Missing repository**: GitHub answers 404.
    /// - **Deserialisation errors**: malformed JSON responses.
    async fn fetch_review_comments(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<Vec<ReviewComment>, ExportError> {
        tracing::debug!(
            "listing review comments for {}/{}",
            locator.owner().as_str(),
            locator.repository().as_str()
        );

        let page = self
            .client
            .get::<Page<ApiReviewComment>, _, _>(locator.review_comments_path(), None::<&()>)
            .await
            .map_err(|error| map_octocrab_error("review comments", &error))?;

        self.client
            .all_pages(page)
            .await
            .map(|comments| comments.into_iter().map(Into::into).collect())
            .map_err(|error| map_octocrab_error("review comments", &error))
    }
}

#[async_trait]
impl ReviewCommentGateway for OctocrabGateway {
    async fn list_review_comments(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<Vec<ReviewComment>, ExportError> {
        self.fetch_review_comments(locator).await
    }
}

#[cfg(test)]
mod tests;
