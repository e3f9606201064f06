//! Gateways for loading review comments and pull requests through Octocrab.
//!
//! This module provides trait-based gateways for communicating with the GitHub
//! API. The traits let the collector run against mocks in tests while the
//! Octocrab implementation handles real HTTP requests.

mod client;
mod error_mapping;
mod memoizing;
mod pull_request;
mod review_comments;

pub use memoizing::MemoizingPullRequestGateway;
pub use pull_request::OctocrabGateway;

use async_trait::async_trait;

use crate::github::error::ExportError;
use crate::github::locator::{PullRequestNumber, RepositoryLocator};
use crate::github::models::{PullRequestMetadata, ReviewComment};

/// Gateway that can look up a single pull request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestGateway: Send + Sync {
    /// Fetch the metadata for pull request `number` in the repository.
    async fn pull_request(
        &self,
        locator: &RepositoryLocator,
        number: PullRequestNumber,
    ) -> Result<PullRequestMetadata, ExportError>;
}

/// Gateway for listing repository review comments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewCommentGateway: Send + Sync {
    /// Fetch every review comment in the repository, across all pages, in
    /// the order GitHub returns them.
    async fn list_review_comments(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<Vec<ReviewComment>, ExportError>;
}
