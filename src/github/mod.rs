//! GitHub review comment listing and pull request lookup.
//!
//! This module wraps Octocrab to list every review comment in a repository,
//! resolve the pull request each comment belongs to, and map failures into
//! user-friendly variants so callers can surface precise errors without
//! exposing Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;

pub use error::ExportError;
pub use gateway::{
    MemoizingPullRequestGateway, OctocrabGateway, PullRequestGateway, ReviewCommentGateway,
};
pub use locator::{
    DEFAULT_API_BASE, PersonalAccessToken, PullRequestNumber, RepositoryLocator, RepositoryName,
    RepositoryOwner,
};
pub use models::{PullRequestMetadata, ReviewComment};

#[cfg(test)]
pub use gateway::{MockPullRequestGateway, MockReviewCommentGateway};
