//! Pull request gateway decorator that memoises lookups by number.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::github::error::ExportError;
use crate::github::locator::{PullRequestNumber, RepositoryLocator};
use crate::github::models::PullRequestMetadata;

use super::PullRequestGateway;

/// Wraps a [`PullRequestGateway`] so each pull request is fetched at most
/// once per run.
///
/// The cache is keyed by number only; one instance must not be shared across
/// repositories. Failed lookups are not cached.
pub struct MemoizingPullRequestGateway<Gateway>
where
    Gateway: PullRequestGateway,
{
    inner: Gateway,
    cache: Mutex<HashMap<PullRequestNumber, PullRequestMetadata>>,
}

impl<Gateway> MemoizingPullRequestGateway<Gateway>
where
    Gateway: PullRequestGateway,
{
    /// Wraps `inner` with an empty cache.
    #[must_use]
    pub fn new(inner: Gateway) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Borrows the wrapped gateway.
    #[must_use]
    pub const fn inner(&self) -> &Gateway {
        &self.inner
    }

    /// Number of distinct pull requests fetched so far.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn cached(&self, number: PullRequestNumber) -> Option<PullRequestMetadata> {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&number)
            .cloned()
    }
}

#[async_trait]
impl<Gateway> PullRequestGateway for MemoizingPullRequestGateway<Gateway>
where
    Gateway: PullRequestGateway,
{
    async fn pull_request(
        &self,
        locator: &RepositoryLocator,
        number: PullRequestNumber,
    ) -> Result<PullRequestMetadata, ExportError> {
        if let Some(hit) = self.cached(number) {
            tracing::debug!("pull request #{} served from cache", number.get());
            return Ok(hit);
        }

        let metadata = self.inner.pull_request(locator, number).await?;
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(number, metadata.clone());
        Ok(metadata)
    }
}
