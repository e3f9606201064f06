//! Octocrab implementation of the pull request gateway.

use async_trait::async_trait;
use octocrab::Octocrab;

use crate::github::error::ExportError;
use crate::github::locator::{PersonalAccessToken, PullRequestNumber, RepositoryLocator};
use crate::github::models::{ApiPullRequest, PullRequestMetadata};

use super::PullRequestGateway;
use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;

/// Octocrab-backed gateway serving both review comment listing and pull
/// request lookups from one authenticated client.
pub struct OctocrabGateway {
    pub(super) client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an authenticated gateway for the locator's API base.
    ///
    /// `user_agent` is the product name sent to GitHub; the export uses the
    /// organisation name.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::InvalidUrl` when the base URI cannot be parsed or
    /// `ExportError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: &PersonalAccessToken,
        locator: &RepositoryLocator,
        user_agent: &str,
    ) -> Result<Self, ExportError> {
        let octocrab = build_octocrab_client(token, locator.api_base().as_str(), user_agent)?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl PullRequestGateway for OctocrabGateway {
    async fn pull_request(
        &self,
        locator: &RepositoryLocator,
        number: PullRequestNumber,
    ) -> Result<PullRequestMetadata, ExportError> {
        tracing::debug!("fetching pull request #{}", number.get());

        self.client
            .get::<ApiPullRequest, _, _>(locator.pull_request_path(number), None::<&()>)
            .await
            .map(ApiPullRequest::into)
            .map_err(|error| {
                map_octocrab_error(&format!("pull request #{}", number.get()), &error)
            })
    }
}
