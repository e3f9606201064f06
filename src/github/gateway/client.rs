//! Octocrab client construction helpers for gateway implementations.

use std::sync::Arc;

use http::header::USER_AGENT;
use http::{HeaderValue, Uri};
use hyper_rustls::HttpsConnectorBuilder;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use octocrab::service::middleware::auth_header::AuthHeaderLayer;
use octocrab::service::middleware::base_uri::BaseUriLayer;
use octocrab::service::middleware::extra_headers::ExtraHeadersLayer;
use octocrab::{AuthState, Octocrab, OctocrabBuilder};

use crate::github::error::ExportError;
use crate::github::locator::PersonalAccessToken;

/// Builds an Octocrab client for the given token and API base URL.
///
/// The client identifies itself to GitHub with `user_agent` as its only
/// `User-Agent` value. Octocrab's default builder always sends its own
/// product name as well, so the service stack is assembled here from
/// Octocrab's middleware on a rustls connector.
///
/// # Errors
///
/// Returns `ExportError::InvalidUrl` when the base URI cannot be parsed,
/// `ExportError::Configuration` when the token or user agent is not a valid
/// header value, or `ExportError::Network` when the TLS roots cannot be
/// loaded.
pub(super) fn build_octocrab_client(
    token: &PersonalAccessToken,
    api_base: &str,
    user_agent: &str,
) -> Result<Octocrab, ExportError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| ExportError::InvalidUrl(error.to_string()))?;
    let identity = header_value("user agent", user_agent)?;
    let authorization = header_value("token", &format!("Bearer {}", token.value()))?;

    let connector = HttpsConnectorBuilder::new()
        .with_native_roots()
        .map_err(|error| ExportError::Network {
            message: format!("failed to load TLS roots: {error}"),
        })?
        .https_or_http()
        .enable_http1()
        .build();
    let transport = Client::builder(TokioExecutor::new()).build(connector);

    let built = OctocrabBuilder::new_empty()
        .with_service(transport)
        .with_layer(&ExtraHeadersLayer::new(Arc::new(vec![(USER_AGENT, identity)])))
        .with_layer(&BaseUriLayer::new(base_uri.clone()))
        .with_layer(&AuthHeaderLayer::new(
            Some(authorization),
            base_uri.clone(),
            base_uri,
        ))
        .with_auth(AuthState::None)
        .build();
    match built {
        Ok(client) => Ok(client),
        Err(never) => match never {},
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, ExportError> {
    HeaderValue::from_str(value).map_err(|error| ExportError::Configuration {
        message: format!("{name} is not a valid header value: {error}"),
    })
}
