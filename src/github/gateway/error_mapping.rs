//! Error mapping helpers for the Octocrab GitHub gateway.

use http::StatusCode;

use crate::github::error::ExportError;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> ExportError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return map_status(operation, source.status_code, &source.message);
    }

    if is_network_error(error) {
        return ExportError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    ExportError::Api {
        message: format!("{operation} failed: {error}"),
    }
}

fn map_status(operation: &str, status: StatusCode, message: &str) -> ExportError {
    if is_auth_failure(status) {
        ExportError::Authentication {
            message: format!("{operation} failed: GitHub returned {status} {message}"),
        }
    } else if status == StatusCode::NOT_FOUND {
        ExportError::NotFound {
            message: format!("{operation} failed: {message}"),
        }
    } else {
        ExportError::Api {
            message: format!("{operation} failed with status {status}: {message}"),
        }
    }
}
