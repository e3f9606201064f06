//! Shared helpers for integration tests against a mock GitHub API.

use std::path::Path;

use review_comments::github::models::test_support::{pull_request_json, review_comment_json};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mock server serves repository review comments from.
pub const COMMENTS_PATH: &str = "/api/v3/repos/acme/widgets/pulls/comments";

/// Creates a temporary directory for report output.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created.
pub fn create_temp_dir() -> TempDir {
    TempDir::new().unwrap_or_else(|error| panic!("failed to create temporary directory: {error}"))
}

/// Path the mock server serves pull request `number` from.
pub fn pull_request_path(number: u64) -> String {
    format!("/api/v3/repos/acme/widgets/pulls/{number}")
}

/// Builds the `Key:Value` arguments for an `acme/widgets` export.
pub fn export_args(server_uri: &str, output: &Path) -> Vec<String> {
    vec![
        "OrgName:acme".to_owned(),
        "RepoName:widgets".to_owned(),
        "PAT:valid-token".to_owned(),
        format!("Output:{}", output.display()),
        format!("ApiBase:{server_uri}/api/v3"),
    ]
}

/// Comment A on PR #5 by bob and comment B on PR #7 by dave.
pub fn two_comment_listing() -> serde_json::Value {
    serde_json::json!([
        review_comment_json(1, 5, "looks, good", "bob", "a.go"),
        review_comment_json(2, 7, "nit", "dave", "b.go"),
    ])
}

/// Mounts `comments` as the repository's single page of review comments.
pub async fn mount_comment_listing(server: &MockServer, comments: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(COMMENTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(comments))
        .mount(server)
        .await;
}

/// Mounts a pull request lookup answering with `title` and `author`.
pub async fn mount_pull_request(server: &MockServer, number: u64, title: &str, author: &str) {
    Mock::given(method("GET"))
        .and(path(pull_request_path(number)))
        .respond_with(ResponseTemplate::new(200).set_body_json(pull_request_json(
            number, title, author,
        )))
        .mount(server)
        .await;
}

/// Mounts a 404 for pull request `number`.
pub async fn mount_missing_pull_request(server: &MockServer, number: u64) {
    Mock::given(method("GET"))
        .and(path(pull_request_path(number)))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest/pulls/pulls#get-a-pull-request"
        })))
        .mount(server)
        .await;
}
