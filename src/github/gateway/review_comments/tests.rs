//! Tests for the Octocrab gateway against a mock GitHub server.

type FixtureResult<T> = Result<T, Box<dyn std::error::Error>>;

use rstest::{fixture, rstest};
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::github::error::ExportError;
use crate::github::gateway::{OctocrabGateway, PullRequestGateway, ReviewCommentGateway};
use crate::github::locator::{PersonalAccessToken, PullRequestNumber, RepositoryLocator};
use crate::github::models::test_support::{pull_request_json, review_comment_json};

const COMMENTS_PATH: &str = "/api/v3/repos/acme/widgets/pulls/comments";

struct GatewayFixture {
    runtime: Runtime,
    server: MockServer,
    locator: RepositoryLocator,
    gateway: OctocrabGateway,
}

impl GatewayFixture {
    fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    fn mount(&self, mock: Mock) {
        self.block_on(mock.mount(&self.server));
    }
}

#[fixture]
fn token() -> FixtureResult<PersonalAccessToken> {
    Ok(PersonalAccessToken::new("valid-token")?)
}

#[fixture]
fn gateway_fixture(token: FixtureResult<PersonalAccessToken>) -> FixtureResult<GatewayFixture> {
    let token_value = token?;
    let runtime = Runtime::new()?;
    let server = runtime.block_on(MockServer::start());
    let locator = RepositoryLocator::with_api_base(
        "acme",
        "widgets",
        &format!("{}/api/v3", server.uri()),
    )?;
    let _guard = runtime.enter();
    let gateway = OctocrabGateway::for_token(&token_value, &locator, "acme")?;
    Ok(GatewayFixture {
        runtime,
        server,
        locator,
        gateway,
    })
}

#[rstest]
fn list_review_comments_returns_comments_in_provider_order(
    gateway_fixture: FixtureResult<GatewayFixture>,
) {
    let fixture = gateway_fixture.expect("fixture should succeed");

    fixture.mount(
        Mock::given(method("GET"))
            .and(path(COMMENTS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                review_comment_json(2, 7, "nit", "dave", "b.go"),
                review_comment_json(1, 5, "looks, good", "bob", "a.go"),
            ]))),
    );

    let comments = fixture
        .block_on(fixture.gateway.list_review_comments(&fixture.locator))
        .expect("request should succeed");

    let ids: Vec<u64> = comments.iter().map(|comment| comment.id).collect();
    assert_eq!(ids, vec![2, 1], "provider order must be preserved");

    let first = comments.first().expect("should have first comment");
    assert_eq!(first.body.as_deref(), Some("nit"));
    assert_eq!(first.author.as_deref(), Some("dave"));
    assert_eq!(first.file_path.as_deref(), Some("b.go"));
}

#[rstest]
fn list_review_comments_follows_every_page(gateway_fixture: FixtureResult<GatewayFixture>) {
    let fixture = gateway_fixture.expect("fixture should succeed");
    let next_link = format!(
        "<{}{COMMENTS_PATH}?page=2>; rel=\"next\", <{}{COMMENTS_PATH}?page=2>; rel=\"last\"",
        fixture.server.uri(),
        fixture.server.uri()
    );

    fixture.mount(
        Mock::given(method("GET"))
            .and(path(COMMENTS_PATH))
            .and(query_param_is_missing("page"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Link", next_link.as_str())
                    .set_body_json(serde_json::json!([
                        review_comment_json(1, 5, "first", "bob", "a.go"),
                        review_comment_json(2, 5, "second", "bob", "a.go"),
                    ])),
            ),
    );
    fixture.mount(
        Mock::given(method("GET"))
            .and(path(COMMENTS_PATH))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                review_comment_json(3, 7, "third", "dave", "b.go"),
            ]))),
    );

    let comments = fixture
        .block_on(fixture.gateway.list_review_comments(&fixture.locator))
        .expect("request should succeed");

    let ids: Vec<u64> = comments.iter().map(|comment| comment.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[rstest]
fn list_review_comments_maps_authentication_errors(
    gateway_fixture: FixtureResult<GatewayFixture>,
) {
    let fixture = gateway_fixture.expect("fixture should succeed");

    fixture.mount(
        Mock::given(method("GET"))
            .and(path(COMMENTS_PATH))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "message": "Bad credentials",
                "documentation_url": "https://docs.github.com/rest"
            }))),
    );

    let result = fixture.block_on(fixture.gateway.list_review_comments(&fixture.locator));

    assert!(
        matches!(
            &result,
            Err(ExportError::Authentication { message }) if message.contains("Bad credentials")
        ),
        "expected Authentication error, got {result:?}"
    );
}

#[rstest]
fn pull_request_returns_title_and_author(gateway_fixture: FixtureResult<GatewayFixture>) {
    let fixture = gateway_fixture.expect("fixture should succeed");

    fixture.mount(
        Mock::given(method("GET"))
            .and(path("/api/v3/repos/acme/widgets/pulls/5"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(pull_request_json(5, "Fix, bug", "alice")),
            ),
    );

    let number = PullRequestNumber::new(5).expect("non-zero number");
    let metadata = fixture
        .block_on(fixture.gateway.pull_request(&fixture.locator, number))
        .expect("request should succeed");

    assert_eq!(metadata.number, 5);
    assert_eq!(metadata.title.as_deref(), Some("Fix, bug"));
    assert_eq!(metadata.author.as_deref(), Some("alice"));
}

#[rstest]
fn pull_request_maps_missing_pull_request_to_not_found(
    gateway_fixture: FixtureResult<GatewayFixture>,
) {
    let fixture = gateway_fixture.expect("fixture should succeed");

    fixture.mount(
        Mock::given(method("GET"))
            .and(path("/api/v3/repos/acme/widgets/pulls/9"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "message": "Not Found",
                "documentation_url": "https://docs.github.com/rest/pulls/pulls#get-a-pull-request"
            }))),
    );

    let number = PullRequestNumber::new(9).expect("non-zero number");
    let result = fixture.block_on(fixture.gateway.pull_request(&fixture.locator, number));

    assert!(
        matches!(&result, Err(ExportError::NotFound { message }) if message.contains("#9")),
        "expected NotFound error, got {result:?}"
    );
}

#[rstest]
fn requests_identify_as_the_organisation_only(gateway_fixture: FixtureResult<GatewayFixture>) {
    let fixture = gateway_fixture.expect("fixture should succeed");

    fixture.mount(
        Mock::given(method("GET"))
            .and(path(COMMENTS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([]))),
    );

    fixture
        .block_on(fixture.gateway.list_review_comments(&fixture.locator))
        .expect("request should succeed");

    let requests = fixture
        .block_on(fixture.server.received_requests())
        .expect("request recording should be enabled");
    let request = requests.first().expect("one request should be recorded");
    let user_agents: Vec<&str> = request
        .headers
        .get_all("user-agent")
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect();
    assert_eq!(user_agents, vec!["acme"]);
    assert_eq!(
        request
            .headers
            .get("authorization")
            .and_then(|value| value.to_str().ok()),
        Some("Bearer valid-token")
    );
}
