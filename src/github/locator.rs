//! Repository locator and identity wrappers for GitHub requests.

use url::Url;

use super::error::ExportError;

/// Default API base used when no `ApiBase` parameter is supplied.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Repository owner (organisation or user) wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, ExportError> {
        if value.is_empty() {
            return Err(ExportError::MissingParameter {
                missing: vec!["OrgName"],
            });
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, ExportError> {
        if value.is_empty() {
            return Err(ExportError::MissingParameter {
                missing: vec!["RepoName"],
            });
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Pull request number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PullRequestNumber(u64);

impl PullRequestNumber {
    /// Wraps a pull request number, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::MalformedReference`] when `value` is zero.
    pub fn new(value: u64) -> Result<Self, ExportError> {
        if value == 0 {
            return Err(ExportError::MalformedReference {
                reference: value.to_string(),
            });
        }
        Ok(Self(value))
    }

    /// Extracts the pull request number from a review comment's
    /// `pull_request_url`, i.e. the text after the final `/`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::MalformedReference`] when the reference has no
    /// `/` or the trailing segment is not a positive integer.
    ///
    /// # Example
    ///
    /// ```
    /// use review_comments::PullRequestNumber;
    ///
    /// let number = PullRequestNumber::from_reference_url(
    ///     "https://api.github.com/repos/acme/widgets/pulls/5",
    /// )
    /// .expect("reference should parse");
    /// assert_eq!(number.get(), 5);
    /// ```
    pub fn from_reference_url(reference: &str) -> Result<Self, ExportError> {
        let malformed = || ExportError::MalformedReference {
            reference: reference.to_owned(),
        };

        let (_, segment) = reference.rsplit_once('/').ok_or_else(malformed)?;
        let value = segment.parse::<u64>().map_err(|_| malformed())?;
        Self::new(value).map_err(|_| malformed())
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, ExportError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ExportError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Repository coordinates plus the API base they are served from.
///
/// # Example
///
/// ```
/// use review_comments::RepositoryLocator;
///
/// let locator = RepositoryLocator::from_owner_repo("acme", "widgets")
///     .expect("should build locator");
/// assert_eq!(locator.owner().as_str(), "acme");
/// assert_eq!(locator.api_base().as_str(), "https://api.github.com/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Creates a locator against the public `api.github.com` host.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::MissingParameter` when owner or repo is empty.
    pub fn from_owner_repo(owner: &str, repo: &str) -> Result<Self, ExportError> {
        Self::with_api_base(owner, repo, DEFAULT_API_BASE)
    }

    /// Creates a locator against an explicit API base, such as a GitHub
    /// Enterprise `https://host/api/v3` endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::MissingParameter` when owner or repo is empty or
    /// `ExportError::InvalidUrl` when the base cannot be parsed.
    pub fn with_api_base(owner: &str, repo: &str, api_base: &str) -> Result<Self, ExportError> {
        let validated_owner = RepositoryOwner::new(owner)?;
        let repository = RepositoryName::new(repo)?;
        let base =
            Url::parse(api_base).map_err(|error| ExportError::InvalidUrl(error.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ExportError::InvalidUrl(format!(
                "'{api_base}' cannot be used as an API base"
            )));
        }

        Ok(Self {
            api_base: base,
            owner: validated_owner,
            repository,
        })
    }

    /// API base URL requests are sent to.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// API path listing every review comment in the repository.
    pub(crate) fn review_comments_path(&self) -> String {
        format!(
            "/repos/{}/{}/pulls/comments",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }

    /// API path for a single pull request.
    pub(crate) fn pull_request_path(&self, number: PullRequestNumber) -> String {
        format!(
            "/repos/{}/{}/pulls/{}",
            self.owner.as_str(),
            self.repository.as_str(),
            number.get()
        )
    }
}
