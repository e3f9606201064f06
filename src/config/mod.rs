//! Run configuration resolved from `Key:Value` command-line tokens.
//!
//! The command line is a flat list of `Key:Value` tokens in any order:
//!
//! ```text
//! review-comments OrgName:acme RepoName:widgets PAT:ghp_example Output:report.csv
//! ```
//!
//! Each token is split at its first `:`, so values may themselves contain
//! colons (`ApiBase:https://ghe.example.com/api/v3`). Keys are matched
//! case-sensitively; unknown keys and tokens without a `:` are ignored. When a
//! key repeats, the last occurrence wins.
//!
//! | Key          | Required | Meaning                                      |
//! |--------------|----------|----------------------------------------------|
//! | `OrgName`    | yes      | Organisation (repository owner)              |
//! | `RepoName`   | yes      | Repository name                              |
//! | `PAT`        | yes      | Personal access token                        |
//! | `Output`     | no       | CSV path, default `GitHub_ReviewComents.csv` |
//! | `ApiBase`    | no       | API base URL, default `https://api.github.com` |
//! | `CachePulls` | no       | `true` to fetch each pull request only once  |

use std::path::PathBuf;

use clap::Parser;

use crate::github::error::ExportError;
use crate::github::locator::DEFAULT_API_BASE;

/// File name used when no `Output` parameter is supplied.
///
/// The spelling matches the file earlier releases produced so downstream
/// scripts keep finding it.
pub const DEFAULT_OUTPUT_FILE: &str = "GitHub_ReviewComents.csv";

const ORG_NAME: &str = "OrgName";
const REPO_NAME: &str = "RepoName";
const PAT: &str = "PAT";
const OUTPUT: &str = "Output";
const API_BASE: &str = "ApiBase";
const CACHE_PULLS: &str = "CachePulls";

const USAGE: &str = "\
Usage:
     review-comments OrgName:<Organization Name> RepoName:<Repository Name> PAT:<Personal Access Token> Output:<Output CSV file name>
     Output is an optional parameter, and will default to - GitHub_ReviewComents.csv
     ApiBase:<API base URL> targets GitHub Enterprise, and will default to - https://api.github.com
     CachePulls:true fetches each pull request only once";

/// Returns the usage text shown when mandatory parameters are missing.
#[must_use]
pub const fn usage() -> &'static str {
    USAGE
}

/// Raw command line accepted by the binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "review-comments",
    version,
    about = "Export every pull request review comment of a GitHub repository to CSV",
    after_help = USAGE
)]
pub struct CliArgs {
    /// Parameters in `Key:Value` form, e.g. `OrgName:acme`.
    #[arg(value_name = "KEY:VALUE")]
    pub parameters: Vec<String>,
}

/// Fully validated configuration for one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Organisation that owns the repository.
    pub organization: String,
    /// Repository whose review comments are exported.
    pub repository: String,
    /// Personal access token used to authenticate.
    pub access_token: String,
    /// Destination CSV file, relative to the working directory unless
    /// absolute.
    pub output_file: PathBuf,
    /// Base URL of the GitHub REST API.
    pub api_base: String,
    /// Whether pull request lookups are memoised by number.
    pub cache_pull_requests: bool,
}

#[derive(Debug, Default)]
struct RawParameters {
    organization: Option<String>,
    repository: Option<String>,
    access_token: Option<String>,
    output_file: Option<String>,
    api_base: Option<String>,
    cache_pull_requests: Option<String>,
}

impl RawParameters {
    fn collect<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut raw = Self::default();
        for arg in args {
            let Some((key, value)) = arg.as_ref().split_once(':') else {
                continue;
            };
            let slot = match key {
                ORG_NAME => &mut raw.organization,
                REPO_NAME => &mut raw.repository,
                PAT => &mut raw.access_token,
                OUTPUT => &mut raw.output_file,
                API_BASE => &mut raw.api_base,
                CACHE_PULLS => &mut raw.cache_pull_requests,
                _ => continue,
            };
            *slot = Some(value.to_owned());
        }
        raw
    }
}

/// Treats an empty value the same as an absent one.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|inner| !inner.is_empty())
}

/// Trims surrounding whitespace, then treats a blank value as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    non_empty(value.map(|inner| inner.trim().to_owned()))
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ExportError> {
    value
        .to_ascii_lowercase()
        .parse::<bool>()
        .map_err(|_| ExportError::Configuration {
            message: format!("{key} must be 'true' or 'false', got '{value}'"),
        })
}

impl ReportConfig {
    /// Resolves a configuration from `Key:Value` tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::MissingParameter`] naming every absent, empty or
    /// whitespace-only mandatory key, or [`ExportError::Configuration`] when `CachePulls` is
    /// not a boolean.
    ///
    /// # Example
    ///
    /// ```
    /// use review_comments::ReportConfig;
    ///
    /// let config = ReportConfig::resolve(["OrgName:acme", "RepoName:widgets", "PAT:ghp_x"])
    ///     .expect("mandatory parameters present");
    /// assert_eq!(config.output_file.as_os_str(), "GitHub_ReviewComents.csv");
    /// ```
    pub fn resolve<I, S>(args: I) -> Result<Self, ExportError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw = RawParameters::collect(args);

        let mandatory = (
            non_blank(raw.organization),
            non_blank(raw.repository),
            non_blank(raw.access_token),
        );
        let (organization, repository, access_token) = match mandatory {
            (Some(org), Some(repo), Some(token)) => (org, repo, token),
            (org, repo, token) => {
                let missing = [
                    (ORG_NAME, org.is_none()),
                    (REPO_NAME, repo.is_none()),
                    (PAT, token.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                return Err(ExportError::MissingParameter { missing });
            }
        };

        let cache_pull_requests = match non_empty(raw.cache_pull_requests) {
            Some(value) => parse_flag(CACHE_PULLS, &value)?,
            None => false,
        };

        Ok(Self {
            organization,
            repository,
            access_token,
            output_file: PathBuf::from(
                non_empty(raw.output_file).unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_owned()),
            ),
            api_base: non_empty(raw.api_base).unwrap_or_else(|| DEFAULT_API_BASE.to_owned()),
            cache_pull_requests,
        })
    }

    /// Resolves a configuration from parsed command-line arguments.
    ///
    /// # Errors
    ///
    /// See [`ReportConfig::resolve`].
    pub fn from_cli(args: &CliArgs) -> Result<Self, ExportError> {
        Self::resolve(&args.parameters)
    }
}
