//! Export every pull request review comment of a GitHub repository to CSV.
//!
//! The library wraps Octocrab to list a repository's review comments, look
//! up the pull request each comment belongs to, and render the joined rows as
//! a flat CSV report. Errors are surfaced as [`ExportError`] so the CLI can
//! report them without exposing Octocrab internals.

pub mod config;
pub mod github;
pub mod progress;
pub mod report;

pub use config::{CliArgs, DEFAULT_OUTPUT_FILE, ReportConfig, usage};
pub use github::{
    ExportError, MemoizingPullRequestGateway, OctocrabGateway, PersonalAccessToken,
    PullRequestGateway, PullRequestMetadata, PullRequestNumber, RepositoryLocator, ReviewComment,
    ReviewCommentGateway,
};
pub use progress::{ConsoleProgress, LogProgress, NoopProgress, ProgressSink};
pub use report::{
    ExportSummary, REPORT_HEADER, ReviewCommentCollector, ReviewCommentRecord, run_export,
    write_report, write_report_file,
};
