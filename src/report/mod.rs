//! Review comment report: collection, rendering, and the end-to-end export.
//!
//! The export runs strictly in sequence: list every review comment, look up
//! each comment's pull request, render the rows, then write the file. The
//! file is only written once every row has been collected, so a failed run
//! never leaves a partial report behind.

mod collector;
mod model;
mod writer;

use std::path::PathBuf;

pub use collector::ReviewCommentCollector;
pub use model::{REPORT_HEADER, ReviewCommentRecord, format_timestamp, strip_commas};
pub use writer::{write_report, write_report_file};

use crate::config::ReportConfig;
use crate::github::{
    ExportError, MemoizingPullRequestGateway, OctocrabGateway, PersonalAccessToken,
    PullRequestGateway, RepositoryLocator, ReviewCommentGateway,
};
use crate::progress::ProgressSink;

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Path the report was written to.
    pub output_file: PathBuf,
    /// Number of data lines written, excluding the header.
    pub rows: usize,
}

/// Runs the whole export described by `config`.
///
/// # Errors
///
/// Returns any [`ExportError`] raised while building the client, collecting
/// rows, or writing the file. No file is written when collection fails.
pub async fn run_export(
    config: &ReportConfig,
    progress: &dyn ProgressSink,
) -> Result<ExportSummary, ExportError> {
    let locator = RepositoryLocator::with_api_base(
        &config.organization,
        &config.repository,
        &config.api_base,
    )?;
    let token = PersonalAccessToken::new(&config.access_token)?;

    progress.status("Connecting to GitHub");
    let gateway = OctocrabGateway::for_token(&token, &locator, &config.organization)?;

    let records = if config.cache_pull_requests {
        let pulls = MemoizingPullRequestGateway::new(gateway);
        let collected = collect_with(pulls.inner(), &pulls, &locator, progress).await?;
        tracing::debug!("fetched {} distinct pull requests", pulls.cached_len());
        collected
    } else {
        collect_with(&gateway, &gateway, &locator, progress).await?
    };

    write_report_file(&config.output_file, &records)?;
    tracing::debug!(
        "wrote {} review comments to {}",
        records.len(),
        config.output_file.display()
    );

    Ok(ExportSummary {
        output_file: config.output_file.clone(),
        rows: records.len(),
    })
}

async fn collect_with<Comments, Pulls>(
    comments: &Comments,
    pulls: &Pulls,
    locator: &RepositoryLocator,
    progress: &dyn ProgressSink,
) -> Result<Vec<ReviewCommentRecord>, ExportError>
where
    Comments: ReviewCommentGateway,
    Pulls: PullRequestGateway,
{
    ReviewCommentCollector::new(comments, pulls, progress)
        .collect(locator)
        .await
}
