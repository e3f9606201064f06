//! Scenario state and runtime/server initialisation for the review comment
//! export BDD tests.

use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use review_comments::{ExportError, ExportSummary};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tempfile::TempDir;
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// Scenario state for review comment export tests.
#[derive(ScenarioState, Default)]
pub(crate) struct ReportState {
    pub(crate) runtime: Slot<Rc<Runtime>>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) output_dir: Slot<TempDir>,
    pub(crate) cache_pull_requests: Slot<bool>,
    pub(crate) summary: Slot<ExportSummary>,
    pub(crate) error: Slot<ExportError>,
}

/// Ensures a Tokio runtime and mock server exist, returning the runtime.
///
/// # Errors
///
/// Returns an error if the Tokio runtime cannot be created.
pub(crate) fn ensure_runtime_and_server(report_state: &ReportState) -> io::Result<Rc<Runtime>> {
    if report_state.runtime.with_ref(|_| ()).is_none() {
        report_state.runtime.set(Rc::new(Runtime::new()?));
    }
    let runtime = report_state
        .runtime
        .get()
        .ok_or_else(|| io::Error::other("runtime not initialised after set"))?;

    if report_state.server.with_ref(|_| ()).is_none() {
        report_state.server.set(runtime.block_on(MockServer::start()));
    }
    Ok(runtime)
}

/// Path of the report file for this scenario, creating its directory on
/// first use.
pub(crate) fn report_path(report_state: &ReportState) -> PathBuf {
    if report_state.output_dir.with_ref(|_| ()).is_none() {
        report_state.output_dir.set(crate::support::create_temp_dir());
    }
    report_state
        .output_dir
        .with_ref(|dir| dir.path().join("report.csv"))
        .unwrap_or_else(|| panic!("output directory not initialised"))
}
