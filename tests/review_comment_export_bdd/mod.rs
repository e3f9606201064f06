//! Support modules for the review comment export BDD tests.

pub(crate) mod state;

pub(crate) use state::{ReportState, ensure_runtime_and_server, report_path};
