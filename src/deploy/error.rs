// ABOUTME: Reconciliation error types with SNAFU pattern.
// ABOUTME: Raised only when the fail-fast policy aborts a redeploy.

use snafu::Snafu;

use super::conflict::CreateFailure;
use super::report::ReconcileReport;
use crate::resources::ResourceHandle;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ReconcileError {
    #[snafu(display("failed to create {handle}: {source}"))]
    CreateFailed {
        handle: ResourceHandle,
        source: CreateFailure,
        /// Everything done up to and including the failed create.
        report: Box<ReconcileReport>,
    },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileErrorKind {
    /// The object stayed in deletion for every allowed attempt.
    RetriesExhausted,
    /// A conflict that is neither "being deleted" nor "already exists".
    UnhandledConflict,
    /// Any other API or transport failure.
    Cluster,
}

impl ReconcileError {
    pub fn kind(&self) -> ReconcileErrorKind {
        match self {
            ReconcileError::CreateFailed { source, .. } => match source {
                CreateFailure::RetriesExhausted { .. } => ReconcileErrorKind::RetriesExhausted,
                CreateFailure::Conflict(_) => ReconcileErrorKind::UnhandledConflict,
                CreateFailure::Cluster(_) => ReconcileErrorKind::Cluster,
            },
        }
    }

    pub fn report(&self) -> &ReconcileReport {
        match self {
            ReconcileError::CreateFailed { report, .. } => report,
        }
    }

    pub fn handle(&self) -> &ResourceHandle {
        match self {
            ReconcileError::CreateFailed { handle, .. } => handle,
        }
    }
}
