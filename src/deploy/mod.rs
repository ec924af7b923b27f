// ABOUTME: Redeploy orchestration: delete stale objects, create fresh ones.
// ABOUTME: Exports the reconciler, deletion and conflict policies, and reports.

mod conflict;
mod deletion;
mod error;
mod reconciler;
mod report;

pub use conflict::{
    ALREADY_EXISTS, ConflictDecision, ConflictKind, ConflictRetryPolicy, CreateFailure,
    STILL_DELETING_PREFIX, classify,
};
pub use deletion::{ClearedReason, DeleteOutcome, delete_resource};
pub use error::{ReconcileError, ReconcileErrorKind};
pub use reconciler::Reconciler;
pub use report::{CreateOutcome, CreationRecord, DeletionRecord, ReconcileReport};
