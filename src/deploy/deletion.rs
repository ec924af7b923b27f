// ABOUTME: Best-effort deletion of stale objects before a redeploy.
// ABOUTME: Collapses benign outcomes (gone, undecodable reply) into Cleared.

use serde::Serialize;

use crate::cluster::{ClusterApi, ClusterError};
use crate::resources::ResourceHandle;

/// Why a delete counts as cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearedReason {
    Deleted,
    NotFound,
    /// The server deleted the object but its reply could not be decoded.
    UnparsableResponse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Cleared(ClearedReason),
    /// The object may still exist; creation proceeds regardless.
    Failed(ClusterError),
}

impl DeleteOutcome {
    pub fn is_cleared(&self) -> bool {
        matches!(self, DeleteOutcome::Cleared(_))
    }
}

/// Issue a cascading delete and classify the result. Never retries.
pub async fn delete_resource<C: ClusterApi + ?Sized>(
    cluster: &C,
    handle: &ResourceHandle,
) -> DeleteOutcome {
    match cluster.delete(handle).await {
        Ok(()) => {
            tracing::info!(kind = %handle.kind, name = %handle.name, "deleted");
            DeleteOutcome::Cleared(ClearedReason::Deleted)
        }
        Err(e) if e.is_not_found() => {
            tracing::debug!(kind = %handle.kind, name = %handle.name, "nothing to delete");
            DeleteOutcome::Cleared(ClearedReason::NotFound)
        }
        Err(ClusterError::UnparsableResponse(detail)) => {
            tracing::warn!(
                kind = %handle.kind,
                name = %handle.name,
                %detail,
                "delete reply could not be decoded, treating as deleted"
            );
            DeleteOutcome::Cleared(ClearedReason::UnparsableResponse)
        }
        Err(e) => {
            tracing::error!(
                kind = %handle.kind,
                name = %handle.name,
                error = %e,
                "could not delete, continuing"
            );
            DeleteOutcome::Failed(e)
        }
    }
}
