// ABOUTME: Decides what to do when a create call fails.
// ABOUTME: Retries in-progress deletions with bounded backoff, accepts existing objects.

use std::time::Duration;

use crate::cluster::ClusterError;
use crate::config::RetryConfig;

/// Message prefix the API server uses while a previous object is terminating.
pub const STILL_DELETING_PREFIX: &str = "object is being deleted";

/// Message fragment for a create that raced with an existing object.
pub const ALREADY_EXISTS: &str = "already exists";

/// Interpretation of a 409 response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    StillDeleting,
    AlreadyExists,
    Other,
}

/// Classify a create error. Returns `None` for anything that is not a conflict.
///
/// In-progress deletion is reported with an "already exists" message too, so
/// the prefix check must come first.
pub fn classify(error: &ClusterError) -> Option<ConflictKind> {
    match error {
        ClusterError::Api {
            code: 409, message, ..
        } => {
            if message.starts_with(STILL_DELETING_PREFIX) {
                Some(ConflictKind::StillDeleting)
            } else if message.contains(ALREADY_EXISTS) {
                Some(ConflictKind::AlreadyExists)
            } else {
                Some(ConflictKind::Other)
            }
        }
        _ => None,
    }
}

/// Why a resource could not be created.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateFailure {
    #[error("object still being deleted after {attempts} attempts")]
    RetriesExhausted { attempts: u32, last: ClusterError },

    #[error("unhandled conflict: {0}")]
    Conflict(ClusterError),

    #[error(transparent)]
    Cluster(ClusterError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictDecision {
    /// Re-issue the same create after waiting.
    RetryAfter(Duration),
    /// The object is already there; nothing more to do.
    TreatAsSuccess,
    Propagate(CreateFailure),
}

#[derive(Debug, Clone, Default)]
pub struct ConflictRetryPolicy {
    retry: RetryConfig,
}

impl ConflictRetryPolicy {
    pub fn new(retry: RetryConfig) -> Self {
        ConflictRetryPolicy { retry }
    }

    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// Decide after create attempt number `attempt` (1-based) failed with `error`.
    pub fn on_create_failure(&self, error: ClusterError, attempt: u32) -> ConflictDecision {
        match classify(&error) {
            Some(ConflictKind::StillDeleting) if attempt < self.retry.max_attempts => {
                ConflictDecision::RetryAfter(self.retry.delay_for(attempt))
            }
            Some(ConflictKind::StillDeleting) => {
                ConflictDecision::Propagate(CreateFailure::RetriesExhausted {
                    attempts: attempt,
                    last: error,
                })
            }
            Some(ConflictKind::AlreadyExists) => ConflictDecision::TreatAsSuccess,
            Some(ConflictKind::Other) => ConflictDecision::Propagate(CreateFailure::Conflict(error)),
            None => ConflictDecision::Propagate(CreateFailure::Cluster(error)),
        }
    }
}
