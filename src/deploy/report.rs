// ABOUTME: Per-resource outcomes of one redeploy or teardown.
// ABOUTME: Lets callers see which objects were left uncreated.

use super::conflict::CreateFailure;
use super::deletion::DeleteOutcome;
use crate::resources::ResourceHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Created after `attempts` create calls.
    Created { attempts: u32 },
    AlreadyExisted,
    Failed(CreateFailure),
}

impl CreateOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, CreateOutcome::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionRecord {
    pub handle: ResourceHandle,
    pub outcome: DeleteOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationRecord {
    pub handle: ResourceHandle,
    pub outcome: CreateOutcome,
}

/// Outcomes in the order the calls were issued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub deletions: Vec<DeletionRecord>,
    pub creations: Vec<CreationRecord>,
}

impl ReconcileReport {
    pub(crate) fn record_deletion(&mut self, handle: ResourceHandle, outcome: DeleteOutcome) {
        self.deletions.push(DeletionRecord { handle, outcome });
    }

    pub(crate) fn record_creation(&mut self, handle: ResourceHandle, outcome: CreateOutcome) {
        self.creations.push(CreationRecord { handle, outcome });
    }

    /// Resources whose creation failed.
    pub fn failed(&self) -> Vec<&ResourceHandle> {
        self.creations
            .iter()
            .filter(|r| !r.outcome.is_success())
            .map(|r| &r.handle)
            .collect()
    }

    /// Resources that could not be deleted and may still hold stale state.
    pub fn failed_deletions(&self) -> Vec<&ResourceHandle> {
        self.deletions
            .iter()
            .filter(|r| !r.outcome.is_cleared())
            .map(|r| &r.handle)
            .collect()
    }

    /// True when every attempted create succeeded or found the object present.
    pub fn is_complete(&self) -> bool {
        self.creations.iter().all(|r| r.outcome.is_success())
    }
}
