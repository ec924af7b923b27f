// ABOUTME: Fully resolved description of one application deployment.
// ABOUTME: Immutable input to resource building and reconciliation.

use std::time::Duration;

use crate::types::ResourceName;

/// Everything needed to derive the desired resource set for one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSpec {
    pub namespace: ResourceName,
    pub name: ResourceName,
    /// Container image reference, already built and pushed.
    pub image: String,
    pub container_port: u16,
    pub service_port: u16,
    pub termination_grace_period: Duration,
    /// Host the Ingress routes; only used when publicly accessible.
    pub host: String,
    pub publicly_accessible: bool,
}

impl AppSpec {
    pub fn termination_grace_period_seconds(&self) -> i64 {
        i64::try_from(self.termination_grace_period.as_secs()).unwrap_or(i64::MAX)
    }
}
