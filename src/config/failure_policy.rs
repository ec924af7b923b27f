// ABOUTME: What the reconciler does when a resource cannot be created.
// ABOUTME: Either keep going and report, or stop at the first failure.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Attempt every resource and list the failures in the report.
    #[default]
    #[serde(alias = "continue")]
    ContinueAndReport,
    /// Abort the redeploy at the first resource that could not be created.
    FailFast,
}
