// ABOUTME: The four Kubernetes object kinds managed per application.
// ABOUTME: Carries API group metadata used in logs and rendered output.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResourceKind {
    Namespace,
    Deployment,
    Service,
    Ingress,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Namespace => "Namespace",
            ResourceKind::Deployment => "Deployment",
            ResourceKind::Service => "Service",
            ResourceKind::Ingress => "Ingress",
        }
    }

    pub fn api_version(&self) -> &'static str {
        match self {
            ResourceKind::Namespace | ResourceKind::Service => "v1",
            ResourceKind::Deployment => "apps/v1",
            ResourceKind::Ingress => "networking.k8s.io/v1",
        }
    }

}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
