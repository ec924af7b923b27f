// ABOUTME: Desired resource set for one application and its building blocks.
// ABOUTME: Exposes the builder, naming strategies, and resource handles.

mod builder;
mod naming;

pub use builder::ResourceBuilder;
pub use naming::{APP_LABEL, GitlabNaming, NAME_LABEL, NamingStrategy, ResourceNames};

use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{Namespace, Service};
use k8s_openapi::api::networking::v1::Ingress;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::Serialize;
use std::fmt;

use crate::types::ResourceKind;

/// Identifies one object in the cluster: kind, name, and namespace if any.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResourceHandle {
    pub kind: ResourceKind,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl ResourceHandle {
    pub fn new(kind: ResourceKind, name: impl Into<String>, namespace: Option<String>) -> Self {
        ResourceHandle {
            kind,
            name: name.into(),
            namespace,
        }
    }

    fn from_meta(kind: ResourceKind, meta: &ObjectMeta) -> Self {
        ResourceHandle {
            kind,
            name: meta.name.clone().unwrap_or_default(),
            namespace: meta.namespace.clone(),
        }
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{} {}/{}", self.kind, ns, self.name),
            None => write!(f, "{} {}", self.kind, self.name),
        }
    }
}

/// A single desired object, ready to be sent to the cluster.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Resource {
    Namespace(Namespace),
    Deployment(Deployment),
    Service(Service),
    Ingress(Ingress),
}

impl Resource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::Namespace(_) => ResourceKind::Namespace,
            Resource::Deployment(_) => ResourceKind::Deployment,
            Resource::Service(_) => ResourceKind::Service,
            Resource::Ingress(_) => ResourceKind::Ingress,
        }
    }

    pub fn metadata(&self) -> &ObjectMeta {
        match self {
            Resource::Namespace(r) => &r.metadata,
            Resource::Deployment(r) => &r.metadata,
            Resource::Service(r) => &r.metadata,
            Resource::Ingress(r) => &r.metadata,
        }
    }

    pub fn handle(&self) -> ResourceHandle {
        ResourceHandle::from_meta(self.kind(), self.metadata())
    }
}

/// The objects one application should have after a redeploy.
///
/// Built fresh for every reconciliation and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DesiredResourceSet {
    pub namespace: Namespace,
    pub deployment: Deployment,
    pub service: Service,
    /// Absent unless the application is publicly accessible.
    pub ingress: Option<Ingress>,
}

impl DesiredResourceSet {
    pub fn has_ingress(&self) -> bool {
        self.ingress.is_some()
    }

    /// Objects cleared before a redeploy: Ingress, Service, Deployment.
    /// The namespace is never part of this list.
    pub fn deletion_order(&self) -> Vec<ResourceHandle> {
        let mut handles = Vec::with_capacity(3);
        if let Some(ingress) = &self.ingress {
            handles.push(ResourceHandle::from_meta(
                ResourceKind::Ingress,
                &ingress.metadata,
            ));
        }
        handles.push(ResourceHandle::from_meta(
            ResourceKind::Service,
            &self.service.metadata,
        ));
        handles.push(ResourceHandle::from_meta(
            ResourceKind::Deployment,
            &self.deployment.metadata,
        ));
        handles
    }

    /// Objects in dependency order: Namespace, Deployment, Service, Ingress.
    pub fn into_creation_order(self) -> Vec<Resource> {
        let mut resources = vec![
            Resource::Namespace(self.namespace),
            Resource::Deployment(self.deployment),
            Resource::Service(self.service),
        ];
        if let Some(ingress) = self.ingress {
            resources.push(Resource::Ingress(ingress));
        }
        resources
    }

    /// Render as a multi-document YAML stream in creation order.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        let mut out = String::new();
        for resource in self.clone().into_creation_order() {
            out.push_str("---\n");
            out.push_str(&serde_yaml::to_string(&resource)?);
        }
        Ok(out)
    }
}
