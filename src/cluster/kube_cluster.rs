// ABOUTME: ClusterApi implementation backed by a kube-rs client.
// ABOUTME: Routes each resource kind to its typed, namespaced or cluster-wide Api.

use async_trait::async_trait;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{Namespace, Service};
use k8s_openapi::api::networking::v1::Ingress;
use kube::api::{Api, DeleteParams, PostParams};
use kube::config::KubeConfigOptions;
use kube::{Client, Config};

use super::{ClusterApi, ClusterError};
use crate::resources::{Resource, ResourceHandle};
use crate::types::ResourceKind;

/// Talks to a real API server.
#[derive(Clone)]
pub struct KubeCluster {
    client: Client,
}

impl KubeCluster {
    pub fn new(client: Client) -> Self {
        KubeCluster { client }
    }

    /// Connect using the in-cluster service account or the local kubeconfig.
    /// A context name selects a specific kubeconfig context.
    pub async fn connect(context: Option<&str>) -> Result<Self, ClusterError> {
        let config = match context {
            Some(context) => {
                let options = KubeConfigOptions {
                    context: Some(context.to_string()),
                    ..Default::default()
                };
                Config::from_kubeconfig(&options)
                    .await
                    .map_err(|e| ClusterError::Transport(e.to_string()))?
            }
            None => Config::infer()
                .await
                .map_err(|e| ClusterError::Transport(e.to_string()))?,
        };

        let client = Client::try_from(config)?;
        Ok(KubeCluster::new(client))
    }

    fn namespaced<K>(&self, namespace: Option<&str>, what: &str) -> Result<Api<K>, ClusterError>
    where
        K: kube::Resource<Scope = k8s_openapi::NamespaceResourceScope>,
        <K as kube::Resource>::DynamicType: Default,
    {
        let namespace = namespace.ok_or_else(|| ClusterError::MissingNamespace(what.to_string()))?;
        Ok(Api::namespaced(self.client.clone(), namespace))
    }
}

#[async_trait]
impl ClusterApi for KubeCluster {
    async fn create(&self, resource: &Resource) -> Result<(), ClusterError> {
        let params = PostParams::default();
        let handle = resource.handle();
        let namespace = handle.namespace.as_deref();
        let what = handle.to_string();
        tracing::debug!(api_version = handle.kind.api_version(), resource = %what, "create");

        match resource {
            Resource::Namespace(ns) => {
                Api::<Namespace>::all(self.client.clone())
                    .create(&params, ns)
                    .await?;
            }
            Resource::Deployment(dep) => {
                self.namespaced::<Deployment>(namespace, &what)?
                    .create(&params, dep)
                    .await?;
            }
            Resource::Service(svc) => {
                self.namespaced::<Service>(namespace, &what)?
                    .create(&params, svc)
                    .await?;
            }
            Resource::Ingress(ing) => {
                self.namespaced::<Ingress>(namespace, &what)?
                    .create(&params, ing)
                    .await?;
            }
        }

        Ok(())
    }

    async fn delete(&self, handle: &ResourceHandle) -> Result<(), ClusterError> {
        let params = DeleteParams::background();
        let name = handle.name.as_str();
        let namespace = handle.namespace.as_deref();
        let what = handle.to_string();
        tracing::debug!(api_version = handle.kind.api_version(), resource = %what, "delete");

        // The returned object or status is not needed; only success matters.
        match handle.kind {
            ResourceKind::Namespace => {
                Api::<Namespace>::all(self.client.clone())
                    .delete(name, &params)
                    .await?;
            }
            ResourceKind::Deployment => {
                self.namespaced::<Deployment>(namespace, &what)?
                    .delete(name, &params)
                    .await?;
            }
            ResourceKind::Service => {
                self.namespaced::<Service>(namespace, &what)?
                    .delete(name, &params)
                    .await?;
            }
            ResourceKind::Ingress => {
                self.namespaced::<Ingress>(namespace, &what)?
                    .delete(name, &params)
                    .await?;
            }
        }

        Ok(())
    }
}
