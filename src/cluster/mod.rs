// ABOUTME: Boundary to the Kubernetes API server.
// ABOUTME: ClusterApi abstracts create/delete so reconciliation can be tested offline.

mod error;
mod kube_cluster;

pub use error::ClusterError;
pub use kube_cluster::KubeCluster;

use async_trait::async_trait;

use crate::resources::{Resource, ResourceHandle};

/// Object lifecycle calls the reconciler issues.
///
/// Every call completes when the API server has answered.
#[async_trait]
pub trait ClusterApi: Send + Sync {
    /// Create the object in the cluster.
    async fn create(&self, resource: &Resource) -> Result<(), ClusterError>;

    /// Delete the object, cascading to its dependents.
    async fn delete(&self, handle: &ResourceHandle) -> Result<(), ClusterError>;
}

#[async_trait]
impl<C: ClusterApi + ?Sized> ClusterApi for &C {
    async fn create(&self, resource: &Resource) -> Result<(), ClusterError> {
        (**self).create(resource).await
    }

    async fn delete(&self, handle: &ResourceHandle) -> Result<(), ClusterError> {
        (**self).delete(handle).await
    }
}
