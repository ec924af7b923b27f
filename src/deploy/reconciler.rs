// ABOUTME: Drives an application from its previous generation to the new one.
// ABOUTME: Ordered delete-then-create redeploy plus a namespace-preserving teardown.

use snafu::IntoError;

use super::conflict::{ConflictDecision, ConflictRetryPolicy};
use super::deletion::delete_resource;
use super::error::{CreateFailedSnafu, ReconcileError};
use super::report::{CreateOutcome, ReconcileReport};
use crate::cluster::ClusterApi;
use crate::config::{AppSpec, Config, FailurePolicy};
use crate::resources::{GitlabNaming, NamingStrategy, Resource, ResourceBuilder};

/// Redeploys and tears down one application's resources.
///
/// Delete phase: Ingress (when public), Service, Deployment. The namespace is
/// never deleted because other applications may share it.
///
/// Create phase: Namespace, Deployment, Service, then Ingress (when public).
/// Each failed create goes through the [`ConflictRetryPolicy`].
pub struct Reconciler<C, N = GitlabNaming> {
    cluster: C,
    builder: ResourceBuilder<N>,
    policy: ConflictRetryPolicy,
    on_failure: FailurePolicy,
}

impl<C: ClusterApi> Reconciler<C> {
    pub fn new(cluster: C) -> Self {
        Reconciler {
            cluster,
            builder: ResourceBuilder::new(),
            policy: ConflictRetryPolicy::default(),
            on_failure: FailurePolicy::default(),
        }
    }

    /// Reconciler with retry, failure policy and pull secret taken from config.
    pub fn from_config(cluster: C, config: &Config) -> Self {
        Reconciler {
            cluster,
            builder: ResourceBuilder::with_naming(GitlabNaming::new(
                config.image_pull_secret.clone(),
            )),
            policy: ConflictRetryPolicy::new(config.retry.clone()),
            on_failure: config.on_failure,
        }
    }
}

impl<C: ClusterApi, N: NamingStrategy> Reconciler<C, N> {
    pub fn with_builder(cluster: C, builder: ResourceBuilder<N>) -> Self {
        Reconciler {
            cluster,
            builder,
            policy: ConflictRetryPolicy::default(),
            on_failure: FailurePolicy::default(),
        }
    }

    pub fn retry_policy(mut self, policy: ConflictRetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn failure_policy(mut self, on_failure: FailurePolicy) -> Self {
        self.on_failure = on_failure;
        self
    }

    pub fn cluster(&self) -> &C {
        &self.cluster
    }

    pub fn builder(&self) -> &ResourceBuilder<N> {
        &self.builder
    }

    /// Replace the application's resources with freshly built ones.
    ///
    /// Delete failures never abort. Create failures abort only under
    /// [`FailurePolicy::FailFast`]; otherwise they are listed in the report.
    pub async fn redeploy(&self, spec: &AppSpec) -> Result<ReconcileReport, ReconcileError> {
        let desired = self.builder.build(spec);
        let mut report = ReconcileReport::default();

        tracing::info!(
            namespace = %spec.namespace,
            app = %spec.name,
            public = spec.publicly_accessible,
            "redeploying"
        );

        for handle in desired.deletion_order() {
            let outcome = delete_resource(&self.cluster, &handle).await;
            report.record_deletion(handle, outcome);
        }

        for resource in desired.into_creation_order() {
            let handle = resource.handle();
            let outcome = self.create_resource(&resource).await;

            if let (CreateOutcome::Failed(failure), FailurePolicy::FailFast) =
                (&outcome, self.on_failure)
            {
                let failure = failure.clone();
                report.record_creation(handle.clone(), outcome);
                return Err(CreateFailedSnafu {
                    handle,
                    report: Box::new(report),
                }
                .into_error(failure));
            }

            report.record_creation(handle, outcome);
        }

        if report.is_complete() {
            tracing::info!(namespace = %spec.namespace, app = %spec.name, "redeploy complete");
        } else {
            tracing::warn!(
                namespace = %spec.namespace,
                app = %spec.name,
                failed = report.failed().len(),
                "redeploy finished with uncreated resources"
            );
        }

        Ok(report)
    }

    /// Remove the application's Ingress, Service and Deployment.
    ///
    /// The namespace and anything else inside it is left untouched.
    pub async fn teardown(&self, spec: &AppSpec) -> ReconcileReport {
        let desired = self.builder.build(spec);
        let mut report = ReconcileReport::default();

        tracing::info!(namespace = %spec.namespace, app = %spec.name, "tearing down");

        for handle in desired.deletion_order() {
            let outcome = delete_resource(&self.cluster, &handle).await;
            report.record_deletion(handle, outcome);
        }

        report
    }

    async fn create_resource(&self, resource: &Resource) -> CreateOutcome {
        let handle = resource.handle();
        let mut attempt = 1;

        loop {
            let error = match self.cluster.create(resource).await {
                Ok(()) => {
                    tracing::info!(kind = %handle.kind, name = %handle.name, attempt, "created");
                    return CreateOutcome::Created { attempts: attempt };
                }
                Err(error) => error,
            };

            match self.policy.on_create_failure(error, attempt) {
                ConflictDecision::RetryAfter(delay) => {
                    tracing::info!(
                        kind = %handle.kind,
                        name = %handle.name,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "object is still being deleted, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                ConflictDecision::TreatAsSuccess => {
                    tracing::info!(kind = %handle.kind, name = %handle.name, "already exists");
                    return CreateOutcome::AlreadyExisted;
                }
                ConflictDecision::Propagate(failure) => {
                    tracing::error!(
                        kind = %handle.kind,
                        name = %handle.name,
                        attempt,
                        error = %failure,
                        "could not create"
                    );
                    return CreateOutcome::Failed(failure);
                }
            }
        }
    }
}
