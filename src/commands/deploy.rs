// ABOUTME: Deploy and remove command implementations.
// ABOUTME: Connects to the cluster and runs the reconciler for one application.

use autocd::cluster::KubeCluster;
use autocd::config::{AppSpec, Config};
use autocd::deploy::Reconciler;
use autocd::error::{Error, Result};
use autocd::output::Output;

async fn connect(context: Option<&str>, output: &Output) -> Result<KubeCluster> {
    output.progress("  → Connecting to cluster...");
    KubeCluster::connect(context)
        .await
        .map_err(|e| Error::ClusterConnection(e.to_string()))
}

/// Delete and recreate the application's resources.
pub async fn deploy(
    config: &Config,
    spec: &AppSpec,
    context: Option<&str>,
    mut output: Output,
) -> Result<()> {
    output.start_timer();
    output.progress(&format!(
        "Deploying {} ({}) to namespace {}",
        spec.name, spec.image, spec.namespace
    ));

    let cluster = connect(context, &output).await?;
    let reconciler = Reconciler::from_config(cluster, config);

    let report = match reconciler.redeploy(spec).await {
        Ok(report) => report,
        Err(e) => {
            output.report(e.report());
            return Err(e.into());
        }
    };
    output.report(&report);

    for handle in report.failed_deletions() {
        output.warning(&format!("{handle} could not be deleted"));
    }

    let failed = report.failed().len();
    if failed > 0 {
        return Err(Error::Incomplete { failed });
    }

    if spec.publicly_accessible {
        output.success(&format!("Deployed {} at https://{}", spec.name, spec.host));
    } else {
        output.success(&format!("Deployed {}", spec.name));
    }
    Ok(())
}

/// Remove the application's Deployment, Service and Ingress, keeping the namespace.
pub async fn remove(
    config: &Config,
    spec: &AppSpec,
    context: Option<&str>,
    mut output: Output,
) -> Result<()> {
    output.start_timer();
    output.progress(&format!(
        "Removing {} from namespace {}",
        spec.name, spec.namespace
    ));

    let cluster = connect(context, &output).await?;
    let reconciler = Reconciler::from_config(cluster, config);

    let report = reconciler.teardown(spec).await;
    output.report(&report);

    for handle in report.failed_deletions() {
        output.warning(&format!("{handle} could not be deleted"));
    }

    output.success(&format!("Removed {}", spec.name));
    Ok(())
}
