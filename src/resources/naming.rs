// ABOUTME: Pluggable naming scheme for the objects derived from an application.
// ABOUTME: GitlabNaming reproduces the `{namespace}-{app}-{suffix}` convention.

use crate::config::DEFAULT_PULL_SECRET;
use crate::types::ResourceName;

/// Label key the Service selects on.
pub const APP_LABEL: &str = "k8s-app";

/// Secondary pod label carrying the bare application name.
pub const NAME_LABEL: &str = "name";

/// Every name and label value the builder needs for one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNames {
    pub namespace: String,
    pub app: String,
    pub deployment: String,
    pub service: String,
    pub ingress: String,
    /// Value of the `k8s-app` selector label.
    pub app_label: String,
    pub container: String,
    pub pull_secret: Option<String>,
}

/// Derives object names from `(namespace, application)`.
///
/// Implementations must be pure: equal inputs yield equal names.
pub trait NamingStrategy: Send + Sync {
    fn names(&self, namespace: &ResourceName, app: &ResourceName) -> ResourceNames;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitlabNaming {
    pull_secret: Option<String>,
}

impl GitlabNaming {
    pub fn new(pull_secret: Option<String>) -> Self {
        GitlabNaming { pull_secret }
    }

    pub fn without_pull_secret() -> Self {
        GitlabNaming { pull_secret: None }
    }
}

impl Default for GitlabNaming {
    fn default() -> Self {
        GitlabNaming {
            pull_secret: Some(DEFAULT_PULL_SECRET.to_string()),
        }
    }
}

impl NamingStrategy for GitlabNaming {
    fn names(&self, namespace: &ResourceName, app: &ResourceName) -> ResourceNames {
        let app_label = format!("{namespace}-{app}");
        ResourceNames {
            namespace: namespace.to_string(),
            app: app.to_string(),
            // One deployment per namespace, named after it.
            deployment: namespace.to_string(),
            service: format!("{app_label}-service"),
            ingress: format!("{app_label}-ingress"),
            container: format!("{app}-c"),
            app_label,
            pull_secret: self.pull_secret.clone(),
        }
    }
}

impl<N: NamingStrategy + ?Sized> NamingStrategy for Box<N> {
    fn names(&self, namespace: &ResourceName, app: &ResourceName) -> ResourceNames {
        (**self).names(namespace, app)
    }
}
