// ABOUTME: Pipeline identity captured from CI environment variables.
// ABOUTME: Read once at the process edge; core logic only sees this struct.

/// Registry host; its absence marks a local (non-pipeline) run.
pub const CI_REGISTRY: &str = "CI_REGISTRY";
pub const CI_PROJECT_NAME: &str = "CI_PROJECT_NAME";
pub const CI_PROJECT_NAMESPACE: &str = "CI_PROJECT_NAMESPACE";

const LOCAL_NAMESPACE: &str = "local-default";
const LOCAL_NAME: &str = "local-default-name";
const LOCAL_SUBDOMAIN: &str = "local-test";
const FALLBACK: &str = "default";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CiEnvironment {
    pub registry: Option<String>,
    pub project_name: Option<String>,
    pub project_namespace: Option<String>,
}

impl CiEnvironment {
    /// Snapshot the CI variables from the process environment.
    /// Empty values are treated as unset.
    pub fn from_env() -> Self {
        fn var(key: &str) -> Option<String> {
            std::env::var(key).ok().filter(|v| !v.trim().is_empty())
        }

        CiEnvironment {
            registry: var(CI_REGISTRY),
            project_name: var(CI_PROJECT_NAME),
            project_namespace: var(CI_PROJECT_NAMESPACE),
        }
    }

    /// Identity of a run outside any pipeline.
    pub fn local() -> Self {
        CiEnvironment::default()
    }

    pub fn is_local(&self) -> bool {
        self.registry.is_none()
    }

    /// Raw project namespace (may contain `/` group separators).
    pub fn namespace(&self) -> &str {
        if self.is_local() {
            return LOCAL_NAMESPACE;
        }
        self.project_namespace.as_deref().unwrap_or(FALLBACK)
    }

    pub fn project_name(&self) -> &str {
        if self.is_local() {
            return LOCAL_NAME;
        }
        self.project_name.as_deref().unwrap_or(FALLBACK)
    }

    /// Public host for the application: `{project}-{namespace}.{domain}`,
    /// with group separators in the namespace flattened to `--`.
    pub fn subdomain(&self, domain: &str) -> String {
        let domain = domain.trim_start_matches('.');
        if self.is_local() {
            return format!("{LOCAL_SUBDOMAIN}.{domain}");
        }

        format!(
            "{}-{}.{}",
            self.project_name(),
            self.namespace().replace('/', "--"),
            domain
        )
        .to_ascii_lowercase()
    }

    /// Image path the build step pushes to: `{registry}/{namespace}/{project}`.
    pub fn image_path(&self) -> String {
        format!(
            "{}/{}/{}",
            self.registry.as_deref().unwrap_or(FALLBACK),
            self.project_namespace.as_deref().unwrap_or(FALLBACK),
            self.project_name.as_deref().unwrap_or(FALLBACK)
        )
    }
}
