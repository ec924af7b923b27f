// ABOUTME: Configuration types and parsing for autocd.yml.
// ABOUTME: Merges the optional file with CI identity into a validated AppSpec.

mod app_spec;
mod ci;
mod deserialize;
mod failure_policy;
mod init;
mod retry;

pub use app_spec::AppSpec;
pub use ci::{CI_PROJECT_NAME, CI_PROJECT_NAMESPACE, CI_REGISTRY, CiEnvironment};
pub use failure_policy::FailurePolicy;
pub use init::init_config;
pub use retry::RetryConfig;

use crate::error::{Error, Result};
use crate::types::ResourceName;
use deserialize::{deserialize_port, deserialize_resource_name_option};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "autocd.yml";
pub const CONFIG_FILENAME_ALT: &str = "autocd.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".autocd/config.yml";

pub const DEFAULT_DOMAIN: &str = "cloudiety.de";
pub const DEFAULT_PULL_SECRET: &str = "gitlab-bot";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Overrides the namespace derived from the CI project namespace.
    #[serde(default, deserialize_with = "deserialize_resource_name_option")]
    pub namespace: Option<ResourceName>,

    /// Overrides the application name derived from the CI project name.
    #[serde(default, deserialize_with = "deserialize_resource_name_option")]
    pub name: Option<ResourceName>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default = "default_container_port", deserialize_with = "deserialize_port")]
    pub container_port: u16,

    #[serde(default = "default_service_port", deserialize_with = "deserialize_port")]
    pub service_port: u16,

    #[serde(default = "default_grace_period", with = "humantime_serde")]
    pub termination_grace_period: Duration,

    #[serde(default = "default_publicly_accessible")]
    pub publicly_accessible: bool,

    #[serde(default)]
    pub subdomain: Option<String>,

    #[serde(default = "default_domain")]
    pub domain: String,

    /// `null` disables the image pull secret reference.
    #[serde(default = "default_pull_secret")]
    pub image_pull_secret: Option<String>,

    #[serde(default)]
    pub retry: RetryConfig,

    #[serde(default)]
    pub on_failure: FailurePolicy,
}

fn default_container_port() -> u16 {
    8080
}

fn default_service_port() -> u16 {
    80
}

fn default_grace_period() -> Duration {
    Duration::from_secs(60)
}

fn default_publicly_accessible() -> bool {
    true
}

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}

fn default_pull_secret() -> Option<String> {
    Some(DEFAULT_PULL_SECRET.to_string())
}

impl Default for Config {
    fn default() -> Self {
        Config {
            namespace: None,
            name: None,
            image: None,
            container_port: default_container_port(),
            service_port: default_service_port(),
            termination_grace_period: default_grace_period(),
            publicly_accessible: default_publicly_accessible(),
            subdomain: None,
            domain: default_domain(),
            image_pull_secret: default_pull_secret(),
            retry: RetryConfig::default(),
            on_failure: FailurePolicy::default(),
        }
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document means "all defaults".
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Look for a config file in `dir`, falling back to defaults when none exists.
    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config");
                return Self::load(path);
            }
        }

        tracing::debug!(dir = %dir.display(), "no config file found, using defaults");
        Ok(Config::default())
    }

    /// Combine this config with the pipeline identity into a validated spec.
    pub fn resolve(&self, ci: &CiEnvironment) -> Result<AppSpec> {
        let namespace = match &self.namespace {
            Some(ns) => ns.clone(),
            None => ResourceName::normalize(ci.namespace()).map_err(|e| {
                Error::InvalidConfig(format!(
                    "cannot derive namespace from `{}`: {e} (set `namespace` in {CONFIG_FILENAME})",
                    ci.namespace()
                ))
            })?,
        };

        let name = match &self.name {
            Some(name) => name.clone(),
            None => ResourceName::normalize(ci.project_name()).map_err(|e| {
                Error::InvalidConfig(format!(
                    "cannot derive application name from `{}`: {e} (set `name` in {CONFIG_FILENAME})",
                    ci.project_name()
                ))
            })?,
        };

        let image = self
            .image
            .clone()
            .unwrap_or_else(|| ci.image_path())
            .trim()
            .to_string();
        if image.is_empty() {
            return Err(Error::InvalidConfig("image cannot be empty".to_string()));
        }

        let host = self
            .subdomain
            .clone()
            .unwrap_or_else(|| ci.subdomain(&self.domain))
            .trim()
            .to_ascii_lowercase();
        if self.publicly_accessible && host.is_empty() {
            return Err(Error::InvalidConfig(
                "publicly accessible applications need a subdomain".to_string(),
            ));
        }

        Ok(AppSpec {
            namespace,
            name,
            image,
            container_port: self.container_port,
            service_port: self.service_port,
            termination_grace_period: self.termination_grace_period,
            host,
            publicly_accessible: self.publicly_accessible,
        })
    }

    pub fn template() -> Self {
        Config::default()
    }
}
