// ABOUTME: Config scaffolding for new projects.
// ABOUTME: Creates autocd.yml template files.

use std::path::Path;

use crate::error::{Error, Result};

use super::{CONFIG_FILENAME, Config};

pub fn init_config(dir: &Path, publicly_accessible: bool, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let mut config = Config::template();
    config.publicly_accessible = publicly_accessible;

    let yaml = generate_template_yaml(&config);
    std::fs::write(&config_path, yaml)?;

    Ok(())
}

fn generate_template_yaml(config: &Config) -> String {
    format!(
        r#"# Namespace and name default to the CI project namespace and name.
# namespace: my-team
# name: my-app
container_port: {}
service_port: {}
termination_grace_period: {}s
publicly_accessible: {}
# subdomain: my-app.{}
domain: {}
image_pull_secret: {}
retry:
  max_attempts: {}
  initial_delay: {}s
on_failure: continue
"#,
        config.container_port,
        config.service_port,
        config.termination_grace_period.as_secs(),
        config.publicly_accessible,
        config.domain,
        config.domain,
        config.image_pull_secret.as_deref().unwrap_or("null"),
        config.retry.max_attempts,
        config.retry.initial_delay.as_secs(),
    )
}
