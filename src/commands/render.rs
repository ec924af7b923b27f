// ABOUTME: Render command implementation.
// ABOUTME: Prints the desired resource set without contacting the cluster.

use autocd::config::{AppSpec, Config};
use autocd::error::Result;
use autocd::resources::{GitlabNaming, ResourceBuilder};

pub fn render(config: &Config, spec: &AppSpec) -> Result<()> {
    let builder =
        ResourceBuilder::with_naming(GitlabNaming::new(config.image_pull_secret.clone()));
    let yaml = builder.build(spec).to_yaml()?;
    print!("{yaml}");
    Ok(())
}
