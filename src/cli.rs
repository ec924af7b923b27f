// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "autocd")]
#[command(about = "Redeploy an application's Kubernetes resources from CI")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print the final result
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Print JSON lines instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the config file (default: discover autocd.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Kubeconfig context to use
    #[arg(long, global = true)]
    pub context: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a template autocd.yml
    Init {
        /// Do not expose the application through an Ingress
        #[arg(long)]
        private: bool,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Delete and recreate the application's resources
    Deploy,

    /// Remove the application's Deployment, Service and Ingress
    Remove,

    /// Print the desired resources as YAML without contacting the cluster
    Render,
}
