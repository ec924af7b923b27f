// ABOUTME: Library root for autocd - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod cluster;
pub mod config;
pub mod deploy;
pub mod error;
pub mod output;
pub mod resources;
pub mod types;
