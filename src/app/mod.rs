//! Application-level configuration.

pub mod config;

pub use config::{AgentConfig, Mode};
