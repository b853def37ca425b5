//! Configuration management for crossplane-gen

pub mod config;
pub mod generation;


// Re-export main types for convenience
pub use config::Config;
pub use generation::{ControllerGenConfig, GenerateCrdOptions};
