//! CLI command modules

pub mod crd;
