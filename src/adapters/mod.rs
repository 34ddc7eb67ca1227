// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing provider implementations.
//!
//! This module contains concrete implementations of the `Provider` trait
//! defined in the ports layer. Each adapter emits entries from one local
//! source.

#[cfg(feature = "env")]
pub mod env_var;
#[cfg(feature = "yaml")]
pub mod yaml_file;

// Re-export adapters based on feature flags
#[cfg(feature = "env")]
pub use env_var::EnvVarProvider;
#[cfg(feature = "yaml")]
pub use yaml_file::YamlFileProvider;
