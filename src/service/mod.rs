// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer composing providers into a configuration load.
//!
//! This module contains the loader that runs providers, accumulates rendered
//! key/value lines into the application configuration text and materializes
//! embedded files.

pub mod loader;

// Re-export commonly used types
pub use loader::{LoadReport, RemoteConfigLoader, RemoteConfigLoaderBuilder};
