// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that configuration
//! providers implement. Concrete providers live in the adapters layer.

pub mod provider;

// Re-export commonly used types
pub use provider::{dispatch_entry, FileCallback, KeyValueCallback, Provider};
