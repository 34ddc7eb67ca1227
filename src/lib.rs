// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed value inference and embedded-file directives for remote configuration.
//!
//! Configuration providers (environment variables, files, secret stores, ...)
//! hand over raw, loosely-typed strings. This crate turns each string into a
//! typed value rendered as a `key = value` line for the application
//! configuration, or, when the value is an embedded-file directive, decodes it
//! and writes the file to disk.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Value inference (`TypedValue`), file directives
//!   (`FileDirective`), provider settings and errors
//! - **Ports**: The `Provider` trait and the entry routing helper
//! - **Adapters**: Reference providers (env vars, YAML files)
//! - **Service**: The loader that runs providers and assembles the result
//!
//! # Value inference
//!
//! | raw value            | typed value                   | rendered            |
//! |----------------------|-------------------------------|---------------------|
//! | `[1, 2]`, `{..}`, `"x"` | `RawLiteral`               | verbatim            |
//! | `null` (any case)    | `Null`                        | `null`              |
//! | `TRUE`               | `Bool(true)`                  | `true`              |
//! | `42`                 | `Integer(42)`                 | `42`                |
//! | `3.5`                | `Float(3.5)`                  | `3.5`               |
//! | anything else        | `QuotedString`                | `"anything else"`   |
//!
//! # File directives
//!
//! A value shaped like `<FILE>/etc/app/cert.pem;<base64>` (optionally wrapped
//! in one pair of double quotes) is decoded into a `FileDirective`.
//!
//! # Feature Flags
//!
//! - `yaml`: Enable YAML settings and the YAML file provider (default)
//! - `env`: Enable the environment variable provider (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use remoteconf::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut config = String::new();
//! let mut files = Vec::new();
//!
//! for (key, raw) in [("app.port", "8080"), ("tls.cert", "<FILE>cert.pem;aGVsbG8=")] {
//!     dispatch_entry(key, raw, &mut |e| e.apply(&mut config), &mut |f| files.push(f))?;
//! }
//!
//! assert_eq!(config, "app.port = 8080\n");
//! assert_eq!(files[0].content(), b"hello");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;
pub mod version;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        is_file_directive, render, ConfigError, FileDirective, KeyValueEntry, ProviderSettings,
        Result, TypedValue,
    };
    pub use crate::ports::{dispatch_entry, Provider};
    pub use crate::service::{LoadReport, RemoteConfigLoader};
    pub use crate::version::sdk_version;

    // Re-export adapters based on feature flags
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarProvider;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlFileProvider;
}
