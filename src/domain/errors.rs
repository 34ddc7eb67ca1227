// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the remote configuration crate.
//!
//! This module defines the error types that can occur while interpreting raw
//! configuration values, decoding embedded files and running providers.
//! All errors use `thiserror` for proper error handling and conversion.

use std::num::{ParseFloatError, ParseIntError};
use std::path::Path;
use std::str::ParseBoolError;
use thiserror::Error;

/// The main error type for remote configuration operations.
///
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use remoteconf::domain::errors::ConfigError;
///
/// fn decode() -> Result<Vec<u8>, ConfigError> {
///     Err(ConfigError::MalformedDirective {
///         key: "tls.cert".to_string(),
///         message: "missing content segment".to_string(),
///     })
/// }
///
/// assert!(decode().unwrap_err().to_string().contains("tls.cert"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A raw value could not be interpreted at all (no value was supplied).
    #[error("Malformed configuration value: {message}")]
    MalformedValue {
        /// The error message
        message: String,
    },

    /// A value recognized as a file directive could not be decoded.
    #[error("Malformed file directive for key '{key}': {message}")]
    MalformedDirective {
        /// The configuration key carrying the directive
        key: String,
        /// The underlying decode message
        message: String,
    },

    /// Writing decoded file content to its target path failed.
    #[error("Failed to store file '{path}': {message}")]
    Storage {
        /// The target path
        path: String,
        /// The error message
        message: String,
        /// The underlying I/O error, if any
        #[source]
        source: Option<std::io::Error>,
    },

    /// The requested provider setting was not found.
    #[error("Provider setting not found: {key}")]
    SettingNotFound {
        /// The key that was not found
        key: String,
    },

    /// Failed to convert a provider setting to the requested type.
    #[error("Failed to convert setting '{key}' to type {target_type}: {source}")]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An error occurred in a configuration provider.
    #[error("Configuration provider '{source_name}' error: {message}")]
    SourceError {
        /// The name of the provider that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse a settings document.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConfigError {
    /// Creates a `MalformedDirective` error for the given key.
    pub fn malformed_directive(key: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::MalformedDirective {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Creates a `Storage` error from an I/O failure on `path`.
    pub fn storage(path: &Path, err: std::io::Error) -> Self {
        ConfigError::Storage {
            path: path.display().to_string(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseFloatError.
    pub fn from_parse_float_error(key: String, err: ParseFloatError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "float".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseBoolError.
    pub fn from_parse_bool_error(key: String, err: ParseBoolError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "boolean".to_string(),
            source: Box::new(err),
        }
    }
}

/// A specialized Result type for remote configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
