// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core value interpretation logic and types.
//!
//! This module turns raw provider strings into typed configuration values and
//! decodes embedded-file directives. It is independent of any provider and
//! performs no logging.

pub mod directive;
pub mod errors;
pub mod file_directive;
pub mod key_value;
pub mod settings;
pub mod typed_value;

// Re-export commonly used types
pub use directive::{is_file_directive, strip_outer_quotes, FILE_MAGIC_ID};
pub use errors::{ConfigError, Result};
pub use file_directive::FileDirective;
pub use key_value::KeyValueEntry;
pub use settings::ProviderSettings;
pub use typed_value::{render, TypedValue};
