// SPDX-License-Identifier: MIT OR Apache-2.0

//! SDK version lookup.

use once_cell::sync::Lazy;

/// Version reported when the build carries no package version.
pub const UNKNOWN_VERSION: &str = "unknown";

static SDK_VERSION: Lazy<String> = Lazy::new(|| resolve_version(option_env!("CARGO_PKG_VERSION")));

fn resolve_version(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(version) if !version.is_empty() => version.to_string(),
        _ => UNKNOWN_VERSION.to_string(),
    }
}

/// Returns the SDK version (e.g. `1.1.0`).
///
/// The value is resolved once per process on first access.
///
/// # Examples
///
/// ```
/// let version = remoteconf::version::sdk_version();
/// assert!(!version.is_empty());
/// ```
pub fn sdk_version() -> &'static str {
    SDK_VERSION.as_str()
}
