// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration provider trait definition.
//!
//! This module defines the `Provider` trait, the port through which remote
//! configuration entries reach the value interpretation layer. A provider only
//! discovers raw `(key, value)` pairs; the callbacks receive them already
//! interpreted as [`KeyValueEntry`] or [`FileDirective`].

use crate::domain::{is_file_directive, FileDirective, KeyValueEntry, ProviderSettings, Result};

/// Callback receiving key/value entries.
pub type KeyValueCallback<'a> = dyn FnMut(KeyValueEntry) + 'a;

/// Callback receiving decoded file directives.
pub type FileCallback<'a> = dyn FnMut(FileDirective) + 'a;

/// A source of remote configuration entries.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a loader can be shared across
/// threads.
///
/// # Examples
///
/// ```rust
/// use remoteconf::ports::{dispatch_entry, FileCallback, KeyValueCallback, Provider};
/// use remoteconf::domain::{ProviderSettings, Result};
///
/// struct StaticProvider;
///
/// impl Provider for StaticProvider {
///     fn name(&self) -> &str {
///         "static"
///     }
///
///     fn version(&self) -> &str {
///         "1.0.0"
///     }
///
///     fn config_object_name(&self) -> &str {
///         "static"
///     }
///
///     fn load_data(
///         &self,
///         _settings: &ProviderSettings,
///         on_key_value: &mut KeyValueCallback<'_>,
///         on_file: &mut FileCallback<'_>,
///     ) -> Result<()> {
///         dispatch_entry("app.port", "8080", on_key_value, on_file)
///     }
/// }
///
/// let mut config = String::new();
/// StaticProvider
///     .load_data(
///         &ProviderSettings::new(),
///         &mut |entry| entry.apply(&mut config),
///         &mut |_file| {},
///     )
///     .unwrap();
/// assert_eq!(config, "app.port = 8080\n");
/// ```
pub trait Provider: Send + Sync {
    /// Returns the provider name, used in logs and error messages.
    fn name(&self) -> &str;

    /// Returns the provider version.
    fn version(&self) -> &str;

    /// Returns the name of the settings sub-tree this provider reads.
    ///
    /// A loader passes `settings.scoped(config_object_name())` to
    /// [`Provider::load_data`].
    fn config_object_name(&self) -> &str;

    /// Retrieves entries from the underlying source.
    ///
    /// Every discovered entry must be handed to exactly one of the callbacks,
    /// usually through [`dispatch_entry`].
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or an entry is a
    /// malformed file directive.
    fn load_data(
        &self,
        settings: &ProviderSettings,
        on_key_value: &mut KeyValueCallback<'_>,
        on_file: &mut FileCallback<'_>,
    ) -> Result<()>;
}

/// Routes one raw entry to the matching callback.
///
/// File directives are detected first and decoded into a [`FileDirective`];
/// every other value goes through type inference into a [`KeyValueEntry`].
///
/// # Errors
///
/// Returns [`ConfigError::MalformedDirective`](crate::domain::ConfigError::MalformedDirective)
/// when the value looks like a directive but cannot be decoded.
pub fn dispatch_entry(
    key: &str,
    raw_value: &str,
    on_key_value: &mut KeyValueCallback<'_>,
    on_file: &mut FileCallback<'_>,
) -> Result<()> {
    if is_file_directive(raw_value) {
        on_file(FileDirective::parse(key, raw_value)?);
    } else {
        on_key_value(KeyValueEntry::new(key, raw_value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConfigError, TypedValue};

    struct FixedProvider {
        entries: Vec<(&'static str, &'static str)>,
    }

    impl Provider for FixedProvider {
        fn name(&self) -> &str {
            "fixed"
        }

        fn version(&self) -> &str {
            "0.1.0"
        }

        fn config_object_name(&self) -> &str {
            "fixed"
        }

        fn load_data(
            &self,
            _settings: &ProviderSettings,
            on_key_value: &mut KeyValueCallback<'_>,
            on_file: &mut FileCallback<'_>,
        ) -> Result<()> {
            for (key, value) in &self.entries {
                dispatch_entry(key, value, on_key_value, on_file)?;
            }
            Ok(())
        }
    }

    #[test]
    fn test_dispatch_key_value() {
        let mut entries = Vec::new();
        let mut files = Vec::new();
        dispatch_entry("a", "42", &mut |e| entries.push(e), &mut |f| files.push(f)).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].value(), &TypedValue::Integer(42));
        assert!(files.is_empty());
    }

    #[test]
    fn test_dispatch_file() {
        let mut entries = Vec::new();
        let mut files = Vec::new();
        dispatch_entry(
            "tls.cert",
            "\"<FILE>cert.pem;aGVsbG8=\"",
            &mut |e| entries.push(e),
            &mut |f| files.push(f),
        )
        .unwrap();

        assert!(entries.is_empty());
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].content(), b"hello");
    }

    #[test]
    fn test_dispatch_malformed_file() {
        let err = dispatch_entry("tls.cert", "<FILE>nosemicolon", &mut |_| {}, &mut |_| {})
            .unwrap_err();
        assert!(matches!(err, ConfigError::MalformedDirective { .. }));
    }

    #[test]
    fn test_provider_load_data() {
        let provider = FixedProvider {
            entries: vec![("a", "true"), ("b", "<FILE>b.txt;Yg=="), ("c", "text")],
        };
        let mut config = String::new();
        let mut files = Vec::new();
        provider
            .load_data(
                &ProviderSettings::new(),
                &mut |e| e.apply(&mut config),
                &mut |f| files.push(f),
            )
            .unwrap();

        assert_eq!(config, "a = true\nc = \"text\"\n");
        assert_eq!(files.len(), 1);
        assert_eq!(provider.name(), "fixed");
        assert_eq!(provider.version(), "0.1.0");
    }

    #[test]
    fn test_provider_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn Provider>();
    }
}
