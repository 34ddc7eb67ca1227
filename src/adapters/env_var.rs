// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable configuration provider.
//!
//! This module provides a provider that emits configuration entries from
//! environment variables, routing embedded-file directives to the file callback.

use crate::domain::{ProviderSettings, Result};
use crate::ports::{dispatch_entry, FileCallback, KeyValueCallback, Provider};
use std::collections::{BTreeMap, HashMap};
use std::env;

/// Maximum length for environment variable keys (prevents DoS)
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values (prevents DoS)
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Configuration provider backed by environment variables.
///
/// Variables can be filtered by prefix (the prefix is stripped from the key) and
/// their names transformed by lowercasing and replacing underscores with dots.
/// Entries are emitted in lexicographic key order.
///
/// The settings sub-tree `env` may override the builder values with the keys
/// `prefix`, `lowercase_keys` and `replace_underscores`.
///
/// # Examples
///
/// ```rust
/// use remoteconf::adapters::EnvVarProvider;
/// use remoteconf::domain::ProviderSettings;
/// use remoteconf::ports::Provider;
/// use std::collections::HashMap;
///
/// let mut values = HashMap::new();
/// values.insert("APP_SERVER_PORT".to_string(), "8080".to_string());
///
/// let provider = EnvVarProvider::with_values(values)
///     .prefix("APP_")
///     .lowercase_keys(true);
///
/// let mut config = String::new();
/// provider
///     .load_data(&ProviderSettings::new(), &mut |e| e.apply(&mut config), &mut |_| {})
///     .unwrap();
/// assert_eq!(config, "server.port = 8080\n");
/// ```
#[derive(Debug, Clone)]
pub struct EnvVarProvider {
    /// Optional prefix to filter environment variables
    prefix: Option<String>,
    /// Whether to convert keys to lowercase
    lowercase_keys: bool,
    /// Whether to replace underscores with dots
    replace_underscores: bool,
    /// Injected variables used instead of the process environment
    values: Option<HashMap<String, String>>,
}

impl EnvVarProvider {
    /// Creates a provider reading the whole process environment.
    pub fn new() -> Self {
        Self {
            prefix: None,
            lowercase_keys: false,
            replace_underscores: true,
            values: None,
        }
    }

    /// Creates a provider reading only variables starting with `prefix`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::new().prefix(prefix)
    }

    /// Creates a provider over a fixed set of variables instead of the
    /// process environment.
    ///
    /// **Note**: This is primarily intended for testing.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            values: Some(values),
            ..Self::new()
        }
    }

    /// Sets the prefix used to filter variables.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets whether to convert keys to lowercase.
    pub fn lowercase_keys(mut self, enabled: bool) -> Self {
        self.lowercase_keys = enabled;
        self
    }

    /// Sets whether to replace underscores with dots in keys.
    pub fn replace_underscores(mut self, enabled: bool) -> Self {
        self.replace_underscores = enabled;
        self
    }

    /// Applies overrides from the provider settings.
    fn configured(&self, settings: &ProviderSettings) -> Result<Self> {
        let mut provider = self.clone();
        if settings.contains("prefix") {
            provider.prefix = Some(settings.get_str("prefix")?.to_string());
        }
        if settings.contains("lowercase_keys") {
            provider.lowercase_keys = settings.get_bool("lowercase_keys")?;
        }
        if settings.contains("replace_underscores") {
            provider.replace_underscores = settings.get_bool("replace_underscores")?;
        }
        Ok(provider)
    }

    /// Collects the variables to emit, keyed by their transformed name.
    fn collect(&self) -> BTreeMap<String, String> {
        let vars: Vec<(String, String)> = match &self.values {
            Some(values) => values.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            None => env::vars_os()
                .filter_map(|(k, v)| match (k.into_string(), v.into_string()) {
                    (Ok(k), Ok(v)) => Some((k, v)),
                    (k, _) => {
                        tracing::debug!("Skipping non UTF-8 environment variable: {:?}", k);
                        None
                    }
                })
                .collect(),
        };

        let mut result = BTreeMap::new();
        for (key, value) in vars {
            if key.len() > MAX_ENV_KEY_LEN || value.len() > MAX_ENV_VALUE_LEN {
                tracing::warn!(
                    "Skipping oversized environment variable: key_len={}, value_len={} (max key={}, max value={})",
                    key.len(),
                    value.len(),
                    MAX_ENV_KEY_LEN,
                    MAX_ENV_VALUE_LEN
                );
                continue;
            }

            let key = match &self.prefix {
                Some(prefix) => match key.strip_prefix(prefix.as_str()) {
                    Some(stripped) => stripped.to_string(),
                    None => continue,
                },
                None => key,
            };

            let mut transformed_key = key;
            if self.lowercase_keys {
                transformed_key = transformed_key.to_lowercase();
            }
            if self.replace_underscores {
                transformed_key = transformed_key.replace('_', ".");
            }

            result.insert(transformed_key, value);
        }

        tracing::debug!(
            "Collected {} environment variables (prefix={:?}, lowercase={}, replace_underscores={})",
            result.len(),
            self.prefix,
            self.lowercase_keys,
            self.replace_underscores
        );

        result
    }
}

impl Default for EnvVarProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for EnvVarProvider {
    fn name(&self) -> &str {
        "env"
    }

    fn version(&self) -> &str {
        crate::version::sdk_version()
    }

    fn config_object_name(&self) -> &str {
        "env"
    }

    fn load_data(
        &self,
        settings: &ProviderSettings,
        on_key_value: &mut KeyValueCallback<'_>,
        on_file: &mut FileCallback<'_>,
    ) -> Result<()> {
        let provider = self.configured(settings)?;
        for (key, value) in provider.collect() {
            dispatch_entry(&key, &value, on_key_value, on_file)?;
        }
        Ok(())
    }
}
