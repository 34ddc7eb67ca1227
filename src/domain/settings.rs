// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings handed to configuration providers.
//!
//! This module provides [`ProviderSettings`], a flat map of dot-notation keys to
//! raw strings with typed accessors. Providers read their own sub-tree (named by
//! [`Provider::config_object_name`](crate::ports::Provider::config_object_name))
//! through [`ProviderSettings::scoped`].

use crate::domain::errors::{ConfigError, Result};
use std::collections::HashMap;
use std::str::FromStr;

#[cfg(feature = "yaml")]
use std::path::Path;

/// Maximum allowed size for a YAML settings file (10MB).
#[cfg(feature = "yaml")]
const MAX_SETTINGS_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Flat provider settings.
///
/// # Examples
///
/// ```
/// use remoteconf::domain::ProviderSettings;
///
/// let settings = ProviderSettings::new()
///     .with_value("env.prefix", "APP_")
///     .with_value("env.enabled", "yes");
///
/// let env = settings.scoped("env");
/// assert_eq!(env.get_str("prefix").unwrap(), "APP_");
/// assert!(env.get_bool("enabled").unwrap());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProviderSettings {
    values: HashMap<String, String>,
}

impl ProviderSettings {
    /// Creates empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates settings from an existing map.
    pub fn from_map(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Adds or replaces a single setting.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Parses a YAML document into flat settings.
    ///
    /// Nested mappings and sequences are flattened with dot notation, so
    /// `env: { prefix: APP_ }` becomes `env.prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use remoteconf::domain::ProviderSettings;
    ///
    /// let settings = ProviderSettings::from_yaml_str("yaml:\n  path: /etc/app.yaml\n").unwrap();
    /// assert_eq!(settings.get_str("yaml.path").unwrap(), "/etc/app.yaml");
    /// ```
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(Self {
            values: flatten_yaml_document(content)?,
        })
    }

    /// Reads and parses a YAML settings file.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = read_yaml_file(path.as_ref(), "settings")?;
        Self::from_yaml_str(&content)
    }

    /// Returns the settings under `prefix`, with the prefix removed.
    ///
    /// An empty prefix returns a copy of all settings.
    pub fn scoped(&self, prefix: &str) -> Self {
        if prefix.is_empty() {
            return self.clone();
        }
        let head = format!("{}.", prefix);
        let values = self
            .values
            .iter()
            .filter_map(|(k, v)| k.strip_prefix(&head).map(|rest| (rest.to_string(), v.clone())))
            .collect();
        Self { values }
    }

    /// Returns `true` if the key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns the number of settings.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no settings.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the raw string for `key`.
    pub fn get_str(&self, key: &str) -> Result<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::SettingNotFound {
                key: key.to_string(),
            })
    }

    /// Returns the raw string for `key`, or `default` when absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.values.get(key).map(String::as_str).unwrap_or(default)
    }

    /// Converts the setting to a boolean.
    ///
    /// Recognizes the following values (case-insensitive):
    /// - `true`: "true", "yes", "1", "on"
    /// - `false`: "false", "no", "0", "off"
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        let raw = self.get_str(key)?;
        match raw.to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(true),
            "false" | "no" | "0" | "off" => Ok(false),
            _ => raw
                .parse::<bool>()
                .map_err(|e| ConfigError::from_parse_bool_error(key.to_string(), e)),
        }
    }

    /// Converts the setting to an `i64`.
    pub fn get_i64(&self, key: &str) -> Result<i64> {
        self.get_str(key)?
            .parse::<i64>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the setting to an `f64`.
    pub fn get_f64(&self, key: &str) -> Result<f64> {
        self.get_str(key)?
            .parse::<f64>()
            .map_err(|e| ConfigError::from_parse_float_error(key.to_string(), e))
    }

    /// Parses the setting into any type that implements `FromStr`.
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.get_str(key)?
            .parse::<T>()
            .map_err(|e| ConfigError::TypeConversionError {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }
}

/// Parses a YAML document and flattens it into dot-notation keys.
#[cfg(feature = "yaml")]
pub(crate) fn flatten_yaml_document(content: &str) -> Result<HashMap<String, String>> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: format!("Failed to parse YAML: {}", e),
            source: Some(Box::new(e)),
        })?;

    let mut result = HashMap::new();
    flatten_yaml(&value, "", &mut result);
    Ok(result)
}

/// Reads a YAML file after checking its size.
#[cfg(feature = "yaml")]
pub(crate) fn read_yaml_file(path: &Path, source_name: &str) -> Result<String> {
    let metadata = std::fs::metadata(path).map_err(|e| ConfigError::SourceError {
        source_name: source_name.to_string(),
        message: format!("Failed to read file metadata: {}", path.display()),
        source: Some(Box::new(e)),
    })?;

    if metadata.len() > MAX_SETTINGS_FILE_SIZE {
        return Err(ConfigError::SourceError {
            source_name: source_name.to_string(),
            message: format!(
                "Configuration file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_SETTINGS_FILE_SIZE
            ),
            source: None,
        });
    }

    std::fs::read_to_string(path).map_err(|e| ConfigError::SourceError {
        source_name: source_name.to_string(),
        message: format!("Failed to read configuration file: {}", path.display()),
        source: Some(Box::new(e)),
    })
}

#[cfg(feature = "yaml")]
fn flatten_yaml(value: &serde_yaml::Value, prefix: &str, result: &mut HashMap<String, String>) {
    match value {
        serde_yaml::Value::Mapping(map) => {
            for (key, val) in map {
                let key_str = match key {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    _ => continue,
                };
                let new_prefix = if prefix.is_empty() {
                    key_str
                } else {
                    format!("{}.{}", prefix, key_str)
                };
                flatten_yaml(val, &new_prefix, result);
            }
        }
        serde_yaml::Value::Sequence(seq) => {
            for (i, val) in seq.iter().enumerate() {
                let new_prefix = format!("{}.{}", prefix, i);
                flatten_yaml(val, &new_prefix, result);
            }
        }
        serde_yaml::Value::String(s) => {
            result.insert(prefix.to_string(), s.clone());
        }
        serde_yaml::Value::Number(n) => {
            result.insert(prefix.to_string(), n.to_string());
        }
        serde_yaml::Value::Bool(b) => {
            result.insert(prefix.to_string(), b.to_string());
        }
        serde_yaml::Value::Null => {
            result.insert(prefix.to_string(), "null".to_string());
        }
        serde_yaml::Value::Tagged(tagged) => flatten_yaml(&tagged.value, prefix, result),
    }
}
