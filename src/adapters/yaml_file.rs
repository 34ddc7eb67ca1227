// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML file configuration provider.
//!
//! This module provides a provider that emits configuration entries from a local
//! YAML document. Nested structures are flattened with dot notation.

use crate::domain::settings::{flatten_yaml_document, read_yaml_file};
use crate::domain::{ConfigError, ProviderSettings, Result};
use crate::ports::{dispatch_entry, FileCallback, KeyValueCallback, Provider};
use directories::ProjectDirs;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Where the provider reads its YAML document from.
#[derive(Debug, Clone)]
enum YamlOrigin {
    /// Path given by the `yaml.path` setting
    Settings,
    /// A fixed file path
    File(PathBuf),
    /// An in-memory document
    Inline(String),
}

/// Configuration provider backed by a YAML document.
///
/// A YAML structure like:
///
/// ```yaml
/// database:
///   host: localhost
///   port: 5432
/// ```
///
/// is emitted as `database.host` and `database.port`, in lexicographic key
/// order. String values starting with `<FILE>` are routed to the file callback.
///
/// # Examples
///
/// ```rust
/// use remoteconf::adapters::YamlFileProvider;
/// use remoteconf::domain::ProviderSettings;
/// use remoteconf::ports::Provider;
///
/// let provider = YamlFileProvider::from_str("database:\n  host: localhost\n  port: 5432\n");
///
/// let mut config = String::new();
/// provider
///     .load_data(&ProviderSettings::new(), &mut |e| e.apply(&mut config), &mut |_| {})
///     .unwrap();
/// assert_eq!(config, "database.host = \"localhost\"\ndatabase.port = 5432\n");
/// ```
#[derive(Debug, Clone)]
pub struct YamlFileProvider {
    origin: YamlOrigin,
}

impl YamlFileProvider {
    /// Creates a provider that reads the file named by the `path` setting.
    pub fn new() -> Self {
        Self {
            origin: YamlOrigin::Settings,
        }
    }

    /// Creates a provider reading a specific file.
    ///
    /// The file is read on every [`Provider::load_data`] call.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        Self {
            origin: YamlOrigin::File(path.as_ref().to_path_buf()),
        }
    }

    /// Creates a provider over an in-memory YAML document.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: impl Into<String>) -> Self {
        Self {
            origin: YamlOrigin::Inline(content.into()),
        }
    }

    /// Creates a provider reading `remote.yaml` from the OS-appropriate
    /// configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
                source_name: "yaml-file".to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Ok(Self::from_file(proj_dirs.config_dir().join("remote.yaml")))
    }

    /// Returns the configured file path, if the document comes from a fixed file.
    pub fn file_path(&self) -> Option<&Path> {
        match &self.origin {
            YamlOrigin::File(path) => Some(path),
            _ => None,
        }
    }

    /// Reads and flattens the document.
    fn read(&self, settings: &ProviderSettings) -> Result<BTreeMap<String, String>> {
        let content = match &self.origin {
            YamlOrigin::Inline(content) => content.clone(),
            YamlOrigin::File(path) => read_yaml_file(path, "yaml-file")?,
            YamlOrigin::Settings => {
                let path = settings.get_str("path").map_err(|e| ConfigError::SourceError {
                    source_name: "yaml-file".to_string(),
                    message: "No YAML document configured".to_string(),
                    source: Some(Box::new(e)),
                })?;
                read_yaml_file(Path::new(path), "yaml-file")?
            }
        };

        let values = flatten_yaml_document(&content)?;
        tracing::debug!("Read {} entries from YAML document", values.len());
        Ok(values.into_iter().collect())
    }
}

impl Default for YamlFileProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for YamlFileProvider {
    fn name(&self) -> &str {
        "yaml-file"
    }

    fn version(&self) -> &str {
        crate::version::sdk_version()
    }

    fn config_object_name(&self) -> &str {
        "yaml"
    }

    fn load_data(
        &self,
        settings: &ProviderSettings,
        on_key_value: &mut KeyValueCallback<'_>,
        on_file: &mut FileCallback<'_>,
    ) -> Result<()> {
        for (key, value) in self.read(settings)? {
            dispatch_entry(&key, &value, on_key_value, on_file)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FileDirective, KeyValueEntry, TypedValue};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn load(
        provider: &YamlFileProvider,
        settings: &ProviderSettings,
    ) -> Result<(Vec<KeyValueEntry>, Vec<FileDirective>)> {
        let mut entries = Vec::new();
        let mut files = Vec::new();
        provider.load_data(settings, &mut |e| entries.push(e), &mut |f| files.push(f))?;
        Ok((entries, files))
    }

    #[test]
    fn test_yaml_provider_identity() {
        let provider = YamlFileProvider::new();
        assert_eq!(provider.name(), "yaml-file");
        assert_eq!(provider.config_object_name(), "yaml");
        assert!(provider.file_path().is_none());
    }

    #[test]
    fn test_yaml_provider_inline_types() {
        let yaml = r#"
app:
  name: demo
  debug: true
  ratio: 0.75
  workers: 4
  nothing: ~
"#;
        let provider = YamlFileProvider::from_str(yaml);
        let (entries, files) = load(&provider, &ProviderSettings::new()).unwrap();
        assert!(files.is_empty());

        let by_key: Vec<(&str, &TypedValue)> =
            entries.iter().map(|e| (e.key(), e.value())).collect();
        assert_eq!(
            by_key,
            vec![
                ("app.debug", &TypedValue::Bool(true)),
                ("app.name", &TypedValue::QuotedString("\"demo\"".to_string())),
                ("app.nothing", &TypedValue::Null),
                ("app.ratio", &TypedValue::Float(0.75)),
                ("app.workers", &TypedValue::Integer(4)),
            ]
        );
    }

    #[test]
    fn test_yaml_provider_routes_files() {
        let yaml = "tls:\n  cert: \"<FILE>/tmp/cert.pem;aGVsbG8=\"\n  enabled: yes\n";
        let provider = YamlFileProvider::from_str(yaml);
        let (entries, files) = load(&provider, &ProviderSettings::new()).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].target_path(), Path::new("/tmp/cert.pem"));
    }

    #[test]
    fn test_yaml_provider_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "server:\n  port: 9000").unwrap();

        let provider = YamlFileProvider::from_file(file.path());
        assert_eq!(provider.file_path(), Some(file.path()));

        let (entries, _) = load(&provider, &ProviderSettings::new()).unwrap();
        assert_eq!(entries[0].render(), "server.port = 9000\n");
    }

    #[test]
    fn test_yaml_provider_path_from_settings() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "a: 1").unwrap();

        let settings =
            ProviderSettings::new().with_value("path", file.path().to_string_lossy().to_string());
        let (entries, _) = load(&YamlFileProvider::new(), &settings).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_yaml_provider_missing_path_setting() {
        let err = load(&YamlFileProvider::new(), &ProviderSettings::new()).unwrap_err();
        assert!(matches!(err, ConfigError::SourceError { .. }));
    }

    #[test]
    fn test_yaml_provider_missing_file() {
        let provider = YamlFileProvider::from_file("/nonexistent/remote.yaml");
        let err = load(&provider, &ProviderSettings::new()).unwrap_err();
        assert!(matches!(err, ConfigError::SourceError { .. }));
    }

    #[test]
    fn test_yaml_provider_invalid_yaml() {
        let provider = YamlFileProvider::from_str("key: [unclosed");
        let err = load(&provider, &ProviderSettings::new()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
