// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote configuration loader.
//!
//! This module provides [`RemoteConfigLoader`], which runs every registered
//! provider in registration order, appends each key/value entry to the
//! configuration text and writes each embedded file to disk.

use crate::domain::{FileDirective, KeyValueEntry, ProviderSettings, Result};
use crate::ports::Provider;
use std::path::PathBuf;

/// Outcome of a [`RemoteConfigLoader::load`] call.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Rendered configuration text, one `key = value` line per entry.
    pub config: String,
    /// Number of key/value entries rendered into `config`.
    pub entry_count: usize,
    /// Paths of files written to disk, in write order.
    pub written_files: Vec<PathBuf>,
    /// Decoded files that were not written because file application is off.
    pub pending_files: Vec<FileDirective>,
}

/// Runs configuration providers and assembles their output.
///
/// # Examples
///
/// ```rust
/// use remoteconf::adapters::EnvVarProvider;
/// use remoteconf::domain::ProviderSettings;
/// use remoteconf::service::RemoteConfigLoader;
/// use std::collections::HashMap;
///
/// # fn main() -> remoteconf::domain::Result<()> {
/// let mut vars = HashMap::new();
/// vars.insert("APP_DEBUG".to_string(), "true".to_string());
///
/// let loader = RemoteConfigLoader::builder()
///     .with_provider(Box::new(EnvVarProvider::with_values(vars).lowercase_keys(true)))
///     .build();
///
/// let report = loader.load(&ProviderSettings::new())?;
/// assert_eq!(report.config, "app.debug = true\n");
/// # Ok(())
/// # }
/// ```
pub struct RemoteConfigLoader {
    /// Providers, in the order they run
    providers: Vec<Box<dyn Provider>>,
    /// Whether decoded files are written to disk
    apply_files: bool,
}

impl RemoteConfigLoader {
    /// Creates a loader with no providers that writes decoded files.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            apply_files: true,
        }
    }

    /// Creates a new loader builder.
    pub fn builder() -> RemoteConfigLoaderBuilder {
        RemoteConfigLoaderBuilder::new()
    }

    /// Adds a provider; it runs after those already registered.
    pub fn add_provider(&mut self, provider: Box<dyn Provider>) {
        tracing::debug!(
            "Registered provider '{}' v{} (settings object '{}')",
            provider.name(),
            provider.version(),
            provider.config_object_name()
        );
        self.providers.push(provider);
    }

    /// Returns the names of the registered providers, in run order.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Runs every provider and assembles the configuration.
    ///
    /// Each provider receives the sub-tree of `settings` named by its
    /// [`Provider::config_object_name`]. Entries from later providers are
    /// appended after earlier ones, so a later line for the same key wins in
    /// formats where the last assignment takes effect.
    ///
    /// # Errors
    ///
    /// Stops at the first provider error, malformed directive or storage
    /// failure. Files already written stay on disk.
    pub fn load(&self, settings: &ProviderSettings) -> Result<LoadReport> {
        let mut report = LoadReport::default();

        for provider in &self.providers {
            let scoped = settings.scoped(provider.config_object_name());
            let mut entries: Vec<KeyValueEntry> = Vec::new();
            let mut files: Vec<FileDirective> = Vec::new();

            provider.load_data(&scoped, &mut |e| entries.push(e), &mut |f| files.push(f))?;

            tracing::debug!(
                "Provider '{}' returned {} entries and {} files",
                provider.name(),
                entries.len(),
                files.len()
            );

            for entry in &entries {
                entry.apply(&mut report.config);
            }
            report.entry_count += entries.len();

            for file in files {
                if self.apply_files {
                    file.apply()?;
                    tracing::info!(
                        "Wrote {} bytes to '{}'",
                        file.len(),
                        file.target_path().display()
                    );
                    report.written_files.push(file.target_path().to_path_buf());
                } else {
                    report.pending_files.push(file);
                }
            }
        }

        Ok(report)
    }
}

impl Default for RemoteConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a [`RemoteConfigLoader`].
pub struct RemoteConfigLoaderBuilder {
    providers: Vec<Box<dyn Provider>>,
    apply_files: bool,
}

impl RemoteConfigLoaderBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            apply_files: true,
        }
    }

    /// Adds a provider to the builder.
    pub fn with_provider(mut self, provider: Box<dyn Provider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Adds environment variables with a prefix as a provider.
    #[cfg(feature = "env")]
    pub fn with_env_prefix(self, prefix: impl Into<String>) -> Self {
        use crate::adapters::EnvVarProvider;
        self.with_provider(Box::new(
            EnvVarProvider::with_prefix(prefix).lowercase_keys(true),
        ))
    }

    /// Adds a YAML file as a provider.
    #[cfg(feature = "yaml")]
    pub fn with_yaml_file(self, path: impl AsRef<std::path::Path>) -> Self {
        use crate::adapters::YamlFileProvider;
        self.with_provider(Box::new(YamlFileProvider::from_file(path)))
    }

    /// Sets whether decoded files are written to disk (default `true`).
    ///
    /// When disabled, decoded files are returned in
    /// [`LoadReport::pending_files`] instead.
    pub fn apply_files(mut self, enabled: bool) -> Self {
        self.apply_files = enabled;
        self
    }

    /// Builds the loader.
    pub fn build(self) -> RemoteConfigLoader {
        let mut loader = RemoteConfigLoader::new();
        loader.apply_files = self.apply_files;
        for provider in self.providers {
            loader.add_provider(provider);
        }
        loader
    }
}

impl Default for RemoteConfigLoaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
