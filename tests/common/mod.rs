// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities and mock providers shared by integration tests.

use remoteconf::domain::{ConfigError, ProviderSettings, Result};
use remoteconf::ports::{dispatch_entry, FileCallback, KeyValueCallback, Provider};

/// A provider emitting a fixed list of raw entries.
///
/// This allows tests to feed arbitrary raw values through the loader.
#[derive(Debug, Clone)]
pub struct MockProvider {
    name: String,
    object_name: String,
    entries: Vec<(String, String)>,
    should_fail: bool,
}

#[allow(dead_code)]
impl MockProvider {
    /// Creates a new mock provider reading the settings object `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            object_name: name.clone(),
            name,
            entries: Vec::new(),
            should_fail: false,
        }
    }

    /// Adds a raw entry to the mock provider.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Sets whether loading should fail.
    pub fn with_failure(mut self, should_fail: bool) -> Self {
        self.should_fail = should_fail;
        self
    }
}

impl Provider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        "0.0.0-test"
    }

    fn config_object_name(&self) -> &str {
        &self.object_name
    }

    fn load_data(
        &self,
        _settings: &ProviderSettings,
        on_key_value: &mut KeyValueCallback<'_>,
        on_file: &mut FileCallback<'_>,
    ) -> Result<()> {
        if self.should_fail {
            return Err(ConfigError::SourceError {
                source_name: self.name.clone(),
                message: "Mock load failure".to_string(),
                source: None,
            });
        }
        for (key, value) in &self.entries {
            dispatch_entry(key, value, on_key_value, on_file)?;
        }
        Ok(())
    }
}

/// Creates a mock provider with one value of each inferred kind.
#[allow(dead_code)]
pub fn create_typed_provider() -> MockProvider {
    MockProvider::new("typed")
        .with_entry("null.value", "NULL")
        .with_entry("bool.value", "True")
        .with_entry("int.value", "42")
        .with_entry("float.value", "3.14")
        .with_entry("string.value", "hello world")
        .with_entry("list.value", "[1, 2, 3]")
        .with_entry("object.value", "{\"a\": 1}")
        .with_entry("quoted.value", "\"already quoted\"")
}
