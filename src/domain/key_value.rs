// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key/value entries emitted by providers.

use crate::domain::typed_value::{render, TypedValue};
use std::fmt;

/// A configuration key paired with its inferred value.
///
/// The key is trimmed on construction and the raw value goes through
/// [`TypedValue::infer`].
///
/// # Examples
///
/// ```
/// use remoteconf::domain::KeyValueEntry;
///
/// let mut config = String::new();
/// KeyValueEntry::new(" db.port ", "5432").apply(&mut config);
/// KeyValueEntry::new("db.host", "localhost").apply(&mut config);
///
/// assert_eq!(config, "db.port = 5432\ndb.host = \"localhost\"\n");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct KeyValueEntry {
    key: String,
    value: TypedValue,
}

impl KeyValueEntry {
    /// Creates an entry by inferring the type of `raw_value`.
    pub fn new(key: &str, raw_value: &str) -> Self {
        Self::with_value(key, TypedValue::infer(raw_value))
    }

    /// Creates an entry from an already typed value.
    pub fn with_value(key: &str, value: TypedValue) -> Self {
        Self {
            key: key.trim().to_string(),
            value,
        }
    }

    /// Returns the trimmed key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the typed value.
    pub fn value(&self) -> &TypedValue {
        &self.value
    }

    /// Renders this entry as a single configuration line.
    pub fn render(&self) -> String {
        render(&self.key, &self.value)
    }

    /// Appends the rendered line to the application configuration text.
    pub fn apply(&self, app_config: &mut String) {
        app_config.push_str(&self.render());
    }
}

impl fmt::Display for KeyValueEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyValueEntry[{} <- {}]", self.key, self.value)
    }
}
