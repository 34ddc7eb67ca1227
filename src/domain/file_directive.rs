// SPDX-License-Identifier: MIT OR Apache-2.0

//! Embedded-file directives.
//!
//! This module provides the [`FileDirective`] type, which decodes a value of the
//! form `["]<FILE><target-path>;<base64-content>["]` and writes the decoded bytes
//! to the target path on request.

use crate::domain::directive::{strip_outer_quotes, FILE_MAGIC_ID};
use crate::domain::errors::{ConfigError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Size of each write issued by [`FileDirective::apply`].
const COPY_CHUNK_SIZE: usize = 8 * 1024;

/// A decoded file waiting to be written to disk.
///
/// # Examples
///
/// ```
/// use remoteconf::domain::FileDirective;
///
/// let directive = FileDirective::parse("tls.cert", "<FILE> /tmp/cert.pem ;aGVsbG8=").unwrap();
/// assert_eq!(directive.target_path().to_str(), Some("/tmp/cert.pem"));
/// assert_eq!(directive.content(), b"hello");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct FileDirective {
    target_path: PathBuf,
    content: Vec<u8>,
}

impl FileDirective {
    /// Decodes a raw directive value.
    ///
    /// One optional pair of enclosing quotes and the `<FILE>` prefix are
    /// stripped, then the remainder is split on `;`. The first segment is the
    /// target path (trimmed), the second is standard padded base64. Further
    /// segments are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedDirective`] carrying `key` when the
    /// content segment is missing, is not valid base64, or the target path is
    /// empty.
    pub fn parse(key: &str, raw: &str) -> Result<Self> {
        let body = strip_outer_quotes(raw);
        let body = body.strip_prefix(FILE_MAGIC_ID).unwrap_or(body);

        let mut segments = body.split(';');
        let target = segments.next().unwrap_or_default().trim();
        let encoded = segments.next().ok_or_else(|| {
            ConfigError::malformed_directive(key, "expected '<target>;<base64-content>'")
        })?;

        let content = STANDARD
            .decode(encoded)
            .map_err(|e| ConfigError::malformed_directive(key, e.to_string()))?;

        if target.is_empty() {
            return Err(ConfigError::malformed_directive(key, "empty target path"));
        }

        Ok(Self {
            target_path: PathBuf::from(target),
            content,
        })
    }

    /// Creates a directive from already decoded bytes.
    ///
    /// Only the target is trimmed; the content is kept as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use remoteconf::domain::FileDirective;
    ///
    /// let directive = FileDirective::from_bytes(b"key material".to_vec(), " /tmp/k.pem\n");
    /// assert_eq!(directive.target_path().to_str(), Some("/tmp/k.pem"));
    /// ```
    pub fn from_bytes(content: Vec<u8>, target: &str) -> Self {
        Self {
            target_path: PathBuf::from(target.trim()),
            content,
        }
    }

    /// Creates a directive by draining `reader` to its end.
    ///
    /// Only the target is trimmed; the content is kept as is.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Storage`] naming the target when the reader fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use remoteconf::domain::FileDirective;
    /// use std::io::Cursor;
    ///
    /// let directive = FileDirective::from_reader(Cursor::new("pem data"), "ca.pem ").unwrap();
    /// assert_eq!(directive.len(), 8);
    /// ```
    pub fn from_reader<R: Read>(mut reader: R, target: &str) -> Result<Self> {
        let target = target.trim();
        let mut content = Vec::new();
        reader
            .read_to_end(&mut content)
            .map_err(|e| ConfigError::storage(Path::new(target), e))?;

        Ok(Self::from_bytes(content, target))
    }

    /// Returns the path the content will be written to.
    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    /// Returns the decoded content.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Returns the size of the decoded content in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns `true` if the decoded content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Encodes this directive back into its wire form, without outer quotes.
    ///
    /// # Examples
    ///
    /// ```
    /// use remoteconf::domain::FileDirective;
    ///
    /// let directive = FileDirective::from_bytes(b"hello".to_vec(), "out.txt");
    /// assert_eq!(directive.to_directive_string(), "<FILE>out.txt;aGVsbG8=");
    /// ```
    pub fn to_directive_string(&self) -> String {
        format!(
            "{}{};{}",
            FILE_MAGIC_ID,
            self.target_path.display(),
            STANDARD.encode(&self.content)
        )
    }

    /// Writes the content to the target path.
    ///
    /// The file is created or truncated, written in bounded chunks, then
    /// flushed and synced before the handle is closed. A file left partially
    /// written by a failure is not removed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Storage`] on any I/O failure, such as a missing
    /// parent directory or a permission denial.
    pub fn apply(&self) -> Result<()> {
        let path = self.target_path.as_path();
        let mut file = File::create(path).map_err(|e| ConfigError::storage(path, e))?;

        for chunk in self.content.chunks(COPY_CHUNK_SIZE) {
            file.write_all(chunk).map_err(|e| ConfigError::storage(path, e))?;
        }
        file.flush().map_err(|e| ConfigError::storage(path, e))?;
        file.sync_all().map_err(|e| ConfigError::storage(path, e))?;

        Ok(())
    }
}

impl fmt::Debug for FileDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileDirective")
            .field("target_path", &self.target_path)
            .field("size", &self.content.len())
            .finish()
    }
}

impl fmt::Display for FileDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FileDirective[size <- {} ; target <- {}]",
            self.content.len(),
            self.target_path.display()
        )
    }
}
