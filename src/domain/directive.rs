// SPDX-License-Identifier: MIT OR Apache-2.0

//! Detection of embedded-file directives.
//!
//! A directive is a raw value shaped like `["]<FILE><target-path>;<base64>["]`.
//! The helpers here own the optional-quote policy so detection and decoding
//! agree on it.

/// Magic prefix that marks a raw value as an embedded file.
pub const FILE_MAGIC_ID: &str = "<FILE>";

/// Strips exactly one pair of enclosing double quotes.
///
/// The quotes are removed only when the value both starts and ends with `"`.
/// A lone `"` is left untouched.
///
/// # Examples
///
/// ```
/// use remoteconf::domain::directive::strip_outer_quotes;
///
/// assert_eq!(strip_outer_quotes("\"abc\""), "abc");
/// assert_eq!(strip_outer_quotes("\"\"abc\"\""), "\"abc\"");
/// assert_eq!(strip_outer_quotes("abc\""), "abc\"");
/// ```
pub fn strip_outer_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Returns `true` if the raw value is an embedded-file directive.
///
/// # Examples
///
/// ```
/// use remoteconf::domain::directive::is_file_directive;
///
/// assert!(is_file_directive("<FILE>/tmp/cert.pem;aGVsbG8="));
/// assert!(is_file_directive("\"<FILE>/tmp/cert.pem;aGVsbG8=\""));
/// assert!(!is_file_directive("plain value"));
/// ```
pub fn is_file_directive(value: &str) -> bool {
    strip_outer_quotes(value).starts_with(FILE_MAGIC_ID)
}
