use crate::error::{ReleaseTagError, Result};
use std::fmt;

/// A dot-separated version as read from a tag (e.g. "1.2.3").
///
/// The string is kept verbatim: segments are not validated when the version
/// is read. Only [Version::bump_last] requires the final segment to be a
/// non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version(String);

impl Version {
    /// Create a version from a raw string
    pub fn new(version: impl Into<String>) -> Self {
        Version(version.into())
    }

    /// Extract the version from a tag name by stripping one leading
    /// occurrence of the prefix (e.g. "v1.2.3" with prefix "v" -> "1.2.3").
    ///
    /// Tags that do not start with the prefix are kept whole.
    pub fn from_tag(tag: &str, prefix: &str) -> Self {
        let trimmed = tag.trim();
        Version(trimmed.strip_prefix(prefix).unwrap_or(trimmed).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Format the tag name for this version (prefix + version string).
    pub fn tag_name(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.0)
    }

    /// Return the next version: the final dot-separated segment incremented
    /// by one, every other segment carried unchanged.
    ///
    /// # Errors
    /// Fails if the final segment is not a non-negative integer.
    pub fn bump_last(&self) -> Result<Version> {
        let mut parts: Vec<String> = self.0.split('.').map(str::to_string).collect();

        // split always yields at least one element
        let last = parts.last().cloned().unwrap_or_default();
        let n: u64 = last.parse().map_err(|_| {
            ReleaseTagError::version(format!(
                "non-numeric trailing segment '{}' in version '{}'",
                last, self.0
            ))
        })?;

        if let Some(slot) = parts.last_mut() {
            *slot = (n + 1).to_string();
        }

        Ok(Version(parts.join(".")))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
