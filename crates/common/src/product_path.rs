//! Normalized product path

use crate::ConfigError;
use serde::{Serialize, Serializer};
use std::fmt;

/// A relative product path such as `google/cloud/pubsub/`
///
/// Always has no leading `/` and exactly one trailing `/`, and always
/// contains at least one non-empty segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductPath(String);

impl ProductPath {
    /// Normalize a raw `product_path` value
    ///
    /// Leading slashes are stripped and any run of trailing slashes becomes
    /// a single one. `key` is only used to name the parameter in errors.
    ///
    /// Every leading `/` is removed, not just the first, and a value with no
    /// segment left is rejected with [`ConfigError::EmptyParameter`] instead
    /// of becoming `/`.
    ///
    /// # Examples
    /// ```
    /// use cpp_client_codegen_common::ProductPath;
    ///
    /// let path = ProductPath::normalize("product_path", "/pubsub").unwrap();
    /// assert_eq!(path.as_str(), "pubsub/");
    /// ```
    pub fn normalize(key: &str, raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim_start_matches('/').trim_end_matches('/');
        if trimmed.split('/').all(str::is_empty) {
            return Err(ConfigError::EmptyParameter(key.to_string()));
        }
        Ok(Self(format!("{}/", trimmed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last non-empty segment, e.g. `pubsub` for `google/cloud/pubsub/`
    pub fn product_name(&self) -> &str {
        self.segments().next_back().unwrap_or_default()
    }

    /// Non-empty segments in order
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.0.split('/').filter(|segment| !segment.is_empty())
    }
}

impl fmt::Display for ProductPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for ProductPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(raw: &str) -> Result<ProductPath, ConfigError> {
        ProductPath::normalize("product_path", raw)
    }

    #[test]
    fn test_strips_leading_and_adds_trailing_slash() {
        assert_eq!(normalize("/google/cloud/pubsub").unwrap().as_str(), "google/cloud/pubsub/");
    }

    #[test]
    fn test_already_normalized_is_unchanged() {
        assert_eq!(normalize("pubsub/").unwrap().as_str(), "pubsub/");
        assert_eq!(normalize("pubsub/v1/").unwrap().as_str(), "pubsub/v1/");
    }

    #[test]
    fn test_trailing_slashes_do_not_stack() {
        assert_eq!(normalize("pubsub//").unwrap().as_str(), "pubsub/");
        assert_eq!(normalize("//pubsub").unwrap().as_str(), "pubsub/");
    }

    #[test]
    fn test_empty_values_are_rejected() {
        for raw in ["", "/", "//", "///"] {
            assert_eq!(
                normalize(raw),
                Err(ConfigError::EmptyParameter("product_path".to_string())),
                "raw value {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_product_name_is_last_non_empty_segment() {
        assert_eq!(normalize("google/cloud/spanner").unwrap().product_name(), "spanner");
        assert_eq!(normalize("pubsub/v1/").unwrap().product_name(), "v1");
        assert_eq!(normalize("a//b/").unwrap().product_name(), "b");
    }

    #[test]
    fn test_segments_skip_empty_pieces() {
        let path = normalize("a//b/").unwrap();
        assert_eq!(path.segments().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let path = normalize("pubsub").unwrap();
        assert_eq!(serde_json::to_string(&path).unwrap(), "\"pubsub/\"");
    }
}
