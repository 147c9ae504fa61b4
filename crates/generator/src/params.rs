//! Generator parameter parsing and validation
//!
//! Parameters arrive as a single string such as
//! `product_path=google/cloud/pubsub,emit_logging=true`. Tokenizing follows
//! protoc's generator-parameter grammar; this module then validates the
//! required `product_path` key and normalizes its value.

use cpp_client_codegen_common::{ConfigError, ProductPath, PRODUCT_PATH_KEY};

/// Splits a raw parameter string into ordered key/value pairs
#[cfg_attr(test, mockall::automock)]
pub trait ParameterTokenizer {
    fn tokenize(&self, raw: &str) -> Vec<(String, String)>;
}

/// Tokenizer matching `protoc`'s `ParseGeneratorParameter`
///
/// Entries are separated by `,` and empty entries are skipped. Each entry
/// is split at its first `=`; an entry without `=` is a key with an empty
/// value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtocTokenizer;

impl ParameterTokenizer for ProtocTokenizer {
    fn tokenize(&self, raw: &str) -> Vec<(String, String)> {
        raw.split(',')
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.split_once('=') {
                Some((key, value)) => (key.to_string(), value.to_string()),
                None => (entry.to_string(), String::new()),
            })
            .collect()
    }
}

/// Validated generator parameters
///
/// Holds every pair in its original order. The first `product_path` entry
/// carries the normalized value; all other entries are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorParameters {
    pairs: Vec<(String, String)>,
    product_path: ProductPath,
}

impl GeneratorParameters {
    /// Parse and validate a raw parameter string with [`ProtocTokenizer`]
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        Self::parse_with(&ProtocTokenizer, raw)
    }

    /// Parse and validate a raw parameter string with a custom tokenizer
    pub fn parse_with<T: ParameterTokenizer + ?Sized>(
        tokenizer: &T,
        raw: &str,
    ) -> Result<Self, ConfigError> {
        tracing::debug!(parameters = raw, "parsing generator parameters");
        Self::from_pairs(tokenizer.tokenize(raw))
    }

    /// Validate already tokenized pairs
    pub fn from_pairs(mut pairs: Vec<(String, String)>) -> Result<Self, ConfigError> {
        let entry = pairs
            .iter_mut()
            .find(|(key, _)| key == PRODUCT_PATH_KEY)
            .ok_or_else(|| ConfigError::MissingRequiredParameter(PRODUCT_PATH_KEY.to_string()))?;

        let product_path = ProductPath::normalize(PRODUCT_PATH_KEY, &entry.1)?;
        if entry.1 != product_path.as_str() {
            tracing::debug!(
                raw = %entry.1,
                normalized = %product_path,
                "normalized product_path"
            );
            entry.1 = product_path.as_str().to_string();
        }

        Ok(Self {
            pairs,
            product_path,
        })
    }

    pub fn product_path(&self) -> &ProductPath {
        &self.product_path
    }

    /// Value of the first entry named `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }
}
