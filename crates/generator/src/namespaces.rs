//! Namespace hierarchy for generated code

use crate::params::GeneratorParameters;
use cpp_client_codegen_common::NamespaceKind;
use serde::Serialize;
use std::fmt;
use std::ops::Deref;

const INLINE_NAMESPACE_SUFFIX: &str = "_CLIENT_NS";
const INTERNAL_SUFFIX: &str = "_internal";

/// Ordered namespace names, outermost first
///
/// Always `["google", "cloud", <product>, <PRODUCT>_CLIENT_NS]`, where the
/// last entry is the inline namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NamespaceChain(Vec<String>);

impl NamespaceChain {
    /// Inline (versioned) namespace, the innermost entry
    pub fn inline_namespace(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or_default()
    }

    /// Fully qualified name, e.g. `::google::cloud::pubsub::PUBSUB_CLIENT_NS`
    pub fn qualified(&self) -> String {
        format!("::{}", self.0.join("::"))
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl Deref for NamespaceChain {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for NamespaceChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified())
    }
}

/// Build the namespace hierarchy for the configured product
///
/// The product name is the last segment of `product_path`; the inline
/// namespace is derived from it before the `_internal` suffix is applied,
/// so both kinds share the same inline namespace.
pub fn build_namespaces(params: &GeneratorParameters, kind: NamespaceKind) -> NamespaceChain {
    let product = params.product_path().product_name();
    let inline_ns = format!("{}{}", product.to_ascii_uppercase(), INLINE_NAMESPACE_SUFFIX);
    let name = match kind {
        NamespaceKind::Public => product.to_string(),
        NamespaceKind::Internal => format!("{}{}", product, INTERNAL_SUFFIX),
    };

    NamespaceChain(vec!["google".to_string(), "cloud".to_string(), name, inline_ns])
}
