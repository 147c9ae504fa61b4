//! Per-service naming bundle handed to code-generation templates

use crate::namespaces::{build_namespaces, NamespaceChain};
use crate::params::GeneratorParameters;
use crate::paths::{generated_file_suffix, service_name_to_file_path};
use cpp_client_codegen_common::{NamespaceKind, ProductPath};
use serde::Serialize;

/// Every name derived for a single service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceNaming {
    pub service_name: String,
    pub product_path: ProductPath,
    pub file_path: String,
    pub header_path: String,
    pub source_path: String,
    pub namespaces: NamespaceChain,
    pub internal_namespaces: NamespaceChain,
}

impl ServiceNaming {
    /// Derive all names for `service_name` under the configured product
    pub fn derive(params: &GeneratorParameters, service_name: &str) -> Self {
        let file_path = service_name_to_file_path(service_name);
        let stem = format!("{}{}", file_path, generated_file_suffix());
        tracing::debug!(service = service_name, file_path = %file_path, "derived service naming");

        Self {
            service_name: service_name.to_string(),
            product_path: params.product_path().clone(),
            header_path: format!("{}.h", stem),
            source_path: format!("{}.cc", stem),
            file_path,
            namespaces: build_namespaces(params, NamespaceKind::Public),
            internal_namespaces: build_namespaces(params, NamespaceKind::Internal),
        }
    }

    /// Namespace chain for the requested kind
    pub fn namespaces_for(&self, kind: NamespaceKind) -> &NamespaceChain {
        match kind {
            NamespaceKind::Public => &self.namespaces,
            NamespaceKind::Internal => &self.internal_namespaces,
        }
    }

    /// Template context exposing every derived name
    pub fn to_context(&self) -> tera::Context {
        let mut context = tera::Context::new();
        context.insert("service_name", &self.service_name);
        context.insert("product_path", &self.product_path);
        context.insert("file_path", &self.file_path);
        context.insert("header_path", &self.header_path);
        context.insert("source_path", &self.source_path);
        context.insert("namespaces", &self.namespaces);
        context.insert("internal_namespaces", &self.internal_namespaces);
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_publisher() {
        let params = GeneratorParameters::parse("product_path=/google/cloud/pubsub").unwrap();
        let naming = ServiceNaming::derive(&params, "google.pubsub.v1.PublisherService");

        assert_eq!(naming.file_path, "google/pubsub/v1/publisher");
        assert_eq!(naming.header_path, "google/pubsub/v1/publisher.gcpcxx.pb.h");
        assert_eq!(naming.source_path, "google/pubsub/v1/publisher.gcpcxx.pb.cc");
        assert_eq!(naming.product_path.as_str(), "google/cloud/pubsub/");
        assert_eq!(
            naming.namespaces_for(NamespaceKind::Public).qualified(),
            "::google::cloud::pubsub::PUBSUB_CLIENT_NS"
        );
        assert_eq!(
            naming.namespaces_for(NamespaceKind::Internal).qualified(),
            "::google::cloud::pubsub_internal::PUBSUB_CLIENT_NS"
        );
    }

    #[test]
    fn test_context_contains_derived_names() {
        let params = GeneratorParameters::parse("product_path=spanner").unwrap();
        let naming = ServiceNaming::derive(&params, "google.spanner.v1.Spanner");
        let json = naming.to_context().into_json();

        assert_eq!(json["file_path"], "google/spanner/v1/spanner");
        assert_eq!(json["product_path"], "spanner/");
        assert_eq!(json["internal_namespaces"][2], "spanner_internal");
        assert_eq!(json["namespaces"][3], "SPANNER_CLIENT_NS");
    }
}
