//! Naming and path derivation for generated C++ client libraries
//!
//! Given a protobuf service name and the generator parameter string, this
//! crate derives the on-disk path for generated files, the public and
//! internal namespace chains, and include directives. Template rendering
//! and file emission belong to the surrounding code generator; the
//! [`templates`] module only exposes these rules as template filters.

mod casing;
mod includes;
mod namespaces;
mod naming;
mod params;
mod paths;
pub mod templates;

pub use casing::camel_case_to_snake_case;
pub use includes::{local_include, system_include};
pub use namespaces::{build_namespaces, NamespaceChain};
pub use naming::ServiceNaming;
pub use params::{GeneratorParameters, ParameterTokenizer, ProtocTokenizer};
pub use paths::{generated_file_suffix, proto_name_to_cpp_name, service_name_to_file_path};

use cpp_client_codegen_common::Result;

/// Parse `parameters` and derive naming for every service (convenience function)
///
/// Each service is derived independently; the parameters are shared
/// read-only.
pub fn derive_service_namings<S: AsRef<str>>(
    parameters: &str,
    services: &[S],
) -> Result<Vec<ServiceNaming>> {
    let params = GeneratorParameters::parse(parameters)?;
    Ok(services
        .iter()
        .map(|service| ServiceNaming::derive(&params, service.as_ref()))
        .collect())
}
