//! File path and C++ name derivation from proto names

use crate::casing::camel_case_to_snake_case;

/// Suffix marking files emitted by this generator
pub fn generated_file_suffix() -> &'static str {
    ".gcpcxx.pb"
}

/// Convert a dotted service name to a slash-separated file path
///
/// Every component is converted to snake_case and a trailing `Service` is
/// stripped from the last component only.
///
/// `service_name` must not be empty.
///
/// # Examples
/// ```
/// use cpp_client_codegen_generator::service_name_to_file_path;
///
/// assert_eq!(
///     service_name_to_file_path("google.pubsub.v1.PublisherService"),
///     "google/pubsub/v1/publisher"
/// );
/// ```
pub fn service_name_to_file_path(service_name: &str) -> String {
    debug_assert!(!service_name.is_empty(), "service name must not be empty");

    let mut components: Vec<&str> = service_name.split('.').collect();
    if let Some(last) = components.last_mut() {
        let component: &str = last;
        *last = component.strip_suffix("Service").unwrap_or(component);
    }

    components
        .into_iter()
        .map(camel_case_to_snake_case)
        .collect::<Vec<_>>()
        .join("/")
}

/// Convert a dotted proto name to a fully qualified C++ name
///
/// `google.pubsub.v1.Topic` becomes `::google::pubsub::v1::Topic`.
pub fn proto_name_to_cpp_name(proto_name: &str) -> String {
    format!("::{}", proto_name.replace('.', "::"))
}
