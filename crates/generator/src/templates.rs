//! Template filters exposing the naming rules to downstream templates

use crate::casing::camel_case_to_snake_case;
use crate::includes::{local_include, system_include};
use crate::naming::ServiceNaming;
use crate::paths::{proto_name_to_cpp_name, service_name_to_file_path};
use cpp_client_codegen_common::{GeneratorError, Result};
use std::collections::HashMap;
use tera::{Tera, Value};

/// Create an empty template engine with the naming filters registered
pub fn new_engine() -> Tera {
    let mut tera = Tera::default();
    register_filters(&mut tera);
    tera
}

/// Register the naming filters on an existing engine
///
/// - `snake_case`: CamelCase to snake_case
/// - `service_file_path`: dotted service name to file path
/// - `local_include` / `system_include`: include directives
/// - `cpp_name`: dotted proto name to qualified C++ name
pub fn register_filters(tera: &mut Tera) {
    tera.register_filter("snake_case", snake_case_filter);
    tera.register_filter("service_file_path", service_file_path_filter);
    tera.register_filter("local_include", local_include_filter);
    tera.register_filter("system_include", system_include_filter);
    tera.register_filter("cpp_name", cpp_name_filter);
}

/// Render a caller-provided template against one service's naming context
pub fn render_naming(tera: &Tera, template: &str, naming: &ServiceNaming) -> Result<String> {
    tera.render(template, &naming.to_context())
        .map_err(|e| GeneratorError::Template(format!("{}: {:?}", template, e)))
}

fn string_arg<'a>(value: &'a Value, filter: &str) -> tera::Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("{} filter expects a string", filter)))
}

fn snake_case_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = string_arg(value, "snake_case")?;
    Ok(Value::String(camel_case_to_snake_case(s)))
}

fn service_file_path_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = string_arg(value, "service_file_path")?;
    if s.is_empty() {
        return Err(tera::Error::msg("service_file_path filter expects a service name"));
    }
    Ok(Value::String(service_name_to_file_path(s)))
}

fn local_include_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = string_arg(value, "local_include")?;
    Ok(Value::String(local_include(s)))
}

fn system_include_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = string_arg(value, "system_include")?;
    Ok(Value::String(system_include(s)))
}

fn cpp_name_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = string_arg(value, "cpp_name")?;
    Ok(Value::String(proto_name_to_cpp_name(s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(template: &str, context: &tera::Context) -> String {
        let mut tera = new_engine();
        tera.add_raw_template("test", template).unwrap();
        tera.render("test", context).unwrap()
    }

    #[test]
    fn test_naming_filters() {
        let mut context = tera::Context::new();
        context.insert("service", "google.pubsub.v1.PublisherService");
        context.insert("client", "TopicAdminClient");
        context.insert("message", "google.pubsub.v1.Topic");

        assert_eq!(
            render("{{ service | service_file_path }}", &context),
            "google/pubsub/v1/publisher"
        );
        assert_eq!(render("{{ client | snake_case }}", &context), "topic_admin_client");
        assert_eq!(render("{{ message | cpp_name }}", &context), "::google::pubsub::v1::Topic");
    }

    #[test]
    fn test_include_filters_keep_exact_text() {
        let context = tera::Context::new();
        assert_eq!(
            render("{{ \"foo/bar.h\" | local_include | safe }}", &context),
            "#include \"foo/bar.h\"\n"
        );
        assert_eq!(
            render("{{ \"vector\" | system_include | safe }}", &context),
            "#include <vector>\n"
        );
    }

    #[test]
    fn test_render_naming() {
        let params = crate::GeneratorParameters::parse("product_path=pubsub").unwrap();
        let naming = ServiceNaming::derive(&params, "google.pubsub.v1.PublisherService");
        let mut tera = new_engine();
        tera.add_raw_template(
            "header",
            concat!(
                "{{ header_path | local_include | safe }}",
                "namespace {{ internal_namespaces | join(sep=\"::\") }}"
            ),
        )
        .unwrap();

        assert_eq!(
            render_naming(&tera, "header", &naming).unwrap(),
            concat!(
                "#include \"google/pubsub/v1/publisher.gcpcxx.pb.h\"\n",
                "namespace google::cloud::pubsub_internal::PUBSUB_CLIENT_NS"
            )
        );
    }

    #[test]
    fn test_render_naming_unknown_template() {
        let params = crate::GeneratorParameters::parse("product_path=pubsub").unwrap();
        let naming = ServiceNaming::derive(&params, "google.pubsub.v1.Publisher");
        let result = render_naming(&new_engine(), "missing", &naming);
        assert!(matches!(result, Err(GeneratorError::Template(_))));
    }

    #[test]
    fn test_filter_rejects_non_string() {
        let mut tera = new_engine();
        tera.add_raw_template("test", "{{ count | snake_case }}").unwrap();
        let mut context = tera::Context::new();
        context.insert("count", &3);
        assert!(tera.render("test", &context).is_err());
    }
}
