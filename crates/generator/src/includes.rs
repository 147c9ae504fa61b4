//! Include directive rendering

/// Wrap `header` in `""` and return the complete include line
pub fn local_include(header: &str) -> String {
    format!("#include \"{}\"\n", header)
}

/// Wrap `header` in `<>` and return the complete include line
pub fn system_include(header: &str) -> String {
    format!("#include <{}>\n", header)
}
