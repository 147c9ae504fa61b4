//! Common types and errors for cpp-client-codegen
//!
//! This crate contains the value types shared by the derivation engine and
//! the CLI: configuration errors, the namespace kind selector and the
//! normalized product path.

mod product_path;

pub use product_path::ProductPath;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the one generator parameter every invocation must carry
pub const PRODUCT_PATH_KEY: &str = "product_path";

/// Errors raised while validating generator parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("--cpp_codegen_opt={0}=<path> must be specified.")]
    MissingRequiredParameter(String),

    #[error("--cpp_codegen_opt={0}=<path> must name at least one path segment.")]
    EmptyParameter(String),
}

/// Errors that can occur while deriving names for generated code
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Template error: {0}")]
    Template(String),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Selects which namespace chain to build for a product
///
/// `Public` names the user-facing API, `Internal` the hidden implementation
/// details that live beside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamespaceKind {
    #[default]
    Public,
    Internal,
}
