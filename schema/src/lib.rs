//! Immutable protobuf descriptor model shared by the declaration generator,
//! together with the cross-file export map and the conversion from protoc's
//! `FileDescriptorProto`.

mod descriptor;
mod model;
pub mod registry;

use thiserror::Error;

pub use model::*;
pub use registry::{ExportEntry, ExportKind, ExportMap, MapEntryFields};

/// Structural problems found while converting protoc descriptors.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("{kind} without a name in '{scope}'")]
    MissingName { kind: &'static str, scope: String },

    #[error("field '{field}' has no type")]
    MissingFieldType { field: String },

    #[error("field '{field}' has unknown type number {ty}")]
    UnknownFieldType { ty: i32, field: String },

    #[error("field '{field}' has unknown label {label}")]
    UnknownLabel { label: i32, field: String },

    #[error("unsupported syntax '{syntax}' in '{file}'")]
    UnsupportedSyntax { syntax: String, file: String },
}

impl SchemaError {
    fn missing_name(kind: &'static str, scope: &str) -> Self {
        SchemaError::MissingName {
            kind,
            scope: scope.to_string(),
        }
    }
}
