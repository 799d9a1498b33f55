//! TypeScript declarations (`.d.ts`) for the `google-protobuf` runtime,
//! generated from converted protobuf descriptors.

mod enums;
pub mod field_types;
mod file;
mod message;
pub mod naming;
mod options;
pub mod paths;
mod printer;
pub mod resolver;

use schema::{ExportMap, FileSchema};
use thiserror::Error;
use tracing::info;

pub use file::print_file_declarations;
pub use options::GeneratorOptions;
pub use resolver::{FieldKind, MapTypes, ResolvedField, TypeResolver};

#[derive(Debug, Error)]
pub enum GenerateError {
    /// A message or enum reference missing from the export map.
    #[error("could not resolve type '{type_name}' in '{file_name}'")]
    UnresolvedType { type_name: String, file_name: String },

    /// `map_types` was asked about a field that is not a map.
    #[error("invalid usage: expected field '{field}' to be a map")]
    NotAMap { field: String },

    #[error("invalid option: {0}")]
    InvalidOption(String),
}

/// Generate declarations for every file in `files`.
/// Returns a list of tuples: (relative_output_path, file_content).
/// Stops at the first error: a missing type invalidates the whole request.
pub fn generate_declarations<'a>(
    files: impl IntoIterator<Item = &'a FileSchema>,
    export_map: &ExportMap,
    options: &GeneratorOptions,
) -> Result<Vec<(String, String)>, GenerateError> {
    let mut out = Vec::new();
    for file in files {
        let content = print_file_declarations(file, export_map, options)?;
        out.push((options.output_file_name(&file.name), content));
    }
    info!(files = out.len(), "generated declarations");
    Ok(out)
}
