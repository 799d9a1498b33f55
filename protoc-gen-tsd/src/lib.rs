//! protoc plugin emitting `.d.ts` declarations for `google-protobuf` generated code.
//!
//! protoc writes a `CodeGeneratorRequest` to stdin and expects a
//! `CodeGeneratorResponse` on stdout; diagnostics go to stderr via `tracing`.

use std::io::{self, Read, Write};

use prost::Message;
use prost_types::compiler::code_generator_response::{Feature, File};
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use schema::{ExportMap, FileSchema, SchemaError};
use thiserror::Error;
use tracing::{debug, error, warn};
use tsd_generator::{GenerateError, GeneratorOptions, generate_declarations};

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to decode request: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("failed to encode response: {0}")]
    Encode(#[from] prost::EncodeError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Read a request from stdin, generate, and write the response to stdout.
pub fn run() -> Result<(), PluginError> {
    let mut input = Vec::new();
    io::stdin().read_to_end(&mut input)?;
    let request = CodeGeneratorRequest::decode(input.as_slice())?;

    let response = generate(&request);

    let mut output = Vec::new();
    response.encode(&mut output)?;
    io::stdout().write_all(&output)?;
    Ok(())
}

/// Generation failures are reported to protoc through the response's
/// `error` field, in which case no files are returned.
pub fn generate(request: &CodeGeneratorRequest) -> CodeGeneratorResponse {
    let supported_features = Some(Feature::Proto3Optional as u64);

    match generate_files(request) {
        Ok(files) => CodeGeneratorResponse {
            supported_features,
            file: files
                .into_iter()
                .map(|(name, content)| File {
                    name: Some(name),
                    content: Some(content),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        },
        Err(e) => {
            error!("generation failed: {e}");
            CodeGeneratorResponse {
                error: Some(e.to_string()),
                supported_features,
                ..Default::default()
            }
        }
    }
}

fn generate_files(request: &CodeGeneratorRequest) -> Result<Vec<(String, String)>, PluginError> {
    let options: GeneratorOptions = request.parameter.as_deref().unwrap_or_default().parse()?;
    debug!(?options, "parsed plugin parameter");

    let schemas = request
        .proto_file
        .iter()
        .map(|file| FileSchema::try_from(file))
        .collect::<Result<Vec<_>, _>>()?;
    let export_map = ExportMap::from_files(&schemas);
    debug!(
        files = schemas.len(),
        types = export_map.len(),
        "built export map"
    );

    let targets = request.file_to_generate.iter().filter_map(|name| {
        let found = schemas.iter().find(|s| &s.name == name);
        if found.is_none() {
            warn!(file = %name, "requested file missing from proto_file, skipping");
        }
        found
    });

    Ok(generate_declarations(targets, &export_map, &options)?)
}
