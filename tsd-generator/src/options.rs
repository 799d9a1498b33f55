use std::str::FromStr;

use crate::GenerateError;

/// Settings passed through protoc's `--tsd_opt=key=value,...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Module imported as `jspb`, also the prefix of well-known type imports.
    pub runtime_module: String,
    /// Appended to the `.proto` path (extension stripped) to name each output file.
    pub output_suffix: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            runtime_module: "google-protobuf".to_string(),
            output_suffix: "_pb.d.ts".to_string(),
        }
    }
}

impl GeneratorOptions {
    pub fn output_file_name(&self, proto_path: &str) -> String {
        let stem = proto_path.strip_suffix(".proto").unwrap_or(proto_path);
        format!("{stem}{}", self.output_suffix)
    }
}

impl FromStr for GeneratorOptions {
    type Err = GenerateError;

    fn from_str(parameter: &str) -> Result<Self, Self::Err> {
        let mut opts = GeneratorOptions::default();

        for part in parameter.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let Some((key, value)) = part.split_once('=') else {
                return Err(GenerateError::InvalidOption(format!("expected key=value, got '{part}'")));
            };
            let value = value.trim();
            if value.is_empty() {
                return Err(GenerateError::InvalidOption(format!("empty value for '{key}'")));
            }
            match key.trim() {
                "runtime_module" => opts.runtime_module = value.to_string(),
                "output_suffix" => opts.output_suffix = value.to_string(),
                other => {
                    return Err(GenerateError::InvalidOption(format!("unknown option '{other}'")));
                }
            }
        }

        Ok(opts)
    }
}
