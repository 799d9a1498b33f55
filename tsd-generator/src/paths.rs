//! Import aliases and relative module paths derived from `.proto` file paths.

/// Standard files shipped with the runtime package rather than generated
/// next to the user's own declarations.
const WELL_KNOWN_FILES: &[&str] = &[
    "google/protobuf/any.proto",
    "google/protobuf/api.proto",
    "google/protobuf/compiler/plugin.proto",
    "google/protobuf/descriptor.proto",
    "google/protobuf/duration.proto",
    "google/protobuf/empty.proto",
    "google/protobuf/field_mask.proto",
    "google/protobuf/source_context.proto",
    "google/protobuf/struct.proto",
    "google/protobuf/timestamp.proto",
    "google/protobuf/type.proto",
    "google/protobuf/wrappers.proto",
];

fn strip_proto_extension(path: &str) -> &str {
    path.strip_suffix(".proto").unwrap_or(path)
}

/// Identifier a file's exports are imported under: `foo/bar-baz.proto` -> `foo_bar_baz_pb`.
pub fn pseudo_namespace(path: &str) -> String {
    let mut namespace: String = strip_proto_extension(path)
        .chars()
        .map(|c| match c {
            '/' | '.' | '-' => '_',
            c => c,
        })
        .collect();
    namespace.push_str("_pb");
    namespace
}

/// Relative prefix from the directory of `path` back to the output root.
pub fn path_to_root(path: &str) -> String {
    let depth = path.split('/').count() - 1;
    if depth == 0 {
        "./".to_string()
    } else {
        "../".repeat(depth)
    }
}

/// Module path of the generated code for a `.proto` file, relative to the root.
pub fn generated_module_path(path: &str) -> String {
    format!("{}_pb", strip_proto_extension(path))
}

/// Import path for `dependency` as seen from `importing_file`.
pub fn import_path(importing_file: &str, dependency: &str, runtime_module: &str) -> String {
    if WELL_KNOWN_FILES.contains(&dependency) {
        format!("{runtime_module}/{}", generated_module_path(dependency))
    } else {
        format!(
            "{}{}",
            path_to_root(importing_file),
            generated_module_path(dependency)
        )
    }
}
