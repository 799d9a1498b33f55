use schema::{ExportMap, FieldSchema, FileSchema};
use tracing::debug;

use crate::GenerateError;
use crate::enums::print_enum;
use crate::message::print_message;
use crate::naming::field_camel_case;
use crate::options::GeneratorOptions;
use crate::paths::{import_path, pseudo_namespace};
use crate::printer::Printer;
use crate::resolver::TypeResolver;

/// Full `.d.ts` text for one file.
pub fn print_file_declarations(
    file: &FileSchema,
    export_map: &ExportMap,
    options: &GeneratorOptions,
) -> Result<String, GenerateError> {
    debug!(file = %file.name, "printing declarations");
    let resolver = TypeResolver::new(export_map, file);
    let mut printer = Printer::new(0);

    printer.print_ln(&format!(
        "// package: {}",
        file.package.as_deref().unwrap_or_default()
    ));
    printer.print_ln(&format!("// file: {}", file.name));
    printer.print_empty_ln();

    printer.print_ln(&format!(
        "import * as jspb from \"{}\";",
        options.runtime_module
    ));
    for dependency in &file.dependencies {
        printer.print_ln(&format!(
            "import * as {} from \"{}\";",
            pseudo_namespace(dependency),
            import_path(&file.name, dependency, &options.runtime_module)
        ));
    }

    for message in &file.messages {
        printer.print(&print_message(&resolver, message, 0)?);
    }
    for extension in &file.extensions {
        printer.print(&print_extension(&resolver, extension)?);
    }
    for en in &file.enums {
        printer.print_empty_ln();
        printer.print(&print_enum(en, 0));
    }

    printer.print_empty_ln();
    Ok(printer.into_output())
}

fn print_extension(
    resolver: &TypeResolver<'_>,
    extension: &FieldSchema,
) -> Result<String, GenerateError> {
    let mut printer = Printer::new(0);
    printer.print_empty_ln();
    printer.print_ln(&format!(
        "export const {}: jspb.ExtensionFieldInfo<{}>;",
        field_camel_case(extension),
        resolver.display_type_name(extension)?
    ));
    Ok(printer.into_output())
}
