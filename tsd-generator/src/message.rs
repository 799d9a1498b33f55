use schema::{FieldType, MessageSchema};
use tracing::debug;

use crate::GenerateError;
use crate::enums::{print_enum, print_oneof_case};
use crate::field_types::BYTES_DUAL_TYPE;
use crate::naming::{field_camel_case, field_pascal_case, oneof_case_name};
use crate::printer::Printer;
use crate::resolver::{FieldKind, ResolvedField, TypeResolver};

const OBJECT_TYPE_NAME: &str = "AsObject";

/// Declarations for `message` and, inside its namespace, everything nested in it.
/// Map entry messages produce nothing.
pub fn print_message(
    resolver: &TypeResolver<'_>,
    message: &MessageSchema,
    indent_level: usize,
) -> Result<String, GenerateError> {
    if message.map_entry {
        return Ok(String::new());
    }
    debug!(message = %message.name, file = %resolver.file().name, "printing message");

    let fields = message
        .fields
        .iter()
        .map(|f| resolver.resolve(f))
        .collect::<Result<Vec<_>, _>>()?;

    let mut printer = Printer::new(indent_level);
    printer.print_empty_ln();

    printer.print_ln(&format!("export class {} extends jspb.Message {{", message.name));
    for field in &fields {
        print_accessors(&mut printer, field);
    }
    for oneof in &message.oneofs {
        let case_name = oneof_case_name(oneof);
        printer.print_indented_ln(&format!(
            "get{case_name}(): {}.{case_name};",
            message.name
        ));
    }
    print_serialization_surface(&mut printer, &message.name);
    printer.print_ln("}");
    printer.print_empty_ln();

    printer.print_ln(&format!("export namespace {} {{", message.name));
    printer.print(&print_object_type(&fields, indent_level + 1));

    for nested in &message.nested_messages {
        printer.print(&print_message(resolver, nested, indent_level + 1)?);
    }
    for en in &message.nested_enums {
        printer.print_empty_ln();
        printer.print(&print_enum(en, indent_level + 1));
    }
    for index in 0..message.oneofs.len() {
        printer.print_empty_ln();
        printer.print(&print_oneof_case(message, index, indent_level + 1));
    }
    printer.print_ln("}");

    Ok(printer.into_output())
}

/// Message types are referred to by their plain-object shape inside `AsObject`.
fn object_type_name(ty: &FieldType, type_name: &str) -> String {
    match ty {
        FieldType::Message(_) => format!("{type_name}.{OBJECT_TYPE_NAME}"),
        _ => type_name.to_string(),
    }
}

fn print_object_type(fields: &[ResolvedField<'_>], indent_level: usize) -> String {
    let mut printer = Printer::new(indent_level);
    printer.print_ln(&format!("export type {OBJECT_TYPE_NAME} = {{"));

    for field in fields {
        let camel = field_camel_case(field.field);
        let line = match (&field.kind, field.is_repeated()) {
            (FieldKind::Map(types), _) => format!(
                "{camel}Map: Array<[{}, {}]>,",
                object_type_name(&types.key_type, &types.key_type_name),
                object_type_name(&types.value_type, &types.value_type_name)
            ),
            (FieldKind::Bytes, true) => format!("{camel}List: Array<{BYTES_DUAL_TYPE}>,"),
            (FieldKind::Bytes, false) => format!("{camel}: {BYTES_DUAL_TYPE},"),
            (FieldKind::Scalar(ts_type), true) => format!("{camel}List: Array<{ts_type}>,"),
            (FieldKind::Enum(ts_type), true) => format!("{camel}List: Array<{ts_type}>,"),
            (FieldKind::Message(ts_type), true) => {
                format!("{camel}List: Array<{ts_type}.{OBJECT_TYPE_NAME}>,")
            }
            (FieldKind::Scalar(ts_type), false) => {
                format!("{camel}{}: {ts_type},", optional_marker(field))
            }
            (FieldKind::Enum(ts_type), false) => {
                format!("{camel}{}: {ts_type},", optional_marker(field))
            }
            (FieldKind::Message(ts_type), false) => format!(
                "{camel}{}: {ts_type}.{OBJECT_TYPE_NAME},",
                optional_marker(field)
            ),
        };
        printer.print_indented_ln(&line);
    }

    printer.print_ln("}");
    printer.into_output()
}

fn optional_marker(field: &ResolvedField<'_>) -> &'static str {
    if field.can_be_undefined { "?" } else { "" }
}

fn print_accessors(printer: &mut Printer, field: &ResolvedField<'_>) {
    let pascal = field_pascal_case(field.field);

    if let FieldKind::Map(types) = &field.kind {
        printer.print_indented_ln(&format!(
            "get{pascal}Map(): jspb.Map<{}, {}>;",
            types.key_type_name, types.value_type_name
        ));
        printer.print_indented_ln(&format!("clear{pascal}Map(): void;"));
        return;
    }

    if field.has_presence {
        printer.print_indented_ln(&format!("has{pascal}(): boolean;"));
    }
    if field.has_clear {
        let suffix = if field.is_repeated() { "List" } else { "" };
        printer.print_indented_ln(&format!("clear{pascal}{suffix}(): void;"));
    }

    let ts_type = match &field.kind {
        FieldKind::Bytes => {
            print_bytes_accessors(printer, &pascal, field.is_repeated());
            return;
        }
        FieldKind::Scalar(ts_type) => ts_type.to_string(),
        FieldKind::Enum(ts_type) | FieldKind::Message(ts_type) => ts_type.clone(),
        FieldKind::Map(_) => return,
    };
    // A message argument may be left out to store a fresh default instance.
    let argument = if matches!(field.kind, FieldKind::Message(_)) {
        "value?"
    } else {
        "value"
    };

    if field.is_repeated() {
        printer.print_indented_ln(&format!("get{pascal}List(): Array<{ts_type}>;"));
        printer.print_indented_ln(&format!(
            "set{pascal}List(value: Array<{ts_type}>): void;"
        ));
        printer.print_indented_ln(&format!(
            "add{pascal}({argument}: {ts_type}, index?: number): {ts_type};"
        ));
    } else {
        let value_type = if field.can_be_undefined {
            format!("{ts_type} | undefined")
        } else {
            ts_type
        };
        printer.print_indented_ln(&format!("get{pascal}(): {value_type};"));
        printer.print_indented_ln(&format!(
            "set{pascal}({argument}: {value_type}): void;"
        ));
    }
}

fn print_bytes_accessors(printer: &mut Printer, pascal: &str, repeated: bool) {
    if repeated {
        printer.print_indented_ln(&format!("get{pascal}List(): Array<{BYTES_DUAL_TYPE}>;"));
        printer.print_indented_ln(&format!("get{pascal}List_asU8(): Array<Uint8Array>;"));
        printer.print_indented_ln(&format!("get{pascal}List_asB64(): Array<string>;"));
        printer.print_indented_ln(&format!(
            "set{pascal}List(value: Array<{BYTES_DUAL_TYPE}>): void;"
        ));
        printer.print_indented_ln(&format!(
            "add{pascal}(value: {BYTES_DUAL_TYPE}, index?: number): {BYTES_DUAL_TYPE};"
        ));
    } else {
        printer.print_indented_ln(&format!("get{pascal}(): {BYTES_DUAL_TYPE};"));
        printer.print_indented_ln(&format!("get{pascal}_asU8(): Uint8Array;"));
        printer.print_indented_ln(&format!("get{pascal}_asB64(): string;"));
        printer.print_indented_ln(&format!("set{pascal}(value: {BYTES_DUAL_TYPE}): void;"));
    }
}

fn print_serialization_surface(printer: &mut Printer, name: &str) {
    printer.print_indented_ln("serializeBinary(): Uint8Array;");
    printer.print_indented_ln(&format!(
        "toObject(includeInstance?: boolean): {name}.{OBJECT_TYPE_NAME};"
    ));
    printer.print_indented_ln(&format!(
        "static toObject(includeInstance: boolean, msg: {name}): {name}.{OBJECT_TYPE_NAME};"
    ));
    printer.print_indented_ln(
        "static extensions: {[key: number]: jspb.ExtensionFieldInfo<jspb.Message>};",
    );
    printer.print_indented_ln(
        "static extensionsBinary: {[key: number]: jspb.ExtensionFieldBinaryInfo<jspb.Message>};",
    );
    printer.print_indented_ln(&format!(
        "static serializeBinaryToWriter(message: {name}, writer: jspb.BinaryWriter): void;"
    ));
    printer.print_indented_ln(&format!("static deserializeBinary(bytes: Uint8Array): {name};"));
    printer.print_indented_ln(&format!(
        "static deserializeBinaryFromReader(message: {name}, reader: jspb.BinaryReader): {name};"
    ));
}
