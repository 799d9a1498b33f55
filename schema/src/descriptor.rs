use prost_types::field_descriptor_proto::{Label as ProtoLabel, Type as ProtoType};
use prost_types::{
    DescriptorProto, EnumDescriptorProto, FieldDescriptorProto, FileDescriptorProto,
};

use crate::SchemaError;
use crate::model::*;

impl TryFrom<&FileDescriptorProto> for FileSchema {
    type Error = SchemaError;

    fn try_from(file: &FileDescriptorProto) -> Result<Self, Self::Error> {
        let name = file
            .name
            .clone()
            .ok_or_else(|| SchemaError::missing_name("file", "<request>"))?;

        let syntax = match file.syntax.as_deref() {
            None | Some("") | Some("proto2") => Syntax::Proto2,
            Some("proto3") => Syntax::Proto3,
            Some(other) => {
                return Err(SchemaError::UnsupportedSyntax {
                    syntax: other.to_string(),
                    file: name,
                });
            }
        };

        let package = file.package.clone().filter(|p| !p.is_empty());

        let messages = file
            .message_type
            .iter()
            .map(|m| parse_message(m, &name))
            .collect::<Result<Vec<_>, _>>()?;
        let enums = file
            .enum_type
            .iter()
            .map(|e| parse_enum(e, &name))
            .collect::<Result<Vec<_>, _>>()?;
        let extensions = file
            .extension
            .iter()
            .map(|f| parse_field(f, &name))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FileSchema {
            name,
            package,
            dependencies: file.dependency.clone(),
            syntax,
            messages,
            enums,
            extensions,
        })
    }
}

fn parse_message(proto: &DescriptorProto, scope: &str) -> Result<MessageSchema, SchemaError> {
    let name = proto
        .name
        .clone()
        .ok_or_else(|| SchemaError::missing_name("message", scope))?;
    let qualified = format!("{scope}.{name}");

    let mut fields = proto
        .field
        .iter()
        .map(|f| parse_field(f, &qualified))
        .collect::<Result<Vec<_>, _>>()?;

    // proto3 `optional` fields live in a synthetic oneof of their own; those
    // oneofs get no case enum, so drop them and renumber the real ones.
    let synthetic: Vec<bool> = (0..proto.oneof_decl.len())
        .map(|index| {
            proto
                .field
                .iter()
                .any(|f| f.proto3_optional() && f.oneof_index == Some(index as i32))
        })
        .collect();
    let mut remap = Vec::with_capacity(synthetic.len());
    let mut next = 0;
    for is_synthetic in &synthetic {
        if *is_synthetic {
            remap.push(None);
        } else {
            remap.push(Some(next));
            next += 1;
        }
    }
    for field in &mut fields {
        field.oneof_index = field
            .oneof_index
            .and_then(|index| remap.get(index).copied().flatten());
    }

    let oneofs = proto
        .oneof_decl
        .iter()
        .zip(&synthetic)
        .filter(|(_, is_synthetic)| !**is_synthetic)
        .map(|(oneof, _)| {
            oneof
                .name
                .clone()
                .map(|name| OneofSchema { name })
                .ok_or_else(|| SchemaError::missing_name("oneof", &qualified))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let nested_messages = proto
        .nested_type
        .iter()
        .map(|m| parse_message(m, &qualified))
        .collect::<Result<Vec<_>, _>>()?;
    let nested_enums = proto
        .enum_type
        .iter()
        .map(|e| parse_enum(e, &qualified))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MessageSchema {
        name,
        map_entry: proto.options.as_ref().is_some_and(|o| o.map_entry()),
        fields,
        oneofs,
        nested_messages,
        nested_enums,
    })
}

fn parse_enum(proto: &EnumDescriptorProto, scope: &str) -> Result<EnumSchema, SchemaError> {
    let name = proto
        .name
        .clone()
        .ok_or_else(|| SchemaError::missing_name("enum", scope))?;
    let values = proto
        .value
        .iter()
        .map(|v| {
            v.name
                .clone()
                .map(|value_name| EnumValue {
                    name: value_name,
                    number: v.number(),
                })
                .ok_or_else(|| SchemaError::missing_name("enum value", &name))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(EnumSchema { name, values })
}

fn parse_field(proto: &FieldDescriptorProto, scope: &str) -> Result<FieldSchema, SchemaError> {
    let name = proto
        .name
        .clone()
        .ok_or_else(|| SchemaError::missing_name("field", scope))?;

    let label = match proto.label {
        None => Label::Optional,
        Some(raw) => match ProtoLabel::try_from(raw) {
            Ok(ProtoLabel::Optional) => Label::Optional,
            Ok(ProtoLabel::Required) => Label::Required,
            Ok(ProtoLabel::Repeated) => Label::Repeated,
            Err(_) => {
                return Err(SchemaError::UnknownLabel {
                    label: raw,
                    field: name,
                });
            }
        },
    };

    let raw_type = proto.r#type.ok_or_else(|| SchemaError::MissingFieldType {
        field: name.clone(),
    })?;
    let proto_type = ProtoType::try_from(raw_type).map_err(|_| SchemaError::UnknownFieldType {
        ty: raw_type,
        field: name.clone(),
    })?;

    let ty = match proto_type {
        ProtoType::Double => FieldType::Scalar(ScalarType::Double),
        ProtoType::Float => FieldType::Scalar(ScalarType::Float),
        ProtoType::Int64 => FieldType::Scalar(ScalarType::Int64),
        ProtoType::Uint64 => FieldType::Scalar(ScalarType::Uint64),
        ProtoType::Int32 => FieldType::Scalar(ScalarType::Int32),
        ProtoType::Fixed64 => FieldType::Scalar(ScalarType::Fixed64),
        ProtoType::Fixed32 => FieldType::Scalar(ScalarType::Fixed32),
        ProtoType::Bool => FieldType::Scalar(ScalarType::Bool),
        ProtoType::String => FieldType::Scalar(ScalarType::String),
        ProtoType::Bytes => FieldType::Scalar(ScalarType::Bytes),
        ProtoType::Uint32 => FieldType::Scalar(ScalarType::Uint32),
        ProtoType::Sfixed32 => FieldType::Scalar(ScalarType::Sfixed32),
        ProtoType::Sfixed64 => FieldType::Scalar(ScalarType::Sfixed64),
        ProtoType::Sint32 => FieldType::Scalar(ScalarType::Sint32),
        ProtoType::Sint64 => FieldType::Scalar(ScalarType::Sint64),
        ProtoType::Message | ProtoType::Group => FieldType::Message(type_reference(proto, &name)?),
        ProtoType::Enum => FieldType::Enum(type_reference(proto, &name)?),
    };

    Ok(FieldSchema {
        number: proto.number(),
        label,
        ty,
        oneof_index: proto.oneof_index.and_then(|i| usize::try_from(i).ok()),
        proto3_optional: proto.proto3_optional(),
        name,
    })
}

fn type_reference(proto: &FieldDescriptorProto, field: &str) -> Result<String, SchemaError> {
    let raw = proto
        .type_name
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| SchemaError::MissingFieldType {
            field: field.to_string(),
        })?;
    Ok(raw.strip_prefix('.').unwrap_or(raw).to_string())
}
