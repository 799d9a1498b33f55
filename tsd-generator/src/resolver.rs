//! Field classification: wire kind, presence policy and the TypeScript name
//! a field's type is referred to by from inside the file being generated.

use schema::{ExportEntry, ExportMap, FieldSchema, FieldType, FileSchema, Label, ScalarType};

use crate::GenerateError;
use crate::field_types::{BYTES_DUAL_TYPE, scalar_type_name};
use crate::paths::pseudo_namespace;

/// Accessor shape of a field, decided once per field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Non-bytes scalar with its TypeScript type.
    Scalar(&'static str),
    /// Exposed through the dual, `_asU8` and `_asB64` views.
    Bytes,
    Enum(String),
    Message(String),
    Map(MapTypes),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapTypes {
    pub key_type: FieldType,
    pub key_type_name: String,
    pub value_type: FieldType,
    pub value_type_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedField<'f> {
    pub field: &'f FieldSchema,
    pub kind: FieldKind,
    pub has_presence: bool,
    pub has_clear: bool,
    /// Reads may yield `undefined`: only unset `optional` sub-messages do.
    pub can_be_undefined: bool,
}

impl ResolvedField<'_> {
    pub fn is_repeated(&self) -> bool {
        self.field.is_repeated()
    }
}

/// Resolves fields of `file` against the request-wide export map.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
    export_map: &'a ExportMap,
    file: &'a FileSchema,
}

impl<'a> TypeResolver<'a> {
    pub fn new(export_map: &'a ExportMap, file: &'a FileSchema) -> Self {
        Self { export_map, file }
    }

    pub fn file(&self) -> &'a FileSchema {
        self.file
    }

    pub fn resolve<'f>(&self, field: &'f FieldSchema) -> Result<ResolvedField<'f>, GenerateError> {
        let kind = match &field.ty {
            FieldType::Scalar(ScalarType::Bytes) => FieldKind::Bytes,
            FieldType::Scalar(scalar) => FieldKind::Scalar(scalar_type_name(*scalar)),
            FieldType::Enum(_) => FieldKind::Enum(self.display_type_name(field)?),
            FieldType::Message(_) if self.is_map(field)? => FieldKind::Map(self.map_types(field)?),
            FieldType::Message(_) => FieldKind::Message(self.display_type_name(field)?),
        };
        let has_presence = self.has_presence_method(field);

        Ok(ResolvedField {
            field,
            kind,
            has_presence,
            has_clear: self.has_clear_method(field),
            can_be_undefined: field.is_message() && field.label == Label::Optional,
        })
    }

    pub fn is_map(&self, field: &FieldSchema) -> Result<bool, GenerateError> {
        match &field.ty {
            FieldType::Message(name) => Ok(self.lookup(&field.ty, name)?.map_entry().is_some()),
            _ => Ok(false),
        }
    }

    pub fn map_types(&self, field: &FieldSchema) -> Result<MapTypes, GenerateError> {
        let entry = match &field.ty {
            FieldType::Message(name) => self.lookup(&field.ty, name)?.map_entry(),
            _ => None,
        };
        let fields = entry.ok_or_else(|| GenerateError::NotAMap {
            field: field.name.clone(),
        })?;

        let key_type_name = self.type_name_of(&fields.key.ty)?;
        let value_type_name = if fields.value.is_bytes() {
            BYTES_DUAL_TYPE.to_string()
        } else {
            self.type_name_of(&fields.value.ty)?
        };

        Ok(MapTypes {
            key_type: fields.key.ty.clone(),
            key_type_name,
            value_type: fields.value.ty.clone(),
            value_type_name,
        })
    }

    pub fn has_presence_method(&self, field: &FieldSchema) -> bool {
        if field.is_repeated() {
            return false;
        }
        if field.oneof_index.is_some() {
            return true;
        }
        if field.is_message() || field.proto3_optional {
            return true;
        }
        self.file.is_proto2()
    }

    pub fn has_clear_method(&self, field: &FieldSchema) -> bool {
        self.has_presence_method(field) || field.is_repeated()
    }

    pub fn display_type_name(&self, field: &FieldSchema) -> Result<String, GenerateError> {
        self.type_name_of(&field.ty)
    }

    fn type_name_of(&self, ty: &FieldType) -> Result<String, GenerateError> {
        let name = match ty {
            FieldType::Scalar(scalar) => return Ok(scalar_type_name(*scalar).to_string()),
            FieldType::Message(name) | FieldType::Enum(name) => name,
        };
        let entry = self.lookup(ty, name)?;
        let local = entry.within_namespace(name);
        if entry.file_name == self.file.name {
            Ok(local.to_string())
        } else {
            Ok(format!("{}.{local}", pseudo_namespace(&entry.file_name)))
        }
    }

    fn lookup(&self, ty: &FieldType, name: &str) -> Result<&'a ExportEntry, GenerateError> {
        let entry = match ty {
            FieldType::Message(_) => self.export_map.get_message(name),
            FieldType::Enum(_) => self.export_map.get_enum(name),
            FieldType::Scalar(_) => None,
        };
        entry.ok_or_else(|| GenerateError::UnresolvedType {
            type_name: name.to_string(),
            file_name: self.file.name.clone(),
        })
    }
}
