// Descriptor IR consumed by the declaration generator.
// - A file has a package, its dependencies, a syntax and top-level types.
// - Messages own their fields, oneof groups and nested types.
// - Field types are scalars or fully-qualified references (no leading dot).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Syntax {
    #[default]
    Proto2,
    Proto3,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FileSchema {
    pub name: String,
    pub package: Option<String>,
    pub dependencies: Vec<String>,
    pub syntax: Syntax,
    pub messages: Vec<MessageSchema>,
    pub enums: Vec<EnumSchema>,
    pub extensions: Vec<FieldSchema>,
}

impl FileSchema {
    pub fn new(name: impl Into<String>, syntax: Syntax) -> Self {
        Self {
            name: name.into(),
            syntax,
            ..Default::default()
        }
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn with_dependency(mut self, dependency: impl Into<String>) -> Self {
        self.dependencies.push(dependency.into());
        self
    }

    pub fn with_message(mut self, message: MessageSchema) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_enum(mut self, en: EnumSchema) -> Self {
        self.enums.push(en);
        self
    }

    pub fn with_extension(mut self, field: FieldSchema) -> Self {
        self.extensions.push(field);
        self
    }

    pub fn is_proto2(&self) -> bool {
        self.syntax == Syntax::Proto2
    }
}

// ---------------- Message & Fields ----------------

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessageSchema {
    pub name: String,
    /// Set for the synthetic `FooEntry` messages protoc creates for `map<K, V>` fields.
    pub map_entry: bool,
    pub fields: Vec<FieldSchema>,
    pub oneofs: Vec<OneofSchema>,
    pub nested_messages: Vec<MessageSchema>,
    pub nested_enums: Vec<EnumSchema>,
}

impl MessageSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// A map entry message with the key at number 1 and the value at number 2.
    pub fn map_entry(name: impl Into<String>, key: FieldType, value: FieldType) -> Self {
        Self {
            name: name.into(),
            map_entry: true,
            fields: vec![
                FieldSchema::new("key", 1, key),
                FieldSchema::new("value", 2, value),
            ],
            ..Default::default()
        }
    }

    pub fn with_field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_oneof(mut self, name: impl Into<String>) -> Self {
        self.oneofs.push(OneofSchema { name: name.into() });
        self
    }

    pub fn with_nested_message(mut self, message: MessageSchema) -> Self {
        self.nested_messages.push(message);
        self
    }

    pub fn with_nested_enum(mut self, en: EnumSchema) -> Self {
        self.nested_enums.push(en);
        self
    }

    /// Member fields of the oneof at `index`, in declaration order.
    pub fn oneof_fields(&self, index: usize) -> impl Iterator<Item = &FieldSchema> {
        self.fields
            .iter()
            .filter(move |f| f.oneof_index == Some(index))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Label {
    #[default]
    Optional,
    Required,
    Repeated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    pub name: String,
    pub number: i32, // tag number
    pub label: Label,
    pub ty: FieldType,
    pub oneof_index: Option<usize>,
    pub proto3_optional: bool,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, number: i32, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            number,
            label: Label::Optional,
            ty,
            oneof_index: None,
            proto3_optional: false,
        }
    }

    pub fn scalar(name: impl Into<String>, number: i32, scalar: ScalarType) -> Self {
        Self::new(name, number, FieldType::Scalar(scalar))
    }

    pub fn message(name: impl Into<String>, number: i32, type_name: impl Into<String>) -> Self {
        Self::new(name, number, FieldType::Message(type_name.into()))
    }

    pub fn enumeration(name: impl Into<String>, number: i32, type_name: impl Into<String>) -> Self {
        Self::new(name, number, FieldType::Enum(type_name.into()))
    }

    pub fn repeated(mut self) -> Self {
        self.label = Label::Repeated;
        self
    }

    pub fn required(mut self) -> Self {
        self.label = Label::Required;
        self
    }

    pub fn in_oneof(mut self, index: usize) -> Self {
        self.oneof_index = Some(index);
        self
    }

    pub fn is_repeated(&self) -> bool {
        self.label == Label::Repeated
    }

    pub fn is_message(&self) -> bool {
        matches!(self.ty, FieldType::Message(_))
    }

    pub fn is_bytes(&self) -> bool {
        self.ty == FieldType::Scalar(ScalarType::Bytes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Scalar(ScalarType),
    Message(String), // fully-qualified, groups included
    Enum(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Double,
    Float,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Bool,
    String,
    Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OneofSchema {
    pub name: String,
}

// ---------------- Enum ----------------

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnumSchema {
    pub name: String,
    pub values: Vec<EnumValue>,
}

impl EnumSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    pub fn with_value(mut self, name: impl Into<String>, number: i32) -> Self {
        self.values.push(EnumValue {
            name: name.into(),
            number,
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub name: String,
    pub number: i32,
}
