use fnv::FnvHashMap;
use tracing::debug;

use crate::model::{EnumSchema, FieldSchema, FileSchema, MessageSchema};

/// Cross-file lookup of every message and enum in a generation request,
/// keyed by fully-qualified name (`pkg.Outer.Inner`, no leading dot).
///
/// Built once before generation starts and only borrowed afterwards.
#[derive(Debug, Default)]
pub struct ExportMap {
    entries: FnvHashMap<String, ExportEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportEntry {
    pub file_name: String,
    pub package: Option<String>,
    pub kind: ExportKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportKind {
    Message { map_entry: Option<MapEntryFields> },
    Enum,
}

/// Key and value fields of a map entry message.
#[derive(Debug, Clone, PartialEq)]
pub struct MapEntryFields {
    pub key: FieldSchema,
    pub value: FieldSchema,
}

impl ExportEntry {
    pub fn is_message(&self) -> bool {
        matches!(self.kind, ExportKind::Message { .. })
    }

    pub fn map_entry(&self) -> Option<&MapEntryFields> {
        match &self.kind {
            ExportKind::Message { map_entry } => map_entry.as_ref(),
            ExportKind::Enum => None,
        }
    }

    /// Strips the defining package from a fully-qualified name, leaving
    /// the name as seen from inside that package (`Outer.Inner`).
    pub fn within_namespace<'a>(&self, full_name: &'a str) -> &'a str {
        match self.package.as_deref() {
            Some(pkg) if !pkg.is_empty() => full_name
                .strip_prefix(pkg)
                .and_then(|rest| rest.strip_prefix('.'))
                .unwrap_or(full_name),
            _ => full_name,
        }
    }
}

impl ExportMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_files<'a>(files: impl IntoIterator<Item = &'a FileSchema>) -> Self {
        let mut map = Self::new();
        for file in files {
            map.add_file(file);
        }
        map
    }

    pub fn add_file(&mut self, file: &FileSchema) {
        let scope = file.package.clone().unwrap_or_default();
        for message in &file.messages {
            self.export_message(file, &scope, message);
        }
        for en in &file.enums {
            self.export_enum(file, &scope, en);
        }
        debug!(file = %file.name, entries = self.entries.len(), "exported file");
    }

    pub fn get(&self, full_name: &str) -> Option<&ExportEntry> {
        self.entries.get(full_name)
    }

    pub fn get_message(&self, full_name: &str) -> Option<&ExportEntry> {
        self.get(full_name).filter(|entry| entry.is_message())
    }

    pub fn get_enum(&self, full_name: &str) -> Option<&ExportEntry> {
        self.get(full_name).filter(|entry| !entry.is_message())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn export_message(&mut self, file: &FileSchema, scope: &str, message: &MessageSchema) {
        let full_name = qualify(scope, &message.name);

        let map_entry = if message.map_entry {
            let field = |number: i32| message.fields.iter().find(|f| f.number == number).cloned();
            match (field(1), field(2)) {
                (Some(key), Some(value)) => Some(MapEntryFields { key, value }),
                _ => None,
            }
        } else {
            None
        };

        for nested in &message.nested_messages {
            self.export_message(file, &full_name, nested);
        }
        for en in &message.nested_enums {
            self.export_enum(file, &full_name, en);
        }

        self.insert(file, full_name, ExportKind::Message { map_entry });
    }

    fn export_enum(&mut self, file: &FileSchema, scope: &str, en: &EnumSchema) {
        self.insert(file, qualify(scope, &en.name), ExportKind::Enum);
    }

    fn insert(&mut self, file: &FileSchema, full_name: String, kind: ExportKind) {
        self.entries.insert(
            full_name,
            ExportEntry {
                file_name: file.name.clone(),
                package: file.package.clone(),
                kind,
            },
        );
    }
}

fn qualify(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{scope}.{name}")
    }
}
