use serde::Serialize;
use std::collections::HashMap;

/// A named type in the schema.
///
/// The kind variant carries everything a documentation page can show for
/// the type; accessors below paper over kinds that lack a capability.
#[derive(Debug, Clone, Serialize)]
pub struct TypeDef {
    pub name: String,
    pub description: Option<String>,
    pub kind: TypeKind,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeKind {
    Scalar,
    Object {
        fields: Vec<FieldDef>,
        interfaces: Vec<String>,
    },
    Interface {
        fields: Vec<FieldDef>,
        interfaces: Vec<String>,
        /// Object/interface types implementing this interface, in
        /// declaration order of the implementers.
        possible_types: Vec<String>,
    },
    Union {
        possible_types: Vec<String>,
    },
    Enum {
        values: Vec<EnumValueDef>,
    },
    InputObject {
        fields: Vec<FieldDef>,
    },
}

/// A field of an object, interface, or input object type.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDef {
    pub name: String,
    pub description: Option<String>,
    /// Raw display name of the field's type with wrapper notation intact,
    /// e.g. `ID!` or `[User]`.
    pub type_name: String,
    pub args: Vec<ArgDef>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArgDef {
    pub name: String,
    pub description: Option<String>,
    pub type_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnumValueDef {
    pub name: String,
    pub description: Option<String>,
}

impl TypeDef {
    /// Fields in declaration order, for kinds that have them.
    pub fn fields(&self) -> Option<&[FieldDef]> {
        match &self.kind {
            TypeKind::Object { fields, .. }
            | TypeKind::Interface { fields, .. }
            | TypeKind::InputObject { fields } => Some(fields),
            _ => None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields()?.iter().find(|f| f.name == name)
    }

    pub fn enum_values(&self) -> Option<&[EnumValueDef]> {
        match &self.kind {
            TypeKind::Enum { values } => Some(values),
            _ => None,
        }
    }

    /// Union members or interface implementers.
    pub fn possible_types(&self) -> Option<&[String]> {
        match &self.kind {
            TypeKind::Union { possible_types }
            | TypeKind::Interface { possible_types, .. } => Some(possible_types),
            _ => None,
        }
    }

    /// Interfaces this type declares. Empty for kinds without them.
    pub fn interfaces(&self) -> &[String] {
        match &self.kind {
            TypeKind::Object { interfaces, .. } | TypeKind::Interface { interfaces, .. } => {
                interfaces
            }
            _ => &[],
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match &self.kind {
            TypeKind::Scalar => "scalar",
            TypeKind::Object { .. } => "object",
            TypeKind::Interface { .. } => "interface",
            TypeKind::Union { .. } => "union",
            TypeKind::Enum { .. } => "enum",
            TypeKind::InputObject { .. } => "input",
        }
    }
}

/// An immutable, queryable index over a parsed schema.
///
/// Built once from SDL (see [`SchemaIndex::parse`]) and only read
/// afterwards. The explorer borrows it for the whole session.
#[derive(Debug, Clone)]
pub struct SchemaIndex {
    pub(super) types: HashMap<String, TypeDef>,
    /// Declaration order of type names, for stable listings.
    pub(super) order: Vec<String>,
    pub(super) query_root: Option<String>,
    pub(super) mutation_root: Option<String>,
}

impl SchemaIndex {
    pub fn type_by_name(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    pub fn query_root(&self) -> Option<&TypeDef> {
        self.types.get(self.query_root.as_deref()?)
    }

    pub fn mutation_root(&self) -> Option<&TypeDef> {
        self.types.get(self.mutation_root.as_deref()?)
    }

    /// All named types in declaration order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDef> {
        self.order.iter().filter_map(|name| self.types.get(name))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
