use std::collections::HashMap;
use std::path::Path;

use async_graphql::parser::parse_schema;
use async_graphql::parser::types::{
    EnumValueDefinition, FieldDefinition, InputValueDefinition, TypeDefinition,
    TypeKind as SdlKind, TypeSystemDefinition,
};
use async_graphql::{Name, Positioned};
use tracing::debug;

use super::model::{ArgDef, EnumValueDef, FieldDef, SchemaIndex, TypeDef, TypeKind};
use crate::error::{Result, SchemadocError};

impl SchemaIndex {
    /// Read an SDL file and build the index.
    pub fn load(path: &Path) -> Result<Self> {
        let sdl = std::fs::read_to_string(path)?;
        Self::parse(&sdl)
    }

    /// Build the index from SDL text.
    ///
    /// Type extensions are merged into their base type in document order.
    /// Root types come from an explicit `schema { ... }` block when
    /// present, otherwise from the conventional `Query` and `Mutation`
    /// names.
    pub fn parse(sdl: &str) -> Result<Self> {
        let doc = parse_schema(sdl).map_err(|e| SchemadocError::Parse(e.to_string()))?;

        let mut builder = IndexBuilder::default();
        for definition in &doc.definitions {
            match definition {
                TypeSystemDefinition::Schema(schema_def) => {
                    if let Some(query) = &schema_def.node.query {
                        builder.query_root = Some(query.node.to_string());
                    }
                    if let Some(mutation) = &schema_def.node.mutation {
                        builder.mutation_root = Some(mutation.node.to_string());
                    }
                }
                TypeSystemDefinition::Type(type_def) => builder.add_type(&type_def.node),
                TypeSystemDefinition::Directive(_) => {}
            }
        }

        Ok(builder.finish())
    }
}

#[derive(Default)]
struct IndexBuilder {
    types: HashMap<String, TypeDef>,
    order: Vec<String>,
    query_root: Option<String>,
    mutation_root: Option<String>,
}

impl IndexBuilder {
    fn add_type(&mut self, def: &TypeDefinition) {
        let name = def.name.node.to_string();
        let description = def.description.as_ref().map(|d| d.node.clone());

        let kind = match &def.kind {
            SdlKind::Scalar => TypeKind::Scalar,
            SdlKind::Object(object) => TypeKind::Object {
                fields: field_defs(&object.fields),
                interfaces: name_list(&object.implements),
            },
            SdlKind::Interface(interface) => TypeKind::Interface {
                fields: field_defs(&interface.fields),
                interfaces: name_list(&interface.implements),
                possible_types: Vec::new(),
            },
            SdlKind::Union(union_type) => TypeKind::Union {
                possible_types: name_list(&union_type.members),
            },
            SdlKind::Enum(enum_type) => TypeKind::Enum {
                values: enum_type
                    .values
                    .iter()
                    .map(|v| enum_value_def(&v.node))
                    .collect(),
            },
            SdlKind::InputObject(input) => TypeKind::InputObject {
                fields: input
                    .fields
                    .iter()
                    .map(|f| input_field_def(&f.node))
                    .collect(),
            },
        };

        if def.extend {
            self.extend_type(&name, kind);
        } else {
            self.insert(TypeDef {
                name,
                description,
                kind,
            });
        }
    }

    fn insert(&mut self, type_def: TypeDef) {
        if !self.types.contains_key(&type_def.name) {
            self.order.push(type_def.name.clone());
        }
        self.types.insert(type_def.name.clone(), type_def);
    }

    /// Merge an `extend type ...` block into its base type. An extension
    /// without a base type becomes a plain definition.
    fn extend_type(&mut self, name: &str, extension: TypeKind) {
        let Some(base) = self.types.get_mut(name) else {
            debug!(name, "type extension has no base type, treating as definition");
            self.insert(TypeDef {
                name: name.to_string(),
                description: None,
                kind: extension,
            });
            return;
        };

        match (&mut base.kind, extension) {
            (
                TypeKind::Object { fields, interfaces },
                TypeKind::Object {
                    fields: more_fields,
                    interfaces: more_interfaces,
                },
            )
            | (
                TypeKind::Interface {
                    fields, interfaces, ..
                },
                TypeKind::Interface {
                    fields: more_fields,
                    interfaces: more_interfaces,
                    ..
                },
            ) => {
                fields.extend(more_fields);
                interfaces.extend(more_interfaces);
            }
            (
                TypeKind::Union { possible_types },
                TypeKind::Union {
                    possible_types: more_members,
                },
            ) => possible_types.extend(more_members),
            (
                TypeKind::Enum { values },
                TypeKind::Enum {
                    values: more_values,
                },
            ) => values.extend(more_values),
            (
                TypeKind::InputObject { fields },
                TypeKind::InputObject {
                    fields: more_fields,
                },
            ) => fields.extend(more_fields),
            (_, _) => debug!(name, "ignoring type extension with mismatched kind"),
        }
    }

    fn finish(mut self) -> SchemaIndex {
        // SDL interfaces do not list their implementers; collect them from
        // the implementing side.
        let mut implementers: Vec<(String, String)> = Vec::new();
        for name in &self.order {
            if let Some(type_def) = self.types.get(name) {
                for interface in type_def.interfaces() {
                    implementers.push((interface.clone(), name.clone()));
                }
            }
        }
        for (interface_name, implementer) in implementers {
            if let Some(TypeDef {
                kind: TypeKind::Interface { possible_types, .. },
                ..
            }) = self.types.get_mut(&interface_name)
            {
                possible_types.push(implementer);
            }
        }

        // Built-in scalars are part of every GraphQL type map even when
        // the SDL never mentions them.
        for name in ["Int", "Float", "String", "Boolean", "ID"] {
            if !self.types.contains_key(name) {
                self.insert(TypeDef {
                    name: name.to_string(),
                    description: None,
                    kind: TypeKind::Scalar,
                });
            }
        }

        if self.query_root.is_none() && self.types.contains_key("Query") {
            self.query_root = Some("Query".to_string());
        }
        if self.mutation_root.is_none() && self.types.contains_key("Mutation") {
            self.mutation_root = Some("Mutation".to_string());
        }

        SchemaIndex {
            types: self.types,
            order: self.order,
            query_root: self.query_root,
            mutation_root: self.mutation_root,
        }
    }
}

fn name_list(names: &[Positioned<Name>]) -> Vec<String> {
    names.iter().map(|n| n.node.to_string()).collect()
}

fn field_defs(fields: &[Positioned<FieldDefinition>]) -> Vec<FieldDef> {
    fields
        .iter()
        .map(|f| {
            let field = &f.node;
            FieldDef {
                name: field.name.node.to_string(),
                description: field.description.as_ref().map(|d| d.node.clone()),
                type_name: field.ty.node.to_string(),
                args: field
                    .arguments
                    .iter()
                    .map(|a| arg_def(&a.node))
                    .collect(),
            }
        })
        .collect()
}

fn arg_def(arg: &InputValueDefinition) -> ArgDef {
    ArgDef {
        name: arg.name.node.to_string(),
        description: arg.description.as_ref().map(|d| d.node.clone()),
        type_name: arg.ty.node.to_string(),
    }
}

fn input_field_def(field: &InputValueDefinition) -> FieldDef {
    FieldDef {
        name: field.name.node.to_string(),
        description: field.description.as_ref().map(|d| d.node.clone()),
        type_name: field.ty.node.to_string(),
        args: Vec::new(),
    }
}

fn enum_value_def(value: &EnumValueDefinition) -> EnumValueDef {
    EnumValueDef {
        name: value.value.node.to_string(),
        description: value.description.as_ref().map(|d| d.node.clone()),
    }
}
