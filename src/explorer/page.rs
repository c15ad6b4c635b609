use serde::Serialize;

use crate::schema::{FieldDef, SchemaIndex, TypeDef};

/// Render-ready content for one documentation page.
///
/// Derived purely from the target node; carries no navigation state.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Raw display name of the return type. Only set on call pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    /// Name of the type declaring the field. Only set on call pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaring_type: Option<String>,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum Section {
    Types { label: String, types: Vec<TypeRef> },
    Fields { fields: Vec<FieldRef> },
    Values { values: Vec<EnumValueRef> },
    Args { args: Vec<ArgRef> },
}

/// A navigable link to a type, under its raw display name.
#[derive(Debug, Clone, Serialize)]
pub struct TypeRef {
    pub name: String,
}

/// One field row of a type page. Carries the declaring type so the host
/// can open the field as a call, and the raw field type for opening the
/// type itself.
#[derive(Debug, Clone, Serialize)]
pub struct FieldRef {
    pub name: String,
    pub declaring_type: String,
    pub type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One enum value row. Enum values are not navigable.
#[derive(Debug, Clone, Serialize)]
pub struct EnumValueRef {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArgRef {
    pub name: String,
    pub type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Build the page for a type.
///
/// Sections appear in a fixed order, each only when applicable: union
/// possible types, interface implementers, declared interfaces, fields
/// (declaration order), enum values.
pub fn type_page(type_def: &TypeDef) -> Page {
    use crate::schema::TypeKind;

    let mut sections = Vec::new();

    if let TypeKind::Union { possible_types } = &type_def.kind {
        sections.push(types_section("possible types", possible_types));
    }
    if let TypeKind::Interface { possible_types, .. } = &type_def.kind {
        sections.push(types_section("implemented by", possible_types));
    }
    if !type_def.interfaces().is_empty() {
        sections.push(types_section("interfaces", type_def.interfaces()));
    }
    if let Some(fields) = type_def.fields() {
        sections.push(Section::Fields {
            fields: fields
                .iter()
                .map(|field| FieldRef {
                    name: field.name.clone(),
                    declaring_type: type_def.name.clone(),
                    type_name: field.type_name.clone(),
                    description: field.description.clone(),
                })
                .collect(),
        });
    }
    if let Some(values) = type_def.enum_values() {
        sections.push(Section::Values {
            values: values
                .iter()
                .map(|value| EnumValueRef {
                    name: value.name.clone(),
                    description: value.description.clone(),
                })
                .collect(),
        });
    }

    Page {
        title: type_def.name.clone(),
        description: type_def.description.clone(),
        return_type: None,
        declaring_type: None,
        sections,
    }
}

/// Build the page for a field viewed as a call: name, return type, and
/// the arguments in declared order. No section when the field takes no
/// arguments. The declaring type travels with the page so consumers can
/// tell identically named fields of different types apart.
pub fn call_page(declaring: &TypeDef, field: &FieldDef) -> Page {
    let mut sections = Vec::new();

    if !field.args.is_empty() {
        sections.push(Section::Args {
            args: field
                .args
                .iter()
                .map(|arg| ArgRef {
                    name: arg.name.clone(),
                    type_name: arg.type_name.clone(),
                    description: arg.description.clone(),
                })
                .collect(),
        });
    }

    Page {
        title: field.name.clone(),
        description: field.description.clone(),
        return_type: Some(field.type_name.clone()),
        declaring_type: Some(declaring.name.clone()),
        sections,
    }
}

/// Build the start page: the schema's root types and nothing else.
/// Absent roots are omitted.
pub fn start_page(schema: &SchemaIndex) -> Page {
    let roots: Vec<TypeRef> = [schema.query_root(), schema.mutation_root()]
        .into_iter()
        .flatten()
        .map(|root| TypeRef {
            name: root.name.clone(),
        })
        .collect();

    Page {
        title: "Schema".to_string(),
        description: None,
        return_type: None,
        declaring_type: None,
        sections: vec![Section::Types {
            label: "root types".to_string(),
            types: roots,
        }],
    }
}

fn types_section(label: &str, names: &[String]) -> Section {
    Section::Types {
        label: label.to_string(),
        types: names
            .iter()
            .map(|name| TypeRef { name: name.clone() })
            .collect(),
    }
}
