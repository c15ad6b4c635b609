use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use crate::error::SchemadocError;
use crate::explorer::{self, Page, Section, strip_wrappers};
use crate::schema::SchemaIndex;

pub fn handle_page(
    ctx: &CommandContext,
    type_name: Option<String>,
    field: Option<String>,
    json: bool,
) -> Result<()> {
    let page = resolve_page(&ctx.schema, type_name.as_deref(), field.as_deref())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print_page(&page);
    }
    Ok(())
}

fn resolve_page(
    schema: &SchemaIndex,
    type_name: Option<&str>,
    field: Option<&str>,
) -> Result<Page, SchemadocError> {
    let Some(raw) = type_name else {
        return Ok(explorer::start_page(schema));
    };

    let name = strip_wrappers(raw);
    let type_def = schema
        .type_by_name(name)
        .ok_or_else(|| SchemadocError::TypeNotFound(name.to_string()))?;

    match field {
        None => Ok(explorer::type_page(type_def)),
        Some(field_name) => {
            let field_def = type_def.field(field_name).ok_or_else(|| {
                SchemadocError::FieldNotFound(name.to_string(), field_name.to_string())
            })?;
            Ok(explorer::call_page(type_def, field_def))
        }
    }
}

fn print_page(page: &Page) {
    match &page.return_type {
        Some(return_type) => println!(
            "{} : {}",
            page.title.cyan().bold(),
            return_type.blue()
        ),
        None => println!("{}", page.title.cyan().bold()),
    }
    if let Some(description) = &page.description {
        println!("{}", description.dimmed());
    }

    for section in &page.sections {
        println!();
        match section {
            Section::Types { label, types } => {
                println!("{}", label.magenta());
                for type_ref in types {
                    println!("  {}", type_ref.name.blue());
                }
            }
            Section::Fields { fields } => {
                println!("{}", "fields".magenta());
                for field in fields {
                    println!("  {} : {}", field.name, field.type_name.blue());
                    if let Some(description) = &field.description {
                        println!("    {}", description.dimmed());
                    }
                }
            }
            Section::Values { values } => {
                println!("{}", "values".magenta());
                for value in values {
                    println!("  {}", value.name);
                    if let Some(description) = &value.description {
                        println!("    {}", description.dimmed());
                    }
                }
            }
            Section::Args { args } => {
                println!("{}", "arguments".magenta());
                for arg in args {
                    println!("  {} {}", arg.type_name.blue(), arg.name);
                    if let Some(description) = &arg.description {
                        println!("    {}", description.dimmed());
                    }
                }
            }
        }
    }
}
