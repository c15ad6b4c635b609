use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_types(ctx: &CommandContext, json: bool) -> Result<()> {
    if json {
        let listing: Vec<_> = ctx
            .schema
            .types()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "kind": t.kind_label(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    if ctx.schema.is_empty() {
        println!("No types in schema.");
        return Ok(());
    }

    for type_def in ctx.schema.types() {
        println!(
            "{:<10} {}",
            type_def.kind_label().magenta(),
            type_def.name.blue()
        );
    }
    Ok(())
}
