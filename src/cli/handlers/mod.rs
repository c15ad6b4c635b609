mod explore;
mod page;
mod types;

pub use explore::handle_explore;
pub use page::handle_page;
pub use types::handle_types;

use anyhow::{Context, Result};

use crate::config::SchemadocConfig;
use crate::schema::SchemaIndex;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: SchemadocConfig,
    pub schema: SchemaIndex,
}

impl CommandContext {
    pub fn new(config: SchemadocConfig, schema_arg: Option<String>) -> Result<Self> {
        let path = schema_arg.or_else(|| config.schema.path.clone()).context(
            "No schema given. Pass --schema <file> or set schema.path in .schemadoc.yml",
        )?;
        let schema = SchemaIndex::load(std::path::Path::new(&path))
            .with_context(|| format!("Failed to load schema from {}", path))?;
        Ok(Self { config, schema })
    }
}
