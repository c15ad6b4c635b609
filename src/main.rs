use anyhow::Result;
use clap::Parser;

use schemadoc::cli::handlers::{self, CommandContext};
use schemadoc::cli::{Cli, Commands};
use schemadoc::config::SchemadocConfig;
use schemadoc::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let cwd = std::env::current_dir()?;
    let config = SchemadocConfig::load(&cwd)?;
    let ctx = CommandContext::new(config, cli.schema)?;

    match cli.command {
        Commands::Page {
            type_name,
            field,
            json,
        } => handlers::handle_page(&ctx, type_name, field, json),
        Commands::Types { json } => handlers::handle_types(&ctx, json),
        Commands::Explore => handlers::handle_explore(&ctx),
    }
}
