use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "schemadoc")]
#[command(
    author,
    version,
    about = "A documentation explorer for GraphQL schemas"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a GraphQL SDL file (overrides schema.path from .schemadoc.yml)
    #[arg(short, long, global = true, env = "SCHEMADOC_SCHEMA")]
    pub schema: Option<String>,

    /// Enable verbose (DEBUG) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Write structured logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the documentation page for a type, a field call, or the schema roots
    #[command(visible_alias = "p")]
    Page {
        /// Type name; wrapper notation such as `User!` or `[User]` is accepted.
        /// Omit to print the start page with the root types.
        type_name: Option<String>,

        /// Show this field of TYPE_NAME as a call page with its arguments
        #[arg(short, long, requires = "type_name")]
        field: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every named type in the schema
    #[command(visible_alias = "ls")]
    Types {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse the schema interactively in the terminal
    Explore,
}
