//! # Schemadoc - A documentation explorer for GraphQL schemas
//!
//! Schemadoc reads a GraphQL schema from SDL text and lets you browse its
//! documentation: root types, type pages, field calls with their arguments,
//! and a visited-page trail for going back.
//!
//! ## Quick Start
//!
//! ```bash
//! # Print the root types of a schema
//! schemadoc --schema schema.graphql page
//!
//! # Show the page for a type
//! schemadoc --schema schema.graphql page User
//!
//! # Show a field as a call with its arguments
//! schemadoc --schema schema.graphql page Query --field user
//!
//! # Browse interactively
//! schemadoc --schema schema.graphql explore
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`explorer`]: Navigation engine and page content builder
//! - [`schema`]: Read-only schema index built from SDL
//! - [`tui`]: Terminal user interface

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles optional `.schemadoc.yml` configuration files.
pub mod config;

/// Error types and result aliases.
///
/// Defines `SchemadocError` enum and `Result<T>` type alias.
pub mod error;

/// Navigation engine and page content builder.
///
/// The stateful core of the documentation explorer: type-name
/// normalization, page derivation, and the visited-page stack.
pub mod explorer;

/// Read-only schema index.
///
/// Parses SDL into a queryable type map with root type accessors.
pub mod schema;

/// Terminal user interface.
///
/// Interactive explorer built with ratatui.
pub mod tui;

pub mod logging;
