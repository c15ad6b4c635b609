//! Terminal user interface for schemadoc.
//!
//! An interactive documentation explorer built with ratatui. The UI owns
//! no schema knowledge: it renders the page descriptor the navigation
//! engine hands it and translates key presses back into engine
//! transitions.
//!
//! ## Usage
//!
//! ```bash
//! schemadoc --schema schema.graphql explore
//! ```
//!
//! ## Keybindings
//!
//! - `↑/↓` or `j/k`: Move between links
//! - `Enter`: Follow the selected link (type page or field call)
//! - `t`: Open the type of the selected field
//! - `Backspace`, `h` or `←`: Go back one page
//! - `m`: Back to the main page
//! - `Tab` or `d`: Show/hide the explorer
//! - `?`: Help
//! - `q`: Quit

pub mod app;
mod ui;

pub use app::run_tui;
