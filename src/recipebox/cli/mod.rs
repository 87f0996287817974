//! # CLI Behavior
//!
//! A terminal client for the recipebox library. For the layering, see the
//! crate-level documentation of the library.
//!
//! ## Naked Execution
//!
//! Running `recipebox` with no arguments is `recipebox list`.
//!
//! ## Positions and Ids
//!
//! Commands that take an `INDEX` load the list, resolve the 1-based position
//! against it, and from then on address the record by the id the store gave it.
//! `edit` starts from the record's current fields and overrides only the flags
//! given; repeated `-i`/`-s` flags become one line each.
//!
//! ## Module Structure
//!
//! - `commands`: dispatch and per-command handlers
//! - `render`: terminal output through templates
//! - `setup`: argument parsing via clap
//! - `styles`: named terminal styles
//! - `templates`: embedded output templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
