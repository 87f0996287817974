//! # Recipebox Architecture
//!
//! Recipebox keeps a local view of a remote recipe collection in sync with the
//! service that owns it. A single form adds new recipes or edits existing ones,
//! every record can be deleted, and the whole list is redrawn after each change.
//!
//! The crate is a **UI-agnostic library** with a CLI client on top. The same core
//! renders an HTML page (the form, the status line and the list) and drives the
//! terminal commands.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints output, owns exit codes         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns store, cache, form and view state                   │
//! │  - Resolves display positions to record ids                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load, submit, edit, delete, config                       │
//! │  - Validation gating and cache reconciliation               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecipeStore trait                                        │
//! │  - HttpStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//!
//! Records are addressed by the id the store assigned, never by their position in
//! the list. Positions exist only at the edges: the CLI accepts 1-based indexes and
//! resolves them against the list it just loaded, and rendered markup carries the
//! id in `data-id` on each control.
//!
//! ## Success Is Earned
//!
//! Nothing on the success path runs before the store confirmed the change. A
//! rejected form or a failed request leaves the form, its mode and the cache as
//! they were, and the error is both shown and returned.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade UIs talk to
//! - [`commands`]: One module per operation
//! - [`store`]: Storage trait, HTTP client and in-memory double
//! - [`cache`]: The last list the store returned
//! - [`form`]: Field values and the add/edit state machine
//! - [`render`]: HTML templates for the list and the page
//! - [`model`]: `Recipe`, `RecipeDraft`, `RecipeId`
//! - [`config`]: Persistent settings
//! - [`init`]: Context wiring for the CLI
//! - [`error`]: Error types

pub mod api;
pub mod cache;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod init;
pub mod model;
pub mod render;
pub mod store;
