//! # Storage Layer
//!
//! The [`RecipeStore`] trait is the client side of the remote recipe service. The rest
//! of the crate only sees these four operations, which keeps the form and cache logic
//! testable without a network.
//!
//! ## Implementations
//!
//! - [`http::HttpStore`]: the production client, one blocking HTTP round-trip per call
//!   against `{api_url}/recipes`.
//! - [`memory::InMemoryStore`]: for tests and development. Assigns ids itself, records
//!   every request it receives and can be told to fail.
//!
//! ## Wire Contract
//!
//! ```text
//! GET    /recipes        -> JSON array of records
//! POST   /recipes        <- draft (no id)      -> optional created record
//! PUT    /recipes/{id}   <- draft (full set)
//! DELETE /recipes/{id}
//! ```
//!
//! No retries. Any non-success status is an error.

use crate::error::Result;
use crate::model::{Recipe, RecipeDraft, RecipeId};

pub mod http;
pub mod memory;

pub trait RecipeStore {
    /// Fetch every record, in the store's order
    fn list(&self) -> Result<Vec<Recipe>>;

    /// Create a record. Returns the stored record when the store echoes it back.
    fn create(&mut self, draft: &RecipeDraft) -> Result<Option<Recipe>>;

    /// Replace every field of an existing record
    fn update(&mut self, id: &RecipeId, draft: &RecipeDraft) -> Result<()>;

    /// Remove a record
    fn delete(&mut self, id: &RecipeId) -> Result<()>;
}
