//! # Local Cache
//!
//! [`RecipeCache`] mirrors the store's list in store order. It is the only source the
//! renderers draw from, so every successful mutation must reconcile it (see
//! [`crate::config::RefreshPolicy`]).
//!
//! Positions are only meaningful against the snapshot they were read from; anything
//! that outlives a redraw should hold a [`RecipeId`] instead.

use crate::model::{Recipe, RecipeDraft, RecipeId};

#[derive(Debug, Clone, Default)]
pub struct RecipeCache {
    records: Vec<Recipe>,
}

impl RecipeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&mut self, records: Vec<Recipe>) {
        self.records = records;
    }

    pub fn records(&self) -> &[Recipe] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Zero-based position lookup.
    pub fn id_at(&self, position: usize) -> Option<&RecipeId> {
        self.records.get(position).map(|r| &r.id)
    }

    pub fn find(&self, id: &RecipeId) -> Option<&Recipe> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn position_of(&self, id: &RecipeId) -> Option<usize> {
        self.records.iter().position(|r| &r.id == id)
    }

    pub fn apply_created(&mut self, record: Recipe) {
        self.records.push(record);
    }

    /// Replaces the fields of the record in place, keeping its position.
    pub fn apply_updated(&mut self, id: &RecipeId, draft: RecipeDraft) -> bool {
        match self.records.iter_mut().find(|r| &r.id == id) {
            Some(record) => {
                *record = Recipe::from_draft(id.clone(), draft);
                true
            }
            None => false,
        }
    }

    pub fn apply_removed(&mut self, id: &RecipeId) -> Option<Recipe> {
        let position = self.position_of(id)?;
        Some(self.records.remove(position))
    }
}
