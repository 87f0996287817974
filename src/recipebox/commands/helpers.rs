use crate::cache::RecipeCache;
use crate::config::RefreshPolicy;
use crate::error::{RecipeError, Result};
use crate::model::{Recipe, RecipeDraft, RecipeId};
use crate::store::RecipeStore;
use tracing::{debug, warn};

/// A mutation the store has already accepted.
#[derive(Debug, Clone)]
pub enum CacheChange {
    /// The created record, when the store echoed it back.
    Created(Option<Recipe>),
    Updated(RecipeId, RecipeDraft),
    Removed(RecipeId),
}

/// Lists the store and replaces the cache. The cache is untouched on failure.
pub fn refetch<S: RecipeStore>(store: &S, cache: &mut RecipeCache) -> Result<()> {
    match store.list() {
        Ok(recipes) => {
            debug!(count = recipes.len(), "cache refreshed");
            cache.replace_all(recipes);
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "listing recipes failed");
            Err(RecipeError::Load(e.to_string()))
        }
    }
}

/// Brings the cache in line with the store after `change` succeeded.
pub fn reconcile<S: RecipeStore>(
    store: &S,
    cache: &mut RecipeCache,
    policy: RefreshPolicy,
    change: CacheChange,
) -> Result<()> {
    if policy == RefreshPolicy::Refetch {
        return refetch(store, cache);
    }

    match change {
        CacheChange::Created(Some(record)) => cache.apply_created(record),
        // Without the store's id the new record cannot be addressed locally.
        CacheChange::Created(None) => return refetch(store, cache),
        CacheChange::Updated(id, draft) => {
            if !cache.apply_updated(&id, draft) {
                return refetch(store, cache);
            }
        }
        CacheChange::Removed(id) => {
            cache.apply_removed(&id);
        }
    }
    Ok(())
}

/// Maps 1-based display positions to ids in the current cache.
pub fn resolve_positions(cache: &RecipeCache, positions: &[usize]) -> Result<Vec<RecipeId>> {
    positions
        .iter()
        .map(|&position| {
            position
                .checked_sub(1)
                .and_then(|i| cache.id_at(i))
                .cloned()
                .ok_or_else(|| RecipeError::Api(format!("Index {} not found", position)))
        })
        .collect()
}
