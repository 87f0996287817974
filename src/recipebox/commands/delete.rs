use crate::cache::RecipeCache;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::RefreshPolicy;
use crate::error::{MutationKind, RecipeError, Result};
use crate::form::FormController;
use crate::model::RecipeId;
use crate::store::RecipeStore;
use tracing::{info, warn};

use super::helpers::{reconcile, CacheChange};

pub const DELETED_MESSAGE: &str = "Recipe deleted successfully!";

pub fn run<S: RecipeStore>(
    store: &mut S,
    cache: &mut RecipeCache,
    form: &mut FormController,
    id: &RecipeId,
    policy: RefreshPolicy,
) -> Result<CmdResult> {
    let removed = cache
        .find(id)
        .cloned()
        .ok_or_else(|| RecipeError::NotFound(id.clone()))?;

    store.delete(id).map_err(|e| {
        warn!(error = %e, id = %id, "delete failed");
        RecipeError::mutation(MutationKind::Delete, e)
    })?;
    info!(id = %id, "recipe deleted");

    // The record being edited is gone; saving it would only 404.
    if form.mode().edit_target() == Some(id) {
        form.reset();
    }

    let mut result = CmdResult::default().with_affected(vec![removed]);
    if let Err(e) = reconcile(store, cache, policy, CacheChange::Removed(id.clone())) {
        result.load_error = Some(e.to_string());
    }
    result.listed = cache.records().to_vec();
    result.add_message(CmdMessage::success(DELETED_MESSAGE));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{edit, load};
    use crate::form::FormMode;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::{InMemoryStore, StoreRequest};

    fn setup(count: usize) -> (InMemoryStore, RecipeCache, FormController) {
        let store = StoreFixture::new().with_recipes(count).store;
        let mut cache = RecipeCache::new();
        load::run(&store, &mut cache).unwrap();
        store.clear_requests();
        (store, cache, FormController::new())
    }

    #[test]
    fn sends_one_delete_and_redraws() {
        let (mut store, mut cache, mut form) = setup(3);
        let id = cache.id_at(1).cloned().unwrap();

        let result = run(&mut store, &mut cache, &mut form, &id, RefreshPolicy::Refetch).unwrap();

        assert_eq!(store.mutations(), vec![StoreRequest::Delete(id.clone())]);
        assert_eq!(result.listed.len(), 2);
        assert!(cache.find(&id).is_none());
        assert_eq!(result.affected[0].name, "Recipe 2");
        assert_eq!(result.last_message().unwrap().content, DELETED_MESSAGE);
    }

    #[test]
    fn failed_delete_keeps_cache() {
        let (mut store, mut cache, mut form) = setup(2);
        store.fail_with("connection reset");

        let err = run(
            &mut store,
            &mut cache,
            &mut form,
            &RecipeId::Number(1),
            RefreshPolicy::Refetch,
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Error deleting recipe: Network error: connection reset"
        );
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn deleting_the_edit_target_resets_form() {
        let (mut store, mut cache, mut form) = setup(2);
        edit::run(&cache, &mut form, &RecipeId::Number(2)).unwrap();

        run(
            &mut store,
            &mut cache,
            &mut form,
            &RecipeId::Number(2),
            RefreshPolicy::Local,
        )
        .unwrap();

        assert_eq!(form.mode(), &FormMode::Add);
        assert!(form.fields().is_blank());
    }

    #[test]
    fn deleting_another_record_keeps_edit_mode() {
        let (mut store, mut cache, mut form) = setup(2);
        edit::run(&cache, &mut form, &RecipeId::Number(2)).unwrap();

        run(
            &mut store,
            &mut cache,
            &mut form,
            &RecipeId::Number(1),
            RefreshPolicy::Local,
        )
        .unwrap();

        assert_eq!(form.mode(), &FormMode::Edit(RecipeId::Number(2)));
        assert_eq!(form.fields().name, "Recipe 2");
    }

    #[test]
    fn second_delete_of_same_id_is_not_found() {
        let (mut store, mut cache, mut form) = setup(1);
        let id = RecipeId::Number(1);
        run(&mut store, &mut cache, &mut form, &id, RefreshPolicy::Refetch).unwrap();
        store.clear_requests();

        let err = run(&mut store, &mut cache, &mut form, &id, RefreshPolicy::Refetch).unwrap_err();

        assert!(matches!(err, RecipeError::NotFound(RecipeId::Number(1))));
        assert!(store.requests().is_empty());
        assert!(cache.is_empty());
    }

    #[test]
    fn uncached_id_sends_no_request() {
        let (mut store, mut cache, mut form) = setup(2);

        let err = run(
            &mut store,
            &mut cache,
            &mut form,
            &RecipeId::Number(99),
            RefreshPolicy::Local,
        )
        .unwrap_err();

        assert!(matches!(err, RecipeError::NotFound(_)));
        assert!(store.requests().is_empty());
        assert_eq!(cache.len(), 2);
    }
}
