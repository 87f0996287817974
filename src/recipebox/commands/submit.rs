use crate::cache::RecipeCache;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::RefreshPolicy;
use crate::error::{MutationKind, RecipeError, Result};
use crate::form::{FormController, FormMode};
use crate::model::Recipe;
use crate::store::RecipeStore;
use tracing::{debug, info, warn};

use super::helpers::{reconcile, CacheChange};

/// Validates the form and sends it as a create (add mode) or update (edit mode).
///
/// The form is only cleared and returned to add mode once the store accepted the
/// change. Validation and store failures leave fields and mode as they were.
pub fn run<S: RecipeStore>(
    store: &mut S,
    cache: &mut RecipeCache,
    form: &mut FormController,
    policy: RefreshPolicy,
) -> Result<CmdResult> {
    let draft = form.validate().map_err(|e| {
        debug!(reason = %e, "form rejected");
        RecipeError::from(e)
    })?;
    let success = form.success_message();

    let (change, affected) = match form.mode().clone() {
        FormMode::Add => {
            let created = store.create(&draft).map_err(|e| {
                warn!(error = %e, "create failed");
                RecipeError::mutation(MutationKind::Create, e)
            })?;
            info!(name = %draft.name, "recipe created");
            let affected: Vec<Recipe> = created.iter().cloned().collect();
            (CacheChange::Created(created), affected)
        }
        FormMode::Edit(id) => {
            store.update(&id, &draft).map_err(|e| {
                warn!(error = %e, id = %id, "update failed");
                RecipeError::mutation(MutationKind::Update, e)
            })?;
            info!(id = %id, "recipe updated");
            let affected = vec![Recipe::from_draft(id.clone(), draft.clone())];
            (CacheChange::Updated(id, draft), affected)
        }
    };

    form.reset();

    let mut result = CmdResult::default().with_affected(affected);
    if let Err(e) = reconcile(store, cache, policy, change) {
        result.load_error = Some(e.to_string());
    }
    result.listed = cache.records().to_vec();
    result.add_message(CmdMessage::success(success));
    Ok(result)
}
