use crate::cache::RecipeCache;
use crate::commands::CmdResult;
use crate::error::{RecipeError, Result};
use crate::form::FormController;
use crate::model::RecipeId;
use tracing::debug;

/// Loads the cached record into the form and switches it to edit mode.
pub fn run(cache: &RecipeCache, form: &mut FormController, id: &RecipeId) -> Result<CmdResult> {
    let recipe = cache
        .find(id)
        .ok_or_else(|| RecipeError::NotFound(id.clone()))?;
    form.enter_edit(recipe);
    debug!(mode = %form.mode(), "form switched");
    Ok(CmdResult::default().with_affected(vec![recipe.clone()]))
}
