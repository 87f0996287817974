use crate::cache::RecipeCache;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::RecipeStore;

use super::helpers::refetch;

pub fn run<S: RecipeStore>(store: &S, cache: &mut RecipeCache) -> Result<CmdResult> {
    refetch(store, cache)?;
    Ok(CmdResult::default().with_listed(cache.records().to_vec()))
}
