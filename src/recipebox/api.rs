//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for UIs. Where the command functions are stateless, `RecipeApi` owns the
//! state a page keeps between interactions:
//!
//! - the store handle
//! - the recipe cache (the last list the store returned)
//! - the form controller (field values plus add/edit mode)
//! - the view state (the status line and the load-error line)
//!
//! ## Status Routing
//!
//! Every outcome lands in exactly one status slot, and the latest one overwrites
//! whatever was there. Load failures are kept apart in `load_error` so a failing
//! refresh never hides the result of the mutation that preceded it. A successful
//! reload clears `load_error` again.
//!
//! Errors are recorded in the view state **and** returned, so callers can gate
//! their own follow-up (the CLI exits non-zero, tests assert on the variant).
//!
//! ## Generic Over RecipeStore
//!
//! - Production: `RecipeApi<HttpStore>`
//! - Testing: `RecipeApi<InMemoryStore>`

use crate::cache::RecipeCache;
use crate::commands::{self, helpers};
use crate::config::RefreshPolicy;
use crate::error::{RecipeError, Result};
use crate::form::{FormController, FormFields};
use crate::model::{Recipe, RecipeId};
use crate::render::{self, PageModel};
use crate::store::RecipeStore;

/// What the status and load-error regions currently show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub status: Option<CmdMessage>,
    pub load_error: Option<String>,
}

pub struct RecipeApi<S: RecipeStore> {
    store: S,
    cache: RecipeCache,
    form: FormController,
    policy: RefreshPolicy,
    view: ViewState,
}

impl<S: RecipeStore> RecipeApi<S> {
    pub fn new(store: S, policy: RefreshPolicy) -> Self {
        Self {
            store,
            cache: RecipeCache::new(),
            form: FormController::new(),
            policy,
            view: ViewState::default(),
        }
    }

    pub fn load(&mut self) -> Result<CmdResult> {
        let outcome = commands::load::run(&self.store, &mut self.cache);
        self.record(outcome, true)
    }

    /// Replaces the form's field values; the mode is left alone.
    pub fn fill_form(&mut self, fields: FormFields) {
        self.form.set_fields(fields);
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn submit(&mut self) -> Result<CmdResult> {
        let outcome =
            commands::submit::run(&mut self.store, &mut self.cache, &mut self.form, self.policy);
        self.record(outcome, true)
    }

    pub fn begin_edit(&mut self, id: &RecipeId) -> Result<CmdResult> {
        let outcome = commands::edit::run(&self.cache, &mut self.form, id);
        self.record(outcome, false)
    }

    pub fn cancel_edit(&mut self) {
        self.form.reset();
    }

    pub fn delete(&mut self, id: &RecipeId) -> Result<CmdResult> {
        let outcome = commands::delete::run(
            &mut self.store,
            &mut self.cache,
            &mut self.form,
            id,
            self.policy,
        );
        self.record(outcome, true)
    }

    /// Resolves a 1-based display position against the current cache.
    pub fn id_at(&self, position: usize) -> Result<RecipeId> {
        helpers::resolve_positions(&self.cache, &[position])?
            .pop()
            .ok_or_else(|| RecipeError::Api(format!("Index {} not found", position)))
    }

    pub fn recipes(&self) -> &[Recipe] {
        self.cache.records()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn policy(&self) -> RefreshPolicy {
        self.policy
    }

    pub fn render_list(&self) -> Result<String> {
        render::render_recipe_list(self.cache.records())
    }

    pub fn render_page(&self) -> Result<String> {
        render::render_page(&PageModel {
            recipes: self.cache.records(),
            form: &self.form,
            status: self.view.status.as_ref(),
            load_error: self.view.load_error.as_deref(),
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn record(&mut self, outcome: Result<CmdResult>, reloads: bool) -> Result<CmdResult> {
        match &outcome {
            Ok(result) => {
                if let Some(message) = result.last_message() {
                    self.view.status = Some(message.clone());
                }
                if result.load_error.is_some() {
                    self.view.load_error = result.load_error.clone();
                } else if reloads {
                    self.view.load_error = None;
                }
            }
            Err(e @ RecipeError::Load(_)) => {
                self.view.load_error = Some(e.to_string());
            }
            Err(e) => {
                self.view.status = Some(CmdMessage::error(e.to_string()));
            }
        }
        outcome
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::form::{FormMode, ADDED_MESSAGE, MODIFIED_MESSAGE};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::{InMemoryStore, StoreRequest};

    fn api_with(count: usize) -> RecipeApi<InMemoryStore> {
        let store = StoreFixture::new().with_recipes(count).store;
        let mut api = RecipeApi::new(store, RefreshPolicy::Refetch);
        api.load().unwrap();
        api.store().clear_requests();
        api
    }

    fn soup_fields() -> FormFields {
        FormFields::new("Soup", "water\nsalt", "Boil\nServe", "http://x/img.png")
    }

    #[test]
    fn load_renders_every_record_in_order() {
        let api = api_with(4);

        let html = api.render_list().unwrap();

        assert_eq!(html.matches("class=\"one-recipe\"").count(), 4);
        let first = html.find("Recipe 1").unwrap();
        let last = html.find("Recipe 4").unwrap();
        assert!(first < last);
        assert_eq!(api.view(), &ViewState::default());
    }

    #[test]
    fn load_failure_goes_to_load_error_region() {
        let mut store = StoreFixture::new().with_recipes(2).store;
        store.fail_with("connection refused");
        let mut api = RecipeApi::new(store, RefreshPolicy::Refetch);

        let err = api.load().unwrap_err();

        assert!(matches!(err, RecipeError::Load(_)));
        assert_eq!(
            api.view().load_error.as_deref(),
            Some("Error loading recipes")
        );
        assert!(api.view().status.is_none());
        assert!(api.recipes().is_empty());

        api.store_mut().recover();
        api.load().unwrap();
        assert!(api.view().load_error.is_none());
        assert_eq!(api.recipes().len(), 2);
    }

    #[test]
    fn add_flow_sends_one_create_and_clears_form() {
        let mut api = api_with(1);
        api.fill_form(soup_fields());

        api.submit().unwrap();

        let creates: Vec<_> = api
            .store()
            .mutations()
            .into_iter()
            .filter(|r| matches!(r, StoreRequest::Create(_)))
            .collect();
        assert_eq!(creates.len(), 1);
        if let StoreRequest::Create(draft) = &creates[0] {
            assert_eq!(draft.ingredients, vec!["water", "salt"]);
            assert_eq!(draft.steps, "Boil\nServe");
        }
        assert!(api.form().fields().is_blank());
        assert_eq!(api.form().mode(), &FormMode::Add);
        assert_eq!(api.recipes().len(), 2);
        assert_eq!(
            api.view().status,
            Some(CmdMessage::success(ADDED_MESSAGE))
        );
    }

    #[test]
    fn missing_field_is_reported_without_request() {
        let mut api = api_with(1);
        let fields = FormFields {
            steps: String::new(),
            ..soup_fields()
        };
        api.fill_form(fields.clone());

        let err = api.submit().unwrap_err();

        assert!(matches!(
            err,
            RecipeError::Validation(ValidationError::MissingFields)
        ));
        assert!(api.store().requests().is_empty());
        assert_eq!(api.form().fields(), &fields);
        assert_eq!(
            api.view().status,
            Some(CmdMessage::error("Please fill in all fields."))
        );
    }

    #[test]
    fn invalid_image_url_shows_red_status() {
        let mut api = api_with(1);
        api.fill_form(FormFields {
            image: "not a url".into(),
            ..soup_fields()
        });

        assert!(api.submit().is_err());

        assert!(api.store().requests().is_empty());
        let html = api.render_page().unwrap();
        assert!(html.contains("style=\"color: red\">Invalid image URL</p>"));
    }

    #[test]
    fn edit_flow_updates_target_and_returns_to_add() {
        let mut api = api_with(3);
        let id = api.id_at(2).unwrap();

        api.begin_edit(&id).unwrap();
        assert_eq!(api.form().mode(), &FormMode::Edit(id.clone()));
        assert_eq!(api.form().submit_label(), "Save");
        assert_eq!(api.form().fields().name, "Recipe 2");

        let mut fields = api.form().fields().clone();
        fields.name = "Renamed".into();
        api.fill_form(fields);
        api.submit().unwrap();

        let updates: Vec<_> = api
            .store()
            .mutations()
            .into_iter()
            .filter_map(|r| match r {
                StoreRequest::Update(target, _) => Some(target),
                _ => None,
            })
            .collect();
        assert_eq!(updates, vec![id]);
        assert_eq!(api.form().mode(), &FormMode::Add);
        assert_eq!(api.recipes()[1].name, "Renamed");
        assert_eq!(
            api.view().status,
            Some(CmdMessage::success(MODIFIED_MESSAGE))
        );
    }

    #[test]
    fn delete_flow_sends_one_delete_and_redraws() {
        let mut api = api_with(3);
        let id = api.id_at(1).unwrap();

        api.delete(&id).unwrap();

        assert_eq!(api.store().mutations(), vec![StoreRequest::Delete(id)]);
        let html = api.render_list().unwrap();
        assert_eq!(html.matches("class=\"one-recipe\"").count(), 2);
        assert!(!html.contains("Recipe 1"));
    }

    #[test]
    fn failed_create_keeps_form_and_mode() {
        let mut api = api_with(1);
        api.fill_form(soup_fields());
        api.store_mut().fail_with("boom");

        let err = api.submit().unwrap_err();

        assert_eq!(err.to_string(), "Error creating recipe: Network error: boom");
        assert_eq!(api.form().fields(), &soup_fields());
        assert_eq!(api.form().mode(), &FormMode::Add);
        assert!(api.view().status.as_ref().unwrap().is_error());
    }

    #[test]
    fn failed_update_stays_in_edit_mode() {
        let mut api = api_with(2);
        let id = api.id_at(1).unwrap();
        api.begin_edit(&id).unwrap();
        api.store_mut().fail_with("timeout");

        assert!(api.submit().is_err());

        assert_eq!(api.form().mode(), &FormMode::Edit(id));
        assert_eq!(api.form().fields().name, "Recipe 1");
    }

    #[test]
    fn failed_delete_leaves_cache() {
        let mut api = api_with(2);
        let id = api.id_at(2).unwrap();
        api.store_mut().fail_with("reset");

        assert!(api.delete(&id).is_err());

        assert_eq!(api.recipes().len(), 2);
    }

    #[test]
    fn delete_of_uncached_id_is_not_found() {
        let mut api = api_with(2);

        let err = api.delete(&RecipeId::Number(99)).unwrap_err();

        assert!(matches!(err, RecipeError::NotFound(RecipeId::Number(99))));
        assert!(api.store().requests().is_empty());
        assert_eq!(api.recipes().len(), 2);
        assert!(api.view().status.as_ref().unwrap().is_error());
    }

    #[test]
    fn cancel_edit_returns_to_add() {
        let mut api = api_with(1);
        let id = api.id_at(1).unwrap();
        api.begin_edit(&id).unwrap();

        api.cancel_edit();

        assert_eq!(api.form().mode(), &FormMode::Add);
        assert!(api.form().fields().is_blank());
    }

    #[test]
    fn unknown_position_is_an_error() {
        let api = api_with(2);
        assert!(api.id_at(0).is_err());
        assert!(api.id_at(3).is_err());
    }

    #[test]
    fn local_policy_skips_the_refetch() {
        let store = StoreFixture::new().with_recipes(1).store;
        let mut api = RecipeApi::new(store, RefreshPolicy::Local);
        api.load().unwrap();
        api.store().clear_requests();
        api.fill_form(soup_fields());

        api.submit().unwrap();

        assert!(!api.store().requests().contains(&StoreRequest::List));
        assert_eq!(api.recipes().len(), 2);
        assert_eq!(api.recipes()[1].name, "Soup");
    }
}
