use super::RecipeStore;
use crate::error::{RecipeError, Result};
use crate::model::{Recipe, RecipeDraft, RecipeId};
use std::cell::RefCell;

/// A request as the store saw it, for asserting on traffic in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreRequest {
    List,
    Create(RecipeDraft),
    Update(RecipeId, RecipeDraft),
    Delete(RecipeId),
}

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug)]
pub struct InMemoryStore {
    recipes: Vec<Recipe>,
    next_id: u64,
    echo_created: bool,
    failure: Option<String>,
    // `list` takes &self like every other store, but still has to be logged.
    requests: RefCell<Vec<StoreRequest>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            recipes: Vec::new(),
            next_id: 1,
            echo_created: true,
            failure: None,
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a record as if another client had created it.
    pub fn insert(&mut self, draft: RecipeDraft) -> RecipeId {
        let id = RecipeId::Number(self.next_id);
        self.next_id += 1;
        self.recipes.push(Recipe::from_draft(id.clone(), draft));
        id
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn requests(&self) -> Vec<StoreRequest> {
        self.requests.borrow().clone()
    }

    /// Requests other than `List`.
    pub fn mutations(&self) -> Vec<StoreRequest> {
        self.requests
            .borrow()
            .iter()
            .filter(|r| !matches!(r, StoreRequest::List))
            .cloned()
            .collect()
    }

    pub fn clear_requests(&self) {
        self.requests.borrow_mut().clear();
    }

    /// Every following request fails with `message` until [`Self::recover`].
    pub fn fail_with(&mut self, message: impl Into<String>) {
        self.failure = Some(message.into());
    }

    pub fn recover(&mut self) {
        self.failure = None;
    }

    /// Whether `create` returns the stored record, like stores that echo the body.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn set_echo_created(&mut self, echo: bool) {
        self.echo_created = echo;
    }

    fn record(&self, request: StoreRequest) -> Result<()> {
        self.requests.borrow_mut().push(request);
        match &self.failure {
            Some(message) => Err(RecipeError::Http(message.clone())),
            None => Ok(()),
        }
    }

    fn missing(id: &RecipeId) -> RecipeError {
        RecipeError::Status {
            status: 404,
            url: format!("memory:///recipes/{}", id),
        }
    }
}

impl RecipeStore for InMemoryStore {
    fn list(&self) -> Result<Vec<Recipe>> {
        self.record(StoreRequest::List)?;
        Ok(self.recipes.clone())
    }

    fn create(&mut self, draft: &RecipeDraft) -> Result<Option<Recipe>> {
        self.record(StoreRequest::Create(draft.clone()))?;
        let id = self.insert(draft.clone());
        if !self.echo_created {
            return Ok(None);
        }
        Ok(self.recipes.iter().find(|r| r.id == id).cloned())
    }

    fn update(&mut self, id: &RecipeId, draft: &RecipeDraft) -> Result<()> {
        self.record(StoreRequest::Update(id.clone(), draft.clone()))?;
        let record = self
            .recipes
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| Self::missing(id))?;
        *record = Recipe::from_draft(id.clone(), draft.clone());
        Ok(())
    }

    fn delete(&mut self, id: &RecipeId) -> Result<()> {
        self.record(StoreRequest::Delete(id.clone()))?;
        let position = self
            .recipes
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| Self::missing(id))?;
        self.recipes.remove(position);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn soup() -> RecipeDraft {
        RecipeDraft::new(
            "Soup",
            vec!["water".to_string(), "salt".to_string()],
            "Boil\nServe",
            "http://x/img.png",
        )
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_recipes(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store.insert(RecipeDraft::new(
                    format!("Recipe {}", i + 1),
                    vec![format!("ingredient {}", i + 1)],
                    format!("Step one\nStep two of {}", i + 1),
                    format!("http://img.test/{}.png", i + 1),
                ));
            }
            self
        }

        pub fn with_recipe(mut self, draft: RecipeDraft) -> Self {
            self.store.insert(draft);
            self
        }

        pub fn with_soup(self) -> Self {
            self.with_recipe(soup())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{soup, StoreFixture};
    use super::*;

    #[test]
    fn assigns_sequential_ids() {
        let mut store = InMemoryStore::new();
        let first = store.create(&soup()).unwrap().unwrap();
        let second = store.create(&soup()).unwrap().unwrap();
        assert_eq!(first.id, RecipeId::Number(1));
        assert_eq!(second.id, RecipeId::Number(2));
    }

    #[test]
    fn records_every_request() {
        let mut store = StoreFixture::new().with_soup().store;
        store.list().unwrap();
        store.delete(&RecipeId::Number(1)).unwrap();

        assert_eq!(
            store.requests(),
            vec![StoreRequest::List, StoreRequest::Delete(RecipeId::Number(1))]
        );
        assert_eq!(store.mutations().len(), 1);
    }

    #[test]
    fn failing_store_rejects_and_keeps_data() {
        let mut store = StoreFixture::new().with_recipes(2).store;
        store.fail_with("connection refused");

        assert!(store.delete(&RecipeId::Number(1)).is_err());
        assert!(store.list().is_err());

        store.recover();
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let mut store = InMemoryStore::new();
        let err = store.update(&RecipeId::Number(4), &soup()).unwrap_err();
        assert!(matches!(err, RecipeError::Status { status: 404, .. }));
    }

    #[test]
    fn create_without_echo_returns_none() {
        let mut store = InMemoryStore::new();
        store.set_echo_created(false);
        assert!(store.create(&soup()).unwrap().is_none());
        assert_eq!(store.recipes().len(), 1);
    }
}
