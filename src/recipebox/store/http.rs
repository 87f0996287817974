use super::RecipeStore;
use crate::config::AppConfig;
use crate::error::{RecipeError, Result};
use crate::model::{Recipe, RecipeDraft, RecipeId};
use reqwest::blocking::{Client, Response};
use std::time::Duration;
use tracing::debug;
use url::Url;

const COLLECTION: &str = "recipes";

/// Client for the remote recipe service.
pub struct HttpStore {
    client: Client,
    collection: Url,
}

impl HttpStore {
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self> {
        let base = api_url.trim_end_matches('/');
        let collection = Url::parse(&format!("{}/{}", base, COLLECTION))
            .map_err(|e| RecipeError::Config(format!("invalid api url {}: {}", api_url, e)))?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, collection })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(&config.api_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn collection_url(&self) -> &Url {
        &self.collection
    }

    /// `/recipes/{id}`, with the id percent-encoded as one path segment.
    pub fn record_url(&self, id: &RecipeId) -> Result<Url> {
        let mut url = self.collection.clone();
        url.path_segments_mut()
            .map_err(|_| {
                RecipeError::Config(format!("api url cannot take a path: {}", self.collection))
            })?
            .push(&id.to_string());
        Ok(url)
    }
}

fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(RecipeError::Status {
        status: status.as_u16(),
        url: response.url().to_string(),
    })
}

impl RecipeStore for HttpStore {
    fn list(&self) -> Result<Vec<Recipe>> {
        debug!(url = %self.collection, "GET");
        let response = ensure_success(self.client.get(self.collection.clone()).send()?)?;
        let body = response.text()?;
        let recipes: Vec<Recipe> = serde_json::from_str(&body)?;
        debug!(count = recipes.len(), "listed recipes");
        Ok(recipes)
    }

    fn create(&mut self, draft: &RecipeDraft) -> Result<Option<Recipe>> {
        debug!(url = %self.collection, name = %draft.name, "POST");
        let response = ensure_success(
            self.client
                .post(self.collection.clone())
                .json(draft)
                .send()?,
        )?;
        // Stores are not required to echo the record back.
        let body = response.text().unwrap_or_default();
        Ok(serde_json::from_str::<Recipe>(&body).ok())
    }

    fn update(&mut self, id: &RecipeId, draft: &RecipeDraft) -> Result<()> {
        let url = self.record_url(id)?;
        debug!(url = %url, name = %draft.name, "PUT");
        ensure_success(self.client.put(url).json(draft).send()?)?;
        Ok(())
    }

    fn delete(&mut self, id: &RecipeId) -> Result<()> {
        let url = self.record_url(id)?;
        debug!(url = %url, "DELETE");
        ensure_success(self.client.delete(url).send()?)?;
        Ok(())
    }
}
