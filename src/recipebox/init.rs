use crate::api::RecipeApi;
use crate::config::AppConfig;
use crate::error::{RecipeError, Result};
use crate::store::http::HttpStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_DIR_ENV: &str = "RECIPEBOX_CONFIG_DIR";

pub struct RecipeContext {
    pub api: RecipeApi<HttpStore>,
    pub config: AppConfig,
    pub config_dir: PathBuf,
}

/// `RECIPEBOX_CONFIG_DIR` when set, otherwise the platform config directory.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "recipebox", "recipebox")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| RecipeError::Config("Could not determine config dir".into()))
}

/// Loads `config.json` and layers the environment and `api_url` flag on top.
pub fn resolve_config(config_dir: &Path, api_url: Option<&str>) -> Result<AppConfig> {
    let mut config = AppConfig::load(config_dir)?.with_env_overrides();
    if let Some(url) = api_url {
        config.api_url = url.trim_end_matches('/').to_string();
    }
    config.validate()?;
    Ok(config)
}

pub fn initialize(config_dir: &Path, api_url: Option<&str>) -> Result<RecipeContext> {
    let config = resolve_config(config_dir, api_url)?;
    debug!(api_url = %config.api_url, refresh = %config.refresh, "context ready");

    let store = HttpStore::from_config(&config)?;
    let api = RecipeApi::new(store, config.refresh);

    Ok(RecipeContext {
        api,
        config,
        config_dir: config_dir.to_path_buf(),
    })
}
