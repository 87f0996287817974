use crate::model::RecipeId;
use thiserror::Error;

/// Rejections raised by the form before any request is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingFields,

    #[error("Invalid image URL")]
    InvalidImageUrl,
}

/// The store operation a [`RecipeError::Mutation`] was attempting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for MutationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MutationKind::Create => write!(f, "creating"),
            MutationKind::Update => write!(f, "updating"),
            MutationKind::Delete => write!(f, "deleting"),
        }
    }
}

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Error loading recipes")]
    Load(String),

    #[error("Error {action} recipe: {reason}")]
    Mutation { action: MutationKind, reason: String },

    #[error("Recipe not found: {0}")]
    NotFound(RecipeId),

    #[error("Network error: {0}")]
    Http(String),

    #[error("Store responded with {status} for {url}")]
    Status { status: u16, url: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

impl RecipeError {
    /// Wraps a store failure into the message shown for a failed mutation.
    pub fn mutation(action: MutationKind, cause: RecipeError) -> Self {
        RecipeError::Mutation {
            action,
            reason: cause.to_string(),
        }
    }
}

impl From<reqwest::Error> for RecipeError {
    fn from(err: reqwest::Error) -> Self {
        RecipeError::Http(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RecipeError>;
