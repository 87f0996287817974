use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Store-assigned identifier. The store decides the shape, so both JSON
/// numbers and strings are accepted and echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeId {
    Number(u64),
    /// Negative or fractional numbers, kept as the store sent them.
    OtherNumber(serde_json::Number),
    Text(String),
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecipeId::Number(n) => write!(f, "{}", n),
            RecipeId::OtherNumber(n) => write!(f, "{}", n),
            RecipeId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for RecipeId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<u64>() {
            Ok(n) => RecipeId::Number(n),
            Err(_) => RecipeId::Text(s.to_string()),
        })
    }
}

impl From<u64> for RecipeId {
    fn from(n: u64) -> Self {
        RecipeId::Number(n)
    }
}

impl From<&str> for RecipeId {
    fn from(s: &str) -> Self {
        RecipeId::Text(s.to_string())
    }
}

/// The field set sent on create and update. Updates replace the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: String,
    pub image: String,
}

impl RecipeDraft {
    pub fn new(
        name: impl Into<String>,
        ingredients: Vec<String>,
        steps: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients,
            steps: steps.into(),
            image: image.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "ingredients_from_list_or_text")]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: String,
    #[serde(default)]
    pub image: String,
}

impl Recipe {
    pub fn from_draft(id: RecipeId, draft: RecipeDraft) -> Self {
        Self {
            id,
            name: draft.name,
            ingredients: draft.ingredients,
            steps: draft.steps,
            image: draft.image,
        }
    }

    pub fn draft(&self) -> RecipeDraft {
        RecipeDraft {
            name: self.name.clone(),
            ingredients: self.ingredients.clone(),
            steps: self.steps.clone(),
            image: self.image.clone(),
        }
    }

    /// Ingredients as a single line, the way a JS array stringifies.
    pub fn ingredients_line(&self) -> String {
        self.ingredients.join(",")
    }

    /// Steps split on newlines and trimmed. Blank steps text yields no steps.
    pub fn step_lines(&self) -> Vec<String> {
        if self.steps.is_empty() {
            return Vec::new();
        }
        self.steps
            .split('\n')
            .map(|step| step.trim().to_string())
            .collect()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IngredientsRepr {
    List(Vec<String>),
    Text(String),
}

// Records written by other clients sometimes carry the raw textarea value.
fn ingredients_from_list_or_text<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match IngredientsRepr::deserialize(deserializer)? {
        IngredientsRepr::List(items) => items,
        IngredientsRepr::Text(text) => text.split('\n').map(String::from).collect(),
    })
}
