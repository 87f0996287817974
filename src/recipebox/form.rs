//! # Form Controller
//!
//! One form serves both adding and editing. The mode lives here, next to the raw
//! field values, so the add/edit state machine has a single owner:
//!
//! ```text
//!   ADD ──enter_edit(id)──▶ EDIT(id) ──enter_edit(other)──▶ EDIT(other)
//!    ▲                         │
//!    └──── submit succeeded ───┘        (failed submits keep the current mode)
//! ```
//!
//! The controller validates and builds drafts but never talks to the store; the
//! submit command decides when a transition back to `ADD` is earned.

use crate::error::ValidationError;
use crate::model::{Recipe, RecipeDraft, RecipeId};
use serde::Serialize;

pub const ADD_LABEL: &str = "Add Recipe";
pub const SAVE_LABEL: &str = "Save";
pub const ADD_TITLE: &str = "Add Recipe";
pub const EDIT_TITLE: &str = "Edit Recipe";

pub const ADDED_MESSAGE: &str = "Recipe added successfully!";
pub const MODIFIED_MESSAGE: &str = "Recipe modified successfully!";

/// Raw input values, exactly as typed. Ingredients and steps are multi-line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormFields {
    pub name: String,
    pub ingredients: String,
    pub steps: String,
    pub image: String,
}

impl FormFields {
    pub fn new(
        name: impl Into<String>,
        ingredients: impl Into<String>,
        steps: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
            steps: steps.into(),
            image: image.into(),
        }
    }

    /// Fields for editing an existing record, one ingredient per line.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.join("\n"),
            steps: recipe.steps.clone(),
            image: recipe.image.clone(),
        }
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.ingredients.is_empty()
            && self.steps.is_empty()
            && self.image.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Checks presence of every field, then the image URL syntax.
    pub fn validate(&self) -> Result<RecipeDraft, ValidationError> {
        if self.name.is_empty()
            || self.ingredients.is_empty()
            || self.steps.is_empty()
            || self.image.is_empty()
        {
            return Err(ValidationError::MissingFields);
        }

        if !is_valid_url(&self.image) {
            return Err(ValidationError::InvalidImageUrl);
        }

        Ok(RecipeDraft {
            name: self.name.clone(),
            ingredients: self.ingredients.split('\n').map(String::from).collect(),
            steps: self.steps.clone(),
            image: self.image.clone(),
        })
    }
}

/// Syntax-only check: any string the URL parser accepts, whatever the scheme.
pub fn is_valid_url(candidate: &str) -> bool {
    url::Url::parse(candidate).is_ok()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Add,
    Edit(RecipeId),
}

impl FormMode {
    pub fn edit_target(&self) -> Option<&RecipeId> {
        match self {
            FormMode::Edit(id) => Some(id),
            FormMode::Add => None,
        }
    }
}

impl std::fmt::Display for FormMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormMode::Add => write!(f, "ADD"),
            FormMode::Edit(id) => write!(f, "EDIT({})", id),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormController {
    fields: FormFields,
    mode: FormMode,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    pub fn set_fields(&mut self, fields: FormFields) {
        self.fields = fields;
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Add => ADD_LABEL,
            FormMode::Edit(_) => SAVE_LABEL,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => ADD_TITLE,
            FormMode::Edit(_) => EDIT_TITLE,
        }
    }

    /// The message shown once a submit in the current mode went through.
    pub fn success_message(&self) -> &'static str {
        match self.mode {
            FormMode::Add => ADDED_MESSAGE,
            FormMode::Edit(_) => MODIFIED_MESSAGE,
        }
    }

    pub fn validate(&self) -> Result<RecipeDraft, ValidationError> {
        self.fields.validate()
    }

    pub fn enter_edit(&mut self, recipe: &Recipe) {
        self.fields = FormFields::from_recipe(recipe);
        self.mode = FormMode::Edit(recipe.id.clone());
    }

    /// Clears every field and returns to add mode.
    pub fn reset(&mut self) {
        self.fields.clear();
        self.mode = FormMode::Add;
    }
}
