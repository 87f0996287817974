//! # HTML Rendering
//!
//! Every change redraws the whole list from the cache; there is no incremental
//! patching. Templates live next to this module as standalone `.html` files and are
//! compiled into the binary. Their `.html` names switch on minijinja's HTML
//! auto-escaping, so record text can never inject markup.
//!
//! Layout decisions that need Rust (splitting steps, joining ingredients, picking
//! the status color) happen in the view structs below; templates only place values.

use crate::commands::{CmdMessage, MessageLevel};
use crate::error::Result;
use crate::form::FormController;
use crate::model::Recipe;
use minijinja::Environment;
use serde::Serialize;

const RECIPE_LIST_NAME: &str = "recipe_list.html";
const PAGE_NAME: &str = "page.html";

pub const RECIPE_LIST_TEMPLATE: &str = include_str!("templates/recipe_list.html");
pub const PAGE_TEMPLATE: &str = include_str!("templates/page.html");

/// Everything the page shows, borrowed from the API's state.
pub struct PageModel<'a> {
    pub recipes: &'a [Recipe],
    pub form: &'a FormController,
    pub status: Option<&'a CmdMessage>,
    pub load_error: Option<&'a str>,
}

#[derive(Serialize)]
struct RecipeView {
    id: String,
    name: String,
    ingredients: String,
    steps: Vec<String>,
    image: String,
}

impl From<&Recipe> for RecipeView {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.to_string(),
            name: recipe.name.clone(),
            ingredients: recipe.ingredients_line(),
            steps: recipe.step_lines(),
            image: recipe.image.clone(),
        }
    }
}

#[derive(Serialize)]
struct FormView {
    title: &'static str,
    submit_label: &'static str,
    edit_id: Option<String>,
    name: String,
    ingredients: String,
    steps: String,
    image: String,
}

#[derive(Serialize)]
struct StatusView {
    text: String,
    color: &'static str,
}

#[derive(Serialize)]
struct ListData {
    recipes: Vec<RecipeView>,
}

#[derive(Serialize)]
struct PageData {
    recipes: Vec<RecipeView>,
    form: FormView,
    status: Option<StatusView>,
    load_error: Option<String>,
}

pub fn status_color(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Error | MessageLevel::Warning => "red",
        MessageLevel::Success | MessageLevel::Info => "green",
    }
}

fn environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.add_template(RECIPE_LIST_NAME, RECIPE_LIST_TEMPLATE)?;
    env.add_template(PAGE_NAME, PAGE_TEMPLATE)?;
    Ok(env)
}

/// Renders the contents of the list container, one block per record in order.
pub fn render_recipe_list(recipes: &[Recipe]) -> Result<String> {
    let data = ListData {
        recipes: recipes.iter().map(RecipeView::from).collect(),
    };
    let env = environment()?;
    Ok(env.get_template(RECIPE_LIST_NAME)?.render(&data)?)
}

pub fn render_page(model: &PageModel<'_>) -> Result<String> {
    let fields = model.form.fields();
    let data = PageData {
        recipes: model.recipes.iter().map(RecipeView::from).collect(),
        form: FormView {
            title: model.form.title(),
            submit_label: model.form.submit_label(),
            edit_id: model.form.mode().edit_target().map(|id| id.to_string()),
            name: fields.name.clone(),
            ingredients: fields.ingredients.clone(),
            steps: fields.steps.clone(),
            image: fields.image.clone(),
        },
        status: model.status.map(|message| StatusView {
            text: message.content.clone(),
            color: status_color(message.level),
        }),
        load_error: model.load_error.map(String::from),
    };
    let env = environment()?;
    Ok(env.get_template(PAGE_NAME)?.render(&data)?)
}
