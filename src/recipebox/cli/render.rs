//! # Terminal Rendering
//!
//! Styled terminal output from minijinja templates, with automatic color detection.
//!
//! Layout math (truncation, padding) stays in Rust because it needs Unicode-aware
//! widths. Templates only place the pieces and pick styles by name.

use super::styles::{names, Styles, RECIPEBOX_STYLES};
use super::templates::{CONFIG_TEMPLATE, FULL_RECIPE_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE};
use console::Term;
use minijinja::{Environment, Error, Value};
use recipebox::api::{CmdMessage, MessageLevel};
use recipebox::config::AppConfig;
use recipebox::model::Recipe;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const NAME_WIDTH: usize = 32;

#[derive(Serialize)]
struct RecipeLineData {
    index: String,
    name: String,
    padding: String,
    detail: String,
}

#[derive(Serialize)]
struct ListData {
    recipes: Vec<RecipeLineData>,
    empty: bool,
}

#[derive(Serialize)]
struct FullRecipeData {
    index: String,
    name: String,
    ingredients: Vec<String>,
    steps: Vec<String>,
    image: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

fn use_color() -> bool {
    Term::stdout().features().colors_supported()
}

fn register_style_filter(env: &mut Environment<'static>, styles: Styles, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        styles.apply(&name, &value.to_string(), use_color)
    });
}

fn render_template<T: Serialize>(template: &str, data: &T, use_color: bool) -> Result<String, Error> {
    let mut env = Environment::new();
    register_style_filter(&mut env, RECIPEBOX_STYLES.clone(), use_color);
    env.add_template_owned("_inline".to_string(), template.to_string())?;
    env.get_template("_inline")?.render(data)
}

/// Numbered list: position, name, then ingredients and step count.
pub fn render_recipe_list(recipes: &[Recipe]) -> String {
    render_recipe_list_internal(recipes, use_color())
}

fn render_recipe_list_internal(recipes: &[Recipe], use_color: bool) -> String {
    let lines = recipes
        .iter()
        .enumerate()
        .map(|(i, recipe)| {
            let index = format!("{}. ", i + 1);
            let name = truncate_to_width(&recipe.name, NAME_WIDTH);
            let padding = " ".repeat(NAME_WIDTH.saturating_sub(name.width()) + 2);
            let available = LINE_WIDTH.saturating_sub(index.width() + NAME_WIDTH + 2);
            let detail = truncate_to_width(
                &format!(
                    "{} ({})",
                    recipe.ingredients_line(),
                    step_count(recipe.step_lines().len())
                ),
                available,
            );
            RecipeLineData {
                index,
                name,
                padding,
                detail,
            }
        })
        .collect::<Vec<_>>();

    let data = ListData {
        empty: lines.is_empty(),
        recipes: lines,
    };
    render_template(LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_full_recipe(position: usize, recipe: &Recipe) -> String {
    render_full_recipe_internal(position, recipe, use_color())
}

fn render_full_recipe_internal(position: usize, recipe: &Recipe, use_color: bool) -> String {
    let data = FullRecipeData {
        index: format!("{}. ", position),
        name: recipe.name.clone(),
        ingredients: recipe.ingredients.clone(),
        steps: recipe.step_lines(),
        image: recipe.image.clone(),
    };
    render_template(FULL_RECIPE_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, use_color())
}

fn render_messages_internal(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }
    let data = MessagesData {
        messages: messages
            .iter()
            .map(|message| MessageData {
                content: message.content.clone(),
                style: match message.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };
    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

pub fn render_config(config: &AppConfig) -> String {
    render_config_internal(config, use_color())
}

fn render_config_internal(config: &AppConfig, use_color: bool) -> String {
    let data = ConfigData {
        entries: AppConfig::KEYS
            .iter()
            .map(|&key| ConfigEntry {
                key,
                value: config.get(key).unwrap_or_default(),
            })
            .collect(),
    };
    render_template(CONFIG_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn step_count(count: usize) -> String {
    match count {
        1 => "1 step".to_string(),
        n => format!("{} steps", n),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebox::model::{RecipeDraft, RecipeId};

    fn soup(id: u64) -> Recipe {
        Recipe::from_draft(
            RecipeId::Number(id),
            RecipeDraft::new(
                "Soup",
                vec!["water".into(), "salt".into()],
                "Boil\nServe",
                "http://x/img.png",
            ),
        )
    }

    #[test]
    fn empty_list() {
        let output = render_recipe_list_internal(&[], false);
        assert_eq!(output, "No recipes found.\n");
    }

    #[test]
    fn list_line_has_position_name_and_detail() {
        let output = render_recipe_list_internal(&[soup(7), soup(9)], false);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1. Soup"));
        assert!(lines[0].ends_with("water,salt (2 steps)"));
        assert!(lines[1].starts_with("2. Soup"));
    }

    #[test]
    fn long_names_are_truncated() {
        let mut recipe = soup(1);
        recipe.name = "x".repeat(80);

        let output = render_recipe_list_internal(&[recipe], false);

        assert!(output.contains('…'));
        assert!(output.lines().next().unwrap().width() <= LINE_WIDTH);
    }

    #[test]
    fn full_recipe_lists_ingredients_and_numbered_steps() {
        let output = render_full_recipe_internal(3, &soup(1), false);

        assert!(output.starts_with("3. Soup\n"));
        assert!(output.contains("  - water\n  - salt\n"));
        assert!(output.contains("  1. Boil\n  2. Serve\n"));
        assert!(output.contains("Image: http://x/img.png"));
    }

    #[test]
    fn messages_one_per_line() {
        let output = render_messages_internal(
            &[
                CmdMessage::success("Recipe added successfully!"),
                CmdMessage::warning("Error loading recipes"),
            ],
            false,
        );
        assert_eq!(
            output,
            "Recipe added successfully!\nError loading recipes\n"
        );
        assert!(render_messages_internal(&[], false).is_empty());
    }

    #[test]
    fn config_shows_every_key() {
        let output = render_config_internal(&AppConfig::default(), false);
        assert!(output.contains("api-url = http://127.0.0.1:8000\n"));
        assert!(output.contains("refresh = refetch\n"));
        assert!(output.contains("timeout = 10\n"));
    }

    #[test]
    fn truncation_respects_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
    }
}
