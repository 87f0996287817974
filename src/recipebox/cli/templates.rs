//! Terminal templates, kept as standalone files and embedded at compile time.
//!
//! Line breaks are explicit (`{{ "\n" }}` with whitespace-trimming tags), so the
//! layout of the template source never leaks into the output.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const FULL_RECIPE_TEMPLATE: &str = include_str!("templates/full_recipe.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
