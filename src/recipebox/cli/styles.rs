//! Named terminal styles.
//!
//! Templates refer to styles by semantic name (`index`, `muted`, `error`) through the
//! `style` filter; the concrete colors live only here. When stdout cannot show
//! colors the filter passes text through unchanged.
//!
//! An unknown name is not an error: the text is prefixed with `(!?)` so a typo in a
//! template shows up in the output instead of silently losing its style.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const INDEX: &str = "index";
    pub const NAME: &str = "name";
    pub const TITLE: &str = "title";
    pub const HEADING: &str = "heading";
    pub const MUTED: &str = "muted";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
}

#[derive(Debug, Clone, Default)]
pub struct Styles {
    styles: HashMap<String, Style>,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static RECIPEBOX_STYLES: Lazy<Styles> = Lazy::new(|| {
    Styles::new()
        .add(names::INDEX, Style::new().yellow())
        .add(names::NAME, Style::new().bold())
        .add(names::TITLE, Style::new().bold().underlined())
        .add(names::HEADING, Style::new().cyan())
        .add(names::MUTED, Style::new().dim())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, Style::new().dim())
});
