use crate::model::Recipe;

pub mod config;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod load;
pub mod submit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == MessageLevel::Error
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records touched by the command (created, updated, deleted, edited).
    pub affected: Vec<Recipe>,
    /// The cache after the command, for redrawing. Empty when nothing changed.
    pub listed: Vec<Recipe>,
    pub messages: Vec<CmdMessage>,
    /// Set when reloading the list failed; shown apart from the status messages.
    pub load_error: Option<String>,
    pub config: Option<crate::config::AppConfig>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, recipes: Vec<Recipe>) -> Self {
        self.affected = recipes;
        self
    }

    pub fn with_listed(mut self, recipes: Vec<Recipe>) -> Self {
        self.listed = recipes;
        self
    }

    pub fn with_config(mut self, config: crate::config::AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// The message a single status line should show: the last one wins.
    pub fn last_message(&self) -> Option<&CmdMessage> {
        self.messages.last()
    }
}
