use crate::config::FlashConfig;
use crate::model::Card;
use crate::store::StoreState;
use std::path::PathBuf;

pub mod clear;
pub mod config;
pub mod export;
pub mod fetch;
pub mod generate;
pub mod load;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
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
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// The deck after the command ran, for commands that replace it.
    pub cards: Vec<Card>,
    pub state: Option<StoreState>,
    pub exported_to: Option<PathBuf>,
    pub config: Option<FlashConfig>,
    /// Set when the deck was opened from a shared link; inputs are off.
    pub display_mode: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_cards(mut self, cards: &[Card], state: StoreState) -> Self {
        self.cards = cards.to_vec();
        self.state = Some(state);
        self
    }

    pub fn with_exported_to(mut self, path: PathBuf) -> Self {
        self.exported_to = Some(path);
        self
    }

    pub fn with_config(mut self, config: FlashConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn in_display_mode(mut self) -> Self {
        self.display_mode = true;
        self
    }
}

/// "1 flashcard" / "3 flashcards"
pub(crate) fn count_label(n: usize) -> String {
    if n == 1 {
        "1 flashcard".to_string()
    } else {
        format!("{} flashcards", n)
    }
}
