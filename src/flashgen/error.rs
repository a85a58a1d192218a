use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashError {
    #[error("Please enter a topic")]
    EmptyTopic,

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("The model returned an empty response")]
    EmptyResponse,

    #[error("No valid flashcards found in the response")]
    NoValidLines,

    #[error("Invalid flashcard data: {0}")]
    Validation(String),

    #[error("Unable to parse JSON: {0}")]
    Parse(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Another operation is still in progress")]
    Busy,

    #[error("Input controls are disabled in display mode")]
    DisplayOnly,

    #[error("Config error: {0}")]
    Config(String),
}

impl FlashError {
    /// Whether this failure leaves the card store cleared.
    ///
    /// Refusals (`Busy`, `DisplayOnly`) never reach the store, and config or
    /// export problems have nothing to do with it.
    pub fn resets_store(&self) -> bool {
        !matches!(
            self,
            FlashError::Busy
                | FlashError::DisplayOnly
                | FlashError::Config(_)
                | FlashError::Serialization(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, FlashError>;
