use serde::{Deserialize, Serialize};

/// One flashcard: the front (`term`) and the back (`definition`).
///
/// Cards have no identity beyond their position in a deck, and duplicate
/// terms are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub term: String,
    pub definition: String,
}

impl Card {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}
