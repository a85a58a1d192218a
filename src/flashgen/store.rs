//! # Card Store
//!
//! The deck currently on screen. A `CardStore` is a plain owned value: the
//! API facade owns exactly one and hands `&mut` access to one command at a
//! time.
//!
//! ## Transitions
//!
//! ```text
//! Empty / Populated ── generation ok (cards ≥ 1) ──▶ Populated(n)
//!                   ── generation ok (no cards) ──▶ Empty   + NoValidLines
//!                   ── generation failed ─────────▶ Empty   + error
//!                   ── load ok ───────────────────▶ Populated(n) or Empty
//!                   ── load failed ───────────────▶ Empty   + error
//!                   ── clear ─────────────────────▶ Empty
//! ```
//!
//! The deck is always replaced wholesale, never patched, and a failure never
//! leaves a partial deck behind.

use crate::error::{FlashError, Result};
use crate::model::Card;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Empty,
    Populated(usize),
}

#[derive(Debug, Default, Clone)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn state(&self) -> StoreState {
        match self.cards.len() {
            0 => StoreState::Empty,
            n => StoreState::Populated(n),
        }
    }

    /// Apply the outcome of a generation request.
    ///
    /// An empty card list is a failure here: the model answered but nothing
    /// in the answer was usable.
    pub fn settle_generation(&mut self, outcome: Result<Vec<Card>>) -> Result<StoreState> {
        match outcome {
            Ok(cards) if cards.is_empty() => Err(self.fail(FlashError::NoValidLines)),
            Ok(cards) => Ok(self.replace(cards)),
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Apply the outcome of a file or URL load.
    pub fn settle_load(&mut self, outcome: Result<Vec<Card>>) -> Result<StoreState> {
        match outcome {
            Ok(cards) => Ok(self.replace(cards)),
            Err(e) => Err(self.fail(e)),
        }
    }

    pub fn clear(&mut self) -> StoreState {
        self.cards.clear();
        debug!("card store cleared");
        StoreState::Empty
    }

    fn replace(&mut self, cards: Vec<Card>) -> StoreState {
        self.cards = cards;
        let state = self.state();
        debug!(?state, "card store replaced");
        state
    }

    fn fail(&mut self, err: FlashError) -> FlashError {
        if err.resets_store() {
            warn!(error = %err, "operation failed, clearing card store");
            self.cards.clear();
        }
        err
    }
}
