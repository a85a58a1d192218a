//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every flashgen operation, whatever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! - **Owns the state**: the one [`CardStore`] and the [`Controls`] guarding it
//! - **Dispatches** to the matching `commands::*::run`
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! Business logic belongs in `commands/*.rs`; terminal output belongs in the
//! CLI. The facade does neither.
//!
//! ## Generic Over Collaborators
//!
//! `FlashApi<G: Generator, F: Fetcher>`:
//! - Production: `FlashApi<HttpGenerator, HttpFetcher>`
//! - Testing: `FlashApi<StaticGenerator, MemoryFetcher>`
//!
//! so everything from here inward can be tested without a network.

use crate::commands;
use crate::controls::Controls;
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::generate::Generator;
use crate::model::Card;
use crate::store::{CardStore, StoreState};
use std::path::{Path, PathBuf};

pub struct FlashApi<G: Generator, F: Fetcher> {
    store: CardStore,
    controls: Controls,
    generator: G,
    fetcher: F,
    config_dir: PathBuf,
}

impl<G: Generator, F: Fetcher> FlashApi<G, F> {
    pub fn new(generator: G, fetcher: F, config_dir: PathBuf) -> Self {
        Self::with_controls(Controls::new(), generator, fetcher, config_dir)
    }

    /// Build the facade around an existing controls handle, so the caller
    /// can watch control state from outside.
    pub fn with_controls(controls: Controls, generator: G, fetcher: F, config_dir: PathBuf) -> Self {
        Self {
            store: CardStore::new(),
            controls,
            generator,
            fetcher,
            config_dir,
        }
    }

    pub fn generate(&mut self, topic: &str) -> Result<commands::CmdResult> {
        commands::generate::run(&mut self.store, &self.controls, &self.generator, topic)
    }

    pub fn load_file(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::load::run(&mut self.store, &self.controls, path)
    }

    pub fn fetch_url(&mut self, url: &str) -> Result<commands::CmdResult> {
        commands::fetch::run(&mut self.store, &self.controls, &self.fetcher, url)
    }

    pub fn open_page(&mut self, page_url: &str) -> Result<commands::CmdResult> {
        commands::fetch::bootstrap(&mut self.store, &self.controls, &self.fetcher, page_url)
    }

    pub fn export(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, path)
    }

    pub fn clear(&mut self) -> commands::CmdResult {
        commands::clear::run(&mut self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn cards(&self) -> &[Card] {
        self.store.cards()
    }

    pub fn state(&self) -> StoreState {
        self.store.state()
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
