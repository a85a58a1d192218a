//! # Flashgen Architecture
//!
//! Flashgen turns a topic into a deck of term/definition flashcards using a
//! language model, and lets decks be saved, loaded and shared. It is a
//! **UI-agnostic flashcard library** that happens to ship a CLI client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders cards, runs the session loop   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the card store and the input controls               │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - generate, load, fetch, export, clear, config             │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core                                                       │
//! │  - parser: model text → cards                               │
//! │  - validate: loaded JSON → cards                            │
//! │  - store: the current deck and its transitions              │
//! │  - controls: generate/load enablement + busy guard          │
//! │  - generate / fetch: network collaborators behind traits    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! topic ──▶ Generator ──▶ parser ──▶ CardStore ──▶ render
//! file / URL ──▶ validate ─────────▶ CardStore ──▶ render
//! ```
//!
//! Every successful generate or load replaces the deck wholesale; every
//! failure leaves it empty.
//!
//! ## Testing Strategy
//!
//! 1. **Core and commands**: unit tests next to the code, with in-memory
//!    collaborators from [`test_utils`] standing in for the model and HTTP.
//! 2. **API**: dispatch and state checks through `FlashApi`.
//! 3. **CLI**: `tests/` drives the binary with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`parser`]: Model response parsing
//! - [`validate`]: Shape checks for loaded decks
//! - [`store`]: The card store and its state transitions
//! - [`controls`]: Input enablement while a request is in flight
//! - [`generate`]: Model collaborator (`Generator`, `HttpGenerator`)
//! - [`fetch`]: URL collaborator (`Fetcher`, `HttpFetcher`)
//! - [`bootstrap`]: `?file=` share links
//! - [`config`]: Configuration management
//! - [`model`]: The `Card` type
//! - [`error`]: Error types

pub mod api;
pub mod bootstrap;
pub mod commands;
pub mod config;
pub mod controls;
pub mod error;
pub mod fetch;
pub mod generate;
pub mod model;
pub mod parser;
pub mod store;
pub mod validate;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
