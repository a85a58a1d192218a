//! # CLI Behavior
//!
//! This is **one possible UI client** for flashgen. The CLI is the only place
//! that knows about terminal I/O, exit codes and output formatting.
//!
//! ### Naked Execution (`flashgen`)
//!
//! Running `flashgen` with no arguments starts an interactive session, where
//! one deck lives across commands and cards can be flipped one at a time.
//!
//! ### One-shot Commands
//!
//! `generate`, `load` and `fetch` print the resulting deck with every card
//! open. `--save` writes it to disk as well.
//!
//! ### Share Links (`flashgen open <page-url>`)
//!
//! A link carrying `?file=<deck.json>` loads that deck in display mode: the
//! deck is shown and nothing else may replace it. A link without the
//! parameter falls through to a normal session.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `session`: The interactive loop
//! - `render`: Card boxes and messages
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling constants

mod commands;
mod render;
mod session;
pub mod setup;
mod styles;

pub use commands::run;
