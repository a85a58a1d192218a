//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Logging**: install the `tracing` subscriber (stderr, quiet by default)
//! 2. **Context Setup**: resolve the config dir, load config, build `AppContext`
//! 3. **API Dispatch**: call the matching `FlashApi` method
//! 4. **Output Formatting**: turn `CmdResult` into cards and colored messages
//!
//! Errors bubble up to `main`, which prints them and exits non-zero.

use super::render::{card_width, print_messages, print_open_deck, render_messages};
use super::session;
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use flashgen::api::{CmdMessage, ConfigAction, FlashApi};
use flashgen::config::FlashConfig;
use flashgen::error::{FlashError, Result};
use flashgen::fetch::HttpFetcher;
use flashgen::generate::HttpGenerator;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Overrides the config directory when `--config-dir` is not given.
pub const HOME_ENV: &str = "FLASHGEN_HOME";
/// Log filter directives, e.g. `FLASHGEN_LOG=flashgen=trace`.
pub const LOG_ENV: &str = "FLASHGEN_LOG";

struct AppContext {
    api: FlashApi<HttpGenerator, HttpFetcher>,
    config: FlashConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_dir = resolve_config_dir(cli.config_dir.clone())?;
    let mut ctx = init_context(config_dir)?;

    match cli.command {
        Some(Commands::Generate { topic, save }) => handle_generate(&mut ctx, topic, save),
        Some(Commands::Load { path }) => handle_load(&mut ctx, path),
        Some(Commands::Fetch { url, save }) => handle_fetch(&mut ctx, url, save),
        Some(Commands::Open { page_url }) => handle_open(&mut ctx, page_url),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Session) | None => handle_session(&mut ctx),
    }
}

fn init_logging(verbose: bool) {
    // Errors already reach the user as messages, so the default stays quiet.
    let filter = match std::env::var(LOG_ENV) {
        Ok(directives) => EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn")),
        Err(_) if verbose => EnvFilter::new("flashgen=debug"),
        Err(_) => EnvFilter::new("error"),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_config_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "flashgen", "flashgen")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| FlashError::Config("could not determine a config directory".into()))
}

fn init_context(config_dir: PathBuf) -> Result<AppContext> {
    let config = FlashConfig::load(&config_dir).unwrap_or_else(|e| {
        eprint!(
            "{}",
            render_messages(&[CmdMessage::warning(format!("{} (using defaults)", e))])
        );
        FlashConfig::default()
    });
    debug!(config_dir = %config_dir.display(), model = %config.model, "context ready");

    let generator = HttpGenerator::from_config(&config)?;
    let fetcher = HttpFetcher::new()?;
    let api = FlashApi::new(generator, fetcher, config_dir);

    Ok(AppContext { api, config })
}

fn handle_generate(
    ctx: &mut AppContext,
    topic: Vec<String>,
    save: Option<Option<PathBuf>>,
) -> Result<()> {
    let result = ctx.api.generate(&topic.join(" "))?;
    print_open_deck(&result.cards);
    print_messages(&result.messages);
    save_deck(ctx, save)
}

fn handle_load(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.load_file(&path)?;
    print_open_deck(&result.cards);
    print_messages(&result.messages);
    Ok(())
}

fn handle_fetch(ctx: &mut AppContext, url: String, save: Option<Option<PathBuf>>) -> Result<()> {
    let result = ctx.api.fetch_url(&url)?;
    print_open_deck(&result.cards);
    print_messages(&result.messages);
    save_deck(ctx, save)
}

fn handle_open(ctx: &mut AppContext, page_url: String) -> Result<()> {
    let result = ctx.api.open_page(&page_url)?;
    if result.display_mode {
        print_open_deck(&result.cards);
        print_messages(&result.messages);
        return Ok(());
    }

    print_messages(&result.messages);
    handle_session(ctx)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        for (key, value) in config.entries() {
            println!("{} = {}", key, value);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_session(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run(
        &mut ctx.api,
        &ctx.config.export_file,
        card_width(),
        stdin.lock(),
        stdout.lock(),
    )
}

/// `None`: not requested. `Some(None)`: save to the configured export file.
fn save_deck(ctx: &AppContext, save: Option<Option<PathBuf>>) -> Result<()> {
    let Some(target) = save else {
        return Ok(());
    };
    let path = target.unwrap_or_else(|| PathBuf::from(&ctx.config.export_file));
    let result = ctx.api.export(&path)?;
    print_messages(&result.messages);
    Ok(())
}
