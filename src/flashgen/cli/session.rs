//! # Interactive Session
//!
//! Running `flashgen` with no subcommand opens a session: one card store
//! that lives until `quit`, driven by short commands typed at a prompt.
//!
//! ```text
//! > generate photosynthesis
//! > flip 2
//! > save
//! > load flashcards.json
//! ```
//!
//! Errors are shown and the session carries on; the store is left as the
//! failed operation left it (empty, for generate and load failures).

use super::render::{render_deck, render_messages};
use super::styles::PROMPT;
use flashgen::api::{CmdMessage, CmdResult, FlashApi};
use flashgen::error::Result;
use flashgen::fetch::Fetcher;
use flashgen::generate::Generator;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const HELP: &str = "\
Commands:
  generate <topic>   Ask the model for flashcards about <topic>
  load <path>        Load a deck from a JSON file
  fetch <url>        Load a deck from a URL
  save [path]        Save the deck (default: the configured export file)
  show               Show the deck again
  flip [n]           Flip card n, or every card when n is omitted
  clear              Clear the topic and the deck
  help               Show this help
  quit               Leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Generate(String),
    Load(PathBuf),
    Fetch(String),
    Save(Option<PathBuf>),
    Show,
    Flip(Option<usize>),
    Clear,
    Help,
    Quit,
}

/// Parse one line of input. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> std::result::Result<Option<SessionCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        // An empty topic is passed through so the core can reject it.
        "generate" | "g" => SessionCommand::Generate(rest.to_string()),
        "load" | "l" => SessionCommand::Load(PathBuf::from(require(rest, "load <path>")?)),
        "fetch" => SessionCommand::Fetch(require(rest, "fetch <url>")?.to_string()),
        "save" | "s" => SessionCommand::Save((!rest.is_empty()).then(|| PathBuf::from(rest))),
        "show" | "ls" => SessionCommand::Show,
        "flip" | "f" => {
            if rest.is_empty() {
                SessionCommand::Flip(None)
            } else {
                let n = rest
                    .parse::<usize>()
                    .map_err(|_| format!("Not a card number: {}", rest))?;
                SessionCommand::Flip(Some(n))
            }
        }
        "clear" => SessionCommand::Clear,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        other => return Err(format!("Unknown command: {} (try \"help\")", other)),
    };
    Ok(Some(command))
}

fn require<'a>(arg: &'a str, usage: &str) -> std::result::Result<&'a str, String> {
    if arg.is_empty() {
        Err(format!("Usage: {}", usage))
    } else {
        Ok(arg)
    }
}

/// Session state beyond the card store: which cards show their back.
struct Session {
    flipped: Vec<bool>,
    export_file: PathBuf,
    width: usize,
}

impl Session {
    fn reset_flips(&mut self, len: usize) {
        self.flipped = vec![false; len];
    }
}

/// Run the session loop until `quit` or end of input.
pub fn run<G, F, R, W>(
    api: &mut FlashApi<G, F>,
    export_file: &str,
    width: usize,
    mut input: R,
    mut output: W,
) -> Result<()>
where
    G: Generator,
    F: Fetcher,
    R: BufRead,
    W: Write,
{
    let mut session = Session {
        flipped: vec![false; api.cards().len()],
        export_file: PathBuf::from(export_file),
        width,
    };

    writeln!(
        output,
        "{}",
        render_messages(&[CmdMessage::info(
            "Enter a topic with \"generate <topic>\", or type \"help\"."
        )])
        .trim_end()
    )?;

    loop {
        write!(output, "{} ", PROMPT.apply_to(">"))?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        match parse_command(&line) {
            Ok(None) => continue,
            Ok(Some(SessionCommand::Quit)) => break,
            Ok(Some(command)) => {
                let text = execute(api, &mut session, command);
                write!(output, "{}", text)?;
            }
            Err(msg) => write!(output, "{}", render_messages(&[CmdMessage::error(msg)]))?,
        }
    }
    Ok(())
}

fn execute<G: Generator, F: Fetcher>(
    api: &mut FlashApi<G, F>,
    session: &mut Session,
    command: SessionCommand,
) -> String {
    let outcome: Result<CmdResult> = match command {
        SessionCommand::Generate(topic) => api.generate(&topic),
        SessionCommand::Load(path) => api.load_file(&path),
        SessionCommand::Fetch(url) => api.fetch_url(&url),
        SessionCommand::Clear => Ok(api.clear()),
        SessionCommand::Save(path) => {
            let path = path.unwrap_or_else(|| session.export_file.clone());
            return messages_or_error(api.export(&path));
        }
        SessionCommand::Show => return render_deck(api.cards(), &session.flipped, session.width),
        SessionCommand::Flip(target) => return flip(api.cards().len(), session, target, api),
        SessionCommand::Help => return format!("{}\n", HELP),
        SessionCommand::Quit => return String::new(),
    };

    // generate/load/fetch/clear replace the deck, on success or failure
    session.reset_flips(api.cards().len());
    match outcome {
        Ok(result) => {
            let mut out = String::new();
            if !result.cards.is_empty() {
                out.push_str(&render_deck(api.cards(), &session.flipped, session.width));
            }
            out.push_str(&render_messages(&result.messages));
            out
        }
        Err(e) => render_messages(&[CmdMessage::error(e.to_string())]),
    }
}

fn flip<G: Generator, F: Fetcher>(
    len: usize,
    session: &mut Session,
    target: Option<usize>,
    api: &FlashApi<G, F>,
) -> String {
    if len == 0 {
        return render_messages(&[CmdMessage::info("No flashcards to flip.")]);
    }
    match target {
        None => {
            let all_flipped = session.flipped.iter().all(|f| *f);
            session.flipped.iter_mut().for_each(|f| *f = !all_flipped);
        }
        Some(n) if (1..=len).contains(&n) => session.flipped[n - 1] = !session.flipped[n - 1],
        Some(n) => {
            return render_messages(&[CmdMessage::error(format!(
                "No card {} (the deck has {})",
                n, len
            ))])
        }
    }
    render_deck(api.cards(), &session.flipped, session.width)
}

fn messages_or_error(outcome: Result<CmdResult>) -> String {
    match outcome {
        Ok(result) => render_messages(&result.messages),
        Err(e) => render_messages(&[CmdMessage::error(e.to_string())]),
    }
}
