use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flashgen", bin_name = "flashgen", version)]
#[command(about = "Generate, study and share term/definition flashcards", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding config.json (default: $FLASHGEN_HOME, then the platform config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate flashcards about a topic
    #[command(alias = "g", display_order = 1)]
    Generate {
        /// Topic words (joined with spaces)
        topic: Vec<String>,

        /// Also save the deck (to the configured export file when no path is given)
        #[arg(long, short, value_name = "PATH")]
        save: Option<Option<PathBuf>>,
    },

    /// Load a deck from a JSON file
    #[command(alias = "l", display_order = 2)]
    Load {
        path: PathBuf,
    },

    /// Load a deck from a URL serving JSON
    #[command(display_order = 3)]
    Fetch {
        url: String,

        /// Also save the deck (to the configured export file when no path is given)
        #[arg(long, short, value_name = "PATH")]
        save: Option<Option<PathBuf>>,
    },

    /// Open a share link (`...?file=deck.json`) in display mode
    #[command(display_order = 4)]
    Open {
        page_url: String,
    },

    /// Start an interactive session (the default)
    #[command(display_order = 5)]
    Session,

    /// Get or set configuration
    #[command(display_order = 6)]
    Config {
        /// Configuration key (e.g. model, export-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
