//! `journal`: log a structured journal entry.
//!
//! Classifies the entry text into feelings, events, health, situations and
//! people, appends it to the journal file and prints the result.

mod input;
mod output;

use std::io;
use std::str::FromStr;

use anyhow::Result;
use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use journal_core::prelude::*;
use journal_core::{log_classification, sentences};
use journal_store::JournalStore;
use tracing::Level;

use crate::input::EntrySource;

#[derive(Debug, Parser)]
#[command(name = "journal", version, about = "Log a structured journal entry")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    add: AddArgs,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the most recent entries
    List {
        /// Number of entries to show
        #[arg(long, default_value_t = 10)]
        limit: usize,

        #[command(flatten)]
        store: StoreArgs,
    },
    /// Find entries mentioning a word or person
    Search {
        query: String,

        #[command(flatten)]
        store: StoreArgs,
    },
}

#[derive(Debug, Args)]
struct AddArgs {
    /// The journal entry text. If omitted, the entry is read from standard input.
    #[arg(long)]
    entry: Option<String>,

    /// Optional ISO timestamp for the entry (defaults to the current time).
    #[arg(long)]
    timestamp: Option<String>,

    #[command(flatten)]
    store: StoreArgs,
}

#[derive(Debug, Args)]
struct StoreArgs {
    /// Journal file (defaults to $JOURNAL_PATH, then data/journal_entries.json)
    #[arg(long)]
    file: Option<Utf8PathBuf>,
}

impl StoreArgs {
    fn open(self) -> JournalStore {
        match self.file {
            Some(path) => JournalStore::new(path),
            None => JournalStore::open_default(),
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        None => run_add(cli.add),
        Some(Command::List { limit, store }) => {
            let entries = store.open().recent(limit)?;
            output::write_entries(io::stdout().lock(), &entries)
        }
        Some(Command::Search { query, store }) => {
            let entries = store.open().search(&query)?;
            output::write_entries(io::stdout().lock(), &entries)
        }
    }
}

fn run_add(args: AddArgs) -> Result<()> {
    let raw = EntrySource::from_flag(args.entry).read()?;
    let text = prepare_entry_text(&raw)?;

    let timestamp = args
        .timestamp
        .as_deref()
        .map(EntryTimestamp::parse)
        .transpose()?;

    let entry = JournalEntry::from_text(text, timestamp);

    let store = args.store.open();
    let count = store.append(&entry)?;
    tracing::debug!(path = %store.path(), entries = count, "entry saved");
    log_classification(&entry, sentences(text).count());

    output::write_summary(io::stdout().lock(), &entry)
}

/// Log to stderr at the level named by `JOURNAL_LOG` (default: warn).
fn init_tracing() {
    let level = std::env::var("JOURNAL_LOG")
        .ok()
        .and_then(|value| Level::from_str(value.trim()).ok())
        .unwrap_or(Level::WARN);

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();
}
