//! Entry text sourcing: `--entry` flag or stdin.

use anyhow::{Context, Result};
use std::io::{self, IsTerminal, Read};

const STDIN_PROMPT: &str =
    "Enter your journal entry. Finish with Ctrl-D (or Ctrl-Z on Windows) and press Enter:";

/// Where the entry text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySource {
    /// Text given on the command line
    Flag(String),
    /// Read until EOF from stdin
    Stdin,
}

impl EntrySource {
    pub fn from_flag(entry: Option<String>) -> Self {
        match entry {
            Some(text) => Self::Flag(text),
            None => Self::Stdin,
        }
    }

    /// Read the raw (untrimmed) entry text.
    pub fn read(self) -> Result<String> {
        match self {
            Self::Flag(text) => Ok(text),
            Self::Stdin => {
                let stdin = io::stdin();
                // Only prompt a human; piped input stays quiet.
                if stdin.is_terminal() {
                    eprintln!("{}", STDIN_PROMPT);
                }
                read_to_string(stdin.lock())
            }
        }
    }
}

/// Read everything from `reader`.
pub fn read_to_string<R: Read>(mut reader: R) -> Result<String> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .context("Failed to read journal entry from stdin")?;
    Ok(input)
}
