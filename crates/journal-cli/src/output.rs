//! Command output for stdout.

use anyhow::Result;
use journal_core::JournalEntry;
use std::io::Write;

pub const SAVED_HEADER: &str = "Journal entry saved! Here's the structured summary:";

/// Write the saved-entry summary: a header line, a blank line, then the
/// entry as pretty JSON.
pub fn write_summary<W: Write>(mut out: W, entry: &JournalEntry) -> Result<()> {
    writeln!(out, "{}\n", SAVED_HEADER)?;
    serde_json::to_writer_pretty(&mut out, entry)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Write entries as a pretty JSON array.
pub fn write_entries<W: Write>(mut out: W, entries: &[JournalEntry]) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, entries)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
