//! Render collected log entries into the text handed to the summarizer.

use crate::git::LogEntry;

/// Separator between per-commit blocks.
const ENTRY_SEPARATOR: &str = "\n\n\n";

/// Render entries into one aggregated log text.
///
/// Each entry becomes a `message / author / diff` block. Input order is
/// preserved, so the summarizer sees history newest-first.
pub fn render_log_text(entries: &[LogEntry]) -> String {
    entries
        .iter()
        .map(render_entry)
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR)
}

fn render_entry(entry: &LogEntry) -> String {
    format!(
        "message:\n{}\n\nauthor: {}\n\ndiff:\n\n{}",
        entry.commit.message, entry.commit.author, entry.diff_text
    )
}
