//! Output formatting for ticket tables.
//!
//! Everything is written through a caller-supplied [`Write`] so that the
//! binary targets stdout while tests target an in-memory buffer.

use std::io::{self, Write};

use clap::ValueEnum;
use spaceline_lib::{TableRenderMode, TicketTable};

/// Output formats supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width text table.
    #[default]
    Text,
    /// Markdown pipe table with arrival dates.
    Markdown,
    /// Pretty-printed JSON document.
    Json,
}

/// Write `table` to `writer` in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn write_table<W: Write>(
    format: OutputFormat,
    table: &TicketTable,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            writer.write_all(table.render(TableRenderMode::PlainText).as_bytes())?;
        }
        OutputFormat::Markdown => {
            writer.write_all(table.render(TableRenderMode::Markdown).as_bytes())?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, table)?;
            writeln!(writer)?;
        }
    }
    writer.flush()
}
