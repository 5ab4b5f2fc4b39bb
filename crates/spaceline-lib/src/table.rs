use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::ticket::{departure_date, Row};

/// Column header of the plain-text table.
pub const HEADER: &str = "Spaceline        Days Trip type  Price";

pub const CARRIER_WIDTH: usize = 16;
pub const DAYS_WIDTH: usize = 4;
pub const TRIP_WIDTH: usize = 10;
pub const PRICE_WIDTH: usize = 4;

/// Side of the field the text hugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    Left,
    Right,
}

/// Presentation style for turning rows into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableRenderMode {
    /// Fixed-width columns under [`HEADER`].
    #[default]
    PlainText,
    /// Markdown pipe table with an arrival column.
    Markdown,
}

/// Pad `text` with spaces to `width` characters.
///
/// Text already at or past `width` is returned unchanged.
pub fn pad(text: &str, width: usize, justify: Justify) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let fill = " ".repeat(width - len);
    match justify {
        Justify::Left => format!("{text}{fill}"),
        Justify::Right => format!("{fill}{text}"),
    }
}

/// Separator line under the header, one `=` per header column.
pub fn separator() -> String {
    "=".repeat(HEADER.len())
}

/// Shortest decimal form of a price: `36.0` prints as `36`, `36.5` as `36.5`.
pub fn format_price(price_millions: f64) -> String {
    price_millions.to_string()
}

/// Render a single row as one fixed-width line, without the newline.
pub fn render_row(row: &Row) -> String {
    format!(
        "{} {} {} ${}",
        pad(row.carrier.name(), CARRIER_WIDTH, Justify::Left),
        pad(&row.duration_days.to_string(), DAYS_WIDTH, Justify::Right),
        pad(row.trip_type.label(), TRIP_WIDTH, Justify::Left),
        pad(&format_price(row.price_millions), PRICE_WIDTH, Justify::Right),
    )
}

/// Render rows as the plain-text table.
pub fn render(rows: &[Row]) -> String {
    render_with(rows, TableRenderMode::PlainText)
}

/// Render rows using the requested mode and the standard departure date.
pub fn render_with(rows: &[Row], mode: TableRenderMode) -> String {
    render_rows(rows, departure_date(), mode)
}

fn render_rows(rows: &[Row], departure: NaiveDate, mode: TableRenderMode) -> String {
    match mode {
        TableRenderMode::PlainText => render_plain(rows),
        TableRenderMode::Markdown => render_markdown(rows, departure),
    }
}

fn render_plain(rows: &[Row]) -> String {
    let mut buffer = String::new();
    let _ = writeln!(buffer, "{HEADER}");
    let _ = writeln!(buffer, "{}", separator());
    for row in rows {
        let _ = writeln!(buffer, "{}", render_row(row));
    }
    buffer
}

fn render_markdown(rows: &[Row], departure: NaiveDate) -> String {
    let mut buffer = String::new();
    let _ = writeln!(buffer, "**Tickets to Mars** departing _{departure}_");
    let _ = writeln!(buffer);
    let _ = writeln!(buffer, "| Spaceline | Days | Trip type | Price | Arrival |");
    let _ = writeln!(buffer, "|---|---:|---|---:|---|");
    for row in rows {
        let arrival = row
            .arrival_date(departure)
            .map(|date| date.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            buffer,
            "| {} | {} | {} | ${} | {} |",
            row.carrier.name(),
            row.duration_days,
            row.trip_type.label(),
            format_price(row.price_millions),
            arrival
        );
    }
    buffer
}

/// Generated rows together with the departure date they were priced for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketTable {
    #[serde(serialize_with = "serialize_date")]
    pub departure: NaiveDate,
    pub rows: Vec<Row>,
}

impl TicketTable {
    /// Wrap rows with the standard departure date.
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            departure: departure_date(),
            rows,
        }
    }

    /// Render the table using the requested textual mode.
    pub fn render(&self, mode: TableRenderMode) -> String {
        render_rows(&self.rows, self.departure, mode)
    }
}

fn serialize_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format("%Y-%m-%d"))
}
