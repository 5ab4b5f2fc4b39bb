//! Spaceline library entry points.
//!
//! This crate generates randomized Earth to Mars ticket price tables and
//! renders them as aligned text. Randomness is injected through
//! [`RandomSource`], so callers (the CLI, tests, benchmarks) choose between
//! a seeded stream and OS entropy. Higher-level consumers should only depend
//! on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod constants;
pub mod error;
pub mod rng;
pub mod table;
pub mod ticket;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use constants::DEFAULT_ROW_COUNT;
pub use error::{Error, Result};
pub use rng::{RandomSource, SeededSource};
pub use table::{pad, render, render_row, render_with, Justify, TableRenderMode, TicketTable};
pub use ticket::{
    departure_date, duration_days, generate_table, generate_table_with, ticket_price, Carrier,
    GenerationParameters, Row, TripType,
};
