//! Fixed parameters of the Earth to Mars ticket table.

use chrono::NaiveDate;

/// Distance from Earth to Mars on the departure date, in kilometres.
pub const DISTANCE_KM: u64 = 62_100_000;

/// Slowest cruise speed a carrier may offer, in km/s (inclusive).
pub const MIN_SPEED_KM_S: u32 = 16;

/// Fastest cruise speed a carrier may offer, in km/s (inclusive).
pub const MAX_SPEED_KM_S: u32 = 30;

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Price floor in millions of USD; the cruise speed is added on top.
pub const BASE_PRICE_MILLIONS: f64 = 20.0;

/// Number of rows printed by the CLI when no count is given.
pub const DEFAULT_ROW_COUNT: i64 = 10;

/// Largest row count a single table may hold.
pub const MAX_ROW_COUNT: i64 = 1_000_000;

/// Departure date printed on every ticket.
///
/// Mars sits [`DISTANCE_KM`] from Earth on this day.
pub const DEPARTURE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2020, 10, 13) {
    Some(date) => date,
    None => panic!("departure date out of range"),
};
