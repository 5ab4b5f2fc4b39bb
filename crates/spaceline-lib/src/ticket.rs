//! Ticket row generation.
//!
//! A table is a list of [`Row`]s, each built from three draws against a
//! [`RandomSource`]: carrier, cruise speed, then a coin for the trip type.
//! Duration and price are derived from the speed.

use std::fmt;

use chrono::{Days, NaiveDate};
use serde::Serialize;
use tracing::{debug, trace};

use crate::constants::{
    BASE_PRICE_MILLIONS, DEPARTURE_DATE, DISTANCE_KM, MAX_ROW_COUNT, MAX_SPEED_KM_S,
    MIN_SPEED_KM_S, SECONDS_PER_DAY,
};
use crate::error::{Error, Result};
use crate::rng::RandomSource;

/// Space travel provider selling the ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Carrier {
    #[serde(rename = "Space Adventures")]
    SpaceAdventures,
    #[serde(rename = "SpaceX")]
    SpaceX,
    #[serde(rename = "Virgin Galactic")]
    VirginGalactic,
}

impl Carrier {
    /// Every carrier, in draw order.
    pub const ALL: [Carrier; 3] = [
        Carrier::SpaceAdventures,
        Carrier::SpaceX,
        Carrier::VirginGalactic,
    ];

    /// Name printed in the Spaceline column.
    pub fn name(self) -> &'static str {
        match self {
            Carrier::SpaceAdventures => "Space Adventures",
            Carrier::SpaceX => "SpaceX",
            Carrier::VirginGalactic => "Virgin Galactic",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether the ticket covers the return leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TripType {
    #[serde(rename = "One-way")]
    OneWay,
    #[serde(rename = "Round-trip")]
    RoundTrip,
}

impl TripType {
    /// Label printed in the Trip type column.
    pub fn label(self) -> &'static str {
        match self {
            TripType::OneWay => "One-way",
            TripType::RoundTrip => "Round-trip",
        }
    }

    /// Factor applied to the one-way price.
    pub fn price_multiplier(self) -> f64 {
        match self {
            TripType::OneWay => 1.0,
            TripType::RoundTrip => 2.0,
        }
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One generated ticket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub carrier: Carrier,
    pub speed_km_s: u32,
    pub duration_days: u64,
    pub trip_type: TripType,
    pub price_millions: f64,
}

impl Row {
    /// Arrival day for a ship leaving on `departure`.
    ///
    /// Returns `None` if the date would overflow the calendar.
    pub fn arrival_date(&self, departure: NaiveDate) -> Option<NaiveDate> {
        departure.checked_add_days(Days::new(self.duration_days))
    }
}

/// Inputs to the per-row derivation. [`Default`] yields the Earth to Mars
/// figures from [`crate::constants`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParameters {
    pub distance_km: u64,
    pub min_speed_km_s: u32,
    pub max_speed_km_s: u32,
    pub seconds_per_day: u64,
    pub base_price_millions: f64,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            distance_km: DISTANCE_KM,
            min_speed_km_s: MIN_SPEED_KM_S,
            max_speed_km_s: MAX_SPEED_KM_S,
            seconds_per_day: SECONDS_PER_DAY,
            base_price_millions: BASE_PRICE_MILLIONS,
        }
    }
}

impl GenerationParameters {
    /// Reject parameter sets that cannot produce a row.
    pub fn validate(&self) -> Result<()> {
        if self.min_speed_km_s == 0 {
            return Err(Error::invalid_argument(
                "min_speed_km_s",
                "must be positive",
            ));
        }
        if self.min_speed_km_s > self.max_speed_km_s {
            return Err(Error::invalid_argument(
                "max_speed_km_s",
                format!(
                    "must be at least min_speed_km_s ({}), got {}",
                    self.min_speed_km_s, self.max_speed_km_s
                ),
            ));
        }
        if self.seconds_per_day == 0 {
            return Err(Error::invalid_argument(
                "seconds_per_day",
                "must be positive",
            ));
        }
        if !self.base_price_millions.is_finite() || self.base_price_millions < 0.0 {
            return Err(Error::invalid_argument(
                "base_price_millions",
                format!(
                    "must be finite and non-negative, got {}",
                    self.base_price_millions
                ),
            ));
        }
        Ok(())
    }
}

/// Departure date shared by every ticket.
pub fn departure_date() -> NaiveDate {
    DEPARTURE_DATE
}

/// Whole days needed to cover `distance_km` at `speed_km_s`.
///
/// Truncates twice, `distance / speed` then `/ seconds_per_day`, using
/// integer division. For positive operands this equals
/// `floor(distance / (speed * seconds_per_day))`.
pub fn duration_days(distance_km: u64, speed_km_s: u32, seconds_per_day: u64) -> Result<u64> {
    if speed_km_s == 0 {
        return Err(Error::invalid_argument("speed_km_s", "must be positive"));
    }
    if seconds_per_day == 0 {
        return Err(Error::invalid_argument(
            "seconds_per_day",
            "must be positive",
        ));
    }
    Ok(distance_km / u64::from(speed_km_s) / seconds_per_day)
}

/// Price in millions of USD: base plus speed, doubled for round trips.
pub fn ticket_price(base_price_millions: f64, speed_km_s: u32, trip_type: TripType) -> f64 {
    (base_price_millions + f64::from(speed_km_s)) * trip_type.price_multiplier()
}

/// Generate `row_count` rows with the default Earth to Mars parameters.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `row_count` is negative or above
/// [`crate::constants::MAX_ROW_COUNT`]. No random draws are consumed in
/// that case.
pub fn generate_table<R>(row_count: i64, rng: &mut R) -> Result<Vec<Row>>
where
    R: RandomSource + ?Sized,
{
    generate_table_with(&GenerationParameters::default(), row_count, rng)
}

/// Generate `row_count` rows using caller-supplied parameters.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `row_count` is negative or above
/// [`MAX_ROW_COUNT`], or the parameters fail
/// [`GenerationParameters::validate`]. Validation happens before any draw.
pub fn generate_table_with<R>(
    params: &GenerationParameters,
    row_count: i64,
    rng: &mut R,
) -> Result<Vec<Row>>
where
    R: RandomSource + ?Sized,
{
    if row_count < 0 {
        return Err(Error::invalid_argument(
            "row_count",
            format!("must be non-negative, got {row_count}"),
        ));
    }
    if row_count > MAX_ROW_COUNT {
        return Err(Error::invalid_argument(
            "row_count",
            format!("must be at most {MAX_ROW_COUNT}, got {row_count}"),
        ));
    }
    params.validate()?;

    let mut rows = Vec::new();
    for _ in 0..row_count {
        rows.push(generate_row(params, rng)?);
    }
    debug!(rows = rows.len(), "generated ticket table");
    Ok(rows)
}

fn generate_row<R>(params: &GenerationParameters, rng: &mut R) -> Result<Row>
where
    R: RandomSource + ?Sized,
{
    let carrier_draw = rng.next_below(Carrier::ALL.len() as u32) as usize;
    let carrier = Carrier::ALL[carrier_draw % Carrier::ALL.len()];

    let speed_km_s = rng.next_in_range(params.min_speed_km_s, params.max_speed_km_s);
    let duration_days = duration_days(params.distance_km, speed_km_s, params.seconds_per_day)?;

    let trip_type = if rng.coin_flip() {
        TripType::RoundTrip
    } else {
        TripType::OneWay
    };
    let price_millions = ticket_price(params.base_price_millions, speed_km_s, trip_type);

    trace!(
        carrier = carrier.name(),
        speed_km_s,
        duration_days,
        trip = trip_type.label(),
        price_millions,
        "generated ticket row"
    );

    Ok(Row {
        carrier,
        speed_km_s,
        duration_days,
        trip_type,
        price_millions,
    })
}
