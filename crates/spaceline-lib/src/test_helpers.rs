// Test-only helpers for `spaceline-lib` tests
#![allow(dead_code)]
use std::collections::VecDeque;

use crate::rng::RandomSource;
use crate::ticket::{Carrier, Row, TripType};

/// Random source that replays a fixed list of draws and records the bounds
/// it was asked for.
pub struct ScriptedSource {
    draws: VecDeque<u32>,
    bounds: Vec<u32>,
}

impl ScriptedSource {
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            bounds: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }

    pub fn bounds(&self) -> &[u32] {
        &self.bounds
    }
}

impl RandomSource for ScriptedSource {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.bounds.push(bound);
        let value = self.draws.pop_front().expect("scripted draws exhausted");
        assert!(value < bound, "scripted draw {value} outside [0, {bound})");
        value
    }
}

/// Builder to create `Row` instances in tests with sensible defaults.
pub struct RowBuilder {
    row: Row,
}

impl RowBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            row: Row {
                carrier: Carrier::SpaceX,
                speed_km_s: 16,
                duration_days: 44,
                trip_type: TripType::OneWay,
                price_millions: 36.0,
            },
        }
    }

    pub fn carrier(mut self, carrier: Carrier) -> Self {
        self.row.carrier = carrier;
        self
    }

    pub fn speed(mut self, speed_km_s: u32) -> Self {
        self.row.speed_km_s = speed_km_s;
        self
    }

    pub fn days(mut self, days: u64) -> Self {
        self.row.duration_days = days;
        self
    }

    pub fn trip(mut self, trip_type: TripType) -> Self {
        self.row.trip_type = trip_type;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.row.price_millions = price;
        self
    }

    pub fn build(self) -> Row {
        self.row
    }
}

impl Default for RowBuilder {
    fn default() -> Self {
        Self::new()
    }
}
