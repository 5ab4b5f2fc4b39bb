#![allow(dead_code)]

use std::collections::VecDeque;

use spaceline_lib::{Carrier, RandomSource, Row, TripType};

/// Replays a fixed list of draws and counts how many were consumed.
pub struct ScriptedSource {
    draws: VecDeque<u32>,
    pub consumed: usize,
}

impl ScriptedSource {
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            consumed: 0,
        }
    }
}

impl RandomSource for ScriptedSource {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.consumed += 1;
        let value = self.draws.pop_front().expect("scripted draws exhausted");
        assert!(value < bound, "scripted draw {value} outside [0, {bound})");
        value
    }
}

pub fn row(carrier: Carrier, days: u64, trip_type: TripType, price: f64) -> Row {
    Row {
        carrier,
        speed_km_s: 0,
        duration_days: days,
        trip_type,
        price_millions: price,
    }
}
