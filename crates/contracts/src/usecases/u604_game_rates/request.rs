use crate::shared::ValidationRules;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rate field keys and labels, in form order
pub const RATE_FIELDS: &[(&str, &str)] = &[
    ("single_digit", "Single Digit"),
    ("jodi_digit", "Jodi Digit"),
    ("single_pana", "Single Pana"),
    ("double_pana", "Double Pana"),
    ("tripple_pana", "Tripple Pana"),
    ("half_sangam", "Half Sangam"),
    ("full_sangam", "Full Sangam"),
];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RateError {
    #[error("unknown rate field `{0}`")]
    UnknownField(String),

    #[error("rate field `{0}` is missing")]
    MissingField(&'static str),

    #[error("invalid rate: {0}")]
    Invalid(String),
}

/// Payout multipliers per wager category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameRates {
    pub single_digit: f64,
    pub jodi_digit: f64,
    pub single_pana: f64,
    pub double_pana: f64,
    pub tripple_pana: f64,
    pub half_sangam: f64,
    pub full_sangam: f64,
}

impl Default for GameRates {
    fn default() -> Self {
        Self {
            single_digit: 9.5,
            jodi_digit: 95.0,
            single_pana: 150.0,
            double_pana: 300.0,
            tripple_pana: 1000.0,
            half_sangam: 1000.0,
            full_sangam: 10000.0,
        }
    }
}

impl GameRates {
    pub fn get(&self, key: &str) -> Option<f64> {
        let value = match key {
            "single_digit" => self.single_digit,
            "jodi_digit" => self.jodi_digit,
            "single_pana" => self.single_pana,
            "double_pana" => self.double_pana,
            "tripple_pana" => self.tripple_pana,
            "half_sangam" => self.half_sangam,
            "full_sangam" => self.full_sangam,
            _ => return None,
        };
        Some(value)
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut f64> {
        let slot = match key {
            "single_digit" => &mut self.single_digit,
            "jodi_digit" => &mut self.jodi_digit,
            "single_pana" => &mut self.single_pana,
            "double_pana" => &mut self.double_pana,
            "tripple_pana" => &mut self.tripple_pana,
            "half_sangam" => &mut self.half_sangam,
            "full_sangam" => &mut self.full_sangam,
            _ => return None,
        };
        Some(slot)
    }

    /// Build from raw form input; every field in `RATE_FIELDS` must be present exactly once
    pub fn from_fields<'a, I>(fields: I) -> Result<Self, RateError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let rules = ValidationRules::non_negative_amount();
        let mut rates = GameRates::default();
        let mut seen = [false; RATE_FIELDS.len()];

        for (key, raw) in fields {
            let index = RATE_FIELDS
                .iter()
                .position(|(k, _)| *k == key)
                .ok_or_else(|| RateError::UnknownField(key.to_string()))?;
            let label = RATE_FIELDS[index].1;
            let value = rules.parse_number(raw, label).map_err(RateError::Invalid)?;
            if let Some(slot) = rates.slot_mut(key) {
                *slot = value;
            }
            seen[index] = true;
        }

        if let Some(missing) = seen.iter().position(|s| !s) {
            return Err(RateError::MissingField(RATE_FIELDS[missing].0));
        }
        Ok(rates)
    }
}

/// Rate form body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRatesUpdate {
    pub rates: GameRates,
}
