use serde::{Deserialize, Serialize};

/// Single digit wager body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleDigitBid {
    /// One character, "0".."9"
    pub digit: String,
}

/// Board labels "0".."9"
pub fn single_digits() -> Vec<String> {
    (0..10).map(|d| d.to_string()).collect()
}
