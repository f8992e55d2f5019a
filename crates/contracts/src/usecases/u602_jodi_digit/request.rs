use serde::{Deserialize, Serialize};

/// Jodi wager body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JodiBid {
    /// Two-character codes in selection order
    pub digits: Vec<String>,
}

/// Board labels "00".."99"
pub fn jodi_digits() -> Vec<String> {
    (0..100).map(|n| format!("{:02}", n)).collect()
}

/// True for a two-character numeric code
pub fn is_jodi(code: &str) -> bool {
    code.len() == 2 && code.chars().all(|c| c.is_ascii_digit())
}
