use serde::{Deserialize, Serialize};

/// Pana families
///
/// A pana is written as three digits in ascending order where `0` ranks highest
/// (`128`, `550`, `000`). The family is decided by how many digits repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanaKind {
    /// Three distinct digits (120 panas)
    SinglePana,
    /// Exactly one digit repeated (90 panas)
    DoublePana,
    /// One digit three times (10 panas)
    TripplePana,
}

impl PanaKind {
    /// Route/API code
    pub fn code(&self) -> &'static str {
        match self {
            PanaKind::SinglePana => "single_pana",
            PanaKind::DoublePana => "double_pana",
            PanaKind::TripplePana => "tripple_pana",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PanaKind::SinglePana => "Single Pana",
            PanaKind::DoublePana => "Double Pana",
            PanaKind::TripplePana => "Tripple Pana",
        }
    }

    pub fn all() -> Vec<PanaKind> {
        vec![
            PanaKind::SinglePana,
            PanaKind::DoublePana,
            PanaKind::TripplePana,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "single_pana" => Some(PanaKind::SinglePana),
            "double_pana" => Some(PanaKind::DoublePana),
            "tripple_pana" => Some(PanaKind::TripplePana),
            _ => None,
        }
    }

    /// Classify a label; `None` if it is not a well-formed pana
    pub fn classify(label: &str) -> Option<Self> {
        let ranks: Vec<u8> = label.chars().map(digit_rank).collect::<Option<_>>()?;
        if ranks.len() != 3 || ranks[0] > ranks[1] || ranks[1] > ranks[2] {
            return None;
        }
        let kind = match (ranks[0] == ranks[1], ranks[1] == ranks[2]) {
            (true, true) => PanaKind::TripplePana,
            (false, false) => PanaKind::SinglePana,
            _ => PanaKind::DoublePana,
        };
        Some(kind)
    }

    /// All labels of this family in board order
    pub fn catalog(&self) -> Vec<String> {
        let mut labels = Vec::new();
        for a in 1..=10u8 {
            for b in a..=10u8 {
                for c in b..=10u8 {
                    let label: String = [a, b, c].iter().map(|r| rank_digit(*r)).collect();
                    if PanaKind::classify(&label) == Some(*self) {
                        labels.push(label);
                    }
                }
            }
        }
        labels
    }
}

impl std::fmt::Display for PanaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

// '1'..'9' -> 1..9, '0' -> 10
fn digit_rank(c: char) -> Option<u8> {
    match c.to_digit(10)? {
        0 => Some(10),
        d => Some(d as u8),
    }
}

fn rank_digit(rank: u8) -> char {
    if rank == 10 {
        '0'
    } else {
        char::from(b'0' + rank)
    }
}
