use crate::enums::PanaKind;
use serde::{Deserialize, Serialize};

/// Pana wager body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanaBid {
    pub kind: PanaKind,
    /// Three-character labels in selection order
    pub panas: Vec<String>,
}
