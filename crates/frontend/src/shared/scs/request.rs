use super::selection::{SelectionItem, SelectionMode, SelectionStore};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Immutable snapshot of a selection, taken when the confirmation gate opens
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRequest {
    pub id: Uuid,
    pub mode: SelectionMode,
    pub items: Vec<SelectionItem>,
    pub created_at: DateTime<Utc>,
}

impl SubmissionRequest {
    pub fn capture(store: &SelectionStore, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            mode: store.mode(),
            items: store.items().to_vec(),
            created_at,
        }
    }

    pub fn item_ids(&self) -> Vec<String> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }

    /// `(key, raw value)` pairs of a structured snapshot
    pub fn field_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items
            .iter()
            .map(|item| (item.id.as_str(), item.value.as_deref().unwrap_or("")))
    }
}
