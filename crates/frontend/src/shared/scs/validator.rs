//! Submit-time validation. Runs once per submit trigger, never on toggle.

use super::selection::{SelectionItem, SelectionMode, SelectionStore};
use contracts::shared::ValidationRules;

pub const EMPTY_SELECTION: &str = "select at least one item";
pub const MISSING_RATES: &str = "all rate fields are required";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Ok,
    Failed(String),
}

impl ValidationResult {
    pub fn failed(reason: impl Into<String>) -> Self {
        ValidationResult::Failed(reason.into())
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ValidationResult::Ok)
    }
}

/// Page-specific rule applied after the mode rule passes
pub type ExtraRule = fn(&[SelectionItem]) -> ValidationResult;

pub fn validate(store: &SelectionStore, extra_rule: Option<ExtraRule>) -> ValidationResult {
    let base = match store.mode() {
        SelectionMode::Single | SelectionMode::Multi => {
            if store.size() >= 1 {
                ValidationResult::Ok
            } else {
                ValidationResult::failed(EMPTY_SELECTION)
            }
        }
        SelectionMode::Structured => validate_fields(store),
    };

    match (base, extra_rule) {
        (ValidationResult::Ok, Some(rule)) => rule(store.items()),
        (base, _) => base,
    }
}

fn validate_fields(store: &SelectionStore) -> ValidationResult {
    let rules = ValidationRules::non_negative_amount();
    let all_valid = store.fields().iter().all(|field| {
        store
            .field_value(&field.key)
            .map(|raw| rules.parse_number(raw, &field.label).is_ok())
            .unwrap_or(false)
    });
    if all_valid {
        ValidationResult::Ok
    } else {
        ValidationResult::failed(MISSING_RATES)
    }
}
