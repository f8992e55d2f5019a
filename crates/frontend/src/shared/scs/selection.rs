//! Selection store: the items a page has picked, under one cardinality mode.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cardinality mode of a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Zero or one item; reselecting the current item clears it
    Single,
    /// Any number of unique items; toggling flips membership
    Multi,
    /// Fixed set of keyed fields, always populated
    Structured,
}

/// Declared field of a `Structured` selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub key: String,
    pub label: String,
    pub default_value: String,
}

impl FieldSpec {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        default_value: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            default_value: default_value.into(),
        }
    }
}

/// One picked item. Equality is by `id` only.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct SelectionItem {
    pub id: String,
    pub value: Option<String>,
}

impl SelectionItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: None,
        }
    }

    pub fn with_value(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: Some(value.into()),
        }
    }
}

impl PartialEq for SelectionItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Misuse of the store by page code. Never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("`{op}` is not supported in {mode:?} mode")]
    UnsupportedMode {
        op: &'static str,
        mode: SelectionMode,
    },
}

#[derive(Debug, Clone)]
pub struct SelectionStore {
    mode: SelectionMode,
    fields: Vec<FieldSpec>,
    items: Vec<SelectionItem>,
    frozen: bool,
}

impl SelectionStore {
    pub fn new(mode: SelectionMode, fields: Vec<FieldSpec>) -> Self {
        let mut store = Self {
            mode,
            fields,
            items: Vec::new(),
            frozen: false,
        };
        store.reset();
        store
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn items(&self) -> &[SelectionItem] {
        &self.items
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn field_value(&self, key: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.id == key)
            .and_then(|item| item.value.as_deref())
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub(crate) fn freeze(&mut self) {
        self.frozen = true;
    }

    pub(crate) fn thaw(&mut self) {
        self.frozen = false;
    }

    /// Flip membership of `item`. Returns `Ok(false)` when frozen.
    pub fn toggle(&mut self, item: SelectionItem) -> Result<bool, SelectionError> {
        if self.mode == SelectionMode::Structured {
            return Err(SelectionError::UnsupportedMode {
                op: "toggle",
                mode: self.mode,
            });
        }
        if self.frozen {
            return Ok(false);
        }

        match self.items.iter().position(|existing| *existing == item) {
            Some(index) => {
                self.items.remove(index);
            }
            None if self.mode == SelectionMode::Single => {
                self.items.clear();
                self.items.push(item);
            }
            None => self.items.push(item),
        }
        Ok(true)
    }

    /// Overwrite the value of a declared field. Returns `Ok(false)` when frozen.
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> Result<bool, SelectionError> {
        if self.mode != SelectionMode::Structured {
            return Err(SelectionError::UnsupportedMode {
                op: "set_field",
                mode: self.mode,
            });
        }
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == key)
            .ok_or_else(|| SelectionError::UnknownField(key.to_string()))?;
        if self.frozen {
            return Ok(false);
        }
        item.value = Some(value.into());
        Ok(true)
    }

    /// Empty the selection, or restore field defaults. Returns `false` when frozen.
    pub fn clear(&mut self) -> bool {
        if self.frozen {
            return false;
        }
        self.reset();
        true
    }

    fn reset(&mut self) {
        self.items = match self.mode {
            SelectionMode::Structured => self
                .fields
                .iter()
                .map(|field| SelectionItem::with_value(&field.key, &field.default_value))
                .collect(),
            SelectionMode::Single | SelectionMode::Multi => Vec::new(),
        };
    }
}
