use super::selection::{FieldSpec, SelectionMode};
use super::validator::ExtraRule;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SUBMIT_TIMEOUT_MS: u32 = 30_000;

fn default_submit_timeout_ms() -> Option<u32> {
    Some(DEFAULT_SUBMIT_TIMEOUT_MS)
}

/// Per-page configuration of the selection/confirm/submit workflow
#[derive(Clone, Serialize, Deserialize)]
pub struct ScsConfig {
    pub mode: SelectionMode,
    /// Declared fields, `Structured` mode only
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
    #[serde(skip)]
    pub extra_rule: Option<ExtraRule>,
    /// Watchdog for a hung submission; `None` waits forever
    #[serde(default = "default_submit_timeout_ms")]
    pub submit_timeout_ms: Option<u32>,
}

impl ScsConfig {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            fields: Vec::new(),
            extra_rule: None,
            submit_timeout_ms: default_submit_timeout_ms(),
        }
    }

    pub fn single() -> Self {
        Self::new(SelectionMode::Single)
    }

    pub fn multi() -> Self {
        Self::new(SelectionMode::Multi)
    }

    pub fn structured(fields: Vec<FieldSpec>) -> Self {
        Self {
            fields,
            ..Self::new(SelectionMode::Structured)
        }
    }

    pub fn with_rule(mut self, rule: ExtraRule) -> Self {
        self.extra_rule = Some(rule);
        self
    }

    pub fn with_timeout(mut self, timeout_ms: Option<u32>) -> Self {
        self.submit_timeout_ms = timeout_ms;
        self
    }
}

impl std::fmt::Debug for ScsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScsConfig")
            .field("mode", &self.mode)
            .field("fields", &self.fields)
            .field("extra_rule", &self.extra_rule.is_some())
            .field("submit_timeout_ms", &self.submit_timeout_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults_timeout() {
        let config: ScsConfig = serde_json::from_str(r#"{ "mode": "multi" }"#).unwrap();
        assert_eq!(config.mode, SelectionMode::Multi);
        assert!(config.fields.is_empty());
        assert!(config.extra_rule.is_none());
        assert_eq!(config.submit_timeout_ms, Some(DEFAULT_SUBMIT_TIMEOUT_MS));
    }

    #[test]
    fn test_deserialize_structured() {
        let config: ScsConfig = serde_json::from_str(
            r#"{
                "mode": "structured",
                "fields": [{ "key": "single_digit", "label": "Single Digit", "default_value": "9.5" }],
                "submit_timeout_ms": null
            }"#,
        )
        .unwrap();
        assert_eq!(config.fields.len(), 1);
        assert_eq!(config.submit_timeout_ms, None);
    }
}
