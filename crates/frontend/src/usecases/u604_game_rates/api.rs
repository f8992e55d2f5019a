use crate::shared::api_utils::post_json;
use crate::shared::config::AppConfig;
use crate::shared::scs::{FieldSpec, SubmissionBackend, SubmissionError, SubmissionRequest};
use async_trait::async_trait;
use contracts::shared::Timestamped;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u604_game_rates::{GameRates, GameRatesForm, GameRatesUpdate, RATE_FIELDS};

/// API client for UseCase u604
pub struct GameRatesApi {
    url: String,
}

impl GameRatesApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            url: config.submit_url(&GameRatesForm::submit_path()),
        }
    }
}

/// Form fields in display order, pre-filled with `current`
pub fn rate_fields(current: &GameRates) -> Vec<FieldSpec> {
    RATE_FIELDS
        .iter()
        .map(|(key, label)| {
            let value = current.get(key).map(|v| v.to_string()).unwrap_or_default();
            FieldSpec::new(*key, *label, value)
        })
        .collect()
}

pub fn rate_label(key: &str) -> String {
    RATE_FIELDS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| key.to_string())
}

pub fn build_request(
    request: &SubmissionRequest,
) -> Result<Timestamped<GameRatesUpdate>, SubmissionError> {
    let rates = GameRates::from_fields(request.field_pairs())
        .map_err(|e| SubmissionError::Encode(e.to_string()))?;
    Ok(Timestamped::new(GameRatesUpdate { rates }, request.created_at))
}

#[async_trait(?Send)]
impl SubmissionBackend for GameRatesApi {
    async fn submit(&self, request: &SubmissionRequest) -> Result<(), SubmissionError> {
        let body = build_request(request)?;
        post_json(&self.url, &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::scs::{ScsConfig, ScsController};
    use chrono::{TimeZone, Utc};

    fn controller() -> ScsController {
        ScsController::new(ScsConfig::structured(rate_fields(&GameRates::default())))
    }

    #[test]
    fn test_fields_prefilled_from_current_rates() {
        let controller = controller();
        let store = controller.selection();
        assert_eq!(store.size(), RATE_FIELDS.len());
        assert_eq!(store.field_value("single_digit"), Some("9.5"));
        assert_eq!(store.field_value("full_sangam"), Some("10000"));
    }

    #[test]
    fn test_edited_snapshot_is_sent() {
        let mut controller = controller();
        controller.set_field("jodi_digit", "90").unwrap();
        let at = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert!(controller.trigger_submit_at(at));

        let body = build_request(controller.gate().snapshot().unwrap()).unwrap();
        assert_eq!(body.body.rates.jodi_digit, 90.0);
        assert_eq!(body.body.rates.single_digit, 9.5);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["timestamp"], "2024-03-15T14:02:26.000Z");
        assert_eq!(json["rates"]["jodi_digit"], serde_json::json!(90.0));
    }

    #[test]
    fn test_blank_rate_never_reaches_the_gate() {
        let mut controller = controller();
        controller.set_field("half_sangam", "  ").unwrap();
        assert!(!controller.trigger_submit());
        assert!(!controller.gate().is_open());
    }

    #[test]
    fn test_labels() {
        assert_eq!(rate_label("tripple_pana"), "Tripple Pana");
        assert_eq!(rate_label("unknown"), "unknown");
    }
}
