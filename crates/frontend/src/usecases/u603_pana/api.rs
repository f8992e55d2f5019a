use crate::shared::api_utils::post_json;
use crate::shared::config::AppConfig;
use crate::shared::scs::validator::ExtraRule;
use crate::shared::scs::{SelectionItem, SubmissionBackend, SubmissionError, SubmissionRequest, ValidationResult};
use async_trait::async_trait;
use contracts::enums::PanaKind;
use contracts::shared::Timestamped;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u603_pana::{PanaBid, PanaGame};

/// API client for UseCase u603, bound to one pana family
pub struct PanaApi {
    url: String,
    kind: PanaKind,
}

impl PanaApi {
    pub fn new(config: &AppConfig, kind: PanaKind) -> Self {
        Self {
            url: config.submit_url(&PanaGame::submit_path()),
            kind,
        }
    }
}

pub fn build_request(kind: PanaKind, request: &SubmissionRequest) -> Timestamped<PanaBid> {
    Timestamped::new(
        PanaBid {
            kind,
            panas: request.item_ids(),
        },
        request.created_at,
    )
}

fn family_rule(items: &[SelectionItem], kind: PanaKind) -> ValidationResult {
    match items
        .iter()
        .find(|item| PanaKind::classify(&item.id) != Some(kind))
    {
        Some(item) => ValidationResult::failed(format!(
            "{} is not a {}",
            item.id,
            kind.display_name()
        )),
        None => ValidationResult::Ok,
    }
}

/// Every selected label must belong to `kind`
pub fn family_rule_for(kind: PanaKind) -> ExtraRule {
    match kind {
        PanaKind::SinglePana => |items| family_rule(items, PanaKind::SinglePana),
        PanaKind::DoublePana => |items| family_rule(items, PanaKind::DoublePana),
        PanaKind::TripplePana => |items| family_rule(items, PanaKind::TripplePana),
    }
}

#[async_trait(?Send)]
impl SubmissionBackend for PanaApi {
    async fn submit(&self, request: &SubmissionRequest) -> Result<(), SubmissionError> {
        post_json(&self.url, &build_request(self.kind, request)).await
    }
}
