use crate::shared::api_utils::post_json;
use crate::shared::config::AppConfig;
use crate::shared::scs::{SubmissionBackend, SubmissionError, SubmissionRequest};
use async_trait::async_trait;
use contracts::shared::Timestamped;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_single_digit::{SingleDigitBid, SingleDigitGame};

/// API client for UseCase u601
pub struct SingleDigitApi {
    url: String,
}

impl SingleDigitApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            url: config.submit_url(&SingleDigitGame::submit_path()),
        }
    }
}

pub fn build_request(
    request: &SubmissionRequest,
) -> Result<Timestamped<SingleDigitBid>, SubmissionError> {
    let digit = request
        .items
        .first()
        .map(|item| item.id.clone())
        .ok_or_else(|| SubmissionError::Encode("no digit selected".to_string()))?;
    Ok(Timestamped::new(SingleDigitBid { digit }, request.created_at))
}

#[async_trait(?Send)]
impl SubmissionBackend for SingleDigitApi {
    async fn submit(&self, request: &SubmissionRequest) -> Result<(), SubmissionError> {
        let body = build_request(request)?;
        post_json(&self.url, &body).await
    }
}
