use crate::shared::api_utils::post_json;
use crate::shared::config::AppConfig;
use crate::shared::scs::{SubmissionBackend, SubmissionError, SubmissionRequest};
use async_trait::async_trait;
use contracts::shared::Timestamped;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u602_jodi_digit::{JodiBid, JodiDigitGame};

/// API client for UseCase u602
pub struct JodiDigitApi {
    url: String,
}

impl JodiDigitApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            url: config.submit_url(&JodiDigitGame::submit_path()),
        }
    }
}

pub fn build_request(request: &SubmissionRequest) -> Timestamped<JodiBid> {
    Timestamped::new(
        JodiBid {
            digits: request.item_ids(),
        },
        request.created_at,
    )
}

#[async_trait(?Send)]
impl SubmissionBackend for JodiDigitApi {
    async fn submit(&self, request: &SubmissionRequest) -> Result<(), SubmissionError> {
        post_json(&self.url, &build_request(request)).await
    }
}
