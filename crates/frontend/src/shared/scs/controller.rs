//! Page-level controller: owns the selection, the gate, the in-flight request
//! and the error slot, and is the only place state transitions happen.

use super::config::ScsConfig;
use super::error_channel::{ErrorChannel, ErrorRecord};
use super::executor::SubmissionError;
use super::gate::ConfirmationGate;
use super::request::SubmissionRequest;
use super::selection::{SelectionError, SelectionItem, SelectionStore};
use super::validator::{self, ValidationResult};
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Confirming,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone)]
pub struct ScsController {
    config: ScsConfig,
    store: SelectionStore,
    state: SubmissionState,
    gate: ConfirmationGate,
    in_flight: Option<SubmissionRequest>,
    /// Set once the in-flight request has been handed to a backend
    dispatched: bool,
    errors: ErrorChannel,
    last_outcome: Option<SubmissionState>,
}

impl ScsController {
    pub fn new(config: ScsConfig) -> Self {
        let store = SelectionStore::new(config.mode, config.fields.clone());
        Self {
            config,
            store,
            state: SubmissionState::Idle,
            gate: ConfirmationGate::new(),
            in_flight: None,
            dispatched: false,
            errors: ErrorChannel::new(),
            last_outcome: None,
        }
    }

    pub fn config(&self) -> &ScsConfig {
        &self.config
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.store
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn gate(&self) -> &ConfirmationGate {
        &self.gate
    }

    pub fn in_flight(&self) -> Option<&SubmissionRequest> {
        self.in_flight.as_ref()
    }

    /// Request shown in the review dialog: the gate snapshot while confirming,
    /// then the same request while it is in flight
    pub fn displayed_request(&self) -> Option<&SubmissionRequest> {
        self.gate.snapshot().or(self.in_flight.as_ref())
    }

    pub fn error(&self) -> Option<&ErrorRecord> {
        self.errors.current()
    }

    /// `Succeeded` or `Failed` of the last settled submission
    pub fn last_outcome(&self) -> Option<SubmissionState> {
        self.last_outcome
    }

    pub fn is_busy(&self) -> bool {
        matches!(
            self.state,
            SubmissionState::Confirming | SubmissionState::Submitting
        )
    }

    pub fn toggle(&mut self, item: SelectionItem) -> Result<bool, SelectionError> {
        let changed = self.store.toggle(item)?;
        if !changed {
            log::debug!("toggle ignored while {:?}", self.state);
        }
        Ok(changed)
    }

    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> Result<bool, SelectionError> {
        let changed = self.store.set_field(key, value)?;
        if !changed {
            log::debug!("set_field `{}` ignored while {:?}", key, self.state);
        }
        Ok(changed)
    }

    pub fn clear_selection(&mut self) -> bool {
        self.store.clear()
    }

    pub fn trigger_submit(&mut self) -> bool {
        self.trigger_submit_at(Utc::now())
    }

    /// Validate and, on success, open the gate with a snapshot taken at `now`.
    /// Returns whether the gate opened.
    pub fn trigger_submit_at(&mut self, now: DateTime<Utc>) -> bool {
        if self.state != SubmissionState::Idle {
            log::debug!("submit trigger ignored while {:?}", self.state);
            return false;
        }
        if self.errors.blocks_submit() {
            log::debug!("submit trigger ignored until the validation notice is acknowledged");
            return false;
        }

        self.errors.supersede_submission();
        self.last_outcome = None;

        if let ValidationResult::Failed(reason) =
            validator::validate(&self.store, self.config.extra_rule)
        {
            log::debug!("validation failed: {}", reason);
            self.errors.set(ErrorRecord::validation(reason));
            return false;
        }

        let snapshot = SubmissionRequest::capture(&self.store, now);
        if !self.gate.open(snapshot) {
            return false;
        }
        self.store.freeze();
        self.state = SubmissionState::Confirming;
        log::debug!("confirmation gate opened ({} items)", self.store.size());
        true
    }

    pub fn cancel(&mut self) -> bool {
        if self.state != SubmissionState::Confirming {
            return false;
        }
        self.gate.cancel();
        self.store.thaw();
        self.state = SubmissionState::Idle;
        log::debug!("confirmation cancelled");
        true
    }

    /// Close the gate and move its snapshot in flight. `None` unless confirming,
    /// which makes a second dispatch while submitting a no-op.
    pub fn confirm(&mut self) -> Option<SubmissionRequest> {
        if self.state != SubmissionState::Confirming {
            log::debug!("confirm ignored while {:?}", self.state);
            return None;
        }
        let request = self.gate.confirm()?;
        self.in_flight = Some(request.clone());
        self.dispatched = false;
        self.state = SubmissionState::Submitting;
        Some(request)
    }

    /// Claim request `id` for its single backend call. True only for the
    /// in-flight request, and only once.
    pub fn begin_dispatch(&mut self, id: Uuid) -> bool {
        if self.in_flight.as_ref().map(|r| r.id) != Some(id) {
            log::warn!("refusing to dispatch {}: not in flight", id);
            return false;
        }
        if self.dispatched {
            log::warn!("refusing to dispatch {} twice", id);
            return false;
        }
        self.dispatched = true;
        true
    }

    /// Apply the backend result of request `id`. Completions of a request that is
    /// no longer in flight are dropped and return `None`.
    pub fn settle(
        &mut self,
        id: Uuid,
        result: Result<(), SubmissionError>,
    ) -> Option<SubmissionState> {
        if self.in_flight.as_ref().map(|r| r.id) != Some(id) {
            log::warn!("dropping completion of stale submission {}", id);
            return None;
        }
        self.in_flight = None;
        self.dispatched = false;
        self.gate.close();
        self.store.thaw();

        let outcome = match result {
            Ok(()) => {
                self.store.clear();
                self.errors.acknowledge();
                log::info!("submission {} succeeded", id);
                SubmissionState::Succeeded
            }
            Err(err) => {
                log::warn!("submission {} failed: {}", id, err);
                self.errors.set(ErrorRecord::submission(err.to_string()));
                SubmissionState::Failed
            }
        };
        self.last_outcome = Some(outcome);
        self.state = SubmissionState::Idle;
        Some(outcome)
    }

    /// Fail request `id` if it is still in flight when its watchdog fires
    pub fn expire(&mut self, id: Uuid) -> Option<SubmissionState> {
        if self.in_flight.as_ref().map(|r| r.id) != Some(id) {
            return None;
        }
        let timeout_ms = self.config.submit_timeout_ms.unwrap_or_default();
        self.settle(id, Err(SubmissionError::TimedOut(timeout_ms)))
    }

    pub fn acknowledge_error(&mut self) -> Option<ErrorRecord> {
        self.errors.acknowledge()
    }

    pub fn dismiss_outcome(&mut self) {
        self.last_outcome = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::scs::error_channel::ErrorKind;
    use crate::shared::scs::selection::FieldSpec;
    use crate::shared::scs::validator::EMPTY_SELECTION;

    fn multi_with(ids: &[&str]) -> ScsController {
        let mut controller = ScsController::new(ScsConfig::multi());
        for id in ids {
            controller.toggle(SelectionItem::new(*id)).unwrap();
        }
        controller
    }

    fn held(controller: &ScsController) -> Vec<String> {
        controller
            .selection()
            .items()
            .iter()
            .map(|i| i.id.clone())
            .collect()
    }

    #[test]
    fn test_empty_submit_sets_validation_error() {
        let mut controller = ScsController::new(ScsConfig::single());
        assert!(!controller.trigger_submit());
        assert!(!controller.gate().is_open());
        assert_eq!(controller.state(), SubmissionState::Idle);
        let error = controller.error().unwrap();
        assert_eq!(error.kind, ErrorKind::Validation);
        assert_eq!(error.message, EMPTY_SELECTION);
    }

    #[test]
    fn test_validation_notice_blocks_until_acknowledged() {
        let mut controller = ScsController::new(ScsConfig::multi());
        controller.trigger_submit();
        controller.toggle(SelectionItem::new("45")).unwrap();
        assert!(!controller.trigger_submit());

        assert!(controller.acknowledge_error().is_some());
        assert!(controller.trigger_submit());
        assert_eq!(controller.state(), SubmissionState::Confirming);
    }

    #[test]
    fn test_open_gate_freezes_selection() {
        let mut controller = multi_with(&["12", "34"]);
        assert!(controller.trigger_submit());
        assert_eq!(controller.toggle(SelectionItem::new("56")), Ok(false));
        assert_eq!(controller.toggle(SelectionItem::new("12")), Ok(false));
        assert!(!controller.clear_selection());
        assert_eq!(held(&controller), vec!["12", "34"]);
    }

    #[test]
    fn test_open_gate_freezes_fields() {
        let mut controller = ScsController::new(ScsConfig::structured(vec![FieldSpec::new(
            "single_digit",
            "Single Digit",
            "9.5",
        )]));
        assert!(controller.trigger_submit());
        assert_eq!(controller.set_field("single_digit", "11"), Ok(false));
        assert_eq!(
            controller.gate().snapshot().unwrap().items[0].value.as_deref(),
            Some("9.5")
        );
        assert_eq!(controller.selection().field_value("single_digit"), Some("9.5"));
    }

    #[test]
    fn test_confirm_only_once() {
        let mut controller = multi_with(&["45"]);
        controller.trigger_submit();
        let request = controller.confirm().unwrap();
        assert_eq!(controller.state(), SubmissionState::Submitting);
        assert!(!controller.gate().is_open());
        assert_eq!(controller.in_flight(), Some(&request));
        assert!(controller.confirm().is_none());
        assert!(!controller.trigger_submit());
        assert!(!controller.cancel());
    }

    #[test]
    fn test_success_clears_selection() {
        let mut controller = multi_with(&["45"]);
        controller.trigger_submit();
        let request = controller.confirm().unwrap();
        assert_eq!(
            controller.settle(request.id, Ok(())),
            Some(SubmissionState::Succeeded)
        );
        assert!(controller.selection().is_empty());
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(controller.last_outcome(), Some(SubmissionState::Succeeded));
        assert!(controller.error().is_none());
        assert!(controller.in_flight().is_none());
    }

    #[test]
    fn test_failure_preserves_selection_and_allows_retry() {
        let mut controller = multi_with(&["12", "34"]);
        controller.trigger_submit();
        let request = controller.confirm().unwrap();
        let outcome = controller.settle(
            request.id,
            Err(SubmissionError::Network("connection refused".to_string())),
        );
        assert_eq!(outcome, Some(SubmissionState::Failed));
        assert_eq!(held(&controller), vec!["12", "34"]);
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(controller.error().map(|e| e.kind), Some(ErrorKind::Submission));

        // retry without rebuilding; the submission error is superseded
        assert!(controller.toggle(SelectionItem::new("56")).unwrap());
        assert!(controller.trigger_submit());
        assert!(controller.error().is_none());
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut controller = multi_with(&["45"]);
        controller.trigger_submit();
        let request = controller.confirm().unwrap();
        assert_eq!(controller.settle(Uuid::new_v4(), Ok(())), None);
        assert_eq!(controller.state(), SubmissionState::Submitting);
        assert_eq!(held(&controller), vec!["45"]);
        assert!(controller.settle(request.id, Ok(())).is_some());
    }

    #[test]
    fn test_expire_fails_in_flight_request() {
        let mut controller =
            ScsController::new(ScsConfig::multi().with_timeout(Some(5_000)));
        controller.toggle(SelectionItem::new("45")).unwrap();
        controller.trigger_submit();
        let request = controller.confirm().unwrap();

        assert_eq!(controller.expire(request.id), Some(SubmissionState::Failed));
        assert_eq!(held(&controller), vec!["45"]);
        assert_eq!(
            controller.error().map(|e| e.message.clone()),
            Some(SubmissionError::TimedOut(5_000).to_string())
        );

        // the late backend answer changes nothing
        assert_eq!(controller.settle(request.id, Ok(())), None);
        assert_eq!(held(&controller), vec!["45"]);
        assert_eq!(controller.expire(request.id), None);
    }

    #[test]
    fn test_snapshot_carries_trigger_time() {
        let now = chrono::TimeZone::with_ymd_and_hms(&Utc, 2024, 3, 15, 14, 2, 26).unwrap();
        let mut controller = multi_with(&["45"]);
        assert!(controller.trigger_submit_at(now));
        assert_eq!(controller.gate().snapshot().unwrap().created_at, now);
    }

    #[test]
    fn test_dispatch_claimed_once() {
        let mut controller = multi_with(&["45"]);
        controller.trigger_submit();
        let request = controller.confirm().unwrap();

        assert!(!controller.begin_dispatch(Uuid::new_v4()));
        assert!(controller.begin_dispatch(request.id));
        assert!(!controller.begin_dispatch(request.id));

        controller.settle(request.id, Ok(()));
        assert!(!controller.begin_dispatch(request.id));
    }

    #[test]
    fn test_displayed_request_is_stable_across_confirm() {
        let mut controller = multi_with(&["45"]);
        assert!(controller.displayed_request().is_none());

        controller.trigger_submit();
        let shown = controller.displayed_request().map(|r| r.id);
        assert!(shown.is_some());

        let request = controller.confirm().unwrap();
        assert_eq!(controller.displayed_request().map(|r| r.id), shown);
        assert_eq!(Some(request.id), shown);

        controller.settle(request.id, Ok(()));
        assert!(controller.displayed_request().is_none());
    }
}
