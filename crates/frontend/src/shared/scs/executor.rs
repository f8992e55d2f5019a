//! Submission executor: the one asynchronous side effect of the workflow.
//!
//! The controller decides what may be dispatched (`confirm` hands out at most one
//! request at a time); the executor performs the backend call and reports the
//! result back through a [`ControllerHandle`], never holding a borrow across the await.

use super::controller::{ScsController, SubmissionState};
use super::request::SubmissionRequest;
use async_trait::async_trait;
use std::cell::RefCell;
use std::future::Future;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("network error: {0}")]
    Network(String),

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("no response within {0} ms")]
    TimedOut(u32),

    #[error("failed to build request: {0}")]
    Encode(String),
}

/// Backend collaborator that persists a confirmed selection
#[async_trait(?Send)]
pub trait SubmissionBackend {
    async fn submit(&self, request: &SubmissionRequest) -> Result<(), SubmissionError>;
}

/// Shared access to a page controller
pub trait ControllerHandle {
    /// `None` if the controller is gone (page unmounted)
    fn with_controller<R>(&self, f: impl FnOnce(&mut ScsController) -> R) -> Option<R>;
}

impl ControllerHandle for RefCell<ScsController> {
    fn with_controller<R>(&self, f: impl FnOnce(&mut ScsController) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Confirm the open gate and run the submission to completion.
/// Returns `None` when nothing was dispatched (gate not open or already submitting).
pub async fn execute<H, B>(handle: &H, backend: &B) -> Option<SubmissionState>
where
    H: ControllerHandle + ?Sized,
    B: SubmissionBackend + ?Sized,
{
    let request = handle.with_controller(ScsController::confirm).flatten()?;
    dispatch(handle, backend, request).await
}

/// Send an already confirmed request and settle it. Returns `None` without
/// calling the backend unless `request` is in flight and not yet dispatched.
pub async fn dispatch<H, B>(
    handle: &H,
    backend: &B,
    request: SubmissionRequest,
) -> Option<SubmissionState>
where
    H: ControllerHandle + ?Sized,
    B: SubmissionBackend + ?Sized,
{
    if !handle.with_controller(|controller| controller.begin_dispatch(request.id))? {
        return None;
    }
    log::info!(
        "dispatching submission {} ({} items)",
        request.id,
        request.items.len()
    );
    let result = backend.submit(&request).await;
    handle
        .with_controller(|controller| controller.settle(request.id, result))
        .flatten()
}

/// Expire request `id` once `timer` completes, unless it settled first
pub async fn watchdog<H, T>(handle: &H, id: Uuid, timer: T) -> Option<SubmissionState>
where
    H: ControllerHandle + ?Sized,
    T: Future<Output = ()>,
{
    timer.await;
    let expired = handle
        .with_controller(|controller| controller.expire(id))
        .flatten();
    if expired.is_some() {
        log::warn!("submission {} timed out", id);
    }
    expired
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::scs::config::ScsConfig;
    use crate::shared::scs::error_channel::ErrorKind;
    use crate::shared::scs::selection::{FieldSpec, SelectionItem};
    use crate::shared::scs::validator::EMPTY_SELECTION;
    use std::cell::Cell;
    use std::time::Duration;

    struct FakeBackend {
        calls: Cell<usize>,
        outcome: Result<(), SubmissionError>,
        seen: RefCell<Vec<SubmissionRequest>>,
        delay: Option<Duration>,
    }

    impl FakeBackend {
        fn ok() -> Self {
            Self::with_outcome(Ok(()))
        }

        fn failing() -> Self {
            Self::with_outcome(Err(SubmissionError::Rejected {
                status: 503,
                message: "market closed".to_string(),
            }))
        }

        fn with_outcome(outcome: Result<(), SubmissionError>) -> Self {
            Self {
                calls: Cell::new(0),
                outcome,
                seen: RefCell::new(Vec::new()),
                delay: None,
            }
        }

        /// Answers only after `delay`
        fn slow(delay: Duration) -> Self {
            Self {
                delay: Some(delay),
                ..Self::ok()
            }
        }
    }

    #[async_trait(?Send)]
    impl SubmissionBackend for FakeBackend {
        async fn submit(&self, request: &SubmissionRequest) -> Result<(), SubmissionError> {
            self.calls.set(self.calls.get() + 1);
            self.seen.borrow_mut().push(request.clone());
            match self.delay {
                Some(delay) => tokio::time::sleep(delay).await,
                None => tokio::task::yield_now().await,
            }
            self.outcome.clone()
        }
    }

    fn ids(items: &[SelectionItem]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    fn rate_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("single_digit", "Single Digit", "9.5"),
            FieldSpec::new("jodi_digit", "Jodi Digit", "95"),
            FieldSpec::new("full_sangam", "Full Sangam", "10000"),
        ]
    }

    #[tokio::test]
    async fn test_single_flight() {
        let controller = RefCell::new(ScsController::new(ScsConfig::multi()));
        controller
            .borrow_mut()
            .toggle(SelectionItem::new("23"))
            .unwrap();
        assert!(controller.borrow_mut().trigger_submit());

        let backend = FakeBackend::ok();
        let (first, second) = tokio::join!(
            execute(&controller, &backend),
            execute(&controller, &backend)
        );

        assert_eq!(backend.calls.get(), 1);
        assert_eq!(first, Some(SubmissionState::Succeeded));
        assert_eq!(second, None);
        assert_eq!(controller.borrow().state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_execute_without_open_gate_makes_no_call() {
        let controller = RefCell::new(ScsController::new(ScsConfig::multi()));
        let backend = FakeBackend::ok();
        assert_eq!(execute(&controller, &backend).await, None);
        assert_eq!(backend.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_scenario_a_single_digit_success() {
        let controller = RefCell::new(ScsController::new(ScsConfig::single()));
        controller
            .borrow_mut()
            .toggle(SelectionItem::new("7"))
            .unwrap();
        assert!(controller.borrow_mut().trigger_submit());
        assert_eq!(
            controller.borrow().gate().snapshot().map(|s| s.item_ids()),
            Some(vec!["7".to_string()])
        );

        let backend = FakeBackend::ok();
        assert_eq!(
            execute(&controller, &backend).await,
            Some(SubmissionState::Succeeded)
        );
        let controller = controller.borrow();
        assert!(controller.selection().is_empty());
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(ids(&backend.seen.borrow()[0].items), vec!["7"]);
    }

    #[tokio::test]
    async fn test_scenario_b_multi_toggle_then_confirm_payload() {
        let controller = RefCell::new(ScsController::new(ScsConfig::multi()));
        for id in ["23", "45", "23"] {
            controller
                .borrow_mut()
                .toggle(SelectionItem::new(id))
                .unwrap();
        }
        assert_eq!(ids(controller.borrow().selection().items()), vec!["45"]);
        assert!(controller.borrow_mut().trigger_submit());
        assert_eq!(
            controller.borrow().gate().snapshot().map(|s| s.item_ids()),
            Some(vec!["45".to_string()])
        );

        let backend = FakeBackend::ok();
        execute(&controller, &backend).await;
        assert_eq!(ids(&backend.seen.borrow()[0].items), vec!["45"]);
    }

    #[test]
    fn test_scenario_c_empty_multi() {
        let mut controller = ScsController::new(ScsConfig::multi());
        assert!(!controller.trigger_submit());
        assert!(!controller.gate().is_open());
        let error = controller.error().unwrap();
        assert_eq!(error.kind, ErrorKind::Validation);
        assert_eq!(error.message, EMPTY_SELECTION);
    }

    #[tokio::test]
    async fn test_scenario_d_structured_failure_keeps_values() {
        let controller = RefCell::new(ScsController::new(ScsConfig::structured(rate_fields())));
        assert!(controller.borrow_mut().trigger_submit());
        let listed: Vec<(String, String)> = controller
            .borrow()
            .gate()
            .snapshot()
            .unwrap()
            .field_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[2], ("full_sangam".to_string(), "10000".to_string()));

        let backend = FakeBackend::failing();
        assert_eq!(
            execute(&controller, &backend).await,
            Some(SubmissionState::Failed)
        );

        let controller = controller.borrow();
        assert_eq!(controller.selection().field_value("single_digit"), Some("9.5"));
        assert_eq!(controller.selection().field_value("jodi_digit"), Some("95"));
        assert_eq!(controller.selection().field_value("full_sangam"), Some("10000"));
        assert_eq!(controller.error().map(|e| e.kind), Some(ErrorKind::Submission));
        assert_eq!(
            controller.error().map(|e| e.message.as_str()),
            Some("market closed")
        );
        assert!(!controller.gate().is_open());
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_scenario_e_cancel_makes_no_call() {
        let controller = RefCell::new(ScsController::new(ScsConfig::multi()));
        for id in ["12", "34"] {
            controller
                .borrow_mut()
                .toggle(SelectionItem::new(id))
                .unwrap();
        }
        assert!(controller.borrow_mut().trigger_submit());
        assert!(controller.borrow_mut().cancel());

        let backend = FakeBackend::ok();
        assert_eq!(execute(&controller, &backend).await, None);

        let controller = controller.borrow();
        assert_eq!(ids(controller.selection().items()), vec!["12", "34"]);
        assert!(!controller.gate().is_open());
        assert!(controller.error().is_none());
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(backend.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_payload_is_what_was_confirmed() {
        let controller = RefCell::new(ScsController::new(ScsConfig::multi()));
        controller
            .borrow_mut()
            .toggle(SelectionItem::new("12"))
            .unwrap();
        controller.borrow_mut().trigger_submit();
        // edits during confirmation are ignored
        let _ = controller.borrow_mut().toggle(SelectionItem::new("99"));

        let backend = FakeBackend::ok();
        execute(&controller, &backend).await;
        assert_eq!(ids(&backend.seen.borrow()[0].items), vec!["12"]);
    }

    fn confirmed(controller: &RefCell<ScsController>, ids: &[&str]) -> SubmissionRequest {
        for id in ids {
            controller
                .borrow_mut()
                .toggle(SelectionItem::new(*id))
                .unwrap();
        }
        assert!(controller.borrow_mut().trigger_submit());
        controller.borrow_mut().confirm().unwrap()
    }

    #[tokio::test]
    async fn test_repeated_dispatch_calls_backend_once() {
        let controller = RefCell::new(ScsController::new(ScsConfig::multi()));
        let request = confirmed(&controller, &["23"]);

        let backend = FakeBackend::ok();
        let (first, second) = tokio::join!(
            dispatch(&controller, &backend, request.clone()),
            dispatch(&controller, &backend, request.clone())
        );

        assert_eq!(backend.calls.get(), 1);
        assert_eq!(first, Some(SubmissionState::Succeeded));
        assert_eq!(second, None);

        // settled requests are not sent again either
        assert_eq!(dispatch(&controller, &backend, request).await, None);
        assert_eq!(backend.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_of_unconfirmed_request_is_refused() {
        let controller = RefCell::new(ScsController::new(ScsConfig::multi()));
        controller
            .borrow_mut()
            .toggle(SelectionItem::new("23"))
            .unwrap();
        let request = SubmissionRequest::capture(controller.borrow().selection(), chrono::Utc::now());

        let backend = FakeBackend::ok();
        assert_eq!(dispatch(&controller, &backend, request).await, None);
        assert_eq!(backend.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_hung_backend_times_out_and_late_answer_is_dropped() {
        let controller = RefCell::new(ScsController::new(
            ScsConfig::multi().with_timeout(Some(10)),
        ));
        let request = confirmed(&controller, &["23", "45"]);

        let backend = FakeBackend::slow(Duration::from_millis(200));
        let (sent, expired) = tokio::join!(
            dispatch(&controller, &backend, request.clone()),
            watchdog(
                &controller,
                request.id,
                tokio::time::sleep(Duration::from_millis(10))
            )
        );

        assert_eq!(expired, Some(SubmissionState::Failed));
        assert_eq!(sent, None);
        assert_eq!(backend.calls.get(), 1);

        let controller = controller.borrow();
        assert_eq!(ids(controller.selection().items()), vec!["23", "45"]);
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(controller.last_outcome(), Some(SubmissionState::Failed));
        assert_eq!(
            controller.error().map(|e| e.message.clone()),
            Some(SubmissionError::TimedOut(10).to_string())
        );
    }

    #[tokio::test]
    async fn test_watchdog_after_settlement_is_a_no_op() {
        let controller = RefCell::new(ScsController::new(ScsConfig::multi()));
        let request = confirmed(&controller, &["23"]);

        let backend = FakeBackend::ok();
        let (sent, expired) = tokio::join!(
            dispatch(&controller, &backend, request.clone()),
            watchdog(
                &controller,
                request.id,
                tokio::time::sleep(Duration::from_millis(50))
            )
        );

        assert_eq!(sent, Some(SubmissionState::Succeeded));
        assert_eq!(expired, None);
        assert!(controller.borrow().error().is_none());
    }
}
