//! Reactive wrapper around `ScsController` used by every picker page.
//!
//! Commands mutate the controller through its `RwSignal`; reads are tracked so
//! views re-render on every transition.

use super::config::ScsConfig;
use super::controller::{ScsController, SubmissionState};
use super::error_channel::ErrorRecord;
use super::executor::{self, ControllerHandle, SubmissionBackend};
use super::request::SubmissionRequest;
use super::selection::SelectionItem;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use uuid::Uuid;

impl ControllerHandle for RwSignal<ScsController> {
    fn with_controller<R>(&self, f: impl FnOnce(&mut ScsController) -> R) -> Option<R> {
        self.try_update(f)
    }
}

#[derive(Clone, Copy)]
pub struct ScsViewModel {
    pub controller: RwSignal<ScsController>,
    backend: StoredValue<Rc<dyn SubmissionBackend>, LocalStorage>,
}

impl ScsViewModel {
    pub fn new(config: ScsConfig, backend: Rc<dyn SubmissionBackend>) -> Self {
        Self {
            controller: RwSignal::new(ScsController::new(config)),
            backend: StoredValue::new_local(backend),
        }
    }

    // ---- reads ----

    pub fn state(&self) -> SubmissionState {
        self.controller.with(|c| c.state())
    }

    pub fn is_busy(&self) -> bool {
        self.controller.with(|c| c.is_busy())
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.controller.with(|c| c.selection().contains(id))
    }

    pub fn size(&self) -> usize {
        self.controller.with(|c| c.selection().size())
    }

    pub fn field_value(&self, key: &str) -> String {
        self.controller.with(|c| {
            c.selection()
                .field_value(key)
                .unwrap_or_default()
                .to_string()
        })
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.controller.with(|c| {
            c.selection()
                .items()
                .iter()
                .map(|item| item.id.clone())
                .collect()
        })
    }

    pub fn error(&self) -> Option<ErrorRecord> {
        self.controller.with(|c| c.error().cloned())
    }

    /// Snapshot under review, or the one in flight while submitting
    pub fn snapshot(&self) -> Option<SubmissionRequest> {
        self.controller.with(|c| c.displayed_request().cloned())
    }

    /// Id of the displayed snapshot; changes only when a new snapshot is taken or it settles
    pub fn snapshot_id(&self) -> Memo<Option<Uuid>> {
        let controller = self.controller;
        Memo::new(move |_| controller.with(|c| c.displayed_request().map(|r| r.id)))
    }

    pub fn snapshot_untracked(&self) -> Option<SubmissionRequest> {
        self.controller
            .with_untracked(|c| c.displayed_request().cloned())
    }

    pub fn last_outcome(&self) -> Option<SubmissionState> {
        self.controller.with(|c| c.last_outcome())
    }

    // ---- commands ----

    pub fn toggle_command(&self, id: String) {
        if let Some(Err(e)) = self
            .controller
            .try_update(|c| c.toggle(SelectionItem::new(id)))
        {
            log::error!("toggle rejected: {}", e);
        }
    }

    pub fn set_field_command(&self, key: String, value: String) {
        if let Some(Err(e)) = self.controller.try_update(|c| c.set_field(&key, value)) {
            log::error!("set_field rejected: {}", e);
        }
    }

    pub fn clear_command(&self) {
        self.controller.update(|c| {
            c.clear_selection();
        });
    }

    pub fn submit_command(&self) {
        self.controller.update(|c| {
            c.trigger_submit();
        });
    }

    pub fn cancel_command(&self) {
        self.controller.update(|c| {
            c.cancel();
        });
    }

    pub fn confirm_command(&self) {
        let Some(request) = self.controller.try_update(ScsController::confirm).flatten() else {
            return;
        };

        let timeout_ms = self
            .controller
            .with_untracked(|c| c.config().submit_timeout_ms);
        if let Some(timeout_ms) = timeout_ms {
            self.arm_watchdog(request.id, timeout_ms);
        }

        let controller = self.controller;
        let backend = self.backend.get_value();
        spawn_local(async move {
            executor::dispatch(&controller, backend.as_ref(), request).await;
        });
    }

    pub fn acknowledge_command(&self) {
        self.controller.update(|c| {
            c.acknowledge_error();
        });
    }

    pub fn dismiss_outcome_command(&self) {
        self.controller.update(|c| c.dismiss_outcome());
    }

    fn arm_watchdog(&self, id: Uuid, timeout_ms: u32) {
        let controller = self.controller;
        spawn_local(async move {
            executor::watchdog(&controller, id, TimeoutFuture::new(timeout_ms)).await;
        });
    }
}
