//! Confirmation gate: a closed/open latch carrying the snapshot under review.

use super::request::SubmissionRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Closed,
    Open,
}

#[derive(Debug, Clone, Default)]
pub struct ConfirmationGate {
    snapshot: Option<SubmissionRequest>,
}

impl ConfirmationGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        if self.snapshot.is_some() {
            GateState::Open
        } else {
            GateState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn snapshot(&self) -> Option<&SubmissionRequest> {
        self.snapshot.as_ref()
    }

    /// Returns `false` if a gate is already open
    pub fn open(&mut self, snapshot: SubmissionRequest) -> bool {
        if self.is_open() {
            return false;
        }
        self.snapshot = Some(snapshot);
        true
    }

    /// Close and hand the snapshot to the executor
    pub fn confirm(&mut self) -> Option<SubmissionRequest> {
        self.snapshot.take()
    }

    /// Close and discard the snapshot
    pub fn cancel(&mut self) -> bool {
        self.snapshot.take().is_some()
    }

    pub fn close(&mut self) {
        self.snapshot = None;
    }
}
