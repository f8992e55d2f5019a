//! Selection–Confirm–Submit workflow shared by all wager pages.
//!
//! A page builds a selection, the validator checks it on submit, the
//! confirmation gate shows an immutable snapshot, and the executor sends it to
//! the backend exactly once. One [`ScsController`] per page owns all of that
//! state; pages differ only in their [`ScsConfig`] and [`SubmissionBackend`].
//!
//! - `selection`: cardinality modes and the store
//! - `validator`: submit-time rules
//! - `gate`: confirmation latch
//! - `executor`: backend seam and single-flight dispatch
//! - `error_channel`: single-slot user-facing error
//! - `controller`: state machine tying them together
//! - `view_model` / `ui`: Leptos binding and shared components

pub mod config;
pub mod controller;
pub mod error_channel;
pub mod executor;
pub mod gate;
pub mod request;
pub mod selection;
pub mod ui;
pub mod validator;
pub mod view_model;

pub use config::ScsConfig;
pub use controller::{ScsController, SubmissionState};
pub use error_channel::{ErrorKind, ErrorRecord};
pub use executor::{SubmissionBackend, SubmissionError};
pub use request::SubmissionRequest;
pub use selection::{FieldSpec, SelectionItem, SelectionMode};
pub use validator::ValidationResult;
pub use view_model::ScsViewModel;
