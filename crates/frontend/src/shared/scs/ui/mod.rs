//! Shared widgets of the selection/confirm/submit workflow.

pub mod confirm_dialog;
pub mod error_notice;
pub mod selection_grid;
pub mod submit_bar;

pub use confirm_dialog::ConfirmDialog;
pub use error_notice::ErrorNotice;
pub use selection_grid::SelectionGrid;
pub use submit_bar::SubmitBar;
