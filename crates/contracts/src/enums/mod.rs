pub mod pana_kind;

pub use pana_kind::PanaKind;
