pub mod request;

pub use request::PanaBid;

use crate::usecases::common::UseCaseMetadata;

pub struct PanaGame;

impl UseCaseMetadata for PanaGame {
    fn usecase_index() -> &'static str {
        "u603"
    }

    fn usecase_name() -> &'static str {
        "pana"
    }

    fn display_name() -> &'static str {
        "Pana"
    }

    fn description() -> &'static str {
        "Pick three-digit panas of one family"
    }
}
