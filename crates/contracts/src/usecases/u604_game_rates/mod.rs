pub mod request;

pub use request::{GameRates, GameRatesUpdate, RateError, RATE_FIELDS};

use crate::usecases::common::UseCaseMetadata;

pub struct GameRatesForm;

impl UseCaseMetadata for GameRatesForm {
    fn usecase_index() -> &'static str {
        "u604"
    }

    fn usecase_name() -> &'static str {
        "game_rates"
    }

    fn display_name() -> &'static str {
        "Game Rates"
    }

    fn description() -> &'static str {
        "Payout multiplier per wager category"
    }
}
