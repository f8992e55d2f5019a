pub mod request;

pub use request::{single_digits, SingleDigitBid};

use crate::usecases::common::UseCaseMetadata;

pub struct SingleDigitGame;

impl UseCaseMetadata for SingleDigitGame {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "single_digit"
    }

    fn display_name() -> &'static str {
        "Single Digit"
    }

    fn description() -> &'static str {
        "Pick one digit from 0 to 9"
    }
}
