pub mod request;

pub use request::{jodi_digits, JodiBid};

use crate::usecases::common::UseCaseMetadata;

pub struct JodiDigitGame;

impl UseCaseMetadata for JodiDigitGame {
    fn usecase_index() -> &'static str {
        "u602"
    }

    fn usecase_name() -> &'static str {
        "jodi_digit"
    }

    fn display_name() -> &'static str {
        "Jodi Digit"
    }

    fn description() -> &'static str {
        "Pick any number of two-digit pairs from 00 to 99"
    }
}
