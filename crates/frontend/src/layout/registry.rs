use crate::usecases::u601_single_digit::SingleDigitPage;
use crate::usecases::u602_jodi_digit::JodiDigitPage;
use crate::usecases::u603_pana::PanaPage;
use crate::usecases::u604_game_rates::GameRatesPage;
use contracts::enums::PanaKind;
use leptos::prelude::*;

pub const DEFAULT_PAGE: &str = "u601_single_digit";

/// (key, label, icon) of every page reachable from the sidebar
pub const PAGES: &[(&str, &str, &str)] = &[
    ("u601_single_digit", "Single Digit", "digits"),
    ("u602_jodi_digit", "Jodi Digit", "digits"),
    ("u603_single_pana", "Single Pana", "digits"),
    ("u603_double_pana", "Double Pana", "digits"),
    ("u603_tripple_pana", "Tripple Pana", "digits"),
    ("u604_game_rates", "Game Rates", "rates"),
];

pub fn is_known_page(key: &str) -> bool {
    PAGES.iter().any(|(k, _, _)| *k == key)
}

fn pana_kind_for_key(key: &str) -> Option<PanaKind> {
    key.strip_prefix("u603_").and_then(PanaKind::from_code)
}

pub fn render_page(key: &str) -> AnyView {
    match key {
        "u601_single_digit" => view! { <SingleDigitPage /> }.into_any(),
        "u602_jodi_digit" => view! { <JodiDigitPage /> }.into_any(),
        "u604_game_rates" => view! { <GameRatesPage /> }.into_any(),
        k => match pana_kind_for_key(k) {
            Some(kind) => view! { <PanaPage kind=kind /> }.into_any(),
            None => view! { <div class="page__placeholder">"Unknown page: " {k.to_string()}</div> }
                .into_any(),
        },
    }
}
