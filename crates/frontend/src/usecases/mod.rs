pub mod u601_single_digit;
pub mod u602_jodi_digit;
pub mod u603_pana;
pub mod u604_game_rates;
