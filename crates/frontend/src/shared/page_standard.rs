//! Page category constants.
//!
//! Every page declares:
//!   - HTML `id` in the format `{usecase}--{category}` (e.g. `"u602_jodi_digit--usecase"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the use case name searchable: copy the id from the
//! DOM inspector and you land in `usecases/u602_jodi_digit/`.

/// Selection/confirm/submit page (pickers).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Settings form (rates).
pub const PAGE_CAT_SETTINGS: &str = "settings";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_USECASE, PAGE_CAT_SETTINGS];

/// Validate that a page id matches the `{usecase}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && is_known_category(category),
        None => false,
    }
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

/// Build the standard page id for a use case
pub fn page_id(full_name: &str, category: &str) -> String {
    format!("{}--{}", full_name, category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("u602_jodi_digit--usecase"));
        assert!(is_valid_page_id(&page_id("u604_game_rates", PAGE_CAT_SETTINGS)));
        assert!(!is_valid_page_id("u602_jodi_digit"));
        assert!(!is_valid_page_id("--usecase"));
        assert!(!is_valid_page_id("u602_jodi_digit--list"));
    }
}
