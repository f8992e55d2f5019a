/// UseCase metadata used for page titles and endpoint paths
pub trait UseCaseMetadata {
    /// UseCase index (e.g. "u601")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "single_digit")
    fn usecase_name() -> &'static str;

    /// Display name for the UI (e.g. "Single Digit")
    fn display_name() -> &'static str;

    /// UseCase description
    fn description() -> &'static str {
        ""
    }

    /// Full name like "u601_single_digit"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }

    /// Submission endpoint like "/api/u601/single-digit/submit"
    fn submit_path() -> String {
        format!(
            "/api/{}/{}/submit",
            Self::usecase_index(),
            Self::usecase_name().replace('_', "-")
        )
    }
}
