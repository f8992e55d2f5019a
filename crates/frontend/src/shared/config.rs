use contracts::usecases::u604_game_rates::GameRates;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub submission: SubmissionConfig,
    #[serde(default)]
    pub rates: GameRates,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SubmissionConfig {
    /// 0 disables the submission watchdog
    pub timeout_ms: u32,
}

impl SubmissionConfig {
    pub fn timeout(&self) -> Option<u32> {
        (self.timeout_ms > 0).then_some(self.timeout_ms)
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000

[submission]
timeout_ms = 30000

[rates]
single_digit = 9.5
jodi_digit = 95.0
single_pana = 150.0
double_pana = 300.0
tripple_pana = 1000.0
half_sangam = 1000.0
full_sangam = 10000.0
"#;

/// Load the embedded configuration
pub fn load_config() -> Result<AppConfig, toml::de::Error> {
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(source: &str) -> Result<AppConfig, toml::de::Error> {
    let config: AppConfig = toml::from_str(source)?;
    log::debug!(
        "config loaded: api port {}, submit timeout {} ms",
        config.api.port,
        config.submission.timeout_ms
    );
    Ok(config)
}

impl AppConfig {
    pub fn submit_url(&self, path: &str) -> String {
        crate::shared::api_utils::api_url(self.api.port, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config().unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.submission.timeout(), Some(30_000));
        assert_eq!(config.rates, GameRates::default());
    }

    #[test]
    fn test_zero_timeout_disables_watchdog() {
        let config = parse_config(
            r#"
            [api]
            port = 8080
            [submission]
            timeout_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.submission.timeout(), None);
        // rates fall back to defaults when the table is absent
        assert_eq!(config.rates, GameRates::default());
    }
}
