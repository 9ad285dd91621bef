use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Used when a request does not set `top_n`.
pub const DEFAULT_TOP_N: usize = 10;
/// Used when a request does not set `min_score`.
pub const DEFAULT_MIN_SCORE: f64 = 0.30;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub groq_base_url: String,
    pub llm_model: String,
    pub jobs_csv_path: String,
    pub default_top_n: usize,
    pub default_min_score: f64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            groq_base_url: env_or("GROQ_BASE_URL", DEFAULT_BASE_URL),
            llm_model: env_or("LLM_MODEL", DEFAULT_MODEL),
            jobs_csv_path: env_or("JOBS_CSV_PATH", "data/tech_jobs_data.csv"),
            default_top_n: parse_env("DEFAULT_TOP_N", DEFAULT_TOP_N)?,
            default_min_score: parse_env("DEFAULT_MIN_SCORE", DEFAULT_MIN_SCORE)?,
            port: parse_env("PORT", 8080)?,
            rust_log: env_or("RUST_LOG", "info"),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.default_min_score) {
            bail!(
                "DEFAULT_MIN_SCORE must be between 0 and 1, got {}",
                self.default_min_score
            );
        }
        if self.default_top_n == 0 {
            bail!("DEFAULT_TOP_N must be at least 1");
        }
        Ok(())
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            groq_api_key: "test".to_string(),
            groq_base_url: DEFAULT_BASE_URL.to_string(),
            llm_model: DEFAULT_MODEL.to_string(),
            jobs_csv_path: "jobs.csv".to_string(),
            default_top_n: DEFAULT_TOP_N,
            default_min_score: DEFAULT_MIN_SCORE,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_min_score_out_of_range_rejected() {
        let mut c = config();
        c.default_min_score = 1.5;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_zero_top_n_rejected() {
        let mut c = config();
        c.default_top_n = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let value: u16 = parse_env("JOBMATCH_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }
}
