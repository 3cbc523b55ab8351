use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Unset → analyses are kept in process memory only.
    pub redis_url: Option<String>,
    pub analysis_ttl_secs: u64,
    pub max_upload_bytes: usize,
    pub min_job_description_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            redis_url: None,
            analysis_ttl_secs: 7 * 24 * 60 * 60,
            max_upload_bytes: 10 * 1024 * 1024,
            min_job_description_chars: 100,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            redis_url: std::env::var("REDIS_URL").ok().filter(|u| !u.trim().is_empty()),
            analysis_ttl_secs: parse_env("ANALYSIS_TTL_SECS", defaults.analysis_ttl_secs)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            min_job_description_chars: parse_env(
                "MIN_JOB_DESCRIPTION_CHARS",
                defaults.min_job_description_chars,
            )?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.min_job_description_chars, 100);
        assert_eq!(config.analysis_ttl_secs, 604_800);
        assert!(config.redis_url.is_none());
    }

    #[test]
    fn test_parse_env_reports_bad_values() {
        std::env::set_var("RESUME_API_TEST_BAD_NUMBER", "ten");
        let err = parse_env::<u64>("RESUME_API_TEST_BAD_NUMBER", 1).unwrap_err();
        assert!(err.to_string().contains("RESUME_API_TEST_BAD_NUMBER"));
        std::env::remove_var("RESUME_API_TEST_BAD_NUMBER");
    }

    #[test]
    fn test_parse_env_falls_back_to_default() {
        let value = parse_env::<usize>("RESUME_API_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }
}
