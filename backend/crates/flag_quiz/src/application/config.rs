//! Application Configuration
//!
//! Configuration for the flag quiz application layer.

use crate::domain::history::DEFAULT_HISTORY_CAPACITY;
use crate::domain::value_objects::OptionCount;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Flag quiz application configuration
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// Options per question when the request does not say
    pub default_option_count: usize,
    /// Codes excluded from primary selection
    pub history_capacity: usize,
    /// Path of the code → name dataset
    pub data_path: PathBuf,
    /// Flag CDN base URL, without trailing slash
    pub cdn_base_url: String,
    /// Image size segment of the CDN path
    pub image_size: String,
    /// Timeout for a single CDN request
    pub cdn_timeout: Duration,
    /// Listen port
    pub port: u16,
    /// Allowed CORS origins
    pub frontend_origins: Vec<String>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            default_option_count: OptionCount::DEFAULT.get(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            data_path: PathBuf::from("data/flag_data.json"),
            cdn_base_url: "https://flagcdn.com".to_string(),
            image_size: "256x192".to_string(),
            cdn_timeout: Duration::from_secs(10),
            port: 3000,
            frontend_origins: vec!["http://localhost:5173".to_string()],
        }
    }
}

impl QuizConfig {
    /// Build config from process environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .filter(|&origin| {
                        // Credentialed CORS cannot answer with a wildcard
                        if origin == "*" {
                            tracing::warn!("Ignoring wildcard in FRONTEND_ORIGINS");
                        }
                        origin != "*"
                    })
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .unwrap_or(defaults.frontend_origins);

        Self {
            default_option_count: parse_var::<_, usize>(&lookup, "QUIZ_OPTION_COUNT")
                .filter(|&count| count >= OptionCount::MIN)
                .unwrap_or(defaults.default_option_count),
            history_capacity: parse_var(&lookup, "QUIZ_HISTORY_CAPACITY")
                .unwrap_or(defaults.history_capacity),
            data_path: lookup("FLAG_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            cdn_base_url: lookup("FLAG_CDN_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.cdn_base_url),
            image_size: lookup("FLAG_IMAGE_SIZE").unwrap_or(defaults.image_size),
            cdn_timeout: parse_var(&lookup, "FLAG_CDN_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.cdn_timeout),
            port: parse_var(&lookup, "PORT").unwrap_or(defaults.port),
            frontend_origins,
        }
    }

    /// Default option count as the signed type requests carry
    pub fn default_option_count_i64(&self) -> i64 {
        i64::try_from(self.default_option_count).unwrap_or(i64::MAX)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparsable config value");
            None
        }
    }
}
