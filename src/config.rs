use crate::error::AppError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_DDRAGON_VERSION: &str = "13.11.1";
pub const DEFAULT_REQUESTS_PER_SECOND: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    pub ddragon_version: String,
    pub output_dir: PathBuf,
    pub requests_per_second: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_base_url =
            env::var("ARAM_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let ddragon_version = env::var("ARAM_DDRAGON_VERSION")
            .unwrap_or_else(|_| DEFAULT_DDRAGON_VERSION.to_string());

        let output_dir = env::var("ARAM_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_output_dir());

        let requests_per_second = match env::var("ARAM_REQUESTS_PER_SECOND") {
            Ok(raw) => parse_rate(&raw)?,
            Err(_) => DEFAULT_REQUESTS_PER_SECOND,
        };

        Ok(Config {
            api_base_url: normalize_base_url(&api_base_url),
            ddragon_version,
            output_dir,
            requests_per_second,
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api_base_url = normalize_base_url(base_url);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            ddragon_version: DEFAULT_DDRAGON_VERSION.to_string(),
            output_dir: default_output_dir(),
            requests_per_second: DEFAULT_REQUESTS_PER_SECOND,
        }
    }
}

pub fn default_output_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".aram_dashboard")
}

pub fn parse_rate(raw: &str) -> Result<u32, AppError> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(AppError::ConfigError(format!(
            "ARAM_REQUESTS_PER_SECOND must be a positive integer, got '{}'",
            raw
        ))),
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
