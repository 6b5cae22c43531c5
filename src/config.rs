// src/config.rs

use std::{env, fmt, net::SocketAddr};

use url::Url;

/// Number of questions in every generated quiz.
pub const QUIZ_QUESTION_COUNT: usize = 5;

/// Number of answer options per question.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Score fraction at which an attempt counts as passed.
pub const PASSING_SCORE: f64 = 0.7;

/// Settings for the hosted text-generation API.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// Without a key every generation request goes straight to fallback content.
    pub api_key: Option<String>,
    pub base_url: Url,
    pub model: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string. `None` selects the in-memory store.
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub rust_log: String,
    pub bind_addr: SocketAddr,
    pub static_dir: String,
    pub cors_origins: Vec<String>,
    pub ai: AiConfig,
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, reason } => write!(f, "{} is invalid: {}", key, reason),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;

        let database_url = optional("DATABASE_URL");

        let jwt_expiration = parse_or("JWT_EXPIRATION", 86_400u64)?;

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let bind_addr = parse_or("BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 3000)))?;

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        let base_url = env::var("AI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1/".to_string());
        let base_url = parse_base_url(&base_url)?;

        let ai = AiConfig {
            api_key: optional("AI_API_KEY"),
            base_url,
            model: env::var("AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            timeout_secs: parse_or("AI_TIMEOUT_SECS", 30u64)?,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_expiration,
            rust_log,
            bind_addr,
            static_dir,
            cors_origins,
            ai,
        })
    }
}

/// Parses the generation API base. A trailing slash is enforced so that
/// relative joins keep the last path segment (`/v1` + `chat/completions`).
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };
    Url::parse(&normalized).map_err(|e| ConfigError::Invalid {
        key: "AI_BASE_URL",
        reason: e.to_string(),
    })
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_or<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        let url = parse_base_url("https://api.openai.com/v1").unwrap();
        assert_eq!(
            url.join("chat/completions").unwrap().as_str(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn base_url_rejects_garbage() {
        assert!(matches!(
            parse_base_url("not a url"),
            Err(ConfigError::Invalid { key: "AI_BASE_URL", .. })
        ));
    }
}
