use std::env;

/// Primary name of the answering-backend endpoint variable.
pub const CHAT_LINK_VAR: &str = "CHAT_LINK";
/// Older name for the same variable; still honoured when `CHAT_LINK` is unset.
pub const LEGACY_CHAT_LINK_VAR: &str = "NEXT_PUBLIC_CHAT_LINK";

pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";
pub const DEFAULT_EMBEDDING_BASE_URL: &str = "https://api.openai.com/v1";

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

fn non_empty_var(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub embeddings: EmbeddingsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Settings for the external question-answering service.
///
/// A missing `chat_link` is only reported when a question is forwarded, and
/// surfaces through the same fallback message as a network failure.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub chat_link: Option<String>,
    pub timeout_secs: u64,
}

impl BackendConfig {
    pub fn new(chat_link: impl Into<String>) -> Self {
        Self {
            chat_link: Some(chat_link.into()),
            ..Self::default()
        }
    }

    pub fn is_configured(&self) -> bool {
        self.chat_link.is_some()
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            chat_link: None,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EmbeddingsConfig {
    pub model: String,
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for EmbeddingsConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_EMBEDDING_MODEL.to_string(),
            base_url: DEFAULT_EMBEDDING_BASE_URL.to_string(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("ASSIST_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("ASSIST_PORT", 3000),
            },
            backend: BackendConfig {
                chat_link: non_empty_var(CHAT_LINK_VAR)
                    .or_else(|| non_empty_var(LEGACY_CHAT_LINK_VAR)),
                timeout_secs: parse_env_or("CHAT_TIMEOUT_SECS", 30),
            },
            embeddings: EmbeddingsConfig {
                model: env::var("EMBEDDING_MODEL")
                    .unwrap_or_else(|_| DEFAULT_EMBEDDING_MODEL.to_string()),
                base_url: env::var("EMBEDDING_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_EMBEDDING_BASE_URL.to_string()),
                api_key: non_empty_var("OPENAI_API_KEY"),
                timeout_secs: parse_env_or("EMBEDDING_TIMEOUT_SECS", 30),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
