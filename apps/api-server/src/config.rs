//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use newsroom_core::ContentConfig;
use newsroom_core::content::SlugConfig;
use newsroom_infra::{DatabaseConfig, JwtConfig};

/// What the API does with an embed URL it cannot decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmbedUrlPolicy {
    /// Report a validation error on `embed_url`.
    #[default]
    Reject,
    /// Keep the current embed code and carry on.
    Ignore,
}

impl FromStr for EmbedUrlPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "ignore" => Ok(Self::Ignore),
            other => Err(format!("unknown embed URL policy: {other}")),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
    pub content: ContentConfig,
    pub embed_url_policy: EmbedUrlPolicy,
}

fn parsed<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parsed("DB_MAX_CONNECTIONS").unwrap_or(20),
            min_connections: parsed("DB_MIN_CONNECTIONS").unwrap_or(2),
        });

        let embed_url_policy = match env::var("EMBED_URL_POLICY") {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!("{e}; falling back to reject");
                EmbedUrlPolicy::Reject
            }),
            Err(_) => EmbedUrlPolicy::default(),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parsed("PORT").unwrap_or(8080),
            database,
            jwt: JwtConfig::from_env(),
            content: Self::content_from_env(),
            embed_url_policy,
        }
    }

    /// Editorial limits: `TEASER_MAX_CHARS`, `SLUG_MAX_LENGTH` and
    /// `SLUG_STOP_WORDS` (comma separated).
    fn content_from_env() -> ContentConfig {
        let defaults = ContentConfig::default();
        let stop_words = env::var("SLUG_STOP_WORDS")
            .map(|list| parse_stop_words(&list))
            .unwrap_or(defaults.slug.stop_words);

        ContentConfig {
            teaser_max_chars: parsed("TEASER_MAX_CHARS").unwrap_or(defaults.teaser_max_chars),
            slug: SlugConfig {
                max_length: parsed("SLUG_MAX_LENGTH").unwrap_or(defaults.slug.max_length),
                stop_words,
            },
        }
    }
}

fn parse_stop_words(list: &str) -> Vec<String> {
    list.split(',')
        .map(|word| word.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}
