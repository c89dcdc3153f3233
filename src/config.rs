use serde::Deserialize;

/// Client configuration, read once at startup from `BOOK_LENS_*` variables.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base address of the recommendation API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Fallback tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_log_filter() -> String {
    "book_lens=info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Load configuration from the environment (and an optional `.env` file)
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_iter(std::env::vars())
    }

    fn from_iter<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = envy::prefixed("BOOK_LENS_")
            .from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.api_url = config.api_url.trim_end_matches('/').to_string();
        Ok(config)
    }
}
