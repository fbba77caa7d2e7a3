use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use dotenvy::dotenv;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub addr: String,
    pub port: u16,
    /// Allowed CORS origin; `*` allows any.
    pub cors_origin: String,
    /// Directory served for paths that match no API route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub default_page_size: u64,
    /// Upper bound for `limit`; unset means no cap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_page_size: Option<u64>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub web: WebConfig,
    pub catalog: CatalogConfig,
    /// Start with the demo user and the sample questions.
    pub seed_demo_data: bool,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1".to_string(),
            port: 5000,
            cors_origin: "*".to_string(),
            static_dir: None,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            web: WebConfig::default(),
            catalog: CatalogConfig::default(),
            seed_demo_data: true,
        }
    }
}

impl AppConfig {
    /// Defaults, then `Config.toml`, then `APP_`-prefixed environment
    /// variables (e.g. `APP_WEB__PORT=8080`).
    pub fn from_env() -> Result<Self, figment::Error> {
        dotenv().ok();
        Self::figment().extract()
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("Config.toml")) // For non-sensitive defaults
            .merge(Env::prefixed("APP_").split("__"))
    }
}
