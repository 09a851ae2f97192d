use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// How many users the startup seeder populates with precomputed feeds
    #[serde(default = "default_seed_users")]
    pub seed_users: u32,

    /// Generated item ids are drawn from `1..=max_item_id`
    #[serde(default = "default_max_item_id")]
    pub max_item_id: u32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_seed_users() -> u32 {
    100_000
}

fn default_max_item_id() -> u32 {
    10_000_000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
