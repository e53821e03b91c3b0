/// Configuration for the remote player feed. The base URL default is
/// baked in by `build.rs` from `PLAYERS_API_URL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub page_size: u32,
}

impl Config {
    pub fn new() -> Self {
        Self {
            api_base_url: env!("PLAYERS_API_URL").to_string(),
            page_size: 10,
        }
    }

    pub fn from_env() -> Self {
        Self {
            api_base_url: std::env::var("PLAYERS_API_URL")
                .unwrap_or_else(|_| env!("PLAYERS_API_URL").to_string()),
            page_size: 10,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
