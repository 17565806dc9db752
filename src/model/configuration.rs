use serde::{Deserialize, Serialize};

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; ga-lotto-hub/1.0; +https://workers.dev)";

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Configuration {
    pub server_bind_point: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    /// Zero disables the response cache.
    pub cache_ttl_secs: u64,
    pub cache_max_age_secs: u64,
    pub user_agent: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            server_bind_point: "0.0.0.0:8080".to_string(),
            log_level: "INFO".to_string(),
            request_timeout_secs: 10,
            cache_ttl_secs: 300,
            cache_max_age_secs: 300,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
