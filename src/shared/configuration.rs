use crate::model::configuration::Configuration;
use crate::shared::constants::CONFIG_DIRECTORY;
use std::str::FromStr;

const CONFIGURATION_FILE_NAME: &str = "/config.toml";

/// Reads `config/config.toml`, or builds the configuration from environment
/// variables (falling back to defaults) and writes it there.
pub fn initialize() -> anyhow::Result<Configuration> {
    if !std::path::Path::new(CONFIG_DIRECTORY).exists() {
        std::fs::create_dir(CONFIG_DIRECTORY)?;
    }

    let configuration_path = String::from(CONFIG_DIRECTORY) + CONFIGURATION_FILE_NAME;
    if !std::path::Path::new(&configuration_path).exists() {
        let configuration = from_environment();
        let serialized_toml = toml::to_string_pretty(&configuration)?;
        std::fs::write(&configuration_path, serialized_toml)?;
        Ok(configuration)
    } else {
        let toml = std::fs::read_to_string(&configuration_path)?;
        let deserialized_toml = toml::from_str::<Configuration>(&toml)?;
        Ok(deserialized_toml)
    }
}

fn from_environment() -> Configuration {
    let defaults = Configuration::default();
    Configuration {
        server_bind_point: env_or("SERVER_BIND_POINT", defaults.server_bind_point),
        log_level: env_or("LOG_LEVEL", defaults.log_level),
        request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs),
        cache_ttl_secs: env_or("CACHE_TTL_SECS", defaults.cache_ttl_secs),
        cache_max_age_secs: env_or("CACHE_MAX_AGE_SECS", defaults.cache_max_age_secs),
        user_agent: env_or("USER_AGENT", defaults.user_agent),
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid value for {}: {}", key, value);
            default
        }),
        Err(_) => default,
    }
}
