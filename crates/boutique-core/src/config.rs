use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_base_url = require("BOUTIQUE_API_BASE_URL")?;
    if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "BOUTIQUE_API_BASE_URL".to_string(),
            reason: format!("\"{api_base_url}\" must start with http:// or https://"),
        });
    }

    let log_level = or_default("BOUTIQUE_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("BOUTIQUE_REQUEST_TIMEOUT_SECS", "15")?;
    let user_agent = or_default("BOUTIQUE_USER_AGENT", "boutique/0.1 (storefront-client)");
    let max_retries = parse_u32("BOUTIQUE_MAX_RETRIES", "0")?;
    let retry_backoff_base_secs = parse_u64("BOUTIQUE_RETRY_BACKOFF_BASE_SECS", "1")?;
    let normalizer_path = lookup("BOUTIQUE_NORMALIZER_PATH")
        .ok()
        .filter(|p| !p.is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        api_base_url: api_base_url.trim_end_matches('/').to_string(),
        log_level,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_secs,
        normalizer_path,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
