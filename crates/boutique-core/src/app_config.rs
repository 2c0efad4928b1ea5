use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Origin of the storefront API, e.g. `"https://shop.example.com"`.
    pub api_base_url: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Additional attempts after a transient failure. `0` disables retries.
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
    /// Optional YAML file overriding the listing normalizer preset.
    pub normalizer_path: Option<PathBuf>,
}
