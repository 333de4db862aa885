use std::env;
use std::path::{Path, PathBuf};

// Default configuration constants
pub const DEFAULT_CONFIG_FILE_NAME: &str = ".gumdrop.yaml";
pub const DEFAULT_API_BASE_URL: &str = "https://api.digitalocean.com";
pub const DEFAULT_PER_PAGE: u32 = 100;
pub const DEFAULT_VOLUME_SIZE_GIB: u64 = 1;
pub const ENV_PREFIX: &str = "GUMDROP";
pub const CONFIG_FILE_MODE: u32 = 0o600;

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

/// Name of an environment variable under the `GUMDROP_` prefix.
pub fn env_key(name: &str) -> String {
    format!("{}_{}", ENV_PREFIX, name.to_uppercase())
}

/// Credential supplied through `GUMDROP_APIKEY`, if any. It wins over the
/// stored credential but is never written back to the file.
pub fn get_api_key_override() -> Option<String> {
    env::var(env_key("apikey"))
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var(env_key("api_base_url")).unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()))
}

/// Resolve the config file location: the `--config` flag when given,
/// otherwise `$HOME/.gumdrop.yaml`.
pub fn resolve_config_path(flag: Option<&str>) -> PathBuf {
    match flag.map(str::trim).filter(|p| !p.is_empty()) {
        Some(p) => PathBuf::from(p),
        None => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_CONFIG_FILE_NAME),
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
