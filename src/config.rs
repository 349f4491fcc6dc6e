use std::time::Duration;

pub const DEFAULT_URL: &str = "https://api.steampowered.com/ISteamApps/GetAppList/v2/";
pub const DEFAULT_OUT: &str = "steam_apps.csv";
pub const JSON_DUMP_FILE: &str = "steam_applist.json";

pub const CLIENT_USER_AGENT: &str = concat!("steam-applist/", env!("CARGO_PKG_VERSION"));

pub const TIMEOUT_SECS: u64 = 60;
pub const MAX_ATTEMPTS: u32 = 3;
pub const BACKOFF_SECS: f64 = 2.0;

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub endpoint: String,
    // never sent
    pub api_key: String,
    pub timeout: Duration,
    pub max_attempts: u32,
    pub backoff: f64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            endpoint: DEFAULT_URL.to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            max_attempts: MAX_ATTEMPTS,
            backoff: BACKOFF_SECS,
        }
    }
}
