use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_FILE: &str = "data/session.json";
pub const DEFAULT_AUTH_DELAY_MS: u64 = 1000;

/// Runtime settings read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub log_filter: String,
    pub session_file: PathBuf,
    /// Pause before login, signup and password reset complete.
    pub auth_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            log_filter: "info".to_string(),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            auth_delay: Duration::from_millis(DEFAULT_AUTH_DELAY_MS),
        }
    }
}

impl AppConfig {
    /// Reads the process environment. Values that fail to parse fall back
    /// to their defaults, one returned note per fallback.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let defaults = Self::default();
        let mut notes = Vec::new();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                notes.push(format!("PORT={} is not a valid port, using {}", raw, DEFAULT_PORT));
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        let auth_delay = match lookup("AUTH_DELAY_MS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(_) => {
                    notes.push(format!(
                        "AUTH_DELAY_MS={} is not a number of milliseconds, using {}",
                        raw, DEFAULT_AUTH_DELAY_MS
                    ));
                    defaults.auth_delay
                }
            },
            None => defaults.auth_delay,
        };

        let config = Self {
            port,
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
            session_file: lookup("SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.session_file),
            auth_delay,
        };
        (config, notes)
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
