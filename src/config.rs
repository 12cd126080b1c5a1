use std::collections::HashMap;
use std::env;
use std::fs;
use std::time::Duration;

use chrono_tz::Tz;
use tracing::{info, warn};

use crate::error::BookingError;
use crate::service::timezone::browser_timezone_offset;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIME_ZONE: &str = "UTC";

#[derive(Debug, Default, Clone)]
pub struct AppConfig {
    values: HashMap<String, String>,
}

impl AppConfig {
    pub fn from_file(path: &str) -> Result<Self, BookingError> {
        let content = fs::read_to_string(path).map_err(|e| BookingError::Config(e.to_string()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, BookingError> {
        let mut values = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(BookingError::Config(format!(
                    "Invalid config line {}: {}",
                    idx + 1,
                    line
                )));
            };
            let key = key.trim();
            let mut value = value.trim().to_string();
            if value.len() >= 2
                && ((value.starts_with('"') && value.ends_with('"'))
                    || (value.starts_with('\'') && value.ends_with('\'')))
            {
                value = value[1..value.len() - 1].to_string();
            }
            values.insert(key.to_string(), value);
        }
        Ok(Self { values })
    }

    /// Reads `CONFIG_FILE` when set, otherwise starts empty so every key falls
    /// back to the environment.
    pub fn load() -> Result<Self, BookingError> {
        match env::var("CONFIG_FILE") {
            Ok(path) => {
                info!("Loading config from {path}");
                Self::from_file(&path)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .cloned()
            .or_else(|| env::var(key).ok())
    }

    pub fn settings(&self) -> Result<ClientSettings, BookingError> {
        let base_url = self
            .get("BOOKING_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        url::Url::parse(&base_url)
            .map_err(|e| BookingError::Config(format!("BOOKING_BASE_URL {base_url}: {e}")))?;

        let timezone_offset = match self.get("TIMEZONE_OFFSET") {
            Some(raw) => raw
                .trim()
                .parse::<i32>()
                .map_err(|e| BookingError::Config(format!("TIMEZONE_OFFSET {raw}: {e}")))?,
            None => browser_timezone_offset(),
        };

        let time_zone = self
            .get("TIME_ZONE")
            .unwrap_or_else(|| DEFAULT_TIME_ZONE.to_string());
        let time_zone: Tz = time_zone
            .parse()
            .map_err(|_| BookingError::Config(format!("Unknown TIME_ZONE {time_zone}")))?;

        let request_timeout = match self.get("REQUEST_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) => None,
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(e) => {
                    warn!("Ignoring REQUEST_TIMEOUT_SECS {raw}: {e}");
                    None
                }
            },
            None => None,
        };

        Ok(ClientSettings {
            base_url,
            timezone_offset,
            time_zone,
            request_timeout,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    /// Minutes, `UTC - local`.
    pub timezone_offset: i32,
    pub time_zone: Tz,
    pub request_timeout: Option<Duration>,
}
