use std::env;

use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    /// Configured work days per month used by the rekapitulasi; not derived
    /// from a calendar.
    pub total_work_days: u32,
    /// One-shot GPS fix timeout.
    pub location_timeout_ms: u64,
    /// How long to wait for the camera preview to become playable before the
    /// flow fails instead of showing a loading state forever.
    pub stream_ready_timeout_ms: u64,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            total_work_days: env::var("TOTAL_WORK_DAYS")
                .unwrap_or_else(|_| "22".to_string())
                .parse()
                .unwrap(),
            location_timeout_ms: env::var("LOCATION_TIMEOUT_MS")
                .unwrap_or_else(|_| "15000".to_string())
                .parse()
                .unwrap(),
            stream_ready_timeout_ms: env::var("STREAM_READY_TIMEOUT_MS")
                .unwrap_or_else(|_| "10000".to_string())
                .parse()
                .unwrap(),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            total_work_days: 22,
            location_timeout_ms: 15_000,
            stream_ready_timeout_ms: 10_000,
            log_dir: "logs".to_string(),
        }
    }
}
