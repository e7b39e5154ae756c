//! Tunables for a run, with optional overrides from the page's query string.

use log::{warn, LevelFilter};

/// Cadence shared by the sequencer frames and the spawner timer.
pub const STRIP_INTERVAL_MS: f64 = 1000.0;
/// Number of lit fixed strips after which spawning takes over.
pub const THRESHOLD: usize = 5;
/// Gap used when fewer than two fixed strips can be measured.
pub const FALLBACK_GAP: f64 = 5.0;
pub const LIGHTS_PER_STRIP: usize = 4;
pub const BEST_TIME_KEY: &str = "best";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub interval_ms: f64,
    pub threshold: usize,
    pub fallback_gap: f64,
    pub lights_per_strip: usize,
    pub best_time_key: String,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            interval_ms: STRIP_INTERVAL_MS,
            threshold: THRESHOLD,
            fallback_gap: FALLBACK_GAP,
            lights_per_strip: LIGHTS_PER_STRIP,
            best_time_key: BEST_TIME_KEY.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Parse `?interval=N&threshold=N&log=level` on top of the defaults.
    /// Values that don't parse or are out of range are skipped.
    pub fn from_query(search: &str) -> Self {
        let mut config = Config::default();
        for pair in search.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "interval" => match value.parse::<f64>() {
                    Ok(ms) if ms.is_finite() && ms > 0.0 => config.interval_ms = ms,
                    _ => warn!("ignoring interval={value:?}"),
                },
                "threshold" => match value.parse::<usize>() {
                    Ok(n) if n > 0 => config.threshold = n,
                    _ => warn!("ignoring threshold={value:?}"),
                },
                "log" => match value.parse::<LevelFilter>() {
                    Ok(level) => config.log_level = level,
                    Err(_) => warn!("ignoring log={value:?}"),
                },
                _ => {}
            }
        }
        config
    }

    /// Parse the query with the global log level at its default, so
    /// warnings about ignored values get through, then switch the global
    /// level to the one the query asked for. Install the logger first.
    pub fn apply_query(search: &str) -> Self {
        log::set_max_level(Config::default().log_level);
        let config = Config::from_query(search);
        log::set_max_level(config.log_level);
        config
    }
}
