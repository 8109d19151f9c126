use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::utils::geo::{Coordinates, Geofence};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001/api";
pub const DEFAULT_EVENT_NAME: &str = "Career Connect 2.0";
pub const DEFAULT_VENUE_NAME: &str = "Electrical Seminar Hall";
pub const DEFAULT_EVENT_SCHEDULE: &str = "Today, 11.00 AM - 1:00 PM";
pub const DEFAULT_VENUE: Coordinates = Coordinates::new(10.654281, 77.035257);
pub const DEFAULT_PREMISES_RADIUS_M: f64 = 200.0;
pub const DEFAULT_GEOLOCATION_TIMEOUT_MS: u32 = 8_000;
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::Asia::Kolkata;
/// Level the logger starts at, before the runtime config has been read.
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Raw values as they appear in `env.js`, `window.__CAREER_CONNECT_CONFIG`
/// or `config.json`. Every field is optional; gaps fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "EVENT_NAME")]
    pub event_name: Option<String>,
    #[serde(default, alias = "VENUE_NAME")]
    pub venue_name: Option<String>,
    #[serde(default, alias = "EVENT_SCHEDULE")]
    pub event_schedule: Option<String>,
    #[serde(default, alias = "VENUE")]
    pub venue: Option<Coordinates>,
    #[serde(default, alias = "PREMISES_RADIUS_M")]
    pub premises_radius_m: Option<f64>,
    #[serde(default, alias = "GEOLOCATION_TIMEOUT_MS")]
    pub geolocation_timeout_ms: Option<u32>,
    #[serde(default, alias = "TIME_ZONE")]
    pub time_zone: Option<String>,
    #[serde(default, alias = "LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl RuntimeConfig {
    /// Fills every field missing in `self` from `fallback`.
    pub fn or(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            event_name: self.event_name.or(fallback.event_name),
            venue_name: self.venue_name.or(fallback.venue_name),
            event_schedule: self.event_schedule.or(fallback.event_schedule),
            venue: self.venue.or(fallback.venue),
            premises_radius_m: self.premises_radius_m.or(fallback.premises_radius_m),
            geolocation_timeout_ms: self
                .geolocation_timeout_ms
                .or(fallback.geolocation_timeout_ms),
            time_zone: self.time_zone.or(fallback.time_zone),
            log_level: self.log_level.or(fallback.log_level),
        }
    }

    fn is_complete(&self) -> bool {
        self.api_base_url.is_some()
            && self.event_name.is_some()
            && self.venue.is_some()
            && self.premises_radius_m.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventConfig {
    pub name: String,
    pub venue_name: String,
    pub schedule: String,
    pub geofence: Geofence,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_EVENT_NAME.to_string(),
            venue_name: DEFAULT_VENUE_NAME.to_string(),
            schedule: DEFAULT_EVENT_SCHEDULE.to_string(),
            geofence: Geofence::new(DEFAULT_VENUE, DEFAULT_PREMISES_RADIUS_M),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub event: EventConfig,
    pub geolocation_timeout_ms: u32,
    pub time_zone: Tz,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            event: EventConfig::default(),
            geolocation_timeout_ms: DEFAULT_GEOLOCATION_TIMEOUT_MS,
            time_zone: DEFAULT_TIME_ZONE,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    pub fn from_runtime(raw: RuntimeConfig) -> Self {
        let defaults = AppConfig::default();

        let api_base_url = raw
            .api_base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);

        let center = match raw.venue {
            Some(venue) => match venue.validate() {
                Ok(()) => venue,
                Err(err) => {
                    log::warn!("Ignoring configured venue: {}", err);
                    DEFAULT_VENUE
                }
            },
            None => DEFAULT_VENUE,
        };
        let radius_m = match raw.premises_radius_m {
            Some(radius) if radius.is_finite() && radius > 0.0 => radius,
            Some(radius) => {
                log::warn!("Ignoring configured premises radius {}", radius);
                DEFAULT_PREMISES_RADIUS_M
            }
            None => DEFAULT_PREMISES_RADIUS_M,
        };

        let time_zone = match raw.time_zone.as_deref() {
            Some(name) => name.parse::<Tz>().unwrap_or_else(|_| {
                log::warn!("Unknown time zone {:?}, using {}", name, DEFAULT_TIME_ZONE);
                DEFAULT_TIME_ZONE
            }),
            None => DEFAULT_TIME_ZONE,
        };

        let log_level = raw
            .log_level
            .as_deref()
            .and_then(|level| level.parse::<log::Level>().ok())
            .unwrap_or(defaults.log_level);

        Self {
            api_base_url,
            event: EventConfig {
                name: raw.event_name.unwrap_or(defaults.event.name),
                venue_name: raw.venue_name.unwrap_or(defaults.event.venue_name),
                schedule: raw.event_schedule.unwrap_or(defaults.event.schedule),
                geofence: Geofence::new(center, radius_m),
            },
            geolocation_timeout_ms: raw
                .geolocation_timeout_ms
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.geolocation_timeout_ms),
            time_zone,
            log_level,
        }
    }
}

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global(name: &str) -> Option<RuntimeConfig> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let json = js_sys::JSON::stringify(&any).ok()?.as_string()?;
    match serde_json::from_str::<RuntimeConfig>(&json) {
        Ok(cfg) => Some(cfg),
        Err(err) => {
            log::warn!("window.{} is not a valid runtime config: {}", name, err);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_global(_name: &str) -> Option<RuntimeConfig> {
    None
}

fn snapshot_from_globals() -> RuntimeConfig {
    // window.__CAREER_CONNECT_ENV (env.js) wins over window.__CAREER_CONNECT_CONFIG.
    let env = read_global("__CAREER_CONNECT_ENV").unwrap_or_default();
    let window_config = read_global("__CAREER_CONNECT_CONFIG").unwrap_or_default();
    env.or(window_config)
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    use anyhow::Context;

    let origin = web_sys::window()
        .context("no global window")?
        .location()
        .origin()
        .map_err(|_| anyhow::anyhow!("window.location.origin is unavailable"))?;
    let url = format!("{}/config.json", origin);
    let resp = reqwest::get(&url)
        .await
        .with_context(|| format!("failed to fetch {}", url))?;
    if !resp.status().is_success() {
        anyhow::bail!("{} returned {}", url, resp.status());
    }
    resp.json::<RuntimeConfig>()
        .await
        .with_context(|| format!("{} is not a valid runtime config", url))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    Ok(RuntimeConfig::default())
}

/// Resolves the runtime configuration once per page load.
pub async fn await_config() -> AppConfig {
    if let Some(cached) = APP_CONFIG.get() {
        return cached.clone();
    }
    let mut raw = snapshot_from_globals();
    if !raw.is_complete() {
        match fetch_runtime_config().await {
            Ok(fetched) => raw = raw.or(fetched),
            Err(err) => log::warn!("Using built-in defaults for runtime config: {:#}", err),
        }
    }
    let resolved = AppConfig::from_runtime(raw);
    let _ = APP_CONFIG.set(resolved.clone());
    APP_CONFIG.get().cloned().unwrap_or(resolved)
}

pub async fn await_api_base_url() -> String {
    await_config().await.api_base_url
}

/// Synchronous view of the configuration for rendering. Returns the
/// defaults until `await_config` has resolved.
pub fn current() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_default()
}

pub fn current_time_zone() -> Tz {
    APP_CONFIG
        .get()
        .map(|cfg| cfg.time_zone)
        .unwrap_or(DEFAULT_TIME_ZONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_runtime_uses_defaults_for_missing_fields() {
        let cfg = AppConfig::from_runtime(RuntimeConfig::default());
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.event.geofence.center, DEFAULT_VENUE);
        assert_eq!(cfg.event.geofence.radius_m, 200.0);
        assert_eq!(cfg.geolocation_timeout_ms, 8_000);
    }

    #[test]
    fn from_runtime_trims_base_url_and_reads_overrides() {
        let raw: RuntimeConfig = serde_json::from_value(serde_json::json!({
            "API_BASE_URL": "https://attendance.example.com/api/",
            "venue": { "lat": 12.5, "lng": 77.25 },
            "premises_radius_m": 150.0,
            "time_zone": "UTC",
            "log_level": "debug"
        }))
        .unwrap();
        let cfg = AppConfig::from_runtime(raw);
        assert_eq!(cfg.api_base_url, "https://attendance.example.com/api");
        assert_eq!(cfg.event.geofence.center, Coordinates::new(12.5, 77.25));
        assert_eq!(cfg.event.geofence.radius_m, 150.0);
        assert_eq!(cfg.time_zone, chrono_tz::UTC);
        assert_eq!(cfg.log_level, log::Level::Debug);
    }

    #[test]
    fn from_runtime_rejects_invalid_venue_and_radius() {
        let raw = RuntimeConfig {
            venue: Some(Coordinates::new(120.0, 10.0)),
            premises_radius_m: Some(-5.0),
            time_zone: Some("Mars/Olympus".into()),
            ..RuntimeConfig::default()
        };
        let cfg = AppConfig::from_runtime(raw);
        assert_eq!(cfg.event.geofence.center, DEFAULT_VENUE);
        assert_eq!(cfg.event.geofence.radius_m, DEFAULT_PREMISES_RADIUS_M);
        assert_eq!(cfg.time_zone, DEFAULT_TIME_ZONE);
    }

    #[test]
    fn runtime_config_or_prefers_primary_values() {
        let primary = RuntimeConfig {
            api_base_url: Some("https://primary/api".into()),
            ..RuntimeConfig::default()
        };
        let fallback = RuntimeConfig {
            api_base_url: Some("https://fallback/api".into()),
            event_name: Some("Fallback Event".into()),
            ..RuntimeConfig::default()
        };
        let merged = primary.or(fallback);
        assert_eq!(merged.api_base_url.as_deref(), Some("https://primary/api"));
        assert_eq!(merged.event_name.as_deref(), Some("Fallback Event"));
    }

    #[test]
    fn current_falls_back_to_defaults_before_config_resolves() {
        assert_eq!(current().event.name, DEFAULT_EVENT_NAME);
    }

    #[test]
    fn default_log_level_matches_startup_level() {
        assert_eq!(AppConfig::default().log_level, DEFAULT_LOG_LEVEL);
        let cfg = AppConfig::from_runtime(RuntimeConfig {
            log_level: Some("warn".into()),
            ..RuntimeConfig::default()
        });
        assert_eq!(cfg.log_level.to_level_filter(), log::LevelFilter::Warn);
    }
}
