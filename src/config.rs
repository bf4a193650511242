use std::env;
use std::str::FromStr;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const MAX_DURATION_DAYS: u32 = 365;
const MAX_DURATION_DAYS_CEILING: u32 = 730;

/// What to do when fewer days are requested than destinations selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OvershootPolicy {
    /// Keep the first `duration` destinations, one day each
    #[default]
    Truncate,
    /// Refuse the request
    Reject,
}

impl FromStr for OvershootPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "truncate" => Ok(OvershootPolicy::Truncate),
            "reject" => Ok(OvershootPolicy::Reject),
            other => Err(format!("Unknown overshoot policy: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ItineraryGenerationConfig {
    pub max_duration_days: u32,
    pub overshoot_policy: OvershootPolicy,
}

impl Default for ItineraryGenerationConfig {
    fn default() -> Self {
        Self {
            max_duration_days: MAX_DURATION_DAYS,
            overshoot_policy: OvershootPolicy::default(),
        }
    }
}

impl ItineraryGenerationConfig {
    /// Create config from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            max_duration_days: parse_env("ITINERARY_MAX_DURATION_DAYS")
                .filter(|max: &u32| *max > 0)
                .map(clamp_max_duration)
                .unwrap_or(defaults.max_duration_days),
            overshoot_policy: parse_env("ITINERARY_OVERSHOOT_POLICY")
                .unwrap_or(defaults.overshoot_policy),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub cors_allowed_origin: Option<String>,
    pub generation: ItineraryGenerationConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| HOST.to_string()),
            port: parse_env("PORT").unwrap_or(PORT),
            environment: env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string()),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
            generation: ItineraryGenerationConfig::from_env(),
        }
    }
}

fn clamp_max_duration(max: u32) -> u32 {
    if max > MAX_DURATION_DAYS_CEILING {
        log::warn!(
            "ITINERARY_MAX_DURATION_DAYS={} is above the ceiling, using {}",
            max,
            MAX_DURATION_DAYS_CEILING
        );
        return MAX_DURATION_DAYS_CEILING;
    }
    max
}

fn parse_env<T: FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring unparseable value for {}: {:?}", key, raw);
            None
        }
    }
}
