use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub geocoder: GeocoderSettings,
    pub database: DatabaseSettings,
    pub cache: CacheSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Geocoding collaborator configuration
///
/// The crate never calls a vendor itself; these are the recognized keys an
/// embedding application wires into whatever `Geocoder` it injects.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocoderSettings {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    #[serde(default = "default_country_code")]
    pub country_code: String,
}

fn default_country_code() -> String {
    "US".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub redis_url: String,
    pub ttl_secs: Option<u64>,
    pub l1_cache_size: Option<u64>,
}

/// Search defaults and caps
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_radius_miles")]
    pub default_radius_miles: f64,
    #[serde(default = "default_max_radius_miles")]
    pub max_radius_miles: f64,
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_radius_miles: default_radius_miles(),
            max_radius_miles: default_max_radius_miles(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_radius_miles() -> f64 { 25.0 }
fn default_max_radius_miles() -> f64 { 100.0 }
fn default_limit() -> usize { 20 }
fn default_max_limit() -> usize { 100 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_distance_weight")]
    pub distance: f64,
    #[serde(default = "default_price_weight")]
    pub price: f64,
    #[serde(default = "default_difficulty_weight")]
    pub difficulty: f64,
    #[serde(default = "default_amenities_weight")]
    pub amenities: f64,
    #[serde(default = "default_services_weight")]
    pub services: f64,
    #[serde(default = "default_technology_bonus")]
    pub technology_bonus: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            distance: default_distance_weight(),
            price: default_price_weight(),
            difficulty: default_difficulty_weight(),
            amenities: default_amenities_weight(),
            services: default_services_weight(),
            technology_bonus: default_technology_bonus(),
        }
    }
}

impl From<WeightsConfig> for crate::models::ScoringWeights {
    fn from(value: WeightsConfig) -> Self {
        Self {
            distance: value.distance,
            price: value.price,
            difficulty: value.difficulty,
            amenities: value.amenities,
            services: value.services,
            technology_bonus: value.technology_bonus,
        }
    }
}

fn default_distance_weight() -> f64 { 0.25 }
fn default_price_weight() -> f64 { 0.25 }
fn default_difficulty_weight() -> f64 { 0.20 }
fn default_amenities_weight() -> f64 { 0.15 }
fn default_services_weight() -> f64 { 0.15 }
fn default_technology_bonus() -> f64 { 3.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl LoggingSettings {
    /// Install the global tracing subscriber
    ///
    /// Called once by the embedding application, not by the library itself.
    pub fn init(&self) {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(self.level.clone()));

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true);

        if self.format == "pretty" {
            subscriber.pretty().init();
        } else {
            subscriber.init();
        }
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with FAIRWAY__)
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g. FAIRWAY__DATABASE__URL -> database.url
            .add_source(
                Environment::with_prefix("FAIRWAY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("FAIRWAY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply the well-known environment overrides
///
/// `DATABASE_URL` and `REDIS_URL` are honored alongside the prefixed forms,
/// and the geocoder credentials can be supplied bare for compatibility with
/// standard deployment tooling.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let database_url = env::var("DATABASE_URL")
        .or_else(|_| env::var("FAIRWAY__DATABASE__URL"))
        .ok();
    let redis_url = env::var("REDIS_URL")
        .or_else(|_| env::var("FAIRWAY__CACHE__REDIS_URL"))
        .ok();
    let geocoder_api_key = env::var("GEOCODER_API_KEY").ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(url) = database_url {
        builder = builder.set_override("database.url", url)?;
    }
    if let Some(url) = redis_url {
        builder = builder.set_override("cache.redis_url", url)?;
    }
    if let Some(api_key) = geocoder_api_key {
        builder = builder.set_override("geocoder.api_key", api_key)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_match_canonical_values() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.distance, 0.25);
        assert_eq!(weights.price, 0.25);
        assert_eq!(weights.difficulty, 0.20);
        assert_eq!(weights.amenities, 0.15);
        assert_eq!(weights.services, 0.15);
        assert_eq!(weights.technology_bonus, 3.0);
    }

    #[test]
    fn test_default_search_settings() {
        let search = SearchSettings::default();
        assert_eq!(search.default_radius_miles, 25.0);
        assert_eq!(search.max_radius_miles, 100.0);
        assert_eq!(search.default_limit, 20);
        assert_eq!(search.max_limit, 100);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }
}
