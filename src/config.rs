use anyhow::{Context, Result};
use std::time::Duration;

const ENV_LISTEN_ADDR: &str = "LISTEN_ADDR";
const ENV_MONGODB_URI: &str = "MONGODB_URI";
const ENV_MONGODB_DATABASE: &str = "MONGODB_DATABASE";
const ENV_MONGODB_COLLECTION: &str = "MONGODB_COLLECTION";
const ENV_GEOCODE_URL: &str = "GEOCODE_URL";
const ENV_GEOCODE_API_KEY: &str = "GEOCODE_API_KEY";
const ENV_GEOCODE_TIMEOUT_SECS: &str = "GEOCODE_TIMEOUT_SECS";

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
const DEFAULT_MONGODB_DATABASE: &str = "locations";
const DEFAULT_MONGODB_COLLECTION: &str = "locations";
const DEFAULT_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
const DEFAULT_GEOCODE_TIMEOUT_SECS: u64 = 100;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Config {
    pub listen_addr: String,
    pub db: Db,
    pub geocoding: Geocoding,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Db {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Geocoding {
    pub url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Config {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenv::dotenv() {
            log::info!("loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());
        let timeout = match lookup(ENV_GEOCODE_TIMEOUT_SECS) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{} must be a number of seconds, got {:?}", ENV_GEOCODE_TIMEOUT_SECS, raw))?,
            None => DEFAULT_GEOCODE_TIMEOUT_SECS,
        };
        Ok(Self {
            listen_addr: or(ENV_LISTEN_ADDR, DEFAULT_LISTEN_ADDR),
            db: Db {
                uri: or(ENV_MONGODB_URI, DEFAULT_MONGODB_URI),
                database: or(ENV_MONGODB_DATABASE, DEFAULT_MONGODB_DATABASE),
                collection: or(ENV_MONGODB_COLLECTION, DEFAULT_MONGODB_COLLECTION),
            },
            geocoding: Geocoding {
                url: or(ENV_GEOCODE_URL, DEFAULT_GEOCODE_URL),
                api_key: lookup(ENV_GEOCODE_API_KEY).filter(|k| !k.is_empty()),
                timeout: Duration::from_secs(timeout),
            },
        })
    }
}
