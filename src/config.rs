use std::{env, fmt::Display, str::FromStr};

use tracing::info;

pub struct Config {
    pub mongo_url: String,
    pub mongo_db: String,
    pub port: u16,
}

impl Config {
    pub fn load() -> Self {
        Self {
            mongo_url: try_load("MONGO_URL", "mongodb://localhost:27017"),
            mongo_db: try_load("MONGO_DB", "hopebridge"),
            port: try_load("PORT", "8001"),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse().unwrap_or_else(|e| {
        panic!("Invalid {key} value {raw:?}: {e}");
    })
}
