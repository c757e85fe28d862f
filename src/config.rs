use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::TriviaError;

/// Environment prefix for every configuration key, e.g. `TRIVIA_DATABASE_URL`.
pub const ENV_PREFIX: &str = "TRIVIA_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// sqlx connection string; the file is created when missing.
    pub database_url: String,
    pub listen_addr: String,
    /// Fallback log filter when `RUST_LOG` is unset.
    pub loglevel: String,
    /// Populate the standard categories and sample questions into an empty store.
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:trivia.db".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            seed: true,
        }
    }
}

impl Config {
    /// Defaults overlaid with `TRIVIA_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self, TriviaError> {
        Ok(Self::figment().extract()?)
    }
}
