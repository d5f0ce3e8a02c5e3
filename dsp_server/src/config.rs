use std::env;

use dsp_common::parse_boolean_flag;
use log::*;

const DEFAULT_DSP_HOST: &str = "127.0.0.1";
const DEFAULT_DSP_PORT: u16 = 8360;
const DEFAULT_DSP_DATABASE_URL: &str = "sqlite://data/dsp_store.db";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// If true, the product catalogue is seeded with the demo presets at startup when it is empty.
    pub seed_products: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_DSP_HOST.to_string(),
            port: DEFAULT_DSP_PORT,
            database_url: DEFAULT_DSP_DATABASE_URL.to_string(),
            seed_products: true,
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("DSP_HOST").ok().unwrap_or_else(|| DEFAULT_DSP_HOST.into());
        let port = env::var("DSP_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for DSP_PORT. {e} Using the default, {DEFAULT_DSP_PORT}, instead."
                    );
                    DEFAULT_DSP_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_DSP_PORT);
        let database_url = env::var("DSP_DATABASE_URL").ok().unwrap_or_else(|| {
            warn!("🪛️ DSP_DATABASE_URL is not set. Using the default, {DEFAULT_DSP_DATABASE_URL}, instead.");
            DEFAULT_DSP_DATABASE_URL.to_string()
        });
        let seed_products = parse_boolean_flag(env::var("DSP_SEED_PRODUCTS").ok(), true);
        Self { host, port, database_url, seed_products }
    }
}
