//! Service configuration loaded from the environment.
//!
//! `.env` is read by `main` through dotenvy before this runs; unset or empty
//! variables fall back to the defaults below.

use anyhow::{anyhow, ensure, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use crate::pricing::{PricingSettings, BASE_PRICE_PER_CARAT};

/// Upper bound for a configured base price
const MAX_BASE_PRICE_PER_CARAT: Decimal = dec!(1000000000);

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub base_price_per_carat: Decimal,
    pub max_batch_size: usize,
    pub cors_origins: Vec<String>,
    pub history_capacity: u64,
    pub history_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            base_price_per_carat: BASE_PRICE_PER_CARAT,
            max_batch_size: 100,
            cors_origins: vec!["http://localhost:3000".to_string()],
            history_capacity: 1000,
            history_ttl: Duration::from_secs(24 * 60 * 60),
        }
    }
}

impl Config {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_price_per_carat =
            parse_or(&get, "BASE_PRICE_PER_CARAT", defaults.base_price_per_carat)?;
        ensure!(
            base_price_per_carat > Decimal::ZERO
                && base_price_per_carat <= MAX_BASE_PRICE_PER_CARAT,
            "BASE_PRICE_PER_CARAT must be in (0, {}], got {}",
            MAX_BASE_PRICE_PER_CARAT,
            base_price_per_carat
        );

        let max_batch_size = parse_or(&get, "MAX_BATCH_SIZE", defaults.max_batch_size)?;
        ensure!(max_batch_size >= 1, "MAX_BATCH_SIZE must be at least 1");

        let history_capacity = parse_or(&get, "HISTORY_CAPACITY", defaults.history_capacity)?;
        ensure!(history_capacity >= 1, "HISTORY_CAPACITY must be at least 1");

        let history_ttl_secs =
            parse_or(&get, "HISTORY_TTL_SECS", defaults.history_ttl.as_secs())?;
        ensure!(history_ttl_secs >= 1, "HISTORY_TTL_SECS must be at least 1");

        let cors_origins = match get("CORS_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect(),
            None => defaults.cors_origins,
        };

        Ok(Self {
            host: parse_or(&get, "HOST", defaults.host)?,
            port: parse_or(&get, "PORT", defaults.port)?,
            base_price_per_carat,
            max_batch_size,
            cors_origins,
            history_capacity,
            history_ttl: Duration::from_secs(history_ttl_secs),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn pricing_settings(&self) -> PricingSettings {
        PricingSettings {
            base_price_per_carat: self.base_price_per_carat,
            max_batch_size: self.max_batch_size,
        }
    }
}

fn parse_or<T, F>(get: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow!("invalid {}={:?}: {}", key, raw, e)),
        None => Ok(default),
    }
}
