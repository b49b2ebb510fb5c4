//! Checkout configuration (CLI argument + environment).

use std::path::PathBuf;

use thiserror::Error;

pub const ORDER_FILE_ENV: &str = "CHECKOUT_ORDER_FILE";
pub const SLIP_START_ENV: &str = "CHECKOUT_SLIP_START";

const DEFAULT_SLIP_START: u64 = 1;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no order file given (pass a path or set CHECKOUT_ORDER_FILE)")]
    MissingOrderFile,

    #[error("CHECKOUT_SLIP_START must be a non-negative integer, got {0:?}")]
    InvalidSlipStart(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    pub order_file: PathBuf,
    /// First shipping slip id handed out.
    pub slip_start: u64,
}

impl CheckoutConfig {
    pub fn from_env_and_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        Self::from_sources(args, |key| std::env::var(key).ok())
    }

    /// The first positional argument wins over `CHECKOUT_ORDER_FILE`.
    pub fn from_sources<I, F>(args: I, env: F) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let order_file = args
            .into_iter()
            .next()
            .or_else(|| env(ORDER_FILE_ENV))
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingOrderFile)?;

        let slip_start = match env(SLIP_START_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidSlipStart(raw.clone()))?,
            None => {
                tracing::info!("{SLIP_START_ENV} not set; numbering slips from {DEFAULT_SLIP_START}");
                DEFAULT_SLIP_START
            }
        };

        Ok(Self {
            order_file,
            slip_start,
        })
    }
}
