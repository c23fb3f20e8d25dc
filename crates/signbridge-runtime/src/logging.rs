//! Logging setup for binaries
//!
//! Library crates only emit `tracing` events. A binary calls
//! [`init_logging`] once; `RUST_LOG` overrides the default filter.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use signbridge_core::{SignBridgeError, SignBridgeResult};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable
pub const DEFAULT_LOG_FILTER: &str = "info,signbridge=debug";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = SignBridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(SignBridgeError::InvalidConfig(format!(
                "unknown log format {:?}",
                other
            ))),
        }
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(format: LogFormat) -> SignBridgeResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|e| SignBridgeError::Logging(e.to_string()))
}
