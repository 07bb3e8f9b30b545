//! `tracing` subscriber set-up shared by the workspace binaries.

use std::env;

use thiserror::Error;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Subscriber options. `level` is the fallback filter used when `RUST_LOG`
/// is unset or unparsable.
#[derive(Debug, Clone)]
pub struct TraceConfig {
    pub level: String,
    pub ansi: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}

pub fn init(config: &TraceConfig) -> Result<(), TracingInitError> {
    let filter = build_filter(env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(), &config.level)?;

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_ansi(config.ansi));

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|source| TracingInitError::SetGlobalDefault { source })?;

    Ok(())
}

/// Prefers the environment directives, falls back to `level`.
pub fn build_filter(from_env: Option<&str>, level: &str) -> Result<EnvFilter, TracingInitError> {
    from_env
        .ok_or(())
        .and_then(|directives| EnvFilter::try_new(directives).map_err(|_| ()))
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|source| TracingInitError::InvalidFilter { source })
}

#[derive(Debug, Error)]
pub enum TracingInitError {
    #[error("Invalid filter config")]
    InvalidFilter {
        #[from]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to set global default subscriber")]
    SetGlobalDefault {
        #[from]
        source: tracing::subscriber::SetGlobalDefaultError,
    },
}
