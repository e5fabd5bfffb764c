//! Opt-in `tracing` setup for hosts embedding `candle-chart`.
//!
//! The library only emits events. Hosts call [`init_default_tracing`] or
//! [`init_tracing`], or install their own subscriber.

/// Chart events at `info`, every other target at `warn`.
pub const DEFAULT_FILTER: &str = "warn,candle_chart=info";

/// [`init_tracing`] with [`DEFAULT_FILTER`] as the fallback.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_FILTER)
}

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, or by
/// `fallback_filter` when the variable is unset or invalid.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber was already installed.
#[must_use]
pub fn init_tracing(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback_filter))
            .unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
