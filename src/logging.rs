//! Tracing setup

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "storefront=info";

/// Install the global `fmt` subscriber
///
/// `RUST_LOG` wins over `fallback`; `fallback` wins over [`DEFAULT_FILTER`].
/// Calling this more than once is harmless: later calls leave the first
/// subscriber in place.
pub fn init_tracing(fallback: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback_filter(fallback));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}

fn fallback_filter(fallback: Option<&str>) -> EnvFilter {
    fallback
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
