pub mod build_info;

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVES: &str = "contract_billing=info,tally_core=info";

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` wins over `log_filter`, which wins over the built-in defaults.
pub fn init_tracing(log_filter: Option<&str>) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(log_filter.unwrap_or(DEFAULT_DIRECTIVES)))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        let _ = fmt().with_env_filter(filter).try_init();
    });
}
