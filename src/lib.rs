#![doc(test(attr(deny(warnings))))]

//! Contract Billing computes what time-and-materials contracts have consumed,
//! what each worker is owed, and what budget remains.
//!
//! The domain types live in `tally-domain`, the rate and aggregation services
//! in `tally-core`, and billing preferences in `tally-config`. This crate
//! re-exports them and adds tracing setup and the configured
//! [`session::BillingSession`] facade.

pub mod errors;
pub mod session;
pub mod utils;

pub use tally_config as config;
pub use tally_core as services;
pub use tally_domain as domain;

pub use errors::{BillingError, Result};
pub use session::BillingSession;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and logs the build metadata once.
pub fn init(log_filter: Option<&str>) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(log_filter);
        let build = utils::build_info::current();
        tracing::info!(
            version = build.version,
            git_hash = build.git_hash,
            git_status = build.git_status,
            profile = build.profile,
            "Contract billing tracing initialized."
        );
    });
}
