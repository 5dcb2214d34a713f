//! tally-core
//!
//! Rate resolution and billing aggregation for TALLY.
//! Depends on tally-domain. No terminal I/O, no direct storage interactions:
//! records are reached through the collaborator traits in [`ports`].

pub mod aggregation_service;
pub mod contract_service;
pub mod error;
pub mod ports;
pub mod rate_assignment_service;
pub mod rate_service;
pub mod statement_service;
pub mod subtree_service;

pub use aggregation_service::*;
pub use contract_service::*;
pub use error::{CoreError, CoreResult};
pub use ports::*;
pub use rate_assignment_service::*;
pub use rate_service::*;
pub use statement_service::*;
pub use subtree_service::*;
