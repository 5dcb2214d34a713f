//! tally-domain
//!
//! Pure domain models (Contract, TimeEntry, Expense, Project, User, etc.).
//! No I/O, no storage. Only data types, core enums, and the in-memory ledger.

pub mod common;
pub mod contract;
pub mod expense;
pub mod ledger;
pub mod project;
pub mod statement;
pub mod time_entry;
pub mod user;

pub use common::*;
pub use contract::*;
pub use expense::*;
pub use ledger::*;
pub use project::*;
pub use statement::*;
pub use time_entry::*;
pub use user::*;
