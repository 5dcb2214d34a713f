//! Domain types representing client contracts and their rate overrides.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A budgeted or unbudgeted agreement billed against a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contract {
    pub id: Uuid,
    pub title: String,
    pub project_id: Uuid,
    pub hourly_rate: f64,
    /// `None` marks an uncapped contract with no remaining-budget concept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Contract {
    /// Creates an uncapped contract billed at `hourly_rate`.
    pub fn new(title: impl Into<String>, project_id: Uuid, hourly_rate: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            project_id,
            hourly_rate,
            purchase_amount: None,
            start_date: None,
            end_date: None,
        }
    }

    pub fn with_purchase_amount(mut self, amount: f64) -> Self {
        self.purchase_amount = Some(amount);
        self
    }

    pub fn with_dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Returns `true` when no purchase amount caps the contract.
    pub fn is_uncapped(&self) -> bool {
        self.purchase_amount.is_none()
    }
}

impl Identifiable for Contract {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Per-contract, per-worker rate taking precedence over the contract default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserContractRate {
    pub id: Uuid,
    pub contract_id: Uuid,
    pub user_id: Uuid,
    pub rate: f64,
}

impl UserContractRate {
    pub fn new(contract_id: Uuid, user_id: Uuid, rate: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            contract_id,
            user_id,
            rate,
        }
    }

    pub fn matches(&self, contract_id: Uuid, user_id: Uuid) -> bool {
        self.contract_id == contract_id && self.user_id == user_id
    }
}

impl Identifiable for UserContractRate {
    fn id(&self) -> Uuid {
        self.id
    }
}
