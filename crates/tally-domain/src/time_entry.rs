use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// Hours logged by a worker, optionally billed against a contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub hours: f64,
    #[serde(default)]
    pub contract_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spent_on: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl TimeEntry {
    pub fn new(user_id: Uuid, hours: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            hours,
            contract_id: None,
            spent_on: None,
            comments: None,
        }
    }

    /// Links the entry to a contract identifier.
    pub fn with_contract(mut self, contract_id: Uuid) -> Self {
        self.contract_id = Some(contract_id);
        self
    }

    pub fn is_linked_to(&self, contract_id: Uuid) -> bool {
        self.contract_id == Some(contract_id)
    }
}

impl Identifiable for TimeEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}
