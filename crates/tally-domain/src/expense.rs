use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A non-labour cost charged against a contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub contract_id: Uuid,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Expense {
    pub fn new(contract_id: Uuid, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            contract_id,
            amount,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}
