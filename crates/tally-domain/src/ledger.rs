//! In-memory aggregate holding every record the billing engine reads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    common::{find_by_id, find_by_id_mut},
    contract::{Contract, UserContractRate},
    expense::Expense,
    project::Project,
    time_entry::TimeEntry,
    user::User,
};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Snapshot of contracts, projects, users and their linked records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingLedger {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub contracts: Vec<Contract>,
    #[serde(default)]
    pub time_entries: Vec<TimeEntry>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub user_contract_rates: Vec<UserContractRate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "BillingLedger::schema_version_default")]
    pub schema_version: u8,
}

impl BillingLedger {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            users: Vec::new(),
            projects: Vec::new(),
            contracts: Vec::new(),
            time_entries: Vec::new(),
            expenses: Vec::new(),
            user_contract_rates: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_user(&mut self, user: User) -> Uuid {
        let id = user.id;
        self.users.push(user);
        self.touch();
        id
    }

    pub fn add_project(&mut self, project: Project) -> Uuid {
        let id = project.id;
        self.projects.push(project);
        self.touch();
        id
    }

    pub fn add_contract(&mut self, contract: Contract) -> Uuid {
        let id = contract.id;
        self.contracts.push(contract);
        self.touch();
        id
    }

    pub fn add_time_entry(&mut self, entry: TimeEntry) -> Uuid {
        let id = entry.id;
        self.time_entries.push(entry);
        self.touch();
        id
    }

    pub fn add_expense(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        self.expenses.push(expense);
        self.touch();
        id
    }

    pub fn add_user_contract_rate(&mut self, rate: UserContractRate) -> Uuid {
        let id = rate.id;
        self.user_contract_rates.push(rate);
        self.touch();
        id
    }

    pub fn user(&self, id: Uuid) -> Option<&User> {
        find_by_id(&self.users, id)
    }

    pub fn project(&self, id: Uuid) -> Option<&Project> {
        find_by_id(&self.projects, id)
    }

    pub fn project_mut(&mut self, id: Uuid) -> Option<&mut Project> {
        find_by_id_mut(&mut self.projects, id)
    }

    pub fn contract(&self, id: Uuid) -> Option<&Contract> {
        find_by_id(&self.contracts, id)
    }

    pub fn contract_mut(&mut self, id: Uuid) -> Option<&mut Contract> {
        find_by_id_mut(&mut self.contracts, id)
    }

    /// Replaces the contract with the same id, or appends it.
    pub fn upsert_contract(&mut self, contract: Contract) {
        match self.contract_mut(contract.id) {
            Some(existing) => *existing = contract,
            None => self.contracts.push(contract),
        }
        self.touch();
    }

    pub fn remove_contract(&mut self, id: Uuid) -> Option<Contract> {
        let index = self.contracts.iter().position(|contract| contract.id == id)?;
        let removed = self.contracts.remove(index);
        self.touch();
        Some(removed)
    }

    /// Clears the contract link on every entry billed to `contract_id` and
    /// returns how many were cleared.
    pub fn unlink_time_entries(&mut self, contract_id: Uuid) -> usize {
        let mut unlinked = 0;
        for entry in self
            .time_entries
            .iter_mut()
            .filter(|entry| entry.is_linked_to(contract_id))
        {
            entry.contract_id = None;
            unlinked += 1;
        }
        if unlinked > 0 {
            self.touch();
        }
        unlinked
    }

    /// Direct children of `parent_id` in insertion order.
    pub fn sub_projects(&self, parent_id: Uuid) -> impl Iterator<Item = &Project> {
        self.projects
            .iter()
            .filter(move |project| project.parent_id == Some(parent_id))
    }

    pub fn time_entries_for(&self, contract_id: Uuid) -> impl Iterator<Item = &TimeEntry> {
        self.time_entries
            .iter()
            .filter(move |entry| entry.is_linked_to(contract_id))
    }

    pub fn expenses_for(&self, contract_id: Uuid) -> impl Iterator<Item = &Expense> {
        self.expenses
            .iter()
            .filter(move |expense| expense.contract_id == contract_id)
    }

    pub fn user_contract_rate(&self, contract_id: Uuid, user_id: Uuid) -> Option<&UserContractRate> {
        self.user_contract_rates
            .iter()
            .find(|row| row.matches(contract_id, user_id))
    }

    pub fn user_contract_rate_mut(
        &mut self,
        contract_id: Uuid,
        user_id: Uuid,
    ) -> Option<&mut UserContractRate> {
        self.user_contract_rates
            .iter_mut()
            .find(|row| row.matches(contract_id, user_id))
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

impl Default for BillingLedger {
    fn default() -> Self {
        Self::new("Default")
    }
}
