//! Collaborator interfaces the billing services read and write through.
//!
//! The surrounding system owns persistence; services only see these traits.
//! [`BillingLedger`] implements all of them for in-memory use.

use tally_domain::{
    BillingLedger, Contract, Expense, Project, TimeEntry, User, UserContractRate,
};
use uuid::Uuid;

use crate::{CoreError, CoreResult};

/// Resolves users by identifier.
pub trait UserDirectory {
    fn find_user(&self, user_id: Uuid) -> Option<&User>;
}

/// Project tree, membership and project-level rate defaults.
pub trait ProjectDirectory {
    fn project(&self, project_id: Uuid) -> Option<&Project>;
    fn members_of(&self, project_id: Uuid) -> Vec<Uuid>;
    fn sub_projects(&self, project_id: Uuid) -> Vec<Uuid>;
    /// `None` only when the project itself is unknown.
    fn user_project_rate_or_default(&self, project_id: Uuid, user_id: Uuid) -> Option<f64>;
    fn set_user_rate(&mut self, project_id: Uuid, user_id: Uuid, rate: f64) -> CoreResult<()>;
}

/// Contracts and the records linked to them.
pub trait ContractRecords {
    fn contract(&self, contract_id: Uuid) -> Option<&Contract>;
    fn contracts(&self) -> Vec<&Contract>;
    /// Stores a new contract or replaces the one with the same id.
    fn upsert_contract(&mut self, contract: Contract);
    fn remove_contract(&mut self, contract_id: Uuid) -> Option<Contract>;
    /// Clears `contract_id` on linked time entries, keeping the entries.
    fn unlink_time_entries(&mut self, contract_id: Uuid) -> usize;
    fn time_entries_for(&self, contract_id: Uuid) -> Vec<&TimeEntry>;
    fn expenses_for(&self, contract_id: Uuid) -> Vec<&Expense>;
    fn user_contract_rate(&self, contract_id: Uuid, user_id: Uuid) -> Option<&UserContractRate>;
    fn user_contract_rate_mut(
        &mut self,
        contract_id: Uuid,
        user_id: Uuid,
    ) -> Option<&mut UserContractRate>;
    fn insert_user_contract_rate(&mut self, rate: UserContractRate);
}

impl UserDirectory for BillingLedger {
    fn find_user(&self, user_id: Uuid) -> Option<&User> {
        self.user(user_id)
    }
}

impl ProjectDirectory for BillingLedger {
    fn project(&self, project_id: Uuid) -> Option<&Project> {
        BillingLedger::project(self, project_id)
    }

    fn members_of(&self, project_id: Uuid) -> Vec<Uuid> {
        BillingLedger::project(self, project_id)
            .map(|project| project.member_ids.clone())
            .unwrap_or_default()
    }

    fn sub_projects(&self, project_id: Uuid) -> Vec<Uuid> {
        BillingLedger::sub_projects(self, project_id)
            .map(|project| project.id)
            .collect()
    }

    fn user_project_rate_or_default(&self, project_id: Uuid, user_id: Uuid) -> Option<f64> {
        BillingLedger::project(self, project_id).map(|project| project.user_rate_or_default(user_id))
    }

    fn set_user_rate(&mut self, project_id: Uuid, user_id: Uuid, rate: f64) -> CoreResult<()> {
        let project = self
            .project_mut(project_id)
            .ok_or(CoreError::ProjectNotFound(project_id))?;
        project.set_user_rate(user_id, rate);
        self.touch();
        Ok(())
    }
}

impl ContractRecords for BillingLedger {
    fn contract(&self, contract_id: Uuid) -> Option<&Contract> {
        BillingLedger::contract(self, contract_id)
    }

    fn contracts(&self) -> Vec<&Contract> {
        self.contracts.iter().collect()
    }

    fn upsert_contract(&mut self, contract: Contract) {
        BillingLedger::upsert_contract(self, contract);
    }

    fn remove_contract(&mut self, contract_id: Uuid) -> Option<Contract> {
        BillingLedger::remove_contract(self, contract_id)
    }

    fn unlink_time_entries(&mut self, contract_id: Uuid) -> usize {
        BillingLedger::unlink_time_entries(self, contract_id)
    }

    fn time_entries_for(&self, contract_id: Uuid) -> Vec<&TimeEntry> {
        BillingLedger::time_entries_for(self, contract_id).collect()
    }

    fn expenses_for(&self, contract_id: Uuid) -> Vec<&Expense> {
        BillingLedger::expenses_for(self, contract_id).collect()
    }

    fn user_contract_rate(&self, contract_id: Uuid, user_id: Uuid) -> Option<&UserContractRate> {
        BillingLedger::user_contract_rate(self, contract_id, user_id)
    }

    fn user_contract_rate_mut(
        &mut self,
        contract_id: Uuid,
        user_id: Uuid,
    ) -> Option<&mut UserContractRate> {
        BillingLedger::user_contract_rate_mut(self, contract_id, user_id)
    }

    fn insert_user_contract_rate(&mut self, rate: UserContractRate) {
        self.add_user_contract_rate(rate);
    }
}
