//! Hourly rate resolution for a (contract, worker) pair.
//!
//! Precedence, highest first: an explicit [`UserContractRate`] row for the
//! pair, then a fallback chosen by the caller. The three lookups differ only
//! in that fallback and must not be substituted for one another.

use tally_domain::{Contract, UserContractRate};
use uuid::Uuid;

use crate::{ContractRecords, CoreError, CoreResult, ProjectDirectory, UserDirectory};

/// Resolves the billable hourly rate for workers on a contract.
pub struct RateService;

impl RateService {
    /// Returns the override row for the pair, if one exists.
    pub fn user_contract_rate<S>(
        store: &S,
        contract_id: Uuid,
        user_id: Uuid,
    ) -> CoreResult<Option<&UserContractRate>>
    where
        S: ContractRecords + UserDirectory + ?Sized,
    {
        Self::ensure_refs(store, contract_id, user_id)?;
        Ok(store.user_contract_rate(contract_id, user_id))
    }

    /// Override rate, or `0.0` when the pair has none.
    pub fn rate_for_user<S>(store: &S, contract_id: Uuid, user_id: Uuid) -> CoreResult<f64>
    where
        S: ContractRecords + UserDirectory + ?Sized,
    {
        let override_rate = Self::user_contract_rate(store, contract_id, user_id)?;
        Ok(override_rate.map_or(0.0, |row| row.rate))
    }

    /// Override rate, or the contract's own hourly rate.
    pub fn rate_or_default<S>(store: &S, contract_id: Uuid, user_id: Uuid) -> CoreResult<f64>
    where
        S: ContractRecords + UserDirectory + ?Sized,
    {
        let contract = Self::ensure_refs(store, contract_id, user_id)?;
        Ok(store
            .user_contract_rate(contract_id, user_id)
            .map_or(contract.hourly_rate, |row| row.rate))
    }

    /// Override rate, or the owning project's default for the worker.
    pub fn rate_or_project_default<S>(
        store: &S,
        contract_id: Uuid,
        user_id: Uuid,
    ) -> CoreResult<f64>
    where
        S: ContractRecords + UserDirectory + ProjectDirectory + ?Sized,
    {
        let contract = Self::ensure_refs(store, contract_id, user_id)?;
        if let Some(row) = store.user_contract_rate(contract_id, user_id) {
            return Ok(row.rate);
        }
        store
            .user_project_rate_or_default(contract.project_id, user_id)
            .ok_or(CoreError::ProjectNotFound(contract.project_id))
    }

    fn ensure_refs<S>(store: &S, contract_id: Uuid, user_id: Uuid) -> CoreResult<&Contract>
    where
        S: ContractRecords + UserDirectory + ?Sized,
    {
        let contract = store
            .contract(contract_id)
            .ok_or(CoreError::ContractNotFound(contract_id))?;
        if store.find_user(user_id).is_none() {
            return Err(CoreError::UserNotFound(user_id));
        }
        Ok(contract)
    }
}
