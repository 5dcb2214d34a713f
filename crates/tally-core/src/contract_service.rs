use tally_domain::Contract;
use tracing::debug;
use uuid::Uuid;

use crate::{
    ContractRecords, CoreError, CoreResult, ProjectDirectory, RateApplication,
    RateAssignmentService, RateBatch, UserDirectory,
};

/// Validation, save and removal hooks for contracts.
pub struct ContractService;

impl ContractService {
    pub fn validate<S>(store: &S, contract: &Contract) -> CoreResult<()>
    where
        S: ContractRecords + ProjectDirectory + ?Sized,
    {
        Self::validate_title(store, contract.id, &contract.title)?;
        if !contract.hourly_rate.is_finite() || contract.hourly_rate <= 0.0 {
            return Err(CoreError::Validation(
                "Hourly rate must be greater than zero".into(),
            ));
        }
        if store.project(contract.project_id).is_none() {
            return Err(CoreError::ProjectNotFound(contract.project_id));
        }
        if let (Some(start), Some(end)) = (contract.start_date, contract.end_date) {
            if end <= start {
                return Err(CoreError::Validation(
                    "End date must be after start date".into(),
                ));
            }
        }
        Ok(())
    }

    /// Validates and stores the contract, then applies any staged rate batch.
    ///
    /// The batch runs after the contract is stored, so a batch failure leaves
    /// the saved contract in place.
    pub fn save<S>(
        store: &mut S,
        contract: Contract,
        staged_rates: Option<&RateBatch>,
    ) -> CoreResult<RateApplication>
    where
        S: ContractRecords + UserDirectory + ProjectDirectory + ?Sized,
    {
        Self::validate(store, &contract)?;
        let contract_id = contract.id;
        store.upsert_contract(contract);
        RateAssignmentService::apply_rates(store, contract_id, staged_rates)
    }

    /// Removes the contract and unlinks its time entries, returning how many
    /// entries were unlinked. The entries themselves are kept.
    pub fn remove<S>(store: &mut S, contract_id: Uuid) -> CoreResult<usize>
    where
        S: ContractRecords + ?Sized,
    {
        if store.contract(contract_id).is_none() {
            return Err(CoreError::ContractNotFound(contract_id));
        }
        let unlinked = store.unlink_time_entries(contract_id);
        store.remove_contract(contract_id);
        debug!(contract = %contract_id, unlinked, "removed contract");
        Ok(unlinked)
    }

    fn validate_title<S>(store: &S, exclude: Uuid, candidate: &str) -> CoreResult<()>
    where
        S: ContractRecords + ?Sized,
    {
        let normalized = candidate.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(CoreError::Validation("Contract title is required".into()));
        }
        let duplicate = store.contracts().into_iter().any(|contract| {
            contract.id != exclude && contract.title.trim().to_lowercase() == normalized
        });
        if duplicate {
            Err(CoreError::Validation(format!(
                "Contract `{}` already exists",
                candidate.trim()
            )))
        } else {
            Ok(())
        }
    }
}
