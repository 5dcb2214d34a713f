//! Applies batches of per-worker rate overrides to a contract.
//!
//! Each entry writes the project-level rate and upserts the contract override
//! row. Entries are applied one at a time with no rollback: when entry `k`
//! fails, entries `0..k` stay applied and the error names the failing entry.
//! Callers needing all-or-nothing semantics should apply the batch to a clone
//! of their store and keep the clone only on success.

use tally_domain::UserContractRate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{ContractRecords, CoreError, CoreResult, ProjectDirectory, UserDirectory};

/// Ordered mapping of user id to rate.
///
/// Inserting a user already present replaces the rate in place, keeping the
/// original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateBatch {
    entries: Vec<(Uuid, f64)>,
}

impl RateBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, user_id: Uuid, rate: f64) {
        match self.entries.iter_mut().find(|(id, _)| *id == user_id) {
            Some(entry) => entry.1 = rate,
            None => self.entries.push((user_id, rate)),
        }
    }

    pub fn with(mut self, user_id: Uuid, rate: f64) -> Self {
        self.insert(user_id, rate);
        self
    }

    pub fn get(&self, user_id: Uuid) -> Option<f64> {
        self.entries
            .iter()
            .find(|(id, _)| *id == user_id)
            .map(|(_, rate)| *rate)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Uuid, f64)> + '_ {
        self.entries.iter().copied()
    }
}

impl FromIterator<(Uuid, f64)> for RateBatch {
    fn from_iter<I: IntoIterator<Item = (Uuid, f64)>>(iter: I) -> Self {
        let mut batch = Self::new();
        for (user_id, rate) in iter {
            batch.insert(user_id, rate);
        }
        batch
    }
}

/// Outcome of a single override upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateUpsert {
    Created,
    Updated,
}

/// Counts of override rows written by a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateApplication {
    pub created: usize,
    pub updated: usize,
}

impl RateApplication {
    pub fn applied(&self) -> usize {
        self.created + self.updated
    }

    fn record(&mut self, upsert: RateUpsert) {
        match upsert {
            RateUpsert::Created => self.created += 1,
            RateUpsert::Updated => self.updated += 1,
        }
    }
}

pub struct RateAssignmentService;

impl RateAssignmentService {
    /// Applies `batch` to the contract; `None` or an empty batch does nothing.
    pub fn apply_rates<S>(
        store: &mut S,
        contract_id: Uuid,
        batch: Option<&RateBatch>,
    ) -> CoreResult<RateApplication>
    where
        S: ContractRecords + ProjectDirectory + UserDirectory + ?Sized,
    {
        let mut outcome = RateApplication::default();
        let Some(batch) = batch.filter(|batch| !batch.is_empty()) else {
            return Ok(outcome);
        };
        let project_id = store
            .contract(contract_id)
            .ok_or(CoreError::ContractNotFound(contract_id))?
            .project_id;

        for (index, (user_id, rate)) in batch.iter().enumerate() {
            match Self::apply_entry(store, contract_id, project_id, user_id, rate) {
                Ok(upsert) => outcome.record(upsert),
                Err(err) => {
                    warn!(
                        contract = %contract_id,
                        index,
                        user = %user_id,
                        applied = outcome.applied(),
                        error = %err,
                        "rate batch stopped; earlier entries remain applied"
                    );
                    return Err(CoreError::RateBatchFailed {
                        index,
                        user_id,
                        applied: outcome.applied(),
                        source: Box::new(err),
                    });
                }
            }
        }

        info!(
            contract = %contract_id,
            created = outcome.created,
            updated = outcome.updated,
            "applied rate batch"
        );
        Ok(outcome)
    }

    /// Creates or updates the single override row for the pair.
    pub fn set_user_contract_rate<S>(
        store: &mut S,
        contract_id: Uuid,
        user_id: Uuid,
        rate: f64,
    ) -> CoreResult<RateUpsert>
    where
        S: ContractRecords + UserDirectory + ?Sized,
    {
        if store.contract(contract_id).is_none() {
            return Err(CoreError::ContractNotFound(contract_id));
        }
        if store.find_user(user_id).is_none() {
            return Err(CoreError::UserNotFound(user_id));
        }
        Ok(Self::upsert(store, contract_id, user_id, rate))
    }

    fn apply_entry<S>(
        store: &mut S,
        contract_id: Uuid,
        project_id: Uuid,
        user_id: Uuid,
        rate: f64,
    ) -> CoreResult<RateUpsert>
    where
        S: ContractRecords + ProjectDirectory + UserDirectory + ?Sized,
    {
        if store.find_user(user_id).is_none() {
            return Err(CoreError::UserNotFound(user_id));
        }
        store.set_user_rate(project_id, user_id, rate)?;
        Ok(Self::upsert(store, contract_id, user_id, rate))
    }

    fn upsert<S>(store: &mut S, contract_id: Uuid, user_id: Uuid, rate: f64) -> RateUpsert
    where
        S: ContractRecords + ?Sized,
    {
        if let Some(row) = store.user_contract_rate_mut(contract_id, user_id) {
            row.rate = rate;
            return RateUpsert::Updated;
        }
        store.insert_user_contract_rate(UserContractRate::new(contract_id, user_id, rate));
        RateUpsert::Created
    }
}
