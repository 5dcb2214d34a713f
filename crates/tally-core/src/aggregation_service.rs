//! Money and hour totals for a contract.
//!
//! Every call reads the linked records fresh from the store. Budget-dependent
//! values return `None` for uncapped contracts; `None` means "no cap", never
//! "zero budget".

use std::collections::HashSet;

use tally_domain::{Contract, UncappedOverrunPolicy};
use tracing::debug;
use uuid::Uuid;

use crate::{ContractRecords, CoreError, CoreResult, RateService, UserDirectory};

/// Turns linked time entries and expenses into contract totals.
pub struct AggregationService;

impl AggregationService {
    pub fn hours_spent<S>(store: &S, contract_id: Uuid) -> CoreResult<f64>
    where
        S: ContractRecords + ?Sized,
    {
        Self::contract(store, contract_id)?;
        Ok(store
            .time_entries_for(contract_id)
            .iter()
            .map(|entry| entry.hours)
            .sum())
    }

    pub fn hours_spent_by_user<S>(store: &S, contract_id: Uuid, user_id: Uuid) -> CoreResult<f64>
    where
        S: ContractRecords + ?Sized,
    {
        Self::contract(store, contract_id)?;
        Ok(store
            .time_entries_for(contract_id)
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.hours)
            .sum())
    }

    /// Hours logged by the worker multiplied by their override-or-contract rate.
    pub fn billable_amount_for_user<S>(
        store: &S,
        contract_id: Uuid,
        user_id: Uuid,
    ) -> CoreResult<f64>
    where
        S: ContractRecords + UserDirectory + ?Sized,
    {
        let hours = Self::hours_spent_by_user(store, contract_id, user_id)?;
        let rate = RateService::rate_or_default(store, contract_id, user_id)?;
        Ok(hours * rate)
    }

    /// Distinct workers with at least one linked entry, in first-seen order.
    pub fn members_with_entries<S>(store: &S, contract_id: Uuid) -> CoreResult<Vec<Uuid>>
    where
        S: ContractRecords + ?Sized,
    {
        Self::contract(store, contract_id)?;
        let mut seen = HashSet::new();
        Ok(store
            .time_entries_for(contract_id)
            .iter()
            .map(|entry| entry.user_id)
            .filter(|user_id| seen.insert(*user_id))
            .collect())
    }

    pub fn billable_amount_total<S>(store: &S, contract_id: Uuid) -> CoreResult<f64>
    where
        S: ContractRecords + UserDirectory + ?Sized,
    {
        let members = Self::members_with_entries(store, contract_id)?;
        if members.is_empty() {
            return Ok(0.0);
        }
        let mut total = 0.0;
        for member in members {
            total += Self::billable_amount_for_user(store, contract_id, member)?;
        }
        debug!(contract = %contract_id, total, "computed billable amount");
        Ok(total)
    }

    pub fn expenses_total<S>(store: &S, contract_id: Uuid) -> CoreResult<f64>
    where
        S: ContractRecords + ?Sized,
    {
        Self::contract(store, contract_id)?;
        let expenses = store.expenses_for(contract_id);
        if expenses.is_empty() {
            return Ok(0.0);
        }
        Ok(expenses.iter().map(|expense| expense.amount).sum())
    }

    /// Purchase amount expressed in hours at the contract rate.
    pub fn hours_purchased<S>(store: &S, contract_id: Uuid) -> CoreResult<Option<f64>>
    where
        S: ContractRecords + ?Sized,
    {
        let contract = Self::contract(store, contract_id)?;
        Ok(contract
            .purchase_amount
            .map(|amount| amount / contract.hourly_rate))
    }

    pub fn amount_remaining<S>(store: &S, contract_id: Uuid) -> CoreResult<Option<f64>>
    where
        S: ContractRecords + UserDirectory + ?Sized,
    {
        let Some(purchased) = Self::contract(store, contract_id)?.purchase_amount else {
            return Ok(None);
        };
        let billed = Self::billable_amount_total(store, contract_id)?;
        let expenses = Self::expenses_total(store, contract_id)?;
        Ok(Some(purchased - billed - expenses))
    }

    pub fn hours_remaining<S>(store: &S, contract_id: Uuid) -> CoreResult<Option<f64>>
    where
        S: ContractRecords + UserDirectory + ?Sized,
    {
        let hourly_rate = Self::contract(store, contract_id)?.hourly_rate;
        Ok(Self::amount_remaining(store, contract_id)?.map(|amount| amount / hourly_rate))
    }

    /// Hours beyond what the remaining budget covers; never negative.
    ///
    /// Uncapped contracts have no remaining hours, so `policy` decides the
    /// answer for them.
    pub fn hours_over_by<S>(
        store: &S,
        contract_id: Uuid,
        hours: f64,
        policy: UncappedOverrunPolicy,
    ) -> CoreResult<f64>
    where
        S: ContractRecords + UserDirectory + ?Sized,
    {
        match Self::hours_remaining(store, contract_id)? {
            Some(remaining) => Ok((hours - remaining).max(0.0)),
            None => Ok(match policy {
                UncappedOverrunPolicy::NeverOver => 0.0,
                UncappedOverrunPolicy::AllHours => hours.max(0.0),
            }),
        }
    }

    fn contract<S>(store: &S, contract_id: Uuid) -> CoreResult<&Contract>
    where
        S: ContractRecords + ?Sized,
    {
        store
            .contract(contract_id)
            .ok_or(CoreError::ContractNotFound(contract_id))
    }
}
