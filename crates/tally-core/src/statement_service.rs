use tally_domain::{ContractStatement, StatementLine};
use tracing::debug;
use uuid::Uuid;

use crate::{
    AggregationService, ContractRecords, CoreError, CoreResult, RateService, UserDirectory,
};

/// Builds per-member billing statements from the aggregation primitives.
pub struct StatementService;

impl StatementService {
    pub fn statement<S>(store: &S, contract_id: Uuid) -> CoreResult<ContractStatement>
    where
        S: ContractRecords + UserDirectory + ?Sized,
    {
        let contract = store
            .contract(contract_id)
            .ok_or(CoreError::ContractNotFound(contract_id))?;

        let mut lines = Vec::new();
        for user_id in AggregationService::members_with_entries(store, contract_id)? {
            let user = store
                .find_user(user_id)
                .ok_or(CoreError::UserNotFound(user_id))?;
            let rate = RateService::rate_or_default(store, contract_id, user_id)?;
            let hours = AggregationService::hours_spent_by_user(store, contract_id, user_id)?;
            lines.push(StatementLine {
                user_id,
                display_name: user.display_name.clone(),
                hours,
                rate,
                overridden: store.user_contract_rate(contract_id, user_id).is_some(),
                billable_amount: hours * rate,
            });
        }

        let statement = ContractStatement {
            contract_id,
            title: contract.title.clone(),
            currency: None,
            hourly_rate: contract.hourly_rate,
            purchase_amount: contract.purchase_amount,
            lines,
            hours_spent: AggregationService::hours_spent(store, contract_id)?,
            billable_amount_total: AggregationService::billable_amount_total(store, contract_id)?,
            expenses_total: AggregationService::expenses_total(store, contract_id)?,
            hours_purchased: AggregationService::hours_purchased(store, contract_id)?,
            amount_remaining: AggregationService::amount_remaining(store, contract_id)?,
            hours_remaining: AggregationService::hours_remaining(store, contract_id)?,
        };
        debug!(
            contract = %contract_id,
            members = statement.lines.len(),
            "built contract statement"
        );
        Ok(statement)
    }
}
