//! Configured entry point over the billing services.

use tally_config::Config;
use tally_core::{
    AggregationService, ContractRecords, ProjectDirectory, RateApplication,
    RateAssignmentService, RateBatch, StatementService, SubtreeService, UserDirectory,
};
use tally_domain::ContractStatement;
use uuid::Uuid;

use crate::Result;

/// Binds a record store to the billing preferences in [`Config`].
///
/// Sessions only read the store; rate batches go through [`apply_rates`] on
/// a mutable store.
pub struct BillingSession<'a, S: ?Sized> {
    config: &'a Config,
    store: &'a S,
}

impl<'a, S> BillingSession<'a, S>
where
    S: ContractRecords + UserDirectory + ProjectDirectory + ?Sized,
{
    pub fn new(config: &'a Config, store: &'a S) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &Config {
        self.config
    }

    /// Installs tracing with the configured log filter. `RUST_LOG` still wins.
    pub fn init_tracing(&self) {
        crate::init(self.config.log_filter.as_deref());
    }

    /// Statement in the configured currency, rounded to its precision.
    pub fn statement(&self, contract_id: Uuid) -> Result<ContractStatement> {
        let statement = StatementService::statement(self.store, contract_id)?;
        Ok(statement
            .rounded(self.config.currency_precision)
            .in_currency(self.config.currency.as_str()))
    }

    /// Overrun hours using the configured policy for uncapped contracts.
    pub fn hours_over_by(&self, contract_id: Uuid, hours: f64) -> Result<f64> {
        Ok(AggregationService::hours_over_by(
            self.store,
            contract_id,
            hours,
            self.config.uncapped_overrun,
        )?)
    }

    /// Workers eligible for contracts under `project_id` and its sub-projects.
    pub fn eligible_users(&self, project_id: Uuid) -> Result<Vec<Uuid>> {
        Ok(SubtreeService::users_for_project_and_subprojects(
            self.store, project_id,
        )?)
    }

    /// Statement as pretty-printed JSON for reporting layers.
    pub fn statement_json(&self, contract_id: Uuid) -> Result<String> {
        let statement = self.statement(contract_id)?;
        Ok(serde_json::to_string_pretty(&statement)?)
    }
}

/// Applies a staged rate batch and maps failures to [`crate::BillingError`].
pub fn apply_rates<S>(
    store: &mut S,
    contract_id: Uuid,
    batch: Option<&RateBatch>,
) -> Result<RateApplication>
where
    S: ContractRecords + UserDirectory + ProjectDirectory + ?Sized,
{
    Ok(RateAssignmentService::apply_rates(store, contract_id, batch)?)
}
