//! Reporting snapshots describing a contract's billing state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Billing totals for one worker on a contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatementLine {
    pub user_id: Uuid,
    pub display_name: String,
    pub hours: f64,
    pub rate: f64,
    /// `true` when `rate` comes from a contract override row.
    pub overridden: bool,
    pub billable_amount: f64,
}

/// Complete billing picture for a contract.
///
/// Budget fields are `None` for uncapped contracts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContractStatement {
    pub contract_id: Uuid,
    pub title: String,
    /// Currency code the amounts are expressed in, once known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub hourly_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_amount: Option<f64>,
    pub lines: Vec<StatementLine>,
    pub hours_spent: f64,
    pub billable_amount_total: f64,
    pub expenses_total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_purchased: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_remaining: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_remaining: Option<f64>,
}

impl ContractStatement {
    pub fn is_uncapped(&self) -> bool {
        self.purchase_amount.is_none()
    }

    /// `true` once billed work and expenses have used up the purchase amount.
    pub fn is_exhausted(&self) -> bool {
        self.amount_remaining.is_some_and(|amount| amount <= 0.0)
    }

    pub fn in_currency(mut self, code: impl Into<String>) -> Self {
        self.currency = Some(code.into());
        self
    }

    /// Rounds every monetary and hour value to `precision` decimal places.
    pub fn rounded(mut self, precision: u8) -> Self {
        let round = |value: f64| round_to(value, precision);
        for line in &mut self.lines {
            line.hours = round(line.hours);
            line.rate = round(line.rate);
            line.billable_amount = round(line.billable_amount);
        }
        self.hourly_rate = round(self.hourly_rate);
        self.purchase_amount = self.purchase_amount.map(round);
        self.hours_spent = round(self.hours_spent);
        self.billable_amount_total = round(self.billable_amount_total);
        self.expenses_total = round(self.expenses_total);
        self.hours_purchased = self.hours_purchased.map(round);
        self.amount_remaining = self.amount_remaining.map(round);
        self.hours_remaining = self.hours_remaining.map(round);
        self
    }
}

fn round_to(value: f64, precision: u8) -> f64 {
    let factor = 10f64.powi(i32::from(precision));
    (value * factor).round() / factor
}
