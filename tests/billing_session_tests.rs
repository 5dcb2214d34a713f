mod common;

use common::seeded_ledger;
use contract_billing::{
    config::{Config, ConfigManager},
    domain::{BillingLedger, ContractStatement, UncappedOverrunPolicy},
    BillingError, BillingSession,
};
use tempfile::tempdir;
use uuid::Uuid;

#[test]
fn statement_is_rounded_to_configured_precision() {
    let seeded = seeded_ledger();
    let config = Config::default();
    let session = BillingSession::new(&config, &seeded.ledger);

    let statement = session.statement(seeded.capped).expect("statement");

    assert_eq!(statement.billable_amount_total, 550.0);
    assert_eq!(statement.expenses_total, 50.0);
    assert_eq!(statement.amount_remaining, Some(400.0));
    assert_eq!(statement.hours_remaining, Some(11.43));
    assert_eq!(statement.hours_purchased, Some(28.57));
    assert_eq!(statement.currency.as_deref(), Some("USD"));
}

#[test]
fn uncapped_statement_has_no_budget_fields() {
    let seeded = seeded_ledger();
    let config = Config::default();
    let session = BillingSession::new(&config, &seeded.ledger);

    let statement = session.statement(seeded.uncapped).expect("statement");

    assert!(statement.is_uncapped());
    assert_eq!(statement.billable_amount_total, 125.0);
    assert_eq!(statement.hours_purchased, None);
    assert_eq!(statement.amount_remaining, None);
    assert_eq!(statement.hours_remaining, None);
}

#[test]
fn overrun_policy_comes_from_config() {
    let seeded = seeded_ledger();
    let mut config = Config::default();

    let never = BillingSession::new(&config, &seeded.ledger)
        .hours_over_by(seeded.uncapped, 6.0)
        .expect("hours over");
    assert_eq!(never, 0.0);

    config.uncapped_overrun = UncappedOverrunPolicy::AllHours;
    let all = BillingSession::new(&config, &seeded.ledger)
        .hours_over_by(seeded.uncapped, 6.0)
        .expect("hours over");
    assert_eq!(all, 6.0);

    let capped = BillingSession::new(&config, &seeded.ledger)
        .hours_over_by(seeded.capped, 10.0)
        .expect("hours over");
    assert_eq!(capped, 0.0);
}

#[test]
fn eligible_users_span_sub_projects() {
    let seeded = seeded_ledger();
    let config = Config::default();
    let session = BillingSession::new(&config, &seeded.ledger);

    let users = session.eligible_users(seeded.root).expect("users");
    assert_eq!(users, vec![seeded.alice, seeded.bob, seeded.carol]);

    let child_users = session.eligible_users(seeded.child).expect("users");
    assert_eq!(child_users, vec![seeded.bob, seeded.carol]);
}

#[test]
fn statement_json_round_trips() {
    let seeded = seeded_ledger();
    let config = Config::default();
    let session = BillingSession::new(&config, &seeded.ledger);

    let json = session.statement_json(seeded.uncapped).expect("json");
    assert!(!json.contains("amount_remaining"));
    let restored: ContractStatement = serde_json::from_str(&json).expect("parse");
    assert_eq!(restored.lines.len(), 1);
    assert_eq!(restored.lines[0].display_name, "Carol");
}

#[test]
fn unknown_contract_maps_to_not_found() {
    let ledger = BillingLedger::new("Empty");
    let config = Config::default();
    let session = BillingSession::new(&config, &ledger);

    let err = session.statement(Uuid::new_v4()).expect_err("missing");
    assert!(matches!(err, BillingError::NotFound(_)));
}

#[test]
fn config_loaded_from_disk_drives_session() {
    let seeded = seeded_ledger();
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    let mut stored = Config::default();
    stored.currency = "EUR".to_string();
    stored.currency_precision = 0;
    stored.uncapped_overrun = UncappedOverrunPolicy::AllHours;
    manager.save(&stored).expect("save");

    let config = manager.load().expect("load");
    let session = BillingSession::new(&config, &seeded.ledger);

    let statement = session.statement(seeded.capped).expect("statement");
    assert_eq!(statement.hours_remaining, Some(11.0));
    assert_eq!(statement.currency.as_deref(), Some("EUR"));
    assert_eq!(
        session.hours_over_by(seeded.uncapped, 3.0).expect("hours over"),
        3.0
    );
}

#[test]
fn session_installs_tracing_from_config() {
    let seeded = seeded_ledger();
    let mut config = Config::default();
    config.log_filter = Some("tally_core=debug".to_string());
    let session = BillingSession::new(&config, &seeded.ledger);

    session.init_tracing();
    session.init_tracing();

    assert!(tracing::enabled!(target: "tally_core", tracing::Level::DEBUG)
        || std::env::var("RUST_LOG").is_ok());
    assert!(session.statement(seeded.capped).is_ok());
}
