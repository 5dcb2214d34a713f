#![allow(dead_code)]

use contract_billing::domain::{
    BillingLedger, Contract, Expense, Project, TimeEntry, User, UserContractRate,
};
use uuid::Uuid;

/// Identifiers of the records seeded by [`seeded_ledger`].
pub struct Seeded {
    pub ledger: BillingLedger,
    pub root: Uuid,
    pub child: Uuid,
    pub capped: Uuid,
    pub uncapped: Uuid,
    pub alice: Uuid,
    pub bob: Uuid,
    pub carol: Uuid,
}

/// Root project with one sub-project, a capped contract (35.00/h, 1000.00
/// purchased) and an uncapped contract (50.00/h).
pub fn seeded_ledger() -> Seeded {
    let mut ledger = BillingLedger::new("Integration");
    let alice = ledger.add_user(User::new("alice", "Alice"));
    let bob = ledger.add_user(User::new("bob", "Bob"));
    let carol = ledger.add_user(User::new("carol", "Carol"));

    let mut root = Project::new("Client").with_default_rate(30.0);
    root.add_member(alice);
    let mut child = Project::new("Client Mobile").with_parent(root.id);
    child.add_member(bob);
    child.add_member(carol);
    let root = ledger.add_project(root);
    let child = ledger.add_project(child);

    let capped =
        ledger.add_contract(Contract::new("Website", root, 35.0).with_purchase_amount(1000.0));
    let uncapped = ledger.add_contract(Contract::new("Support", root, 50.0));

    ledger.add_time_entry(TimeEntry::new(alice, 10.0).with_contract(capped));
    ledger.add_time_entry(TimeEntry::new(bob, 5.0).with_contract(capped));
    ledger.add_user_contract_rate(UserContractRate::new(capped, bob, 40.0));
    ledger.add_expense(Expense::new(capped, 50.0));
    ledger.add_time_entry(TimeEntry::new(carol, 2.5).with_contract(uncapped));

    Seeded {
        ledger,
        root,
        child,
        capped,
        uncapped,
        alice,
        bob,
        carol,
    }
}
