//! Strategy ordering tests
//!
//! Each strategy is a pure reordering of debt indices. These tests pin the
//! direction of each sort, the stability guarantee for ties, and the name
//! parsing used by callers that accept free-form strategy strings.

use debt_payoff_core_rs::{Debt, PaymentInterval, Strategy};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn debt(name: &str, balance: Decimal, rate: Decimal, priority: u32) -> Debt {
    Debt::new(
        name.to_string(),
        balance,
        balance.max(dec!(1)),
        rate,
        dec!(25),
        PaymentInterval::Monthly,
    )
    .with_priority(priority)
}

fn balances(debts: &[Debt]) -> Vec<Decimal> {
    debts.iter().map(|d| d.balance()).collect()
}

// ============================================================================
// Sort direction
// ============================================================================

#[test]
fn test_snowball_orders_smallest_balance_first() {
    let debts = vec![
        debt("car", dec!(8000), dec!(6), 0),
        debt("card", dec!(1500), dec!(22), 0),
        debt("loan", dec!(4000), dec!(11), 0),
    ];

    let order = Strategy::Snowball.priority_order(&debts, &balances(&debts));
    assert_eq!(order, vec![1, 2, 0], "smallest balance should come first");
}

#[test]
fn test_avalanche_orders_highest_rate_first() {
    let debts = vec![
        debt("car", dec!(8000), dec!(6), 0),
        debt("card", dec!(1500), dec!(22), 0),
        debt("loan", dec!(4000), dec!(11), 0),
    ];

    let order = Strategy::Avalanche.priority_order(&debts, &balances(&debts));
    assert_eq!(order, vec![1, 2, 0], "highest rate should come first");
}

#[test]
fn test_custom_orders_by_ascending_priority() {
    let debts = vec![
        debt("third", dec!(100), dec!(5), 30),
        debt("first", dec!(200), dec!(5), 10),
        debt("second", dec!(300), dec!(5), 20),
    ];

    let order = Strategy::Custom.priority_order(&debts, &balances(&debts));
    assert_eq!(order, vec![1, 2, 0]);
}

#[test]
fn test_minimum_keeps_input_order() {
    let debts = vec![
        debt("b", dec!(9000), dec!(19), 2),
        debt("a", dec!(100), dec!(3), 1),
    ];

    let order = Strategy::Minimum.priority_order(&debts, &balances(&debts));
    assert_eq!(order, vec![0, 1]);
}

// ============================================================================
// Stability
// ============================================================================

#[test]
fn test_ties_preserve_input_order() {
    let debts = vec![
        debt("first", dec!(1000), dec!(12), 5),
        debt("second", dec!(1000), dec!(12), 5),
        debt("third", dec!(1000), dec!(12), 5),
    ];
    let bals = balances(&debts);

    for strategy in [
        Strategy::Snowball,
        Strategy::Avalanche,
        Strategy::Custom,
        Strategy::Minimum,
    ] {
        let order = strategy.priority_order(&debts, &bals);
        assert_eq!(
            order,
            vec![0, 1, 2],
            "{strategy} must not reorder tied debts"
        );
    }
}

#[test]
fn test_snowball_tracks_working_balances() {
    let debts = vec![
        debt("a", dec!(500), dec!(10), 0),
        debt("b", dec!(800), dec!(10), 0),
    ];

    // Partway through a plan debt "a" has been paid below "b".
    let working = vec![dec!(700), dec!(200)];
    let order = Strategy::Snowball.priority_order(&debts, &working);
    assert_eq!(order, vec![1, 0], "order follows current, not starting, balances");
}

// ============================================================================
// Names
// ============================================================================

#[test]
fn test_from_name_recognizes_known_strategies() {
    assert_eq!(Strategy::from_name("snowball"), Strategy::Snowball);
    assert_eq!(Strategy::from_name("avalanche"), Strategy::Avalanche);
    assert_eq!(Strategy::from_name("custom"), Strategy::Custom);
    assert_eq!(Strategy::from_name("minimum"), Strategy::Minimum);
}

#[test]
fn test_from_name_falls_back_to_minimum() {
    assert_eq!(Strategy::from_name("blizzard"), Strategy::Minimum);
    assert_eq!(Strategy::from_name(""), Strategy::Minimum);
    assert_eq!(Strategy::from_name("SNOWBALL"), Strategy::Minimum);
}

#[test]
fn test_strategy_serde_uses_lowercase_names() {
    let json = serde_json::to_string(&Strategy::Avalanche).unwrap();
    assert_eq!(json, "\"avalanche\"");

    let back: Strategy = serde_json::from_str("\"snowball\"").unwrap();
    assert_eq!(back, Strategy::Snowball);

    assert!(serde_json::from_str::<Strategy>("\"speedball\"").is_err());
}
