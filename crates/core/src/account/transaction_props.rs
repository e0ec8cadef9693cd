//! Property-based tests for transaction rules.

use proptest::prelude::*;
use rust_decimal::Decimal;
use teller_shared::types::AccountId;

use super::transaction::{TransactionType, apply_transaction};

fn cents() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000).prop_map(|c| Decimal::new(c, 2))
}

fn operation() -> impl Strategy<Value = (TransactionType, Decimal)> {
    (
        prop_oneof![Just(TransactionType::Deposit), Just(TransactionType::Withdraw)],
        cents(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Balance is never negative after any sequence of deposits and withdrawals.
    #[test]
    fn prop_balance_never_negative(
        opening in (0i64..10_000_000).prop_map(|c| Decimal::new(c, 2)),
        ops in prop::collection::vec(operation(), 0..50),
    ) {
        let id = AccountId::new(1);
        let mut balance = opening;

        for (kind, amount) in ops {
            if let Ok(next) = apply_transaction(id, balance, kind, amount) {
                balance = next;
            }
            prop_assert!(balance >= Decimal::ZERO);
        }
    }

    /// A declined withdrawal leaves the balance exactly as it was.
    #[test]
    fn prop_declined_withdraw_is_noop(
        balance in cents(),
        extra in cents(),
    ) {
        let id = AccountId::new(1);
        let requested = balance + extra;
        prop_assert!(apply_transaction(id, balance, TransactionType::Withdraw, requested).is_err());
    }

    /// Deposits then an equal withdrawal return to the starting balance.
    #[test]
    fn prop_deposit_withdraw_cancel(
        balance in cents(),
        amount in cents(),
    ) {
        let id = AccountId::new(1);
        let after_deposit =
            apply_transaction(id, balance, TransactionType::Deposit, amount).unwrap();
        let after_withdraw =
            apply_transaction(id, after_deposit, TransactionType::Withdraw, amount).unwrap();
        prop_assert_eq!(after_withdraw, balance);
    }

    /// Withdrawing X repeatedly from B succeeds exactly floor(B / X) times.
    #[test]
    fn prop_sequential_withdrawals_floor(
        balance_cents in 0i64..100_000,
        amount_cents in 1i64..10_000,
        attempts in 1usize..40,
    ) {
        let id = AccountId::new(1);
        let amount = Decimal::new(amount_cents, 2);
        let mut balance = Decimal::new(balance_cents, 2);
        let mut successes = 0usize;

        for _ in 0..attempts {
            if let Ok(next) = apply_transaction(id, balance, TransactionType::Withdraw, amount) {
                balance = next;
                successes += 1;
            }
        }

        let possible = usize::try_from(balance_cents / amount_cents).unwrap();
        prop_assert_eq!(successes, possible.min(attempts));
        prop_assert!(balance >= Decimal::ZERO);
    }
}
