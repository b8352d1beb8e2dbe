//! Application state controller
//!
//! One owning struct funnels every mutation of the budget state and decides
//! when it hits disk. The lifecycle is two-phase: a fresh controller is
//! uninitialized, and persistence stays disarmed until hydration from the
//! store has completed. After that, every mutation saves the whole snapshot.

use chrono::NaiveDate;

use crate::engine;
use crate::models::{BudgetState, Money, Period, Transaction};
use crate::storage::BudgetStore;

/// Owns the in-memory budget state and its persistence policy
///
/// Save failures are swallowed: the in-memory state stays authoritative for
/// the rest of the session and a warning goes to stderr. No mutation here
/// ever returns an error to the caller.
pub struct BudgetController {
    store: BudgetStore,
    state: BudgetState,
    hydrated: bool,
}

impl BudgetController {
    /// Create an uninitialized controller; call `initialize` before use
    pub fn new(store: BudgetStore) -> Self {
        Self {
            store,
            state: BudgetState::default(),
            hydrated: false,
        }
    }

    /// Hydrate from the store, then arm persistence
    ///
    /// Never fails: an absent or unusable snapshot just leaves the defaults
    /// in place. Damaged snapshot fields have already been degraded one by
    /// one inside the store.
    pub fn initialize(&mut self) {
        if let Some(state) = self.store.load() {
            self.state = state;
        }
        self.hydrated = true;
    }

    /// Replace the starting balance; invalid input unsets it
    ///
    /// Only a non-negative amount is kept. No transaction is recorded.
    pub fn set_starting_balance(&mut self, amount: Option<Money>) {
        self.state.balance = amount.filter(|a| !a.is_negative());
        self.persist();
    }

    /// Record a signed transaction against the balance
    ///
    /// A positive amount is a credit, a negative amount a debit. Nothing
    /// happens without a starting balance or with a zero amount; None
    /// reports the no-op. On success the transaction sits at the front of
    /// the log and a copy is returned for the caller's confirmation message.
    pub fn record_transaction(&mut self, amount: Money, reason: &str) -> Option<Transaction> {
        let balance = self.state.balance?;
        let (new_balance, transaction) = engine::apply_transaction(balance, amount, reason)?;

        self.state.balance = Some(new_balance);
        self.state.prepend_transaction(transaction.clone());
        self.persist();

        Some(transaction)
    }

    /// Replace the accounting period; None restores the current-month default
    pub fn set_period(&mut self, period: Option<Period>) {
        self.state.period = period.unwrap_or_else(Period::current_month);
        self.persist();
    }

    /// Restore everything to defaults: no balance, empty log, current month
    pub fn reset(&mut self) {
        self.state = BudgetState::default();
        self.persist();
    }

    /// Current balance, None until a starting balance is set
    pub fn balance(&self) -> Option<Money> {
        self.state.balance
    }

    /// The transaction log, most recent first
    pub fn transactions(&self) -> &[Transaction] {
        &self.state.transactions
    }

    /// The accounting period
    pub fn period(&self) -> &Period {
        &self.state.period
    }

    /// Days left in the period as of today, counting today
    pub fn days_remaining(&self) -> i64 {
        engine::days_remaining(&self.state.period, today())
    }

    /// Suggested daily spending limit, None until a balance is set
    pub fn daily_limit(&self) -> Option<Money> {
        let balance = self.state.balance?;
        Some(engine::daily_limit(balance, self.days_remaining()))
    }

    fn persist(&self) {
        // Disarmed until hydration has completed
        if !self.hydrated {
            return;
        }
        if let Err(e) = self.store.save(&self.state) {
            // The session keeps running on in-memory state
            eprintln!("warning: could not save budget snapshot: {}", e);
        }
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PerdiemPaths;
    use crate::models::TransactionKind;
    use tempfile::TempDir;

    fn test_store(temp_dir: &TempDir) -> BudgetStore {
        let paths = PerdiemPaths::with_base_dir(temp_dir.path().to_path_buf());
        BudgetStore::new(&paths).unwrap()
    }

    fn create_test_controller() -> (TempDir, BudgetController) {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);
        let mut controller = BudgetController::new(store);
        controller.initialize();
        (temp_dir, controller)
    }

    fn future_period() -> Period {
        Period::new(
            NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2099, 1, 10).unwrap(),
        )
        .unwrap()
    }

    fn past_period() -> Period {
        Period::new(
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 31).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_initialize_empty_store_gives_defaults() {
        let (_temp, controller) = create_test_controller();
        assert!(controller.balance().is_none());
        assert!(controller.transactions().is_empty());
        assert_eq!(*controller.period(), Period::current_month());
    }

    #[test]
    fn test_set_starting_balance_persists() {
        let (temp, mut controller) = create_test_controller();
        controller.set_starting_balance(Some(Money::from_cents(100_000)));

        assert_eq!(controller.balance(), Some(Money::from_cents(100_000)));

        // A second controller sees it after hydration
        let mut second = BudgetController::new(test_store(&temp));
        second.initialize();
        assert_eq!(second.balance(), Some(Money::from_cents(100_000)));
    }

    #[test]
    fn test_negative_starting_balance_unsets() {
        let (_temp, mut controller) = create_test_controller();
        controller.set_starting_balance(Some(Money::from_cents(5000)));
        controller.set_starting_balance(Some(Money::from_cents(-1)));
        assert!(controller.balance().is_none());
    }

    #[test]
    fn test_set_starting_balance_records_no_transaction() {
        let (_temp, mut controller) = create_test_controller();
        controller.set_starting_balance(Some(Money::from_cents(5000)));
        assert!(controller.transactions().is_empty());
    }

    #[test]
    fn test_record_credit() {
        let (_temp, mut controller) = create_test_controller();
        controller.set_starting_balance(Some(Money::from_cents(100_000)));

        let txn = controller
            .record_transaction(Money::from_cents(50_000), "salary")
            .unwrap();
        assert_eq!(txn.kind, TransactionKind::Add);
        assert_eq!(txn.amount, Money::from_cents(50_000));
        assert_eq!(txn.reason, "salary");

        assert_eq!(controller.balance(), Some(Money::from_cents(150_000)));
    }

    #[test]
    fn test_record_debit() {
        let (_temp, mut controller) = create_test_controller();
        controller.set_starting_balance(Some(Money::from_cents(150_000)));

        let txn = controller
            .record_transaction(Money::from_cents(-20_000), "rent")
            .unwrap();
        assert_eq!(txn.kind, TransactionKind::Sub);
        assert_eq!(txn.amount, Money::from_cents(20_000));

        assert_eq!(controller.balance(), Some(Money::from_cents(130_000)));
    }

    #[test]
    fn test_newest_transaction_first() {
        let (_temp, mut controller) = create_test_controller();
        controller.set_starting_balance(Some(Money::from_cents(100_000)));
        controller.record_transaction(Money::from_cents(1000), "first");
        controller.record_transaction(Money::from_cents(-2000), "second");

        let log = controller.transactions();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].reason, "second");
        assert_eq!(log[1].reason, "first");
    }

    #[test]
    fn test_zero_amount_is_silent_noop() {
        let (_temp, mut controller) = create_test_controller();
        controller.set_starting_balance(Some(Money::from_cents(100_000)));

        // Remove the snapshot so an unexpected save would be visible
        std::fs::remove_file(controller.store.snapshot_path()).unwrap();

        assert!(controller.record_transaction(Money::zero(), "x").is_none());
        assert!(controller.transactions().is_empty());
        assert_eq!(controller.balance(), Some(Money::from_cents(100_000)));
        assert!(!controller.store.snapshot_path().exists());
    }

    #[test]
    fn test_record_without_balance_is_noop() {
        let (_temp, mut controller) = create_test_controller();

        assert!(controller
            .record_transaction(Money::from_cents(5000), "ignored")
            .is_none());
        assert!(controller.transactions().is_empty());
        assert!(controller.balance().is_none());
    }

    #[test]
    fn test_persistence_suppressed_before_hydration() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);
        let snapshot_path = store.snapshot_path().to_path_buf();

        // No initialize() call: mutations stay in memory only
        let mut controller = BudgetController::new(store);
        controller.set_starting_balance(Some(Money::from_cents(9999)));
        assert!(!snapshot_path.exists());

        // Hydration arms persistence for later mutations
        controller.initialize();
        controller.set_starting_balance(Some(Money::from_cents(9999)));
        assert!(snapshot_path.exists());
    }

    #[test]
    fn test_every_mutation_persists() {
        let (temp, mut controller) = create_test_controller();
        controller.set_starting_balance(Some(Money::from_cents(100_000)));
        controller.record_transaction(Money::from_cents(-500), "snack");
        controller.set_period(Some(future_period()));

        let mut second = BudgetController::new(test_store(&temp));
        second.initialize();
        assert_eq!(second.balance(), Some(Money::from_cents(99_500)));
        assert_eq!(second.transactions().len(), 1);
        assert_eq!(*second.period(), future_period());
    }

    #[test]
    fn test_set_period_none_restores_default() {
        let (_temp, mut controller) = create_test_controller();
        controller.set_period(Some(future_period()));
        controller.set_period(None);
        assert_eq!(*controller.period(), Period::current_month());
    }

    #[test]
    fn test_days_remaining_full_future_period() {
        let (_temp, mut controller) = create_test_controller();
        controller.set_period(Some(future_period()));
        assert_eq!(controller.days_remaining(), 10);
    }

    #[test]
    fn test_days_remaining_finished_period() {
        let (_temp, mut controller) = create_test_controller();
        controller.set_period(Some(past_period()));
        assert_eq!(controller.days_remaining(), 0);
    }

    #[test]
    fn test_daily_limit_spreads_balance() {
        let (_temp, mut controller) = create_test_controller();
        controller.set_starting_balance(Some(Money::from_cents(10_000)));
        controller.set_period(Some(future_period()));

        assert_eq!(controller.daily_limit(), Some(Money::from_cents(1000)));
    }

    #[test]
    fn test_daily_limit_zero_after_period() {
        let (_temp, mut controller) = create_test_controller();
        controller.set_starting_balance(Some(Money::from_cents(10_000)));
        controller.set_period(Some(past_period()));

        assert_eq!(controller.daily_limit(), Some(Money::zero()));
    }

    #[test]
    fn test_daily_limit_without_balance() {
        let (_temp, controller) = create_test_controller();
        assert!(controller.daily_limit().is_none());
    }

    #[test]
    fn test_reset_restores_defaults_and_persists() {
        let (temp, mut controller) = create_test_controller();
        controller.set_starting_balance(Some(Money::from_cents(100_000)));
        controller.record_transaction(Money::from_cents(-500), "snack");
        controller.set_period(Some(future_period()));

        controller.reset();
        assert!(controller.balance().is_none());
        assert!(controller.transactions().is_empty());
        assert_eq!(*controller.period(), Period::current_month());

        let mut second = BudgetController::new(test_store(&temp));
        second.initialize();
        assert!(second.balance().is_none());
        assert!(second.transactions().is_empty());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let (_temp, mut controller) = create_test_controller();
        controller.set_starting_balance(Some(Money::from_cents(100_000)));

        controller.reset();
        let period_after_first = *controller.period();
        controller.reset();

        assert!(controller.balance().is_none());
        assert!(controller.transactions().is_empty());
        assert_eq!(*controller.period(), period_after_first);
    }

    #[test]
    fn test_hydration_adopts_existing_snapshot() {
        let (temp, mut first) = create_test_controller();
        first.set_starting_balance(Some(Money::from_cents(42_000)));
        first.record_transaction(Money::from_cents(-1000), "bus");

        let mut second = BudgetController::new(test_store(&temp));
        second.initialize();

        assert_eq!(second.balance(), Some(Money::from_cents(41_000)));
        assert_eq!(second.transactions()[0].reason, "bus");
    }
}
