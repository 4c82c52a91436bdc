use log::{info, warn};

use crate::config::{DEFAULT_BALANCE, DEFAULT_GOAL};
use crate::form::FormError;
use crate::model::Expense;
use crate::storage::Repository;

/// In-memory record store: the expense list, account balance and monthly goal.
///
/// Expenses are kept newest-insertion-first; the date field plays no part in
/// the ordering. Each mutator persists only the key it touched.
#[derive(Clone, Debug, PartialEq)]
pub struct Ledger {
    expenses: Vec<Expense>,
    balance: f64,
    goal: f64,
}

impl Default for Ledger {
    fn default() -> Self {
        Ledger {
            expenses: Vec::new(),
            balance: DEFAULT_BALANCE,
            goal: DEFAULT_GOAL,
        }
    }
}

impl Ledger {
    pub fn load(repo: &Repository) -> Self {
        let ledger = Ledger {
            expenses: repo.load_expenses(),
            balance: repo.load_balance(),
            goal: repo.load_goal(),
        };
        info!(
            "loaded {} expenses, balance {}, goal {}",
            ledger.expenses.len(),
            ledger.balance,
            ledger.goal
        );
        ledger
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn goal(&self) -> f64 {
        self.goal
    }

    pub fn add_expense(&mut self, expense: Expense, repo: &Repository) {
        info!(
            "adding expense {} ({} {})",
            expense.id, expense.amount, expense.category
        );
        self.expenses.insert(0, expense);
        if let Err(err) = repo.save_expenses(&self.expenses) {
            warn!("expense list not persisted: {}", err);
        }
    }

    pub fn set_goal(&mut self, goal: f64, repo: &Repository) -> Result<(), FormError> {
        if !goal.is_finite() || goal <= 0.0 {
            return Err(FormError::InvalidAmount);
        }
        info!("monthly goal set to {}", goal);
        self.goal = goal;
        if let Err(err) = repo.save_goal(goal) {
            warn!("goal not persisted: {}", err);
        }
        Ok(())
    }

    pub fn set_balance(&mut self, balance: f64, repo: &Repository) -> Result<(), FormError> {
        if !balance.is_finite() || balance < 0.0 {
            return Err(FormError::InvalidAmount);
        }
        info!("account balance set to {}", balance);
        self.balance = balance;
        if let Err(err) = repo.save_balance(balance) {
            warn!("balance not persisted: {}", err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EXPENSES_BACKUP_KEY, EXPENSES_KEY};
    use crate::form::parse_goal;
    use crate::model::Category;
    use crate::storage::{KeyValueStore, MemoryStore};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn expense(id_secs: i64, day: u32) -> Expense {
        Expense::new(
            10.0,
            "Bus",
            Category::Transportation,
            NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
            Utc.timestamp_opt(id_secs, 0).unwrap(),
        )
    }

    #[test]
    fn new_expense_goes_to_the_head_regardless_of_date() {
        let repo = Repository::new(MemoryStore::default());
        let mut ledger = Ledger::default();
        ledger.add_expense(expense(1, 15), &repo);
        ledger.add_expense(expense(2, 1), &repo);
        ledger.add_expense(expense(3, 30), &repo);
        ledger.add_expense(expense(4, 2), &repo);

        let ids: Vec<&str> = ledger.expenses().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["4000", "3000", "2000", "1000"]);
    }

    #[test]
    fn mutations_are_mirrored_to_storage() {
        let store = MemoryStore::default();
        let repo = Repository::new(store.clone());
        let mut ledger = Ledger::load(&repo);
        ledger.add_expense(expense(1, 3), &repo);
        ledger.set_goal(750.0, &repo).unwrap();
        ledger.set_balance(4200.0, &repo).unwrap();

        let reloaded = Ledger::load(&Repository::new(store));
        assert_eq!(reloaded, ledger);
    }

    #[test]
    fn invalid_goal_leaves_goal_unchanged() {
        let repo = Repository::new(MemoryStore::default());
        let mut ledger = Ledger::default();
        assert_eq!(parse_goal("-5"), Err(FormError::InvalidAmount));
        assert_eq!(parse_goal(""), Err(FormError::InvalidAmount));
        assert_eq!(ledger.set_goal(-5.0, &repo), Err(FormError::InvalidAmount));
        assert_eq!(ledger.set_goal(f64::NAN, &repo), Err(FormError::InvalidAmount));
        assert_eq!(ledger.goal(), DEFAULT_GOAL);
        assert_eq!(repo.load_goal(), DEFAULT_GOAL);
    }

    #[test]
    fn negative_balance_is_rejected() {
        let repo = Repository::new(MemoryStore::default());
        let mut ledger = Ledger::default();
        assert_eq!(ledger.set_balance(-1.0, &repo), Err(FormError::InvalidAmount));
        assert_eq!(ledger.balance(), DEFAULT_BALANCE);
    }

    #[test]
    fn adding_after_a_partial_load_keeps_the_readable_history() {
        let raw = r#"[
            {"id":"500","amount":20.0,"description":"Groceries","category":"Food & Dining","date":"2025-01-01"},
            {"id":"600","amount":5.0,"description":"Bus","category":"Transportation","date":"2025-01-02T10:00:00Z"}
        ]"#;
        let store = MemoryStore::default().with_entry(EXPENSES_KEY, raw);
        let repo = Repository::new(store.clone());
        let mut ledger = Ledger::load(&repo);
        ledger.add_expense(expense(9, 3), &repo);

        let ids: Vec<String> = repo.load_expenses().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, ["9000", "500"]);
        assert_eq!(store.get(EXPENSES_BACKUP_KEY).as_deref(), Some(raw));
    }
}
