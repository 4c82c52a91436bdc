//! Key/value persistence for the dashboard.
//!
//! Every piece of state lives under its own key so a corrupt entry only ever
//! resets that entry. Reads never fail: missing or unreadable values come back
//! as `None` and the caller substitutes its default.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::warn;
use serde::{de::DeserializeOwned, Serialize};

use crate::config::{
    AppSettings, BALANCE_KEY, DEFAULT_BALANCE, DEFAULT_GOAL, EXPENSES_BACKUP_KEY, EXPENSES_KEY,
    GOAL_KEY, SETTINGS_KEY,
};
use crate::model::Expense;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("could not write `{key}` to storage")]
    Write { key: String },
    #[error("could not serialize `{key}`: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }

    pub fn is_available() -> bool {
        Self::storage().is_ok()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write {
                key: key.to_string(),
            })
    }
}

/// In-process store. Used when the browser refuses local storage and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Clone)]
pub struct Repository {
    store: Rc<dyn KeyValueStore>,
}

impl Repository {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Repository {
            store: Rc::new(store),
        }
    }

    pub fn browser() -> Self {
        if LocalStorage::is_available() {
            Repository::new(LocalStorage)
        } else {
            warn!("local storage unavailable, changes will not survive a reload");
            Repository::new(MemoryStore::default())
        }
    }

    /// Keeps every record that still parses. When anything is dropped the raw
    /// value is copied to `EXPENSES_BACKUP_KEY` before the next save replaces it.
    pub fn load_expenses(&self) -> Vec<Expense> {
        let Some(raw) = self.store.get(EXPENSES_KEY) else {
            return Vec::new();
        };
        let records: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                warn!("discarding unreadable `{}` from storage: {}", EXPENSES_KEY, err);
                self.back_up_expenses(&raw);
                return Vec::new();
            }
        };

        let stored = records.len();
        let expenses: Vec<Expense> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(expense) => Some(expense),
                Err(err) => {
                    warn!("skipping unreadable expense #{}: {}", index, err);
                    None
                }
            })
            .collect();
        if expenses.len() < stored {
            self.back_up_expenses(&raw);
        }
        expenses
    }

    fn back_up_expenses(&self, raw: &str) {
        match self.store.set(EXPENSES_BACKUP_KEY, raw) {
            Ok(()) => warn!("previous expense data kept under `{}`", EXPENSES_BACKUP_KEY),
            Err(err) => warn!("could not back up expense data: {}", err),
        }
    }

    pub fn save_expenses(&self, expenses: &[Expense]) -> Result<(), StorageError> {
        self.save_json(EXPENSES_KEY, &expenses)
    }

    pub fn load_balance(&self) -> f64 {
        self.load_number(BALANCE_KEY, |value| value.is_finite())
            .unwrap_or(DEFAULT_BALANCE)
    }

    pub fn save_balance(&self, balance: f64) -> Result<(), StorageError> {
        self.store.set(BALANCE_KEY, &balance.to_string())
    }

    pub fn load_goal(&self) -> f64 {
        self.load_number(GOAL_KEY, |value| value.is_finite() && value > 0.0)
            .unwrap_or(DEFAULT_GOAL)
    }

    pub fn save_goal(&self, goal: f64) -> Result<(), StorageError> {
        self.store.set(GOAL_KEY, &goal.to_string())
    }

    pub fn load_settings(&self) -> AppSettings {
        self.load_json(SETTINGS_KEY).unwrap_or_default()
    }

    pub fn save_settings(&self, settings: &AppSettings) -> Result<(), StorageError> {
        self.save_json(SETTINGS_KEY, settings)
    }

    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("discarding unreadable `{}` from storage: {}", key, err);
                None
            }
        }
    }

    fn save_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, &raw)
    }

    // Numbers are stored as plain text, e.g. `1000` or `2500.5`.
    fn load_number(&self, key: &str, accept: impl Fn(f64) -> bool) -> Option<f64> {
        let raw = self.store.get(key)?;
        match raw.trim().parse::<f64>() {
            Ok(value) if accept(value) => Some(value),
            _ => {
                warn!("discarding invalid `{}` from storage: {:?}", key, raw);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn expense(amount: f64) -> Expense {
        Expense::new(
            amount,
            "Coffee",
            Category::FoodAndDining,
            NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            Utc.timestamp_opt(1_741_000_000, 0).unwrap(),
        )
    }

    #[test]
    fn empty_store_yields_defaults() {
        let repo = Repository::new(MemoryStore::default());
        assert!(repo.load_expenses().is_empty());
        assert_eq!(repo.load_balance(), DEFAULT_BALANCE);
        assert_eq!(repo.load_goal(), DEFAULT_GOAL);
        assert_eq!(repo.load_settings(), AppSettings::default());
    }

    #[test]
    fn saved_values_are_read_back() {
        let store = MemoryStore::default();
        let repo = Repository::new(store.clone());
        repo.save_expenses(&[expense(4.5), expense(12.0)]).unwrap();
        repo.save_balance(2500.5).unwrap();
        repo.save_goal(800.0).unwrap();

        assert_eq!(repo.load_expenses(), vec![expense(4.5), expense(12.0)]);
        assert_eq!(repo.load_balance(), 2500.5);
        assert_eq!(repo.load_goal(), 800.0);
        assert_eq!(store.get(GOAL_KEY).as_deref(), Some("800"));
    }

    #[test]
    fn corrupt_values_fall_back_to_defaults() {
        let store = MemoryStore::default()
            .with_entry(EXPENSES_KEY, "[{not json")
            .with_entry(BALANCE_KEY, "NaN")
            .with_entry(GOAL_KEY, "-20");
        let repo = Repository::new(store);
        assert!(repo.load_expenses().is_empty());
        assert_eq!(repo.load_balance(), DEFAULT_BALANCE);
        assert_eq!(repo.load_goal(), DEFAULT_GOAL);
    }

    #[test]
    fn keys_are_independent() {
        let store = MemoryStore::default()
            .with_entry(EXPENSES_KEY, "garbage")
            .with_entry(GOAL_KEY, "1500");
        let repo = Repository::new(store);
        assert!(repo.load_expenses().is_empty());
        assert_eq!(repo.load_goal(), 1500.0);
    }

    #[test]
    fn reads_values_written_by_plain_number_formatting() {
        let store = MemoryStore::default().with_entry(BALANCE_KEY, "10000");
        assert_eq!(Repository::new(store).load_balance(), 10_000.0);
    }

    #[test]
    fn one_bad_record_does_not_hide_the_rest() {
        let raw = r#"[
            {"id":"1","amount":12.5,"description":"Lunch","category":"Food & Dining","date":"2025-01-01"},
            {"id":"2","amount":40.0,"description":"Taxi","category":"Transportation","date":"2025-01-02T10:00:00Z"}
        ]"#;
        let store = MemoryStore::default().with_entry(EXPENSES_KEY, raw);
        let repo = Repository::new(store.clone());

        let expenses = repo.load_expenses();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].id, "1");
        assert_eq!(store.get(EXPENSES_BACKUP_KEY).as_deref(), Some(raw));
    }

    #[test]
    fn unreadable_list_is_backed_up() {
        let store = MemoryStore::default().with_entry(EXPENSES_KEY, "[{not json");
        let repo = Repository::new(store.clone());
        assert!(repo.load_expenses().is_empty());
        assert_eq!(store.get(EXPENSES_BACKUP_KEY).as_deref(), Some("[{not json"));
    }

    #[test]
    fn clean_list_leaves_no_backup() {
        let store = MemoryStore::default();
        let repo = Repository::new(store.clone());
        repo.save_expenses(&[expense(3.0)]).unwrap();
        assert_eq!(repo.load_expenses().len(), 1);
        assert_eq!(store.get(EXPENSES_BACKUP_KEY), None);
    }
}
