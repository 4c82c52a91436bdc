use serde::{Deserialize, Serialize};

pub const EXPENSES_KEY: &str = "expenses";
/// Raw copy of an `expenses` value that could not be read in full.
pub const EXPENSES_BACKUP_KEY: &str = "expensesBackup";
pub const BALANCE_KEY: &str = "accountBalance";
pub const GOAL_KEY: &str = "savingsGoal";
pub const SETTINGS_KEY: &str = "settings";

pub const DEFAULT_BALANCE: f64 = 10_000.0;
pub const DEFAULT_GOAL: f64 = 1_000.0;

/// How long a toast stays on screen.
pub const NOTICE_TIMEOUT_MS: u32 = 4_000;

pub const CURRENCIES: [(&str, &str); 6] = [
    ("INR", "₹"),
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("PHP", "₱"),
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub currency_code: String,
    pub currency_symbol: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            currency_code: "INR".to_string(),
            currency_symbol: "₹".to_string(),
        }
    }
}

impl AppSettings {
    pub fn for_currency(code: &str) -> Self {
        AppSettings {
            currency_code: code.to_string(),
            currency_symbol: currency_symbol_for(code).to_string(),
        }
    }
}

pub fn currency_symbol_for(code: &str) -> &'static str {
    CURRENCIES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, symbol)| *symbol)
        .unwrap_or("₹")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_their_symbol() {
        assert_eq!(currency_symbol_for("USD"), "$");
        assert_eq!(currency_symbol_for("PHP"), "₱");
        assert_eq!(AppSettings::for_currency("EUR").currency_symbol, "€");
    }

    #[test]
    fn unknown_code_falls_back_to_rupee() {
        assert_eq!(currency_symbol_for("XYZ"), "₹");
        assert_eq!(AppSettings::default().currency_symbol, "₹");
    }
}
