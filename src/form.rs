use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{Category, Expense};

/// Validation failures surfaced to the user. The messages are shown verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid amount")]
    InvalidAmount,
}

/// Raw text of the add-expense form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseDraft {
    pub amount: String,
    pub description: String,
    pub category: String,
}

impl ExpenseDraft {
    /// Builds the expense dated `today`, or reports why it cannot be created.
    pub fn validate(&self, today: NaiveDate, now: DateTime<Utc>) -> Result<Expense, FormError> {
        let amount = self.amount.trim();
        let description = self.description.trim();
        let category = self.category.trim();
        if amount.is_empty() || description.is_empty() || category.is_empty() {
            return Err(FormError::MissingFields);
        }

        let amount = parse_amount(amount).ok_or(FormError::InvalidAmount)?;
        let category = category
            .parse::<Category>()
            .map_err(|_| FormError::MissingFields)?;

        Ok(Expense::new(amount, description, category, today, now))
    }
}

fn parse_amount(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

/// Monthly goal input: must be a positive number.
pub fn parse_goal(input: &str) -> Result<f64, FormError> {
    parse_amount(input)
        .filter(|value| *value > 0.0)
        .ok_or(FormError::InvalidAmount)
}

/// Account balance input: any non-negative number.
pub fn parse_balance(input: &str) -> Result<f64, FormError> {
    parse_amount(input).ok_or(FormError::InvalidAmount)
}
