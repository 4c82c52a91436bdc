//! Figures derived from the expense list. Everything here is recomputed on
//! each render; nothing is cached.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::ledger::Ledger;
use crate::model::{Category, Expense};

pub fn total_spent(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|expense| expense.amount).sum()
}

/// Expenses dated in `month` (1-12) of `year`.
pub fn filter_month(expenses: &[Expense], year: i32, month: u32) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|expense| expense.date.year() == year && expense.date.month() == month)
        .cloned()
        .collect()
}

/// Calendar month of `today`, not a rolling 30 days.
pub fn current_month(expenses: &[Expense], today: NaiveDate) -> Vec<Expense> {
    filter_month(expenses, today.year(), today.month())
}

pub fn average_transaction(expenses: &[Expense]) -> f64 {
    if expenses.is_empty() {
        0.0
    } else {
        total_spent(expenses) / expenses.len() as f64
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub amount: f64,
}

/// Per-category sums in order of first appearance.
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for expense in expenses {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(total) => total.amount += expense.amount,
            None => totals.push(CategoryTotal {
                category: expense.category,
                amount: expense.amount,
            }),
        }
    }
    totals
}

/// The largest category total; ties go to the one seen first.
pub fn top_category(totals: &[CategoryTotal]) -> Option<&CategoryTotal> {
    totals.iter().fold(None, |best: Option<&CategoryTotal>, total| match best {
        Some(best) if best.amount >= total.amount => Some(best),
        _ => Some(total),
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct WeeklyBucket {
    pub week_start: NaiveDate,
    pub amount: f64,
}

impl WeeklyBucket {
    pub fn label(&self) -> String {
        format!("Week of {}", self.week_start.format("%-m/%-d/%Y"))
    }
}

/// The Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Sums per Sunday-aligned week, earliest week first.
pub fn weekly_buckets(expenses: &[Expense]) -> Vec<WeeklyBucket> {
    let mut weeks: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for expense in expenses {
        *weeks.entry(week_start(expense.date)).or_insert(0.0) += expense.amount;
    }
    weeks
        .into_iter()
        .map(|(week_start, amount)| WeeklyBucket { week_start, amount })
        .collect()
}

/// Figures for the stat cards across the top of the dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardSummary {
    pub total_spent: f64,
    pub month_total: f64,
    pub month_label: String,
    pub transaction_count: usize,
    pub average_transaction: f64,
    pub balance_left: f64,
}

impl DashboardSummary {
    pub fn compute(ledger: &Ledger, today: NaiveDate) -> Self {
        let expenses = ledger.expenses();
        let total = total_spent(expenses);
        DashboardSummary {
            total_spent: total,
            month_total: total_spent(&current_month(expenses, today)),
            month_label: today.format("%B %Y").to_string(),
            transaction_count: expenses.len(),
            average_transaction: average_transaction(expenses),
            balance_left: ledger.balance() - total,
        }
    }
}
