use crate::format::format_currency;

/// Month-to-date spend measured against the monthly goal.
#[derive(Clone, Debug, PartialEq)]
pub struct GoalProgress {
    pub goal: f64,
    pub spent: f64,
    pub remaining: f64,
    /// Clamped to `[0, 100]` for display.
    pub percent: f64,
    pub over_budget: bool,
}

impl GoalProgress {
    pub fn new(goal: f64, spent: f64) -> Self {
        let percent = if goal > 0.0 {
            (spent / goal * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        GoalProgress {
            goal,
            spent,
            remaining: goal - spent,
            percent,
            over_budget: spent > goal,
        }
    }

    pub fn status_title(&self) -> &'static str {
        if self.over_budget {
            "Budget Alert!"
        } else {
            "On Track!"
        }
    }

    pub fn remaining_label(&self) -> &'static str {
        if self.over_budget {
            "Over Budget"
        } else {
            "Remaining"
        }
    }

    pub fn message(&self, symbol: &str) -> String {
        if self.over_budget {
            format!(
                "You've exceeded your monthly goal by {}. Consider reviewing your spending habits.",
                format_currency(self.remaining.abs(), symbol)
            )
        } else {
            format!(
                "Great job! You have {} left in your budget this month.",
                format_currency(self.remaining, symbol)
            )
        }
    }
}
