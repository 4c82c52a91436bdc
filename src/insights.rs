use chrono::{Duration, NaiveDate};
use log::debug;

use crate::format::{format_currency, format_percent};
use crate::model::Expense;
use crate::stats::{category_totals, top_category};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsightKind {
    Warning,
    Info,
    Success,
    Tip,
}

impl InsightKind {
    pub fn badge(self) -> &'static str {
        match self {
            InsightKind::Warning => "Alert",
            InsightKind::Info => "Info",
            InsightKind::Success => "Good",
            InsightKind::Tip => "Tip",
        }
    }

    pub fn card_class(self) -> &'static str {
        match self {
            InsightKind::Warning => "border-amber-200 bg-amber-50",
            InsightKind::Info => "border-blue-200 bg-blue-50",
            InsightKind::Success => "border-green-200 bg-green-50",
            InsightKind::Tip => "border-violet-200 bg-violet-50",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            InsightKind::Warning => "bg-amber-100 text-amber-700 border-amber-200",
            InsightKind::Info => "bg-blue-100 text-blue-700 border-blue-200",
            InsightKind::Success => "bg-green-100 text-green-700 border-green-200",
            InsightKind::Tip => "bg-violet-100 text-violet-700 border-violet-200",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsightRule {
    TopCategory,
    Frequency,
    ApproachingLimit,
    GoodControl,
    SmallPurchases,
    Fallback,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Insight {
    pub rule: InsightRule,
    pub kind: InsightKind,
    pub title: &'static str,
    pub message: String,
    pub tip: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InsightThresholds {
    /// Share of the month's spend above which the top category is flagged.
    pub top_category_share: f64,
    pub frequency_window_days: i64,
    pub frequency_count: usize,
    /// Budget progress band, in percent, that counts as approaching the limit.
    pub approaching_above: f64,
    pub approaching_below: f64,
    pub good_control_at_most: f64,
    pub small_purchase_min_count: usize,
    pub small_purchase_average: f64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        InsightThresholds {
            top_category_share: 0.4,
            frequency_window_days: 7,
            frequency_count: 10,
            approaching_above: 80.0,
            approaching_below: 100.0,
            good_control_at_most: 60.0,
            small_purchase_min_count: 5,
            small_purchase_average: 15.0,
        }
    }
}

pub struct InsightInputs<'a> {
    /// Usually the current month's expenses.
    pub expenses: &'a [Expense],
    pub total_spent: f64,
    pub goal: f64,
    pub today: NaiveDate,
    pub currency_symbol: &'a str,
}

/// Runs every rule in order and keeps the ones that fire. Never empty.
pub fn generate_insights(inputs: &InsightInputs, thresholds: &InsightThresholds) -> Vec<Insight> {
    let mut insights: Vec<Insight> = [
        top_category_rule(inputs, thresholds),
        frequency_rule(inputs, thresholds),
        budget_rule(inputs, thresholds),
        small_purchase_rule(inputs, thresholds),
    ]
    .into_iter()
    .flatten()
    .collect();

    if insights.is_empty() {
        insights.push(Insight {
            rule: InsightRule::Fallback,
            kind: InsightKind::Tip,
            title: "AI Financial Tip",
            message: "Track your expenses regularly to identify spending patterns and optimize your budget."
                .to_string(),
            tip: "Set up weekly budget reviews to stay on track with your financial goals.",
        });
    }

    debug!(
        "insights for {} expenses: {:?}",
        inputs.expenses.len(),
        insights.iter().map(|i| i.rule).collect::<Vec<_>>()
    );
    insights
}

fn top_category_rule(inputs: &InsightInputs, thresholds: &InsightThresholds) -> Option<Insight> {
    let totals = category_totals(inputs.expenses);
    let top = top_category(&totals)?;
    if top.amount <= inputs.total_spent * thresholds.top_category_share {
        return None;
    }
    Some(Insight {
        rule: InsightRule::TopCategory,
        kind: InsightKind::Warning,
        title: "High Category Spending",
        message: format!(
            "You're spending {} of your budget on {}. Consider if this aligns with your priorities.",
            format_percent(top.amount / inputs.total_spent * 100.0),
            top.category
        ),
        tip: "Try setting a specific budget limit for this category next month.",
    })
}

fn frequency_rule(inputs: &InsightInputs, thresholds: &InsightThresholds) -> Option<Insight> {
    let window_start = inputs.today - Duration::days(thresholds.frequency_window_days);
    let recent = inputs
        .expenses
        .iter()
        .filter(|expense| expense.date > window_start)
        .count();
    if recent < thresholds.frequency_count {
        return None;
    }
    Some(Insight {
        rule: InsightRule::Frequency,
        kind: InsightKind::Info,
        title: "High Transaction Frequency",
        message: format!(
            "You've made {} transactions in the past week. Frequent small purchases can add up quickly.",
            recent
        ),
        tip: "Consider batching purchases or implementing a 24-hour waiting period for non-essential items.",
    })
}

// Progress in (60, 80] and at or past 100 produces nothing.
fn budget_rule(inputs: &InsightInputs, thresholds: &InsightThresholds) -> Option<Insight> {
    if inputs.goal <= 0.0 {
        return None;
    }
    let progress = inputs.total_spent / inputs.goal * 100.0;
    if progress > thresholds.approaching_above && progress < thresholds.approaching_below {
        Some(Insight {
            rule: InsightRule::ApproachingLimit,
            kind: InsightKind::Warning,
            title: "Approaching Budget Limit",
            message: format!(
                "You've used {} of your monthly budget. Only {} remaining.",
                format_percent(progress),
                format_currency(inputs.goal - inputs.total_spent, inputs.currency_symbol)
            ),
            tip: "Focus on essential expenses only for the rest of the month.",
        })
    } else if progress <= thresholds.good_control_at_most {
        Some(Insight {
            rule: InsightRule::GoodControl,
            kind: InsightKind::Success,
            title: "Great Budget Control",
            message: format!(
                "Excellent spending discipline! You're only at {} of your monthly goal.",
                format_percent(progress)
            ),
            tip: "Consider increasing your savings rate or setting a lower spending goal next month.",
        })
    } else {
        None
    }
}

fn small_purchase_rule(inputs: &InsightInputs, thresholds: &InsightThresholds) -> Option<Insight> {
    let count = inputs.expenses.len();
    if count < thresholds.small_purchase_min_count {
        return None;
    }
    let average = inputs.total_spent / count as f64;
    if average >= thresholds.small_purchase_average {
        return None;
    }
    Some(Insight {
        rule: InsightRule::SmallPurchases,
        kind: InsightKind::Tip,
        title: "Small Purchase Pattern",
        message: format!(
            "Your average transaction is {}. Small purchases can be budget-friendly but watch for accumulation.",
            format_currency(average, inputs.currency_symbol)
        ),
        tip: "Consider using the 50/30/20 rule: 50% needs, 30% wants, 20% savings.",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::stats::total_spent;
    use chrono::{TimeZone, Utc};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn expense(amount: f64, category: Category, day: u32) -> Expense {
        Expense::new(
            amount,
            "item",
            category,
            NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
            Utc.timestamp_opt(0, 0).unwrap(),
        )
    }

    fn run(expenses: &[Expense], goal: f64) -> Vec<Insight> {
        let inputs = InsightInputs {
            expenses,
            total_spent: total_spent(expenses),
            goal,
            today: today(),
            currency_symbol: "$",
        };
        generate_insights(&inputs, &InsightThresholds::default())
    }

    fn rules(insights: &[Insight]) -> Vec<InsightRule> {
        insights.iter().map(|i| i.rule).collect()
    }

    #[test]
    fn dominant_category_is_flagged_by_name() {
        let expenses = [
            expense(100.0, Category::FoodAndDining, 1),
            expense(50.0, Category::FoodAndDining, 2),
            expense(350.0, Category::Travel, 3),
        ];
        let insights = run(&expenses, 10_000.0);
        let warning = &insights[0];
        assert_eq!(warning.rule, InsightRule::TopCategory);
        assert_eq!(warning.kind, InsightKind::Warning);
        assert_eq!(
            warning.message,
            "You're spending 70.0% of your budget on Travel. Consider if this aligns with your priorities."
        );
    }

    #[test]
    fn spread_spending_does_not_trigger_category_warning() {
        let expenses = [
            expense(30.0, Category::FoodAndDining, 1),
            expense(30.0, Category::Travel, 2),
            expense(40.0, Category::Shopping, 3),
        ];
        assert!(!rules(&run(&expenses, 10_000.0)).contains(&InsightRule::TopCategory));
    }

    #[test]
    fn ten_recent_transactions_trigger_frequency_info() {
        let mut expenses: Vec<Expense> = (12..=18)
            .map(|day| expense(100.0, Category::Other, day))
            .collect();
        expenses.extend((15..=17).map(|day| expense(100.0, Category::Shopping, day)));
        let insights = run(&expenses, 100_000.0);
        let frequency = insights
            .iter()
            .find(|i| i.rule == InsightRule::Frequency)
            .unwrap();
        assert_eq!(frequency.kind, InsightKind::Info);
        assert!(frequency.message.starts_with("You've made 10 transactions"));
    }

    #[test]
    fn frequency_window_excludes_a_week_ago() {
        // The 11th is exactly seven days before the 18th.
        let mut expenses: Vec<Expense> = (12..=18)
            .map(|day| expense(100.0, Category::Other, day))
            .collect();
        expenses.extend((9..=11).map(|day| expense(100.0, Category::Other, day)));
        assert!(!rules(&run(&expenses, 100_000.0)).contains(&InsightRule::Frequency));
    }

    #[test]
    fn eighty_five_percent_of_goal_warns_with_remaining() {
        let expenses = [
            expense(300.0, Category::FoodAndDining, 1),
            expense(300.0, Category::Shopping, 2),
            expense(250.0, Category::Travel, 3),
        ];
        let insights = run(&expenses, 1000.0);
        assert_eq!(rules(&insights), [InsightRule::ApproachingLimit]);
        assert_eq!(
            insights[0].message,
            "You've used 85.0% of your monthly budget. Only $150.00 remaining."
        );
    }

    #[test]
    fn low_progress_is_praised() {
        let expenses = [
            expense(150.0, Category::FoodAndDining, 1),
            expense(150.0, Category::Shopping, 2),
            expense(150.0, Category::Travel, 3),
        ];
        let insights = run(&expenses, 1000.0);
        assert_eq!(rules(&insights), [InsightRule::GoodControl]);
        assert_eq!(insights[0].kind, InsightKind::Success);
    }

    #[test]
    fn progress_gaps_emit_nothing_from_budget_rule() {
        // 70% and 120% fall outside both bands.
        for goal in [1000.0, 583.3333] {
            let expenses = [
                expense(240.0, Category::FoodAndDining, 1),
                expense(230.0, Category::Shopping, 2),
                expense(230.0, Category::Travel, 3),
            ];
            let found = rules(&run(&expenses, goal));
            assert!(!found.contains(&InsightRule::ApproachingLimit));
            assert!(!found.contains(&InsightRule::GoodControl));
            assert_eq!(found, [InsightRule::Fallback]);
        }
    }

    #[test]
    fn small_average_over_five_purchases_gives_tip() {
        let expenses: Vec<Expense> = Category::ALL[..5]
            .iter()
            .map(|category| expense(12.0, *category, 1))
            .collect();
        let insights = run(&expenses, 1000.0);
        assert_eq!(
            rules(&insights),
            [InsightRule::GoodControl, InsightRule::SmallPurchases]
        );
        assert_eq!(
            insights[1].message,
            "Your average transaction is $12.00. Small purchases can be budget-friendly but watch for accumulation."
        );
    }

    #[test]
    fn empty_month_still_gets_good_control() {
        let insights = run(&[], 1000.0);
        assert_eq!(rules(&insights), [InsightRule::GoodControl]);
    }

    #[test]
    fn fallback_tip_when_nothing_fires() {
        let expenses = [
            expense(240.0, Category::FoodAndDining, 1),
            expense(230.0, Category::Shopping, 2),
            expense(230.0, Category::Travel, 3),
        ];
        let insights = run(&expenses, 1000.0);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].rule, InsightRule::Fallback);
        assert_eq!(insights[0].kind.badge(), "Tip");
    }

    #[test]
    fn budget_rule_follows_the_saved_goal() {
        let expenses = [
            expense(150.0, Category::FoodAndDining, 1),
            expense(150.0, Category::Shopping, 2),
            expense(150.0, Category::Travel, 3),
        ];
        assert_eq!(rules(&run(&expenses, 1000.0)), [InsightRule::GoodControl]);
        assert_eq!(rules(&run(&expenses, 500.0)), [InsightRule::ApproachingLimit]);
    }
}

