mod balance_card;
mod charts;
mod expense_form;
mod expense_list;
mod header;
mod icons;
mod insights_panel;
mod savings_goal;
mod settings;
mod stat_card;
mod toast;

pub use balance_card::BalanceCard;
pub use charts::ExpenseCharts;
pub use expense_form::ExpenseForm;
pub use expense_list::ExpenseList;
pub use header::Header;
pub use insights_panel::InsightsPanel;
pub use savings_goal::SavingsGoal;
pub use stat_card::{StatCard, StatIcon};
pub use toast::{NoticeAction, NoticeBoard, NoticeKind, Notify, Toasts};
