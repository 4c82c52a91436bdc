use yew::prelude::*;

use super::settings::use_settings;
use super::icons::{icon_receipt, icon_tag};
use crate::format::format_currency;
use crate::model::Expense;

#[derive(Properties, PartialEq)]
pub struct ExpenseListProps {
    pub expenses: Vec<Expense>,
}

/// Expenses in store order: the most recently added first.
#[function_component(ExpenseList)]
pub fn expense_list(props: &ExpenseListProps) -> Html {
    let symbol = use_settings().currency_symbol;
    html! {
        <div class="bg-white/95 p-6 rounded-[10px] shadow-sm border border-white/20">
            <h3 class="flex items-center gap-2 font-bold text-slate-900 text-lg mb-4">
                { icon_receipt() }
                {"Recent Expenses"}
            </h3>
            <div class="h-[400px] overflow-y-auto pr-4">
                { if props.expenses.is_empty() {
                    html! {
                        <div class="text-center py-8 text-slate-500">
                            <p>{"No expenses yet. Add your first expense above!"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="space-y-3">
                            { for props.expenses.iter().map(|expense| html! {
                                <div class="p-4 rounded-lg border border-slate-100 bg-white/30 hover:bg-white/40 transition-all">
                                    <div class="flex items-center justify-between mb-2">
                                        <span class="font-semibold text-lg text-slate-900">{ format_currency(expense.amount, &symbol) }</span>
                                        <span class={classes!("flex", "items-center", "px-3", "py-1", "rounded-full", "text-[10px]", "font-bold", "border", expense.category.badge_class())}>
                                            { icon_tag() }
                                            { expense.category.label() }
                                        </span>
                                    </div>
                                    <p class="text-slate-700 mb-2">{ expense.description.clone() }</p>
                                    <p class="text-sm text-slate-500">{ expense.date.format("%-m/%-d/%Y").to_string() }</p>
                                </div>
                            }) }
                        </div>
                    }
                }}
            </div>
        </div>
    }
}
