use chrono::{Local, Utc};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::settings::use_settings;
use super::icons::icon_plus;
use super::toast::{NoticeKind, Notify};
use crate::form::ExpenseDraft;
use crate::model::{Category, Expense};

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    pub on_add: Callback<Expense>,
    pub notify: Notify,
}

#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let symbol = use_settings().currency_symbol;
    let draft = use_state(ExpenseDraft::default);

    let on_amount = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ExpenseDraft {
                amount: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_description = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ExpenseDraft {
                description: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_category = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            draft.set(ExpenseDraft {
                category: select.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let on_add = props.on_add.clone();
        let notify = props.notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match draft.validate(Local::now().date_naive(), Utc::now()) {
                Ok(expense) => {
                    on_add.emit(expense);
                    draft.set(ExpenseDraft::default());
                    notify.emit((NoticeKind::Success, "Expense added successfully!".to_string()));
                }
                Err(err) => notify.emit((NoticeKind::Error, err.to_string())),
            }
        })
    };

    html! {
        <div class="bg-white/95 p-6 rounded-[10px] shadow-sm border border-white/20">
            <h3 class="font-bold text-slate-900 text-lg mb-4">{"Add New Expense"}</h3>
            <form onsubmit={on_submit} class="space-y-4">
                <div class="grid grid-cols-2 gap-4">
                    <div class="space-y-1">
                        <label for="amount" class="text-[12px] font-bold text-slate-500">{ format!("Amount ({})", symbol) }</label>
                        <input id="amount" type="number" step="0.01" placeholder="0.00" value={draft.amount.clone()} oninput={on_amount}
                            class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-sm border-none" />
                    </div>
                    <div class="space-y-1">
                        <label for="category" class="text-[12px] font-bold text-slate-500">{"Category"}</label>
                        <select id="category" onchange={on_category} class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-sm border-none">
                            <option value="" selected={draft.category.is_empty()}>{"Select category"}</option>
                            { for Category::ALL.iter().map(|category| html! {
                                <option value={category.label()} selected={draft.category == category.label()}>{ category.label() }</option>
                            }) }
                        </select>
                    </div>
                </div>
                <div class="space-y-1">
                    <label for="description" class="text-[12px] font-bold text-slate-500">{"Description"}</label>
                    <input id="description" type="text" placeholder="What did you spend on?" value={draft.description.clone()} oninput={on_description}
                        class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-sm border-none" />
                </div>
                <button type="submit" class="w-full bg-emerald-600 text-white py-2.5 rounded-[10px] text-sm font-bold flex items-center justify-center gap-2 hover:opacity-90 transition-all">
                    { icon_plus() }
                    {"Add Expense"}
                </button>
            </form>
        </div>
    }
}
