use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::settings::use_settings;
use super::icons::icon_edit;
use super::stat_card::{StatCard, StatIcon};
use super::toast::{NoticeKind, Notify};
use crate::form::parse_balance;
use crate::format::format_currency;

#[derive(Properties, PartialEq)]
pub struct BalanceCardProps {
    pub balance: f64,
    /// Balance minus all-time spend.
    pub balance_left: f64,
    pub on_save: Callback<f64>,
    pub notify: Notify,
}

#[function_component(BalanceCard)]
pub fn balance_card(props: &BalanceCardProps) -> Html {
    let symbol = use_settings().currency_symbol;
    let is_editing = use_state(|| false);
    let temp_balance = use_state(String::new);

    let toggle = {
        let is_editing = is_editing.clone();
        let temp_balance = temp_balance.clone();
        let balance = props.balance;
        Callback::from(move |_| {
            if !*is_editing {
                temp_balance.set(balance.to_string());
            }
            is_editing.set(!*is_editing);
        })
    };

    let on_input = {
        let temp_balance = temp_balance.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            temp_balance.set(input.value());
        })
    };

    let on_save = {
        let is_editing = is_editing.clone();
        let temp_balance = temp_balance.clone();
        let save = props.on_save.clone();
        let notify = props.notify.clone();
        Callback::from(move |_| match parse_balance(&temp_balance) {
            Ok(balance) => {
                save.emit(balance);
                is_editing.set(false);
                notify.emit((NoticeKind::Success, "Account balance updated!".to_string()));
            }
            Err(err) => notify.emit((NoticeKind::Error, err.to_string())),
        })
    };

    let value_class = if props.balance_left >= 0.0 {
        "text-green-600"
    } else {
        "text-red-600"
    };

    html! {
        <StatCard
            title="Balance Left"
            value={format_currency(props.balance_left, &symbol)}
            caption={format!("of {} in account", format_currency(props.balance, &symbol))}
            icon={StatIcon::Dollar}
            value_class={value_class}
        >
            { if *is_editing {
                html! {
                    <div class="mt-3 flex gap-2">
                        <input type="number" step="0.01" value={(*temp_balance).clone()} oninput={on_input}
                            class="w-full bg-[#f1f4f9] rounded-[10px] px-2 py-1 text-xs border-none" />
                        <button onclick={on_save} class="bg-emerald-600 text-white px-3 rounded-[10px] text-xs font-bold">{"Save"}</button>
                        <button onclick={toggle} class="border border-slate-200 px-2 rounded-[10px] text-xs">{"Cancel"}</button>
                    </div>
                }
            } else {
                html! {
                    <button onclick={toggle} class="mt-2 flex items-center gap-1 text-xs text-slate-500 hover:text-slate-800">
                        { icon_edit() }
                        {"Edit balance"}
                    </button>
                }
            }}
        </StatCard>
    }
}
