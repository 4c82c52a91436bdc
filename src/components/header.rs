use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::settings::use_settings;
use crate::config::CURRENCIES;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_currency_change: Callback<String>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let settings = use_settings();
    let on_change = {
        let on_currency_change = props.on_currency_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_currency_change.emit(select.value());
        })
    };

    html! {
        <header class="text-center space-y-4">
            <div class="flex items-center justify-center gap-4">
                <h1 class="text-4xl font-bold text-emerald-700">{"Dhanchakra"}</h1>
            </div>
            <p class="text-slate-500 max-w-2xl mx-auto">
                {"Track your expenses, visualize spending patterns, and get insights to reach your financial goals with confidence."}
            </p>
            <div class="flex items-center justify-center gap-2 text-sm">
                <label for="currency" class="text-slate-500">{"Currency"}</label>
                <select id="currency" onchange={on_change} class="px-3 py-1 bg-white border border-slate-200 rounded-lg text-slate-800">
                    { for CURRENCIES.iter().map(|(code, symbol)| html! {
                        <option value={*code} selected={settings.currency_code == *code}>{ format!("{} ({})", code, symbol) }</option>
                    }) }
                </select>
            </div>
        </header>
    }
}
