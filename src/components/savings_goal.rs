use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::settings::use_settings;
use super::icons::{icon_edit, icon_target};
use super::toast::{NoticeKind, Notify};
use crate::form::parse_goal;
use crate::format::{format_currency, format_percent};
use crate::goal::GoalProgress;

#[derive(Properties, PartialEq)]
pub struct SavingsGoalProps {
    pub goal: f64,
    /// Month-to-date spend.
    pub spent: f64,
    pub on_save: Callback<f64>,
    pub notify: Notify,
}

#[function_component(SavingsGoal)]
pub fn savings_goal(props: &SavingsGoalProps) -> Html {
    let settings = use_settings();
    let is_editing = use_state(|| false);
    let temp_goal = use_state(String::new);
    let progress = GoalProgress::new(props.goal, props.spent);
    let symbol = settings.currency_symbol.as_str();

    let start_editing = {
        let is_editing = is_editing.clone();
        let temp_goal = temp_goal.clone();
        let goal = props.goal;
        Callback::from(move |_| {
            temp_goal.set(goal.to_string());
            is_editing.set(true);
        })
    };

    let cancel_editing = {
        let is_editing = is_editing.clone();
        Callback::from(move |_| is_editing.set(false))
    };

    let on_input = {
        let temp_goal = temp_goal.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            temp_goal.set(input.value());
        })
    };

    let save_goal = {
        let is_editing = is_editing.clone();
        let temp_goal = temp_goal.clone();
        let on_save = props.on_save.clone();
        let notify = props.notify.clone();
        Callback::from(move |_| match parse_goal(&temp_goal) {
            Ok(goal) => {
                on_save.emit(goal);
                is_editing.set(false);
                notify.emit((NoticeKind::Success, "Spending goal updated!".to_string()));
            }
            Err(err) => notify.emit((NoticeKind::Error, err.to_string())),
        })
    };

    let alert_class = if progress.over_budget {
        "p-4 rounded-lg bg-red-50 border border-red-200"
    } else {
        "p-4 rounded-lg bg-green-50 border border-green-200"
    };
    let alert_text = if progress.over_budget {
        "text-sm text-red-700"
    } else {
        "text-sm text-green-700"
    };
    let bar_class = if progress.over_budget {
        "h-full bg-red-500"
    } else {
        "h-full bg-emerald-500"
    };

    html! {
        <div class="bg-white/95 p-6 rounded-[10px] shadow-sm border border-white/20">
            <div class="flex items-center justify-between mb-4">
                <h3 class="flex items-center gap-2 font-bold text-slate-900 text-lg">
                    { icon_target() }
                    {"Monthly Spending Goal"}
                </h3>
                { if !*is_editing {
                    html! { <button onclick={start_editing} class="p-2 rounded-lg hover:bg-slate-100" aria-label="Edit goal">{ icon_edit() }</button> }
                } else { html! {} } }
            </div>
            { if *is_editing {
                html! {
                    <div class="space-y-4">
                        <div class="space-y-1">
                            <label for="goal" class="text-[12px] font-bold text-slate-500">{ format!("Monthly Goal ({})", symbol) }</label>
                            <input id="goal" type="number" step="0.01" value={(*temp_goal).clone()} oninput={on_input}
                                placeholder="Enter your monthly spending goal"
                                class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-sm border-none" />
                        </div>
                        <div class="flex gap-2">
                            <button onclick={save_goal} class="bg-emerald-600 text-white px-4 py-2 rounded-[10px] text-xs font-bold">{"Save Goal"}</button>
                            <button onclick={cancel_editing} class="border border-slate-200 px-4 py-2 rounded-[10px] text-xs font-bold">{"Cancel"}</button>
                        </div>
                    </div>
                }
            } else {
                html! {
                    <div class="space-y-6">
                        <div class="grid grid-cols-3 gap-4 text-center">
                            <div class="space-y-1">
                                <p class="text-sm text-slate-500">{"Goal"}</p>
                                <p class="text-2xl font-bold text-emerald-700">{ format_currency(progress.goal, symbol) }</p>
                            </div>
                            <div class="space-y-1">
                                <p class="text-sm text-slate-500">{"Spent"}</p>
                                <p class={if progress.over_budget { "text-2xl font-bold text-red-600" } else { "text-2xl font-bold text-slate-900" }}>
                                    { format_currency(progress.spent, symbol) }
                                </p>
                            </div>
                            <div class="space-y-1">
                                <p class="text-sm text-slate-500">{ progress.remaining_label() }</p>
                                <p class={if progress.over_budget { "text-2xl font-bold text-red-600" } else { "text-2xl font-bold text-green-600" }}>
                                    { format_currency(progress.remaining.abs(), symbol) }
                                </p>
                            </div>
                        </div>
                        <div class="space-y-2">
                            <div class="flex justify-between items-center text-sm">
                                <span class="text-slate-500">{"Progress"}</span>
                                <span class="font-medium">{ format_percent(progress.percent) }</span>
                            </div>
                            <div class="h-3 w-full bg-slate-100 rounded-full overflow-hidden">
                                <div class={bar_class} style={format!("width: {}%", progress.percent)}></div>
                            </div>
                        </div>
                        <div class={alert_class}>
                            <p class={if progress.over_budget { "font-medium text-red-800 mb-2" } else { "font-medium text-green-800 mb-2" }}>
                                { progress.status_title() }
                            </p>
                            <p class={alert_text}>{ progress.message(symbol) }</p>
                        </div>
                    </div>
                }
            }}
        </div>
    }
}
