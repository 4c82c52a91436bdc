use yew::prelude::*;

use super::icons::{icon_alert, icon_brain, icon_check_circle, icon_lightbulb, icon_trending_down};
use crate::insights::{Insight, InsightKind};

#[derive(Properties, PartialEq)]
pub struct InsightsPanelProps {
    pub insights: Vec<Insight>,
}

fn insight_icon(kind: InsightKind) -> Html {
    match kind {
        InsightKind::Warning => icon_alert(),
        InsightKind::Info => icon_trending_down(),
        InsightKind::Success => icon_check_circle(),
        InsightKind::Tip => icon_lightbulb(),
    }
}

#[function_component(InsightsPanel)]
pub fn insights_panel(props: &InsightsPanelProps) -> Html {
    html! {
        <div class="bg-white/95 p-6 rounded-[10px] shadow-sm border border-white/20">
            <h3 class="flex items-center gap-2 font-bold text-slate-900 text-lg">
                { icon_brain() }
                {"AI Financial Insights"}
            </h3>
            <p class="text-sm text-slate-500 mb-4">
                {"Powered by rule-based spending analysis. Works well for pattern recognition and goal tracking; based on limited data, general advice only."}
            </p>
            <div class="space-y-4">
                { for props.insights.iter().map(|insight| html! {
                    <div class={classes!("p-4", "rounded-lg", "border", "transition-all", insight.kind.card_class())}>
                        <div class="flex items-start gap-3">
                            { insight_icon(insight.kind) }
                            <div class="flex-1 space-y-2">
                                <div class="flex items-center gap-2 flex-wrap">
                                    <h4 class="font-medium text-slate-900">{ insight.title }</h4>
                                    <span class={classes!("px-2", "py-0.5", "rounded-full", "text-[10px]", "font-bold", "border", insight.kind.badge_class())}>
                                        { insight.kind.badge() }
                                    </span>
                                </div>
                                <p class="text-sm text-slate-700">{ insight.message.clone() }</p>
                                <p class="text-xs text-slate-500 italic">{ format!("💡 {}", insight.tip) }</p>
                            </div>
                        </div>
                    </div>
                }) }
            </div>
            <div class="mt-6 p-3 rounded-lg bg-emerald-50 border border-emerald-200 text-xs text-emerald-800">
                <strong>{"Note: "}</strong>
                {"These insights come from fixed spending rules. They do not know your personal circumstances, income, or specific financial goals. Always consider your own situation when making financial decisions."}
            </div>
        </div>
    }
}
