use yew::prelude::*;

use super::icons::{icon_calendar, icon_dollar, icon_target, icon_trending_up};

#[derive(Clone, Copy, PartialEq)]
pub enum StatIcon {
    Dollar,
    Calendar,
    TrendingUp,
    Target,
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub value: String,
    pub caption: String,
    pub icon: StatIcon,
    #[prop_or("text-slate-900")]
    pub value_class: &'static str,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-white/95 p-5 rounded-[10px] shadow-sm border border-white/20">
            <div class="flex items-center justify-between pb-2">
                <p class="text-sm font-medium text-slate-700">{ props.title }</p>
                {
                    match props.icon {
                        StatIcon::Dollar => icon_dollar(),
                        StatIcon::Calendar => icon_calendar(),
                        StatIcon::TrendingUp => icon_trending_up(),
                        StatIcon::Target => icon_target(),
                    }
                }
            </div>
            <h3 class={classes!("text-2xl", "font-bold", "tracking-tight", props.value_class)}>{ props.value.clone() }</h3>
            <p class="text-xs text-slate-500">{ props.caption.clone() }</p>
            { for props.children.iter() }
        </div>
    }
}
