use yew::prelude::*;

use super::settings::use_settings;
use super::icons::{icon_bar_chart, icon_pie};
use crate::chart::{axis_ticks, bar_layout, pie_slices};
use crate::format::{format_currency, format_percent};
use crate::model::Expense;
use crate::stats::{category_totals, total_spent, weekly_buckets};

const PIE_SIZE: f64 = 240.0;
const PLOT_WIDTH: f64 = 420.0;
const PLOT_HEIGHT: f64 = 220.0;
const AXIS_GUTTER: f64 = 64.0;
const LABEL_GUTTER: f64 = 70.0;

#[derive(Properties, PartialEq)]
pub struct ExpenseChartsProps {
    pub expenses: Vec<Expense>,
}

#[function_component(ExpenseCharts)]
pub fn expense_charts(props: &ExpenseChartsProps) -> Html {
    let settings = use_settings();
    if props.expenses.is_empty() {
        return html! {
            <div class="bg-white/95 p-6 rounded-[10px] shadow-sm border border-white/20">
                <h3 class="flex items-center gap-2 font-bold text-slate-900 text-lg">{ icon_pie() }{"Expense Analytics"}</h3>
                <div class="text-center py-8 text-slate-500">
                    <p>{"Add some expenses to see your spending analytics!"}</p>
                </div>
            </div>
        };
    }

    let symbol = settings.currency_symbol.as_str();
    let totals = category_totals(&props.expenses);
    let slices = pie_slices(&totals, PIE_SIZE / 2.0, PIE_SIZE / 2.0, PIE_SIZE / 2.0 - 10.0);
    let buckets = weekly_buckets(&props.expenses);
    let bars = bar_layout(&buckets, PLOT_WIDTH, PLOT_HEIGHT);
    let max = buckets.iter().map(|b| b.amount).fold(0.0_f64, f64::max);
    let ticks = axis_ticks(max, 4);

    html! {
        <div class="grid gap-6 md:grid-cols-2">
            <div class="bg-white/95 p-6 rounded-[10px] shadow-sm border border-white/20">
                <h3 class="flex items-center gap-2 font-bold text-slate-900 text-lg">{ icon_pie() }{"Spending by Category"}</h3>
                <p class="text-sm text-slate-500 mb-4">{ format!("Total: {}", format_currency(total_spent(&props.expenses), symbol)) }</p>
                <div class="flex flex-col md:flex-row items-center gap-6">
                    <svg width={PIE_SIZE.to_string()} height={PIE_SIZE.to_string()} viewBox={format!("0 0 {} {}", PIE_SIZE, PIE_SIZE)}>
                        { for slices.iter().map(|slice| html! {
                            <path d={slice.path.clone()} fill={slice.color} stroke="white" stroke-width="1">
                                <title>{ format!("{}: {}", slice.label, format_currency(slice.amount, symbol)) }</title>
                            </path>
                        }) }
                    </svg>
                    <ul class="space-y-1 text-sm">
                        { for slices.iter().map(|slice| html! {
                            <li class="flex items-center gap-2">
                                <span class="inline-block w-3 h-3 rounded-sm" style={format!("background-color: {}", slice.color)}></span>
                                <span class="text-slate-700">{ format!("{}: {}", slice.label, format_currency(slice.amount, symbol)) }</span>
                                <span class="text-slate-400">{ format!("({})", format_percent(slice.share * 100.0)) }</span>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>

            <div class="bg-white/95 p-6 rounded-[10px] shadow-sm border border-white/20">
                <h3 class="flex items-center gap-2 font-bold text-slate-900 text-lg mb-4">{ icon_bar_chart() }{"Weekly Spending Trend"}</h3>
                <svg class="w-full" viewBox={format!("0 0 {} {}", PLOT_WIDTH + AXIS_GUTTER, PLOT_HEIGHT + LABEL_GUTTER)}>
                    <g transform={format!("translate({}, 0)", AXIS_GUTTER)}>
                        { for ticks.iter().map(|tick| {
                            let y = if max > 0.0 { PLOT_HEIGHT - tick / max * PLOT_HEIGHT } else { PLOT_HEIGHT };
                            html! {
                                <g>
                                    <line x1="0" x2={PLOT_WIDTH.to_string()} y1={y.to_string()} y2={y.to_string()} stroke="#e5e7eb" />
                                    <text x="-6" y={(y + 4.0).to_string()} text-anchor="end" font-size="11" fill="#6b7280">{ format!("{:.0}", tick) }</text>
                                </g>
                            }
                        }) }
                        { for bars.iter().map(|bar| {
                            let label_x = bar.x + bar.width / 2.0;
                            let label_y = PLOT_HEIGHT + 14.0;
                            html! {
                                <g>
                                    <rect x={bar.x.to_string()} y={bar.y.to_string()} width={bar.width.to_string()} height={bar.height.to_string()} fill="#10b981">
                                        <title>{ format!("{}: {}", bar.label, format_currency(bar.amount, symbol)) }</title>
                                    </rect>
                                    <text x={label_x.to_string()} y={label_y.to_string()} text-anchor="end" font-size="11" fill="#6b7280"
                                        transform={format!("rotate(-45 {} {})", label_x, label_y)}>
                                        { bar.label.clone() }
                                    </text>
                                </g>
                            }
                        }) }
                    </g>
                </svg>
                <p class="text-xs text-slate-500 text-center">
                    <span class="inline-block w-3 h-3 rounded-sm bg-emerald-500 mr-1 align-middle"></span>
                    {"Weekly Spending"}
                </p>
            </div>
        </div>
    }
}
