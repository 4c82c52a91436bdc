mod chart;
mod components;
mod config;
mod form;
mod format;
mod goal;
mod insights;
mod ledger;
mod model;
mod stats;
mod storage;

use chrono::Local;
use log::{info, warn};
use yew::prelude::*;

use components::{
    BalanceCard, ExpenseCharts, ExpenseForm, ExpenseList, Header, InsightsPanel, NoticeAction,
    NoticeBoard, NoticeKind, Notify, SavingsGoal, StatCard, StatIcon, Toasts,
};
use config::AppSettings;
use format::format_currency;
use insights::{generate_insights, InsightInputs, InsightThresholds};
use ledger::Ledger;
use model::Expense;
use stats::{current_month, DashboardSummary};
use storage::Repository;

#[function_component(App)]
fn app() -> Html {
    let repo = use_memo(|_| Repository::browser(), ());
    let ledger = {
        let repo = repo.clone();
        use_state(move || Ledger::load(&repo))
    };
    let settings = {
        let repo = repo.clone();
        use_state(move || repo.load_settings())
    };
    let notices = use_reducer(NoticeBoard::default);

    let notify: Notify = {
        let dispatcher = notices.dispatcher();
        Callback::from(move |(kind, message): (NoticeKind, String)| {
            dispatcher.dispatch(NoticeAction::Push(kind, message))
        })
    };
    let on_dismiss = {
        let dispatcher = notices.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(NoticeAction::Dismiss(id)))
    };

    let on_add_expense = {
        let ledger = ledger.clone();
        let repo = repo.clone();
        Callback::from(move |expense: Expense| {
            let mut next = (*ledger).clone();
            next.add_expense(expense, &repo);
            ledger.set(next);
        })
    };

    let on_goal_save = {
        let ledger = ledger.clone();
        let repo = repo.clone();
        Callback::from(move |goal: f64| {
            let mut next = (*ledger).clone();
            match next.set_goal(goal, &repo) {
                Ok(()) => ledger.set(next),
                Err(err) => warn!("goal {} rejected: {}", goal, err),
            }
        })
    };

    let on_balance_save = {
        let ledger = ledger.clone();
        let repo = repo.clone();
        Callback::from(move |balance: f64| {
            let mut next = (*ledger).clone();
            match next.set_balance(balance, &repo) {
                Ok(()) => ledger.set(next),
                Err(err) => warn!("balance {} rejected: {}", balance, err),
            }
        })
    };

    let on_currency_change = {
        let settings = settings.clone();
        let repo = repo.clone();
        Callback::from(move |code: String| {
            let next = AppSettings::for_currency(&code);
            info!("currency set to {}", next.currency_code);
            if let Err(err) = repo.save_settings(&next) {
                warn!("settings not persisted: {}", err);
            }
            settings.set(next);
        })
    };

    let today = Local::now().date_naive();
    let symbol = settings.currency_symbol.clone();
    let summary = DashboardSummary::compute(&ledger, today);
    let monthly = current_month(ledger.expenses(), today);
    let insights = generate_insights(
        &InsightInputs {
            expenses: &monthly,
            total_spent: summary.month_total,
            goal: ledger.goal(),
            today,
            currency_symbol: &symbol,
        },
        &InsightThresholds::default(),
    );

    html! {
        <ContextProvider<UseStateHandle<AppSettings>> context={settings.clone()}>
            <div class="min-h-screen bg-gradient-to-br from-emerald-50 to-sky-50">
                <div class="container mx-auto px-4 py-8 space-y-8">
                    <Header on_currency_change={on_currency_change} />

                    <div class="grid grid-cols-1 md:grid-cols-5 gap-4">
                        <StatCard title="Total Spent" value={format_currency(summary.total_spent, &symbol)} caption="All time" icon={StatIcon::Dollar} value_class="text-emerald-700" />
                        <StatCard title="This Month" value={format_currency(summary.month_total, &symbol)} caption={summary.month_label.clone()} icon={StatIcon::Calendar} />
                        <StatCard title="Transactions" value={summary.transaction_count.to_string()} caption="Total recorded" icon={StatIcon::TrendingUp} />
                        <StatCard title="Avg per Transaction" value={format_currency(summary.average_transaction, &symbol)} caption="Average amount" icon={StatIcon::Target} />
                        <BalanceCard
                            balance={ledger.balance()}
                            balance_left={summary.balance_left}
                            on_save={on_balance_save}
                            notify={notify.clone()}
                        />
                    </div>

                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                        <div class="space-y-6">
                            <ExpenseForm on_add={on_add_expense} notify={notify.clone()} />
                            <SavingsGoal
                                goal={ledger.goal()}
                                spent={summary.month_total}
                                on_save={on_goal_save}
                                notify={notify}
                            />
                        </div>
                        <div>
                            <ExpenseList expenses={ledger.expenses().to_vec()} />
                        </div>
                        <div>
                            <InsightsPanel insights={insights} />
                        </div>
                    </div>

                    <ExpenseCharts expenses={ledger.expenses().to_vec()} />

                    <footer class="text-center py-8 text-sm text-slate-500">
                        {"Everything stays in this browser's local storage. Remember to back up your financial data!"}
                    </footer>
                </div>
                <Toasts notices={notices.notices.clone()} on_dismiss={on_dismiss} />
            </div>
        </ContextProvider<UseStateHandle<AppSettings>>>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    yew::Renderer::<App>::new().render();
}
