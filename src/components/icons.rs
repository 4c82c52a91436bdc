use yew::prelude::*;

fn icon_base(path: &'static str, class: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class={class}>
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_dollar() -> Html {
    icon_base("M12 1v22M17 5H9.5a3.5 3.5 0 000 7h5a3.5 3.5 0 010 7H6", "h-4 w-4 text-slate-400")
}
pub fn icon_calendar() -> Html {
    icon_base("M3 5h18v16H3zM16 3v4M8 3v4M3 10h18", "h-4 w-4 text-slate-400")
}
pub fn icon_trending_up() -> Html {
    icon_base("M3 17l6-6 4 4 7-7", "h-4 w-4 text-slate-400")
}
pub fn icon_target() -> Html {
    icon_base("M12 12m-9 0a9 9 0 1018 0 9 9 0 10-18 0", "h-5 w-5 text-emerald-600")
}
pub fn icon_edit() -> Html {
    icon_base("M12 20h9M16.5 3.5a2.1 2.1 0 013 3L7 19l-4 1 1-4z", "h-4 w-4")
}
pub fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14", "h-4 w-4")
}
pub fn icon_receipt() -> Html {
    icon_base("M4 2v20l3-2 3 2 3-2 3 2 3-2 1 1V2l-1 1-3-2-3 2-3-2-3 2-3-2zM8 8h8M8 12h8", "h-5 w-5 text-emerald-600")
}
pub fn icon_pie() -> Html {
    icon_base("M21.2 15.9A10 10 0 118 2.8M22 12A10 10 0 0012 2v10z", "h-5 w-5 text-emerald-600")
}
pub fn icon_bar_chart() -> Html {
    icon_base("M4 20V10M10 20V4M16 20v-6M22 20H2", "h-5 w-5 text-emerald-600")
}
pub fn icon_brain() -> Html {
    icon_base("M9 3a3 3 0 00-3 3 3 3 0 00-2 5 3 3 0 002 5 3 3 0 006 0V3zM15 3a3 3 0 013 3 3 3 0 012 5 3 3 0 01-2 5 3 3 0 01-6 0", "h-5 w-5 text-emerald-600")
}
pub fn icon_alert() -> Html {
    icon_base("M10.3 3.9L1.8 18a2 2 0 001.7 3h17a2 2 0 001.7-3L13.7 3.9a2 2 0 00-3.4 0zM12 9v4M12 17h.01", "h-5 w-5 mt-0.5 shrink-0")
}
pub fn icon_trending_down() -> Html {
    icon_base("M3 7l6 6 4-4 7 7", "h-5 w-5 mt-0.5 shrink-0")
}
pub fn icon_check_circle() -> Html {
    icon_base("M22 11.1V12a10 10 0 11-5.9-9.1M22 4L12 14l-3-3", "h-5 w-5 mt-0.5 shrink-0")
}
pub fn icon_lightbulb() -> Html {
    icon_base("M9 18h6M10 22h4M12 2a7 7 0 00-4 12.7V17h8v-2.3A7 7 0 0012 2z", "h-5 w-5 mt-0.5 shrink-0")
}
pub fn icon_tag() -> Html {
    icon_base("M20.6 13.4l-7.2 7.2a2 2 0 01-2.8 0L2 12V2h10l8.6 8.6a2 2 0 010 2.8zM7 7h.01", "h-3 w-3 mr-1")
}
