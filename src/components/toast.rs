use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::NOTICE_TIMEOUT_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub message: String,
}

pub enum NoticeAction {
    Push(NoticeKind, String),
    Dismiss(u32),
}

/// Transient success/error messages, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeBoard {
    next_id: u32,
    pub notices: Vec<Notice>,
}

impl Reducible for NoticeBoard {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NoticeAction::Push(kind, message) => {
                next.notices.push(Notice {
                    id: next.next_id,
                    kind,
                    message,
                });
                next.next_id += 1;
            }
            NoticeAction::Dismiss(id) => next.notices.retain(|notice| notice.id != id),
        }
        Rc::new(next)
    }
}

/// Handed to forms so they can report outcomes without owning the board.
pub type Notify = Callback<(NoticeKind, String)>;

#[derive(Properties, PartialEq)]
pub struct ToastsProps {
    pub notices: Vec<Notice>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(Toasts)]
pub fn toasts(props: &ToastsProps) -> Html {
    html! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80">
            { for props.notices.iter().map(|notice| html! {
                <ToastItem key={notice.id} notice={notice.clone()} on_dismiss={props.on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    notice: Notice,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.notice.id;
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let timeout = Timeout::new(NOTICE_TIMEOUT_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            id,
        );
    }

    let class_name = match props.notice.kind {
        NoticeKind::Success => "px-4 py-3 rounded-lg shadow-lg border text-sm bg-green-50 border-green-200 text-green-800",
        NoticeKind::Error => "px-4 py-3 rounded-lg shadow-lg border text-sm bg-red-50 border-red-200 text-red-800",
    };
    let on_click = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div class={class_name} role="status" onclick={on_click}>
            { props.notice.message.clone() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids_and_dismiss_removes_one() {
        let board = Rc::new(NoticeBoard::default());
        let board = board.reduce(NoticeAction::Push(NoticeKind::Success, "saved".into()));
        let board = board.reduce(NoticeAction::Push(NoticeKind::Error, "oops".into()));
        assert_eq!(board.notices.len(), 2);
        assert_eq!(board.notices[0].id, 0);
        assert_eq!(board.notices[1].id, 1);

        let board = board.reduce(NoticeAction::Dismiss(0));
        assert_eq!(board.notices.len(), 1);
        assert_eq!(board.notices[0].message, "oops");

        let board = board.reduce(NoticeAction::Push(NoticeKind::Success, "again".into()));
        assert_eq!(board.notices[1].id, 2);
    }
}
