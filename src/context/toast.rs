use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use chrono::Utc;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_reactive;
use crate::models::{Toast, ToastKind};
use crate::state::{ReactiveState, ToastQueue};

/// Toast queue shared with every component under `ToastProvider`
#[derive(Clone)]
pub struct ToastContext {
    pub state: ReactiveState<ToastQueue>,
    version: u64,
}

impl PartialEq for ToastContext {
    fn eq(&self, other: &Self) -> bool {
        self.state.ptr_eq(&other.state) && self.version == other.version
    }
}

impl ToastContext {
    pub fn show(&self, message: &str, kind: ToastKind) -> u64 {
        self.show_for(message, kind, CONFIG.toast_duration_ms)
    }

    pub fn show_for(&self, message: &str, kind: ToastKind, duration_ms: u32) -> u64 {
        self.state.update(|queue| queue.push(message, kind, duration_ms, Utc::now()))
    }

    pub fn dismiss(&self, id: u64) {
        self.state.update(|queue| queue.dismiss(id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.state.read(|queue| queue.toasts().to_vec())
    }
}

/// Start one removal timer per toast the first time it is seen
fn schedule_expiry(state: &ReactiveState<ToastQueue>, scheduled: &Rc<RefCell<HashSet<u64>>>) {
    let now = Utc::now();
    let fresh: Vec<(u64, u32)> = state.read(|queue| {
        let mut seen = scheduled.borrow_mut();
        queue
            .toasts()
            .iter()
            .filter(|toast| seen.insert(toast.id))
            .map(|toast| {
                let left = (toast.expires_at() - now).num_milliseconds().max(0);
                (toast.id, u32::try_from(left).unwrap_or(u32::MAX))
            })
            .collect()
    });

    for (id, delay) in fresh {
        let state = state.clone();
        let scheduled = scheduled.clone();
        Timeout::new(delay, move || {
            scheduled.borrow_mut().remove(&id);
            state.update(|queue| {
                queue.dismiss(id);
                queue.expire(Utc::now());
            });
        })
        .forget();
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let state = use_reactive(ToastQueue::new);
    let scheduled = use_mut_ref(HashSet::<u64>::new);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let watched = state.clone();
            state.subscribe(move || schedule_expiry(&watched, &scheduled));
            || ()
        });
    }

    let context = ToastContext {
        version: state.version(),
        state,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[hook]
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(|| {
        log::error!("❌ [TOAST] use_toast called outside ToastProvider");
        ToastContext {
            state: ReactiveState::new(ToastQueue::new()),
            version: 0,
        }
    })
}
