use yew::prelude::*;

use crate::context::use_toast;

/// Fixed stack of live toasts, newest at the bottom
#[function_component(ToastContainer)]
pub fn toast_container() -> Html {
    let toasts = use_toast();

    html! {
        <div class="toast-container position-fixed top-0 end-0 p-3" style="z-index: 1100;">
            { for toasts.toasts().into_iter().map(|toast| {
                let on_close = {
                    let toasts = toasts.clone();
                    let id = toast.id;
                    Callback::from(move |_: MouseEvent| toasts.dismiss(id))
                };
                html! {
                    <div key={toast.id} class={classes!("toast", "show", "align-items-center", "text-white", "border-0", toast.kind.css_class())} role="alert">
                        <div class="d-flex">
                            <div class="toast-body">
                                <strong class="me-2">{toast.kind.title()}</strong>
                                {toast.message.clone()}
                            </div>
                            <button type="button" class="btn-close btn-close-white me-2 m-auto" aria-label="Close" onclick={on_close}></button>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
