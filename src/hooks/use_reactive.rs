// ============================================================================
// USE REACTIVE HOOK - Bind a ReactiveState cell to a component
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::state::ReactiveState;

/// Create a `ReactiveState` once per component and re-render on every update.
///
/// The re-render is deferred with a zero-delay timeout so an update issued
/// while another cell is mutably borrowed never re-enters it.
#[hook]
pub fn use_reactive<T, F>(init: F) -> ReactiveState<T>
where
    T: 'static,
    F: FnOnce() -> T,
{
    let state = use_memo((), move |_| ReactiveState::new(init()));
    let force_update = use_force_update();

    {
        let state = (*state).clone();
        use_effect_with((), move |_| {
            state.subscribe(move || {
                let force_update = force_update.clone();
                Timeout::new(0, move || force_update.force_update()).forget();
            });
            || ()
        });
    }

    (*state).clone()
}
