use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::{Activity, ActivityKind};
use crate::utils::{capitalize, relative_time};
use crate::viewmodels::{ActivityQuery, ActivitySort};

#[derive(Properties, PartialEq)]
pub struct ActivityPanelProps {
    pub activities: Vec<Activity>,
    /// Types offered by the filter select
    pub kinds: Vec<ActivityKind>,
    #[prop_or_default]
    pub on_select: Callback<Activity>,
}

/// Recent activity list with search, type filter and sort
#[function_component(ActivityPanel)]
pub fn activity_panel(props: &ActivityPanelProps) -> Html {
    let query = use_state(ActivityQuery::default);
    let visible = query.apply(&props.activities);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(ActivityQuery {
                search: input.value(),
                ..(*query).clone()
            });
        })
    };
    let on_filter = {
        let query = query.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            query.set(ActivityQuery {
                kind: ActivityKind::parse(&select.value()),
                ..(*query).clone()
            });
        })
    };
    let on_sort = {
        let query = query.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            query.set(ActivityQuery {
                sort: ActivitySort::parse(&select.value()),
                ..(*query).clone()
            });
        })
    };
    let on_reset = {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            let mut cleared = (*query).clone();
            cleared.reset();
            query.set(cleared);
        })
    };

    html! {
        <div class="card p-4 shadow-sm">
            <div class="row g-2 mb-3">
                <div class="col-md-5">
                    <div class="input-group">
                        <span class="input-group-text"><i class="fas fa-search"></i></span>
                        <input type="text" class="form-control" placeholder="Search activities..."
                            value={query.search.clone()} oninput={on_search} />
                    </div>
                </div>
                <div class="col-md-3">
                    <select class="form-select" onchange={on_filter}>
                        <option value="all" selected={query.kind.is_none()}>{"All Types"}</option>
                        { for props.kinds.iter().map(|kind| html! {
                            <option value={kind.as_str()} selected={query.kind == Some(*kind)}>{capitalize(kind.as_str())}</option>
                        }) }
                    </select>
                </div>
                <div class="col-md-3">
                    <select class="form-select" onchange={on_sort}>
                        { for ActivitySort::ALL.into_iter().map(|sort| html! {
                            <option value={sort.as_str()} selected={query.sort == sort}>{sort.label()}</option>
                        }) }
                    </select>
                </div>
                <div class="col-md-1">
                    <button class="btn btn-outline-secondary w-100" title="Reset" onclick={on_reset}>
                        <i class="fas fa-undo"></i>
                    </button>
                </div>
            </div>

            <div class="d-flex justify-content-between align-items-center mb-2">
                <div class="fw-bold">{"Recent Activity"}</div>
                <div class="text-muted small">
                    {format!("Showing {} of {} activities", visible.len(), props.activities.len())}
                </div>
            </div>

            if visible.is_empty() {
                <div class="text-center py-4 text-muted">
                    <i class="fas fa-search fa-2x mb-2"></i>
                    <div>{"No activities found matching your criteria"}</div>
                </div>
            } else {
                <ul class="list-group list-group-flush">
                    { for visible.into_iter().map(|activity| {
                        let onclick = {
                            let on_select = props.on_select.clone();
                            let activity = activity.clone();
                            Callback::from(move |_: MouseEvent| on_select.emit(activity.clone()))
                        };
                        html! {
                            <li key={activity.id} class="list-group-item list-group-item-action" style="cursor: pointer;" {onclick}>
                                <div class="d-flex align-items-center">
                                    <i class={classes!(activity.kind.icon(), "me-2")}></i>
                                    <div class="flex-grow-1">
                                        <div class="small">{activity.message.clone()}</div>
                                        <div class="text-muted small">{relative_time(activity.minutes_ago)}</div>
                                    </div>
                                    <span class="badge bg-secondary">{activity.kind.as_str()}</span>
                                </div>
                            </li>
                        }
                    }) }
                </ul>
            }
        </div>
    }
}
