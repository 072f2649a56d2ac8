use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::{edit, go_to, payments_table, select_section};
use crate::hooks::{use_agent_data, use_auth, use_remote_sync};
use crate::models::{
    ActivityKind, ApprovalInput, CropStatus, MemberStatus, ReviewInput, ReviewStatus, ToastKind,
};
use crate::utils::{capitalize, format_inr};
use crate::viewmodels::dashboard_viewmodel::{agent_stats, filter_farmers, review_crop, review_media};
use crate::views::shared::{ActivityPanel, Sidebar, SidebarItem, StatCard};

const SECTIONS: &[SidebarItem] = &[
    ("dashboard", "fas fa-tachometer-alt", "Dashboard"),
    ("farmers", "fas fa-users", "Farmers"),
    ("crops", "fas fa-check-double", "Crop Approvals"),
    ("media", "fas fa-images", "Media Requests"),
    ("payments", "fas fa-rupee-sign", "Payments"),
];

/// Approve/reject button pair emitting `(id, approved)`
fn review_buttons(id: &str, on_review: &Callback<(String, bool)>) -> Html {
    let approve = {
        let (cb, id) = (on_review.clone(), id.to_string());
        Callback::from(move |_: MouseEvent| cb.emit((id.clone(), true)))
    };
    let reject = {
        let (cb, id) = (on_review.clone(), id.to_string());
        Callback::from(move |_: MouseEvent| cb.emit((id.clone(), false)))
    };
    html! {
        <>
            <button class="btn btn-sm btn-success me-1" onclick={approve}>{"Approve"}</button>
            <button class="btn btn-sm btn-outline-danger" onclick={reject}>{"Reject"}</button>
        </>
    }
}

#[function_component(AgentDashboard)]
pub fn agent_dashboard() -> Html {
    let auth = use_auth();
    let data = use_agent_data();
    let sync = use_remote_sync();
    let active = use_state(|| "dashboard");
    let search = use_state(String::new);
    let status_filter = use_state(|| None::<MemberStatus>);

    let stats = data
        .stats
        .clone()
        .unwrap_or_else(|| agent_stats(&data.farmers, &data.crops, &data.media, &data.payments));

    let on_crop_review = {
        let (data, sync) = (data.clone(), sync.clone());
        Callback::from(move |(id, approved): (String, bool)| {
            let mut found = false;
            edit(&data, |d| found = review_crop(&mut d.crops, &id, approved));
            if !found {
                return;
            }
            log::info!("🌾 [AGENT] Crop {} {}", id, if approved { "approved" } else { "rejected" });
            sync.toast(
                &format!("Crop {} {}.", id, if approved { "approved" } else { "rejected" }),
                if approved { ToastKind::Success } else { ToastKind::Warning },
            );
            let approval = ApprovalInput { approved, note: String::new() };
            sync.run("review crop", move |api| async move { api.approve_crop(&id, &approval).await });
        })
    };

    let on_media_review = {
        let (data, sync) = (data.clone(), sync.clone());
        Callback::from(move |(id, approved): (String, bool)| {
            let mut found = false;
            edit(&data, |d| found = review_media(&mut d.media, &id, approved));
            if !found {
                return;
            }
            sync.toast(
                &format!("Media {} {}.", id, if approved { "approved" } else { "rejected" }),
                if approved { ToastKind::Success } else { ToastKind::Warning },
            );
            let review = ReviewInput::default();
            if approved {
                sync.run("approve media", move |api| async move { api.approve_media(&id, &review).await });
            } else {
                sync.run("reject media", move |api| async move { api.reject_media(&id, &review).await });
            }
        })
    };

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };
    let on_status = {
        let status_filter = status_filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            status_filter.set(MemberStatus::parse(&select.value()));
        })
    };

    let section = match *active {
        "farmers" => {
            let visible = filter_farmers(&data.farmers, search.as_str(), *status_filter);
            html! {
                <div class="card p-4 shadow-sm">
                    <div class="d-flex justify-content-between align-items-center mb-3">
                        <h3 class="h5 mb-0">{"Registered Farmers"}</h3>
                        <div class="d-flex gap-2">
                            <input type="text" class="form-control" placeholder="Search farmers..."
                                value={(*search).clone()} oninput={on_search} />
                            <select class="form-select" style="width: auto;" onchange={on_status}>
                                <option value="all" selected={status_filter.is_none()}>{"All Status"}</option>
                                { for MemberStatus::ALL.into_iter().map(|status| html! {
                                    <option value={status.as_str()} selected={*status_filter == Some(status)}>
                                        {capitalize(status.as_str())}
                                    </option>
                                }) }
                            </select>
                        </div>
                    </div>
                    <table class="table table-hover align-middle">
                        <thead>
                            <tr><th>{"Farmer"}</th><th>{"Contact"}</th><th>{"Region"}</th><th>{"Crops"}</th><th>{"Status"}</th></tr>
                        </thead>
                        <tbody>
                            { for visible.iter().map(|f| html! {
                                <tr key={f.id.clone()}>
                                    <td>
                                        <div class="fw-bold">{f.name.clone()}</div>
                                        <small class="text-muted">{format!("ID: {}", f.id)}</small>
                                    </td>
                                    <td>{f.phone.clone()}</td>
                                    <td>{f.region.clone()}</td>
                                    <td>{f.crops.to_string()}</td>
                                    <td><span class={f.status.badge_class()}>{capitalize(f.status.as_str())}</span></td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                    if visible.is_empty() {
                        <p class="text-muted text-center">{"No farmers match your search."}</p>
                    }
                </div>
            }
        }
        "crops" => html! {
            <div class="card p-4 shadow-sm">
                <h3 class="h5 mb-3">{"Crop Approvals"}</h3>
                <ul class="list-group">
                    { for data.crops.iter().map(|crop| html! {
                        <li key={crop.id.clone()} class="list-group-item d-flex justify-content-between align-items-center">
                            <div>
                                <h6 class="mb-1">{format!("{} ({})", crop.name, crop.id)}</h6>
                                <small class="text-muted">
                                    {format!("Farmer: {} | {} kg at {} / kg | {} to {}",
                                        crop.farmer.clone().unwrap_or_default(), crop.quantity_kg,
                                        format_inr(crop.price_per_kg), crop.start_date, crop.end_date)}
                                </small>
                            </div>
                            if crop.status == CropStatus::Pending {
                                <div>{review_buttons(&crop.id, &on_crop_review)}</div>
                            } else {
                                <span class={crop.status.badge_class()}>{crop.status.label()}</span>
                            }
                        </li>
                    }) }
                </ul>
            </div>
        },
        "media" => html! {
            <div class="card p-4 shadow-sm">
                <h3 class="h5 mb-3">{"Media Requests"}</h3>
                <ul class="list-group">
                    { for data.media.iter().map(|m| html! {
                        <li key={m.id.clone()} class="list-group-item d-flex justify-content-between align-items-center">
                            <div>
                                <h6 class="mb-1">{m.description.clone()}</h6>
                                <small class="text-muted">{format!("{} | submitted {}", m.farmer, m.submitted)}</small>
                            </div>
                            if m.status == ReviewStatus::Pending {
                                <div>{review_buttons(&m.id, &on_media_review)}</div>
                            } else {
                                <span class={m.status.badge_class()}>{format!("{:?}", m.status)}</span>
                            }
                        </li>
                    }) }
                </ul>
            </div>
        },
        "payments" => html! {
            <div class="card p-4 shadow-sm">
                <h3 class="h5 mb-3">{"Collections"}</h3>
                {payments_table(&data.payments, None)}
            </div>
        },
        _ => html! {
            <>
                <div class="row g-3 mb-4">
                    <StatCard icon="fas fa-users text-success" value={stats.assigned_farmers.to_string()} label="Assigned Farmers" onclick={go_to(&active, "farmers")} />
                    <StatCard icon="fas fa-hourglass-half text-warning" value={stats.pending_approvals.to_string()} label="Pending Approvals" onclick={go_to(&active, "crops")} />
                    <StatCard icon="fas fa-images text-info" value={stats.media_requests.to_string()} label="Media Requests" onclick={go_to(&active, "media")} />
                    <StatCard icon="fas fa-rupee-sign text-primary" value={format_inr(stats.collections)} label="Collections" onclick={go_to(&active, "payments")} />
                </div>
                <ActivityPanel activities={data.activities.clone()} kinds={ActivityKind::AGENT.to_vec()} />
            </>
        },
    };

    let first_name = auth.user.as_ref().map(|u| u.first_name().to_string()).unwrap_or_default();

    html! {
        <div class="dashboard d-flex">
            <Sidebar items={SECTIONS} active={*active} on_select={select_section(&active)} on_logout={auth.logout.clone()} />
            <main class="flex-grow-1 p-4">
                <h2 class="mb-4">{format!("Agent Dashboard · {}", first_name)}</h2>
                {section}
            </main>
        </div>
    }
}
