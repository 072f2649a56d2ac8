use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::{edit, go_to, payments_table, select_section};
use crate::hooks::{use_admin_data, use_auth, use_remote_sync};
use crate::models::{ActivityKind, AgentSummary, FarmerSummary, MemberStatus, ToastKind};
use crate::utils::{capitalize, format_inr};
use crate::viewmodels::dashboard_viewmodel::{
    accounts_by_role, admin_stats, assign_farmer, count_with_status, farmers_per_region, paid_total, set_farmer_status,
};
use crate::views::shared::{ActivityPanel, Sidebar, SidebarItem, StatCard};

const SECTIONS: &[SidebarItem] = &[
    ("dashboard", "fas fa-tachometer-alt", "Dashboard"),
    ("agents", "fas fa-user-tie", "Agents"),
    ("users", "fas fa-users-cog", "Farmers"),
    ("analytics", "fas fa-chart-pie", "Analytics"),
    ("revenue", "fas fa-chart-line", "Revenue"),
];

fn agents_table(agents: &[AgentSummary]) -> Html {
    html! {
        <table class="table table-hover align-middle">
            <thead>
                <tr><th>{"ID"}</th><th>{"Agent"}</th><th>{"Region"}</th><th>{"Farmers"}</th><th>{"Status"}</th></tr>
            </thead>
            <tbody>
                { for agents.iter().map(|a| html! {
                    <tr key={a.id.clone()}>
                        <td>{a.id.clone()}</td>
                        <td class="fw-bold">{a.name.clone()}</td>
                        <td>{a.region.clone()}</td>
                        <td>{a.farmers.to_string()}</td>
                        <td><span class={a.status.badge_class()}>{capitalize(a.status.as_str())}</span></td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

/// Select emitting `(row id, chosen value)` on change
fn row_select(row: &str, current: &str, choices: Vec<(String, String)>, on_change: &Callback<(String, String)>) -> Html {
    let onchange = {
        let (cb, row) = (on_change.clone(), row.to_string());
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit((row.clone(), select.value()));
        })
    };
    html! {
        <select class="form-select form-select-sm" {onchange}>
            { for choices.into_iter().map(|(value, label)| html! {
                <option selected={value == current} value={value.clone()}>{label}</option>
            }) }
        </select>
    }
}

fn region_breakdown(farmers: &[FarmerSummary]) -> Html {
    let total = farmers.len().max(1);
    html! {
        <ul class="list-group">
            { for farmers_per_region(farmers).into_iter().map(|(region, n)| html! {
                <li key={region.clone()} class="list-group-item">
                    <div class="d-flex justify-content-between"><span>{region}</span><span>{n.to_string()}</span></div>
                    <div class="progress" style="height: 6px;">
                        <div class="progress-bar bg-success" style={format!("width: {}%;", n * 100 / total)}></div>
                    </div>
                </li>
            }) }
        </ul>
    }
}

#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let auth = use_auth();
    let data = use_admin_data();
    let sync = use_remote_sync();
    let active = use_state(|| "dashboard");

    let stats = data
        .stats
        .clone()
        .unwrap_or_else(|| admin_stats(&data.farmers, &data.agents, &data.payments));

    let on_status = {
        let (data, sync) = (data.clone(), sync.clone());
        Callback::from(move |(id, value): (String, String)| {
            let Some(status) = MemberStatus::parse(&value) else {
                return;
            };
            let mut found = false;
            edit(&data, |d| found = set_farmer_status(&mut d.farmers, &id, status));
            if found {
                sync.toast(&format!("{} is now {}.", id, status.as_str()), ToastKind::Info);
                sync.run("update status", move |api| async move { api.update_user_status(&id, status).await });
            }
        })
    };

    let on_assign = {
        let (data, sync) = (data.clone(), sync.clone());
        Callback::from(move |(farmer_id, agent_id): (String, String)| {
            let Some(agent) = data.agents.iter().find(|a| a.id == agent_id).cloned() else {
                return;
            };
            let mut found = false;
            edit(&data, |d| found = assign_farmer(&mut d.farmers, &farmer_id, &agent));
            if found {
                sync.toast(&format!("{} assigned to {}.", farmer_id, agent.name), ToastKind::Success);
                sync.run("assign agent", move |api| async move { api.assign_agent(&farmer_id, &agent_id).await });
            }
        })
    };

    let on_delete = {
        let (data, sync) = (data.clone(), sync.clone());
        Callback::from(move |id: String| {
            edit(&data, |d| d.farmers.retain(|f| f.id != id));
            sync.toast(&format!("User {} deleted.", id), ToastKind::Warning);
            sync.run("delete user", move |api| async move { api.delete_user(&id).await });
        })
    };

    let status_choices: Vec<(String, String)> = MemberStatus::ALL
        .into_iter()
        .map(|s| (s.as_str().to_string(), capitalize(s.as_str())))
        .collect();
    let mut agent_choices: Vec<(String, String)> = vec![(String::new(), "Unassigned".to_string())];
    agent_choices.extend(data.agents.iter().map(|a| (a.id.clone(), a.name.clone())));

    let section = match *active {
        "agents" => html! {
            <div class="card p-4 shadow-sm">
                <h3 class="h5 mb-3">{"Agent Management"}</h3>
                {agents_table(&data.agents)}
            </div>
        },
        "users" => html! {
            <div class="card p-4 shadow-sm">
                <h3 class="h5 mb-3">{"Farmer Management"}</h3>
                <table class="table table-hover align-middle">
                    <thead>
                        <tr><th>{"Farmer"}</th><th>{"Region"}</th><th>{"Crops"}</th><th>{"Agent"}</th><th>{"Status"}</th><th></th></tr>
                    </thead>
                    <tbody>
                        { for data.farmers.iter().map(|f| {
                            let current_agent = f
                                .agent
                                .as_ref()
                                .and_then(|name| data.agents.iter().find(|a| &a.name == name))
                                .map(|a| a.id.clone())
                                .unwrap_or_default();
                            let remove = {
                                let (cb, id) = (on_delete.clone(), f.id.clone());
                                Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
                            };
                            html! {
                                <tr key={f.id.clone()}>
                                    <td>
                                        <div class="fw-bold">{f.name.clone()}</div>
                                        <small class="text-muted">{f.id.clone()}</small>
                                    </td>
                                    <td>{f.region.clone()}</td>
                                    <td>{f.crops.to_string()}</td>
                                    <td>{row_select(&f.id, &current_agent, agent_choices.clone(), &on_assign)}</td>
                                    <td>{row_select(&f.id, f.status.as_str(), status_choices.clone(), &on_status)}</td>
                                    <td>
                                        <button class="btn btn-sm btn-outline-danger" title="Delete" onclick={remove}>
                                            <i class="fas fa-trash"></i>
                                        </button>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
        },
        "analytics" => html! {
            <div class="row g-4">
                <div class="col-md-6">
                    <div class="card p-4 shadow-sm">
                        <h3 class="h5 mb-3">{"Farmers per Region"}</h3>
                        {region_breakdown(&data.farmers)}
                    </div>
                </div>
                <div class="col-md-6">
                    <div class="card p-4 shadow-sm">
                        <h3 class="h5 mb-3">{"Membership Status"}</h3>
                        <ul class="list-group">
                            { for MemberStatus::ALL.into_iter().map(|status| html! {
                                <li class="list-group-item d-flex justify-content-between">
                                    <span class={status.badge_class()}>{capitalize(status.as_str())}</span>
                                    <span>
                                        {format!("{} farmers · {} agents",
                                            count_with_status(data.farmers.iter().map(|f| f.status), status),
                                            count_with_status(data.agents.iter().map(|a| a.status), status))}
                                    </span>
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>
                <div class="col-md-6">
                    <div class="card p-4 shadow-sm">
                        <h3 class="h5 mb-3">{"Accounts by Role"}</h3>
                        <ul class="list-group">
                            { for accounts_by_role(&data.users).into_iter().map(|(role, n)| html! {
                                <li key={role.as_str()} class="list-group-item d-flex justify-content-between">
                                    <span>{role.label()}</span>
                                    <span class="fw-bold">{n.to_string()}</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>
            </div>
        },
        "revenue" => html! {
            <div class="card p-4 shadow-sm">
                <div class="d-flex justify-content-between align-items-center mb-3">
                    <h3 class="h5 mb-0">{"Revenue"}</h3>
                    <span class="fs-5 fw-bold text-success">{format_inr(paid_total(&data.payments))}</span>
                </div>
                {payments_table(&data.payments, None)}
            </div>
        },
        _ => html! {
            <>
                <div class="row g-3 mb-4">
                    <StatCard icon="fas fa-user-tie text-primary" value={stats.total_agents.to_string()} label="Total Agents" onclick={go_to(&active, "agents")} />
                    <StatCard icon="fas fa-users text-success" value={stats.total_farmers.to_string()} label="Total Farmers" onclick={go_to(&active, "users")} />
                    <StatCard icon="fas fa-seedling text-info" value={stats.total_crops.to_string()} label="Registered Crops" onclick={go_to(&active, "analytics")} />
                    <StatCard icon="fas fa-rupee-sign text-warning" value={format_inr(stats.revenue)} label="Total Revenue" onclick={go_to(&active, "revenue")} />
                </div>
                <ActivityPanel activities={data.activities.clone()} kinds={ActivityKind::ADMIN.to_vec()} />
            </>
        },
    };

    html! {
        <div class="dashboard d-flex">
            <Sidebar items={SECTIONS} active={*active} on_select={select_section(&active)} on_logout={auth.logout.clone()} />
            <main class="flex-grow-1 p-4">
                <h2 class="mb-4">{"Admin Dashboard"}</h2>
                {section}
            </main>
        </div>
    }
}
