// ============================================================================
// DASHBOARDS - Farmer, agent and admin workspaces
// ============================================================================

pub mod admin;
pub mod agent;
pub mod farmer;

pub use admin::AdminDashboard;
pub use agent::AgentDashboard;
pub use farmer::FarmerDashboard;

use yew::prelude::*;

use crate::models::{PaymentRecord, PaymentStatus};
use crate::utils::format_inr;

/// Clone-modify-set on a state handle
pub(crate) fn edit<T: Clone>(handle: &UseStateHandle<T>, change: impl FnOnce(&mut T)) {
    let mut next = (**handle).clone();
    change(&mut next);
    handle.set(next);
}

/// Callback selecting a sidebar section
pub(crate) fn select_section(active: &UseStateHandle<&'static str>) -> Callback<&'static str> {
    let active = active.clone();
    Callback::from(move |id: &'static str| active.set(id))
}

/// Callback that jumps to `section` (stat cards)
pub(crate) fn go_to(active: &UseStateHandle<&'static str>, section: &'static str) -> Option<Callback<MouseEvent>> {
    let active = active.clone();
    Some(Callback::from(move |_: MouseEvent| active.set(section)))
}

pub(crate) fn payments_table(payments: &[PaymentRecord], on_pay: Option<Callback<String>>) -> Html {
    html! {
        <div class="table-responsive">
            <table class="table table-hover align-middle">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Service"}</th>
                        <th>{"Farmer"}</th>
                        <th>{"Estimated Cost"}</th>
                        <th>{"Service Fee"}</th>
                        <th>{"Profit Share"}</th>
                        <th>{"Total"}</th>
                        <th>{"Status"}</th>
                        <th>{"Date"}</th>
                        if on_pay.is_some() {
                            <th></th>
                        }
                    </tr>
                </thead>
                <tbody>
                    { for payments.iter().map(|payment| {
                        let pay_button = on_pay.as_ref().map(|cb| {
                            let cb = cb.clone();
                            let id = payment.id.clone();
                            let pending = payment.status == PaymentStatus::Pending;
                            html! {
                                <td>
                                    if pending {
                                        <button class="btn btn-sm btn-success" onclick={Callback::from(move |_: MouseEvent| cb.emit(id.clone()))}>
                                            {"Pay"}
                                        </button>
                                    }
                                </td>
                            }
                        });
                        html! {
                            <tr key={payment.id.clone()}>
                                <td>{payment.id.clone()}</td>
                                <td>{payment.service.clone()}</td>
                                <td>{payment.farmer.clone().unwrap_or_default()}</td>
                                <td>{format_inr(payment.estimated_cost)}</td>
                                <td>{format_inr(payment.service_fee)}</td>
                                <td>{format_inr(payment.profit_share)}</td>
                                <td class="fw-bold">{format_inr(payment.total())}</td>
                                <td><span class={payment.status.badge_class()}>{payment.status.label()}</span></td>
                                <td>{payment.date.clone()}</td>
                                {pay_button}
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}
