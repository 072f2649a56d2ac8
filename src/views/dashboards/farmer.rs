use web_sys::{FormData, HtmlInputElement};
use yew::prelude::*;
use yew_router::prelude::*;

use super::{edit, go_to, payments_table, select_section};
use crate::hooks::{use_auth, use_farmer_data, use_remote_sync, RemoteSync};
use crate::models::{
    ActivityKind, CropInput, CropRecord, MediaRecord, PaymentOrderInput, Priority, ReviewStatus, ToastKind,
};
use crate::router::Route;
use crate::utils::format_inr;
use crate::viewmodels::dashboard_viewmodel::{
    farmer_stats, mark_notification_read, mark_payment_paid, merge_payment_history, next_crop_id, remove_crop,
};
use crate::views::shared::{bind, ActivityPanel, Field, Sidebar, SidebarItem, StatCard};

const SECTIONS: &[SidebarItem] = &[
    ("dashboard", "fas fa-tachometer-alt", "Dashboard"),
    ("crops", "fas fa-seedling", "My Crops"),
    ("add-crop", "fas fa-plus-circle", "Add Crop"),
    ("notifications", "fas fa-bell", "Notifications"),
    ("media", "fas fa-camera", "Media Upload"),
    ("agent", "fas fa-user-tie", "My Agent"),
    ("payments", "fas fa-rupee-sign", "Payments"),
];

fn crops_table(crops: &[CropRecord], on_delete: Callback<String>) -> Html {
    if crops.is_empty() {
        return html! { <p class="text-muted">{"No crops registered yet."}</p> };
    }
    html! {
        <div class="table-responsive">
            <table class="table table-hover align-middle">
                <thead>
                    <tr>
                        <th>{"ID"}</th><th>{"Crop"}</th><th>{"Start"}</th><th>{"End"}</th>
                        <th>{"Quantity"}</th><th>{"Value"}</th><th>{"Progress"}</th><th>{"Status"}</th><th></th>
                    </tr>
                </thead>
                <tbody>
                    { for crops.iter().map(|crop| {
                        let onclick = {
                            let on_delete = on_delete.clone();
                            let id = crop.id.clone();
                            Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                        };
                        html! {
                            <tr key={crop.id.clone()}>
                                <td>{crop.id.clone()}</td>
                                <td>{crop.name.clone()}</td>
                                <td>{crop.start_date.clone()}</td>
                                <td>{crop.end_date.clone()}</td>
                                <td>{format!("{} kg", crop.quantity_kg)}</td>
                                <td>{format_inr(crop.total_value())}</td>
                                <td>
                                    <div class="progress" style="height: 8px;">
                                        <div class="progress-bar bg-success" style={format!("width: {}%;", crop.progress)}></div>
                                    </div>
                                </td>
                                <td><span class={crop.status.badge_class()}>{crop.status.label()}</span></td>
                                <td>
                                    <button class="btn btn-sm btn-outline-danger" title="Delete" {onclick}>
                                        <i class="fas fa-trash"></i>
                                    </button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}

fn upload_form(file: &HtmlInputElement, description: &str) -> Option<FormData> {
    let picked = file.files().and_then(|files| files.get(0))?;
    let form = FormData::new().ok()?;
    form.append_with_blob_and_filename("file", &picked, &picked.name()).ok()?;
    form.append_with_str("description", description).ok()?;
    Some(form)
}

fn sync_upload(sync: &RemoteSync, form: FormData) {
    sync.run("upload media", move |api| async move { api.upload_media(form).await });
}

#[function_component(FarmerDashboard)]
pub fn farmer_dashboard() -> Html {
    let auth = use_auth();
    let data = use_farmer_data();
    let sync = use_remote_sync();
    let active = use_state(|| "dashboard");
    let crop_form = use_state(CropInput::default);
    let media_note = use_state(String::new);
    let file_ref = use_node_ref();

    let stats = data
        .stats
        .clone()
        .unwrap_or_else(|| farmer_stats(&data.crops, &data.payments, &data.notifications));
    let farmer_name = auth.user.as_ref().map(|u| u.name.clone()).unwrap_or_default();
    let agent_name = auth.user.as_ref().and_then(|u| u.agent.clone());

    let on_add_crop = {
        let (data, crop_form, sync, active, farmer_name) =
            (data.clone(), crop_form.clone(), sync.clone(), active.clone(), farmer_name.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = (*crop_form).clone();
            match input.to_record(&next_crop_id(&data.crops)) {
                Ok(mut record) => {
                    record.farmer = Some(farmer_name.clone());
                    log::info!("🌱 [FARMER] Registered crop {} ({})", record.name, record.id);
                    sync.toast(&format!("Crop {} registered and sent for approval.", record.name), ToastKind::Success);
                    edit(&data, |d| d.crops.push(record));
                    crop_form.set(CropInput::default());
                    active.set("crops");
                    sync.run("create crop", move |api| async move { api.create_crop(&input).await });
                }
                Err(reason) => sync.toast(&reason, ToastKind::Danger),
            }
        })
    };

    let on_delete_crop = {
        let (data, sync) = (data.clone(), sync.clone());
        Callback::from(move |id: String| {
            let mut removed = false;
            edit(&data, |d| removed = remove_crop(&mut d.crops, &id));
            if removed {
                sync.toast("Crop removed.", ToastKind::Info);
                sync.run("delete crop", move |api| async move { api.delete_crop(&id).await });
            }
        })
    };

    let on_pay = {
        let (data, sync) = (data.clone(), sync.clone());
        Callback::from(move |id: String| {
            let Some(payment) = data.payments.iter().find(|p| p.id == id).cloned() else {
                return;
            };
            if sync.is_remote() {
                sync.toast(&format!("Creating payment order for {}...", format_inr(payment.total())), ToastKind::Info);
                let order = PaymentOrderInput {
                    payment_id: payment.id.clone(),
                    amount: payment.total(),
                    currency: "INR".to_string(),
                };
                let (data, toasts) = (data.clone(), sync.clone());
                sync.run_then(
                    "create order",
                    move |api| async move {
                        let order = api.create_order(&order).await?;
                        log::info!("💳 [FARMER] Order {} created", order.order_id);
                        api.payment_history().await
                    },
                    move |history| {
                        edit(&data, |d| d.payments = merge_payment_history(&d.payments, history));
                        toasts.toast("Payment history updated.", ToastKind::Success);
                    },
                );
            } else {
                let mut paid = false;
                edit(&data, |d| paid = mark_payment_paid(&mut d.payments, &id));
                if !paid {
                    return;
                }
                sync.toast(&format!("Payment of {} completed.", format_inr(payment.total())), ToastKind::Success);
            }
        })
    };

    let on_upload = {
        let (data, sync, media_note, file_ref, farmer_name) =
            (data.clone(), sync.clone(), media_note.clone(), file_ref.clone(), farmer_name.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(file) = file_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let Some(form) = upload_form(&file, media_note.trim()) else {
                sync.toast("Please choose a photo or video to upload.", ToastKind::Warning);
                return;
            };
            let id = format!("M{:03}", data.media.len() + 1);
            let record = MediaRecord {
                id,
                farmer: farmer_name.clone(),
                description: (*media_note).clone(),
                url: None,
                status: ReviewStatus::Pending,
                submitted: chrono::Local::now().format("%Y-%m-%d").to_string(),
            };
            edit(&data, |d| d.media.push(record));
            media_note.set(String::new());
            file.set_value("");
            sync.toast("Media uploaded. Your agent will review it shortly.", ToastKind::Success);
            sync_upload(&sync, form);
        })
    };

    let section = match *active {
        "crops" => html! {
            <div class="card p-4 shadow-sm">
                <h3 class="h5 mb-3">{"My Crops"}</h3>
                {crops_table(&data.crops, on_delete_crop)}
            </div>
        },
        "add-crop" => html! {
            <div class="card p-4 shadow-sm">
                <h3 class="h5 mb-3">{"Register a Crop"}</h3>
                <form onsubmit={on_add_crop}>
                    <Field label="Crop Name" name="name" value={crop_form.name.clone()} oninput={bind(&crop_form, |f, v| f.name = v)} />
                    <div class="row">
                        <div class="col-md-6">
                            <Field label="Start Date" name="startDate" input_type="date" value={crop_form.start_date.clone()} oninput={bind(&crop_form, |f, v| f.start_date = v)} />
                        </div>
                        <div class="col-md-6">
                            <Field label="Expected Harvest" name="endDate" input_type="date" value={crop_form.end_date.clone()} oninput={bind(&crop_form, |f, v| f.end_date = v)} />
                        </div>
                        <div class="col-md-6">
                            <Field label="Quantity (kg)" name="quantityKg" input_type="number" value={crop_form.quantity_kg.clone()} oninput={bind(&crop_form, |f, v| f.quantity_kg = v)} />
                        </div>
                        <div class="col-md-6">
                            <Field label="Price per kg (₹)" name="pricePerKg" input_type="number" value={crop_form.price_per_kg.clone()} oninput={bind(&crop_form, |f, v| f.price_per_kg = v)} />
                        </div>
                    </div>
                    <button type="submit" class="btn btn-success">{"Submit for Approval"}</button>
                </form>
            </div>
        },
        "notifications" => html! {
            <div class="card p-4 shadow-sm">
                <h3 class="h5 mb-3">{"Notifications"}</h3>
                <ul class="list-group">
                    { for data.notifications.iter().map(|n| {
                        let onclick = {
                            let (data, id) = (data.clone(), n.id);
                            Callback::from(move |_: MouseEvent| edit(&data, |d| mark_notification_read(&mut d.notifications, id)))
                        };
                        let priority = match n.priority {
                            Priority::High => "badge bg-danger",
                            Priority::Medium => "badge bg-warning",
                            Priority::Low => "badge bg-secondary",
                        };
                        html! {
                            <li key={n.id} class={classes!("list-group-item", (!n.read).then_some("list-group-item-warning"))}>
                                <div class="d-flex justify-content-between">
                                    <strong>{n.title.clone()}</strong>
                                    <span class={priority}>{format!("{:?}", n.priority)}</span>
                                </div>
                                <div>{n.message.clone()}</div>
                                <div class="d-flex justify-content-between align-items-center">
                                    <small class="text-muted">{n.timestamp.clone()}</small>
                                    if !n.read {
                                        <button class="btn btn-link btn-sm" {onclick}>{"Mark as read"}</button>
                                    }
                                </div>
                            </li>
                        }
                    }) }
                </ul>
            </div>
        },
        "media" => html! {
            <div class="card p-4 shadow-sm">
                <h3 class="h5 mb-3">{"Upload Field Media"}</h3>
                <form class="mb-4" onsubmit={on_upload}>
                    <div class="mb-3">
                        <label class="form-label" for="media-file">{"Photo or video"}</label>
                        <input class="form-control" id="media-file" type="file" accept="image/*,video/*" ref={file_ref} />
                    </div>
                    <Field label="Description" name="description" value={(*media_note).clone()} oninput={bind(&media_note, |note, v| *note = v)} />
                    <button type="submit" class="btn btn-success"><i class="fas fa-upload me-2"></i>{"Upload"}</button>
                </form>
                <ul class="list-group">
                    { for data.media.iter().map(|m| html! {
                        <li key={m.id.clone()} class="list-group-item d-flex justify-content-between">
                            <span>{format!("{} · {}", m.description, m.submitted)}</span>
                            <span class={m.status.badge_class()}>{format!("{:?}", m.status)}</span>
                        </li>
                    }) }
                </ul>
            </div>
        },
        "agent" => html! {
            <div class="card p-4 shadow-sm">
                <h3 class="h5 mb-3">{"My Agent"}</h3>
                if let Some(agent) = agent_name.clone() {
                    <p class="mb-3"><i class="fas fa-user-tie me-2"></i>{agent}</p>
                    <Link<Route> classes={classes!("btn", "btn-success")} to={Route::Message}>
                        <i class="fas fa-comments me-2"></i>{"Send Message"}
                    </Link<Route>>
                } else {
                    <p class="text-muted">{"No agent assigned yet."}</p>
                }
            </div>
        },
        "payments" => html! {
            <div class="card p-4 shadow-sm">
                <h3 class="h5 mb-3">{"Payments"}</h3>
                {payments_table(&data.payments, Some(on_pay))}
            </div>
        },
        _ => html! {
            <>
                <div class="row g-3 mb-4">
                    <StatCard icon="fas fa-seedling text-success" value={stats.total_crops.to_string()} label="Total Crops" onclick={go_to(&active, "crops")} />
                    <StatCard icon="fas fa-rupee-sign text-primary" value={format_inr(stats.earnings)} label="Earnings" onclick={go_to(&active, "payments")} />
                    <StatCard icon="fas fa-bell text-warning" value={stats.unread_notifications.to_string()} label="Notifications" onclick={go_to(&active, "notifications")} />
                    <StatCard icon="fas fa-tasks text-info" value={stats.active_tasks.to_string()} label="Active Tasks" onclick={go_to(&active, "crops")} />
                </div>
                <ActivityPanel activities={data.activities.clone()} kinds={ActivityKind::FARMER.to_vec()} />
            </>
        },
    };

    let first_name = auth.user.as_ref().map(|u| u.first_name().to_string()).unwrap_or_default();

    html! {
        <div class="dashboard d-flex">
            <Sidebar items={SECTIONS} active={*active} on_select={select_section(&active)} on_logout={auth.logout.clone()} />
            <main class="flex-grow-1 p-4">
                <h2 class="mb-4">{format!("Welcome, {}!", first_name)}</h2>
                {section}
            </main>
        </div>
    }
}
