use yew::prelude::*;

use crate::hooks::use_auth;
use crate::models::ProfileUpdate;
use crate::utils::REGIONS;
use crate::views::shared::{bind, options, Field, SelectField};

#[derive(Clone, Default, PartialEq)]
struct PasswordForm {
    current: String,
    new: String,
    confirm: String,
}

#[function_component(Profile)]
pub fn profile() -> Html {
    let auth = use_auth();
    let form = use_state(|| auth.user.as_ref().map(ProfileUpdate::from_user).unwrap_or_default());
    let passwords = use_state(PasswordForm::default);
    let editing = use_state(|| false);

    // RequireAuth guarantees a user; render nothing during a logout transition
    let Some(user) = auth.user.clone() else {
        return html! {};
    };

    let on_edit = {
        let (editing, form, user) = (editing.clone(), form.clone(), user.clone());
        Callback::from(move |_: MouseEvent| {
            form.set(ProfileUpdate::from_user(&user));
            editing.set(true);
        })
    };
    let on_cancel = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(false))
    };
    let on_save = {
        let (form, editing, save) = (form.clone(), editing.clone(), auth.save_profile.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            save.emit((*form).clone());
            editing.set(false);
        })
    };
    let on_change_password = {
        let (passwords, change) = (passwords.clone(), auth.change_password.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            change.emit((passwords.current.clone(), passwords.new.clone(), passwords.confirm.clone()));
            passwords.set(PasswordForm::default());
        })
    };

    html! {
        <div class="container py-5">
            <div class="row g-4">
                <div class="col-md-4">
                    <div class="card p-4 text-center shadow-sm">
                        <img src={user.avatar()} alt="profile" class="rounded-circle mx-auto mb-3" width="120" height="120" />
                        <h4 class="mb-1">{user.name.clone()}</h4>
                        <span class="badge bg-success mb-2">{user.role.label()}</span>
                        <div class="text-muted small">{user.id.clone()}</div>
                        <div class="text-muted small">{user.region.clone()}</div>
                        if let Some(agent) = &user.agent {
                            <div class="small mt-2">{format!("Agent: {}", agent)}</div>
                        }
                    </div>
                </div>

                <div class="col-md-8">
                    <div class="card p-4 shadow-sm mb-4">
                        <div class="d-flex justify-content-between align-items-center mb-3">
                            <h4 class="mb-0">{"Profile Details"}</h4>
                            if !*editing {
                                <button class="btn btn-outline-success btn-sm" onclick={on_edit}>
                                    <i class="fas fa-edit me-1"></i>{"Edit"}
                                </button>
                            }
                        </div>
                        if *editing {
                            <form onsubmit={on_save}>
                                <Field label="Name" name="name" value={form.name.clone()} oninput={bind(&form, |f, v| f.name = v)} />
                                <Field label="Email" name="email" input_type="email" value={form.email.clone()}
                                    oninput={bind(&form, |f, v| f.email = v)} />
                                <SelectField label="Region" name="region" value={form.region.clone()} options={options(&REGIONS)}
                                    onchange={bind(&form, |f, v| f.region = v)} />
                                <Field label="Profile Picture URL" name="profilePic" input_type="url" required={false}
                                    value={form.profile_pic.clone()} oninput={bind(&form, |f, v| f.profile_pic = v)} />
                                <button type="submit" class="btn btn-success me-2">{"Save"}</button>
                                <button type="button" class="btn btn-outline-secondary" onclick={on_cancel}>{"Cancel"}</button>
                            </form>
                        } else {
                            <dl class="row mb-0">
                                <dt class="col-sm-3">{"Email"}</dt><dd class="col-sm-9">{user.email.clone()}</dd>
                                <dt class="col-sm-3">{"Region"}</dt><dd class="col-sm-9">{user.region.clone()}</dd>
                                if let Some(phone) = &user.phone {
                                    <><dt class="col-sm-3">{"Phone"}</dt><dd class="col-sm-9">{phone.clone()}</dd></>
                                }
                            </dl>
                        }
                    </div>

                    <div class="card p-4 shadow-sm">
                        <h4 class="mb-3">{"Change Password"}</h4>
                        <form onsubmit={on_change_password}>
                            <Field label="Current Password" name="currentPassword" input_type="password" value={passwords.current.clone()}
                                oninput={bind(&passwords, |f, v| f.current = v)} />
                            <Field label="New Password" name="newPassword" input_type="password" value={passwords.new.clone()}
                                oninput={bind(&passwords, |f, v| f.new = v)} />
                            <Field label="Confirm New Password" name="confirmPassword" input_type="password" value={passwords.confirm.clone()}
                                oninput={bind(&passwords, |f, v| f.confirm = v)} />
                            <button type="submit" class="btn btn-outline-success">{"Update Password"}</button>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}
