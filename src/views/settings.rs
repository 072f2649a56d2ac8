use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::context::use_toast;
use crate::models::{ToastKind, UserSettings};
use crate::utils::{capitalize, BrowserStorage, KeyValueStore};

fn load_settings() -> UserSettings {
    match BrowserStorage.load::<UserSettings>(&CONFIG.storage.settings_key) {
        Ok(Some(settings)) => settings,
        Ok(None) => UserSettings::default(),
        Err(e) => {
            log::warn!("⚠️ [SETTINGS] Using defaults: {}", e);
            UserSettings::default()
        }
    }
}

fn toggle(
    settings: &UseStateHandle<UserSettings>,
    title: &'static str,
    hint: &'static str,
    get: fn(&UserSettings) -> bool,
    set: fn(&mut UserSettings, bool),
) -> Html {
    let checked = get(settings);
    let onchange = {
        let settings = settings.clone();
        Callback::from(move |_: Event| {
            let mut next = (*settings).clone();
            set(&mut next, !checked);
            settings.set(next);
        })
    };
    html! {
        <div class="d-flex justify-content-between align-items-center py-2 border-bottom">
            <div>
                <h6 class="mb-0">{title}</h6>
                <small class="text-muted">{hint}</small>
            </div>
            <div class="form-check form-switch">
                <input class="form-check-input" type="checkbox" {checked} {onchange} />
            </div>
        </div>
    }
}

fn choice(
    settings: &UseStateHandle<UserSettings>,
    title: &'static str,
    values: &'static [&'static str],
    get: fn(&UserSettings) -> &str,
    set: fn(&mut UserSettings, String),
) -> Html {
    let current = get(settings).to_string();
    let onchange = {
        let settings = settings.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*settings).clone();
            set(&mut next, select.value());
            settings.set(next);
        })
    };
    html! {
        <div class="py-2 border-bottom">
            <h6>{title}</h6>
            <select class="form-select" {onchange}>
                { for values.iter().map(|value| html! {
                    <option value={*value} selected={current == *value}>{capitalize(value)}</option>
                }) }
            </select>
        </div>
    }
}

#[function_component(Settings)]
pub fn settings() -> Html {
    let toasts = use_toast();
    let settings = use_state(load_settings);

    let on_save = {
        let settings = settings.clone();
        Callback::from(move |_: MouseEvent| match BrowserStorage.save(&CONFIG.storage.settings_key, &*settings) {
            Ok(()) => {
                log::info!("💾 [SETTINGS] Saved");
                toasts.show("Settings saved successfully!", ToastKind::Success);
            }
            Err(e) => {
                log::error!("❌ [SETTINGS] {}", e);
                toasts.show("Could not save settings.", ToastKind::Danger);
            }
        })
    };
    let on_reset = {
        let settings = settings.clone();
        Callback::from(move |_: MouseEvent| settings.set(UserSettings::default()))
    };

    html! {
        <div class="container py-5 settings-page">
            <h1 class="mb-4">{"Settings"}</h1>
            <div class="row g-4">
                <div class="col-md-4">
                    <div class="card p-4 shadow-sm h-100">
                        <h3 class="h5"><i class="fas fa-bell me-2"></i>{"Notifications"}</h3>
                        {toggle(&settings, "Email Notifications", "Updates and reports by email", |s| s.email_notifications, |s, v| s.email_notifications = v)}
                        {toggle(&settings, "SMS Notifications", "Alerts by text message", |s| s.sms_notifications, |s, v| s.sms_notifications = v)}
                        {toggle(&settings, "Push Notifications", "Browser notifications", |s| s.push_notifications, |s, v| s.push_notifications = v)}
                    </div>
                </div>
                <div class="col-md-4">
                    <div class="card p-4 shadow-sm h-100">
                        <h3 class="h5"><i class="fas fa-seedling me-2"></i>{"Farming Preferences"}</h3>
                        {choice(&settings, "Crop Type", &["rice", "wheat", "corn", "vegetables"], |s| s.crop_type.as_str(), |s, v| s.crop_type = v)}
                        {choice(&settings, "Farming Method", &["organic", "conventional", "hydroponic"], |s| s.farming_method.as_str(), |s, v| s.farming_method = v)}
                        {choice(&settings, "Irrigation Type", &["drip", "sprinkler", "flood"], |s| s.irrigation_type.as_str(), |s, v| s.irrigation_type = v)}
                    </div>
                </div>
                <div class="col-md-4">
                    <div class="card p-4 shadow-sm h-100">
                        <h3 class="h5"><i class="fas fa-shield-alt me-2"></i>{"Privacy"}</h3>
                        {toggle(&settings, "Location Sharing", "Share farm location with your agent", |s| s.location_sharing, |s, v| s.location_sharing = v)}
                        {toggle(&settings, "Data Analytics", "Help improve recommendations", |s| s.data_analytics, |s, v| s.data_analytics = v)}
                        {toggle(&settings, "Expert Advice", "Receive tips from agronomists", |s| s.expert_advice, |s, v| s.expert_advice = v)}
                    </div>
                </div>
            </div>
            <div class="mt-4">
                <button class="btn btn-success me-2" onclick={on_save}>{"Save Settings"}</button>
                <button class="btn btn-outline-secondary" onclick={on_reset}>{"Reset to Defaults"}</button>
            </div>
        </div>
    }
}
