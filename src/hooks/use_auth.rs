// ============================================================================
// USE AUTH HOOK - Login / signup / logout wired to session, toasts and router
// ============================================================================

use chrono::Utc;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{AuthMode, CONFIG};
use crate::context::{use_session, use_toast, SessionContext, ToastContext};
use crate::models::{Credentials, ProfileUpdate, Role, SessionUser, ToastKind};
use crate::router::Route;
use crate::services::{
    auth_service, random_seed, AgentSignupForm, ApiClient, ApiError, AuthError, FarmerSignupForm, LoginOutcome,
};
use crate::viewmodels::AuthViewModel;

pub struct UseAuthHandle {
    pub user: Option<SessionUser>,
    pub busy: bool,
    pub login: Callback<(Role, Credentials)>,
    pub signup_farmer: Callback<FarmerSignupForm>,
    pub signup_agent: Callback<AgentSignupForm>,
    pub save_profile: Callback<ProfileUpdate>,
    /// `(current, new, confirm)`
    pub change_password: Callback<(String, String, String)>,
    pub logout: Callback<()>,
}

fn go(navigator: &Option<Navigator>, route: Option<Route>) {
    if let (Some(navigator), Some(route)) = (navigator, route) {
        navigator.push(&route);
    }
}

fn finish_login(session: &SessionContext, toasts: &ToastContext, result: Result<LoginOutcome, AuthError>) -> Option<Route> {
    session
        .state
        .update(|store| toasts.state.update(|queue| AuthViewModel::complete_login(store, queue, result, Utc::now())))
}

fn finish_signup(session: &SessionContext, toasts: &ToastContext, result: Result<LoginOutcome, AuthError>) -> Option<Route> {
    session
        .state
        .update(|store| toasts.state.update(|queue| AuthViewModel::complete_signup(store, queue, result, Utc::now())))
}

/// Route a failed backend call through the session: 401 logs out
pub fn report_api_error(session: &SessionContext, toasts: &ToastContext, error: &ApiError) -> Option<Route> {
    session
        .state
        .update(|store| toasts.state.update(|queue| AuthViewModel::handle_api_error(store, queue, error, Utc::now())))
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let session = use_session();
    let toasts = use_toast();
    let navigator = use_navigator();
    let busy = use_state(|| false);

    let login = {
        let (session, toasts, navigator, busy) = (session.clone(), toasts.clone(), navigator.clone(), busy.clone());
        Callback::from(move |(role, credentials): (Role, Credentials)| {
            let (session, toasts, navigator, busy) = (session.clone(), toasts.clone(), navigator.clone(), busy.clone());
            busy.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = auth_service::login(role, credentials).await;
                busy.set(false);
                go(&navigator, finish_login(&session, &toasts, result));
            });
        })
    };

    let signup_farmer = {
        let (session, toasts, navigator, busy) = (session.clone(), toasts.clone(), navigator.clone(), busy.clone());
        Callback::from(move |form: FarmerSignupForm| {
            if let Err(e) = form.validate() {
                toasts.state.update(|queue| AuthViewModel::reject_signup(queue, &e, Utc::now()));
                return;
            }
            let password = form.password.clone();
            let user = form.into_user(random_seed());
            let (session, toasts, navigator, busy) = (session.clone(), toasts.clone(), navigator.clone(), busy.clone());
            busy.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = auth_service::register(user, password).await;
                busy.set(false);
                go(&navigator, finish_signup(&session, &toasts, result));
            });
        })
    };

    let signup_agent = {
        let (session, toasts, navigator, busy) = (session.clone(), toasts.clone(), navigator.clone(), busy.clone());
        Callback::from(move |form: AgentSignupForm| {
            if let Err(e) = form.validate() {
                toasts.state.update(|queue| AuthViewModel::reject_signup(queue, &e, Utc::now()));
                return;
            }
            let password = form.password.clone();
            let user = form.into_user(random_seed());
            let (session, toasts, navigator, busy) = (session.clone(), toasts.clone(), navigator.clone(), busy.clone());
            busy.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = auth_service::register(user, password).await;
                busy.set(false);
                go(&navigator, finish_signup(&session, &toasts, result));
            });
        })
    };

    let save_profile = {
        let (session, toasts, navigator) = (session.clone(), toasts.clone(), navigator.clone());
        Callback::from(move |form: ProfileUpdate| {
            let saved = session.state.update(|store| {
                toasts
                    .state
                    .update(|queue| AuthViewModel::save_profile(store, queue, &form, Utc::now()))
            });
            let Some(user) = session.user().filter(|_| saved && CONFIG.auth_mode == AuthMode::Remote) else {
                return;
            };
            let (session, toasts, navigator) = (session.clone(), toasts.clone(), navigator.clone());
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().update_profile(&user).await {
                    Ok(_) => log::info!("✅ [PROFILE] Synced with backend"),
                    Err(e) => go(&navigator, report_api_error(&session, &toasts, &e)),
                }
            });
        })
    };

    let change_password = {
        let (session, toasts, navigator) = (session.clone(), toasts.clone(), navigator.clone());
        Callback::from(move |(current, new_password, confirm): (String, String, String)| {
            let remote = CONFIG.auth_mode == AuthMode::Remote;
            let send = toasts
                .state
                .update(|queue| AuthViewModel::change_password(queue, &new_password, &confirm, remote, Utc::now()));
            if !send {
                return;
            }
            let (session, toasts, navigator) = (session.clone(), toasts.clone(), navigator.clone());
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().change_password(&current, &new_password).await {
                    Ok(_) => {
                        toasts.show("Password updated successfully!", ToastKind::Success);
                    }
                    Err(e) => go(&navigator, report_api_error(&session, &toasts, &e)),
                }
            });
        })
    };

    let logout = {
        let (session, toasts, navigator) = (session.clone(), toasts.clone(), navigator.clone());
        Callback::from(move |_| {
            let route = session
                .state
                .update(|store| toasts.state.update(|queue| AuthViewModel::logout(store, queue, Utc::now())));
            go(&navigator, Some(route));
        })
    };

    UseAuthHandle {
        user: session.user(),
        busy: *busy,
        login,
        signup_farmer,
        signup_agent,
        save_profile,
        change_password,
        logout,
    }
}
