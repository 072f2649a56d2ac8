// ============================================================================
// AUTH VIEWMODEL - Login, signup, profile and logout outcomes
// ============================================================================
// Applies service results to the session store and toast queue and
// tells the caller where to navigate. No I/O happens here.
// ============================================================================

use chrono::{DateTime, Utc};

use crate::config::CONFIG;
use crate::models::{ProfileUpdate, Role, ToastKind};
use crate::router::Route;
use crate::services::{ApiError, AuthError, LoginOutcome, SignupError};
use crate::state::{SessionStore, ToastQueue};
use crate::utils::{KeyValueStore, MSG_LOGGED_OUT, MSG_LOGIN_SUCCESS, MSG_PROFILE_UPDATED, MSG_SESSION_EXPIRED, MSG_SIGNUP_SUCCESS};

pub struct AuthViewModel;

impl AuthViewModel {
    fn toast(toasts: &mut ToastQueue, message: &str, kind: ToastKind, now: DateTime<Utc>) {
        toasts.push(message, kind, CONFIG.toast_duration_ms, now);
    }

    fn start_session<S: KeyValueStore>(store: &mut SessionStore<S>, outcome: LoginOutcome) -> Role {
        let role = outcome.user.role;
        let saved = match outcome.token {
            Some(token) => store.login_with_token(outcome.user, &token),
            None => store.login(outcome.user),
        };
        if let Err(e) = saved {
            // Session still lives in memory for this visit
            log::error!("❌ [AUTH] Could not persist session: {}", e);
        }
        role
    }

    /// Apply a login attempt. Success lands on the role's dashboard.
    pub fn complete_login<S: KeyValueStore>(
        store: &mut SessionStore<S>,
        toasts: &mut ToastQueue,
        result: Result<LoginOutcome, AuthError>,
        now: DateTime<Utc>,
    ) -> Option<Route> {
        match result {
            Ok(outcome) => {
                let role = Self::start_session(store, outcome);
                Self::toast(toasts, MSG_LOGIN_SUCCESS, ToastKind::Success, now);
                Some(Route::dashboard_for(role))
            }
            Err(e) => {
                log::warn!("⚠️ [AUTH] Login failed: {}", e);
                Self::toast(toasts, &e.to_string(), ToastKind::Danger, now);
                None
            }
        }
    }

    /// Surface a form validation failure; the store is left alone
    pub fn reject_signup(toasts: &mut ToastQueue, error: &SignupError, now: DateTime<Utc>) {
        log::warn!("⚠️ [SIGNUP] {}", error);
        Self::toast(toasts, &error.to_string(), ToastKind::Danger, now);
    }

    pub fn complete_signup<S: KeyValueStore>(
        store: &mut SessionStore<S>,
        toasts: &mut ToastQueue,
        result: Result<LoginOutcome, AuthError>,
        now: DateTime<Utc>,
    ) -> Option<Route> {
        match result {
            Ok(outcome) => {
                let role = Self::start_session(store, outcome);
                Self::toast(toasts, MSG_SIGNUP_SUCCESS, ToastKind::Success, now);
                Some(Route::dashboard_for(role))
            }
            Err(e) => {
                log::error!("❌ [SIGNUP] Registration failed: {}", e);
                Self::toast(toasts, &e.to_string(), ToastKind::Danger, now);
                None
            }
        }
    }

    /// Save the profile form over the current user. Returns false without a session.
    pub fn save_profile<S: KeyValueStore>(
        store: &mut SessionStore<S>,
        toasts: &mut ToastQueue,
        form: &ProfileUpdate,
        now: DateTime<Utc>,
    ) -> bool {
        let Some(updated) = store.current_user().map(|user| form.apply_to(user)) else {
            return false;
        };
        if let Err(e) = store.update_user(updated) {
            log::error!("❌ [PROFILE] Could not persist profile: {}", e);
        }
        Self::toast(toasts, MSG_PROFILE_UPDATED, ToastKind::Success, now);
        true
    }

    /// Check the new password against its confirmation. Returns true when the
    /// caller should send it to the backend (remote mode only); demo mode just
    /// reports that the feature is unavailable.
    pub fn change_password(
        toasts: &mut ToastQueue,
        new_password: &str,
        confirm: &str,
        remote: bool,
        now: DateTime<Utc>,
    ) -> bool {
        if new_password.is_empty() || new_password != confirm {
            Self::toast(toasts, "New passwords do not match!", ToastKind::Danger, now);
            return false;
        }
        if !remote {
            Self::toast(toasts, "Password change functionality coming soon!", ToastKind::Info, now);
        }
        remote
    }

    pub fn logout<S: KeyValueStore>(store: &mut SessionStore<S>, toasts: &mut ToastQueue, now: DateTime<Utc>) -> Route {
        store.logout();
        Self::toast(toasts, MSG_LOGGED_OUT, ToastKind::Info, now);
        Route::Home
    }

    /// React to a failed backend call. A 401 ends the session and sends the
    /// user to their login page; anything else is just reported.
    pub fn handle_api_error<S: KeyValueStore>(
        store: &mut SessionStore<S>,
        toasts: &mut ToastQueue,
        error: &ApiError,
        now: DateTime<Utc>,
    ) -> Option<Route> {
        match error {
            ApiError::Unauthorized => {
                let role = store.current_user().map(|user| user.role);
                store.logout();
                Self::toast(toasts, MSG_SESSION_EXPIRED, ToastKind::Warning, now);
                Some(role.map_or(Route::LoginSelection, Route::login_for))
            }
            other => {
                Self::toast(toasts, &other.to_string(), ToastKind::Danger, now);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::models::{Credentials, SessionUser};
    use crate::router::{check_access, GuardDecision};
    use crate::services::{authenticate_demo, AgentSignupForm, FarmerSignupForm};
    use crate::utils::{MemoryStorage, MSG_INVALID_CREDENTIALS};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 22, 9, 30, 0).unwrap()
    }

    fn fresh() -> (SessionStore<MemoryStorage>, ToastQueue, MemoryStorage) {
        let storage = MemoryStorage::new();
        (SessionStore::with_keys(storage.clone(), "user", "token"), ToastQueue::new(), storage)
    }

    fn demo_login(role: Role, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        authenticate_demo(role, &Credentials::new(email, password)).map(|user| LoginOutcome { user, token: None })
    }

    #[test]
    fn role_login_yields_that_role_and_dashboard() {
        for (role, email) in [
            (Role::Farmer, "farmer@test.com"),
            (Role::Agent, "agent@test.com"),
            (Role::Admin, "admin@test.com"),
        ] {
            let (mut store, mut toasts, _) = fresh();
            let next = AuthViewModel::complete_login(&mut store, &mut toasts, demo_login(role, email, "password"), now());

            assert_eq!(next, Some(Route::dashboard_for(role)));
            assert_eq!(store.current_user().map(|u| u.role), Some(role));
            assert_eq!(toasts.last().map(|t| t.kind), Some(ToastKind::Success));
        }
    }

    #[test]
    fn failed_login_shows_danger_toast_and_keeps_store_empty() {
        let (mut store, mut toasts, storage) = fresh();
        let next = AuthViewModel::complete_login(
            &mut store,
            &mut toasts,
            demo_login(Role::Farmer, "farmer@test.com", "wrong"),
            now(),
        );

        assert_eq!(next, None);
        assert!(!store.is_authenticated());
        assert!(!storage.contains("user"));
        let toast = toasts.last().unwrap();
        assert_eq!(toast.kind, ToastKind::Danger);
        assert_eq!(toast.message, MSG_INVALID_CREDENTIALS);
    }

    #[test]
    fn remote_login_keeps_token() {
        let (mut store, mut toasts, storage) = fresh();
        let user = SessionUser::new("F0100", "Asha", Role::Farmer, "East Region", "asha@example.com");
        let outcome = LoginOutcome {
            user,
            token: Some("jwt".to_string()),
        };

        AuthViewModel::complete_login(&mut store, &mut toasts, Ok(outcome), now());

        assert_eq!(storage.load::<String>("token").unwrap().as_deref(), Some("jwt"));
    }

    #[test]
    fn signup_password_mismatch_blocks_and_leaves_store_unchanged() {
        let (mut store, mut toasts, storage) = fresh();
        let form = FarmerSignupForm {
            name: "Ravi".to_string(),
            age: "40".to_string(),
            gender: "male".to_string(),
            phone: "1".to_string(),
            email: "ravi@example.com".to_string(),
            password: "abc".to_string(),
            confirm_password: "abd".to_string(),
            region: "North Region".to_string(),
            address: "x".to_string(),
            acres: "2".to_string(),
            cultivation_start_date: "2024-06-01".to_string(),
            preferred_language: "Hindi".to_string(),
            soil_type: "Clay".to_string(),
        };

        let error = form.validate().unwrap_err();
        AuthViewModel::reject_signup(&mut toasts, &error, now());

        assert_eq!(error, SignupError::PasswordMismatch);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.last().map(|t| t.kind), Some(ToastKind::Danger));
        assert!(store.current_user().is_none());
        assert!(!storage.contains("user"));
        store.reload();
        assert!(store.current_user().is_none());
    }

    #[test]
    fn agent_signup_password_mismatch_blocks_and_leaves_store_unchanged() {
        let (mut store, mut toasts, storage) = fresh();
        let form = AgentSignupForm {
            name: "Meena".to_string(),
            email: "meena@example.com".to_string(),
            phone: "9123456780".to_string(),
            password: "field-agent".to_string(),
            confirm_password: "field-agnet".to_string(),
            region: "East Region".to_string(),
        };

        let error = form.validate().unwrap_err();
        AuthViewModel::reject_signup(&mut toasts, &error, now());

        assert_eq!(error, SignupError::PasswordMismatch);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.last().map(|t| t.kind), Some(ToastKind::Danger));
        assert!(store.current_user().is_none());
        assert!(!storage.contains("user"));
    }

    #[test]
    fn successful_signup_logs_in() {
        let (mut store, mut toasts, _) = fresh();
        let user = SessionUser::new("A0042", "Meena", Role::Agent, "East Region", "meena@example.com");

        let next = AuthViewModel::complete_signup(&mut store, &mut toasts, Ok(LoginOutcome { user, token: None }), now());

        assert_eq!(next, Some(Route::AgentDashboard));
        assert_eq!(toasts.last().map(|t| t.message.as_str()), Some(MSG_SIGNUP_SUCCESS));
    }

    #[test]
    fn logout_then_guarded_visit_redirects_to_login() {
        let (mut store, mut toasts, _) = fresh();
        AuthViewModel::complete_login(
            &mut store,
            &mut toasts,
            demo_login(Role::Admin, "admin@test.com", "password"),
            now(),
        );
        assert_eq!(check_access(Some(Role::Admin), store.current_user()), GuardDecision::Render);

        assert_eq!(AuthViewModel::logout(&mut store, &mut toasts, now()), Route::Home);

        assert_eq!(
            check_access(Some(Role::Admin), store.current_user()),
            GuardDecision::Redirect(Route::AdminLogin)
        );
    }

    #[test]
    fn profile_save_updates_stored_user() {
        let (mut store, mut toasts, storage) = fresh();
        let mut form = ProfileUpdate::default();
        assert!(!AuthViewModel::save_profile(&mut store, &mut toasts, &form, now()));

        AuthViewModel::complete_login(
            &mut store,
            &mut toasts,
            demo_login(Role::Farmer, "farmer@test.com", "password"),
            now(),
        );
        form = ProfileUpdate::from_user(store.current_user().unwrap());
        form.name = "John B. Farmer".to_string();

        assert!(AuthViewModel::save_profile(&mut store, &mut toasts, &form, now()));
        let saved: SessionUser = storage.load("user").unwrap().unwrap();
        assert_eq!(saved.name, "John B. Farmer");
        assert_eq!(toasts.last().map(|t| t.message.as_str()), Some(MSG_PROFILE_UPDATED));
    }

    #[test]
    fn password_change_checks_confirmation() {
        let mut toasts = ToastQueue::new();
        assert!(!AuthViewModel::change_password(&mut toasts, "new", "other", true, now()));
        assert_eq!(toasts.last().map(|t| t.kind), Some(ToastKind::Danger));

        assert!(!AuthViewModel::change_password(&mut toasts, "new", "new", false, now()));
        assert_eq!(toasts.last().map(|t| t.kind), Some(ToastKind::Info));

        let before = toasts.len();
        assert!(AuthViewModel::change_password(&mut toasts, "new", "new", true, now()));
        assert_eq!(toasts.len(), before);
    }

    #[test]
    fn unauthorized_ends_the_session() {
        let (mut store, mut toasts, _) = fresh();
        AuthViewModel::complete_login(
            &mut store,
            &mut toasts,
            demo_login(Role::Agent, "agent@test.com", "password"),
            now(),
        );

        let next = AuthViewModel::handle_api_error(&mut store, &mut toasts, &ApiError::Unauthorized, now());

        assert_eq!(next, Some(Route::AgentLogin));
        assert!(!store.is_authenticated());

        let other = ApiError::Network("offline".to_string());
        assert_eq!(AuthViewModel::handle_api_error(&mut store, &mut toasts, &other, now()), None);
        assert_eq!(toasts.last().map(|t| t.kind), Some(ToastKind::Danger));
    }
}
