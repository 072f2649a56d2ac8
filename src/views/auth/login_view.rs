use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{AuthMode, CONFIG};
use crate::hooks::use_auth;
use crate::models::{Credentials, Role};
use crate::router::Route;
use crate::services::demo_account;
use crate::utils::{APP_NAME, APP_TAGLINE, DEMO_PASSWORD};
use crate::views::shared::Field;

fn headline(role: Role) -> (&'static str, &'static str, [(&'static str, &'static str); 3]) {
    match role {
        Role::Farmer => (
            "Welcome Back, Farmer!",
            "Access your farming dashboard and tools",
            [
                ("fas fa-cloud-sun text-warning", "Weather Advisory & Crop Alerts"),
                ("fas fa-chart-line text-success", "Real-time Market Prices"),
                ("fas fa-comments text-primary", "Expert Agricultural Consultation"),
            ],
        ),
        Role::Agent => (
            "Welcome Back, Agent!",
            "Manage your farmers and field requests",
            [
                ("fas fa-users text-warning", "Farmer Portfolio Management"),
                ("fas fa-check-double text-success", "Crop & Media Approvals"),
                ("fas fa-rupee-sign text-primary", "Collections Tracking"),
            ],
        ),
        Role::Admin => (
            "Administrator Access",
            "Oversee agents, farmers and revenue",
            [
                ("fas fa-user-shield text-warning", "User Management"),
                ("fas fa-chart-bar text-success", "Platform Analytics"),
                ("fas fa-file-alt text-primary", "Reports"),
            ],
        ),
    }
}

#[derive(Properties, PartialEq)]
pub struct LoginViewProps {
    pub role: Role,
}

/// Login form for one role; only that role's account is accepted
#[function_component(LoginView)]
pub fn login_view(props: &LoginViewProps) -> Html {
    let auth = use_auth();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let role = props.role;
    let (title, description, features) = headline(role);

    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };
    let on_submit = {
        let (email, password, login) = (email.clone(), password.clone(), auth.login.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            login.emit((role, Credentials::new(&email, &password)));
        })
    };

    html! {
        <div class="login-page">
            <div class="container-fluid">
                <div class="row min-vh-100">
                    <div class="col-lg-6 d-none d-lg-flex login-brand-section">
                        <div class="brand-content">
                            <div class="logo-container d-inline-flex align-items-center mb-4">
                                <div class="logo-icon me-3"><i class="fas fa-seedling"></i></div>
                                <div class="brand-text text-start">
                                    <h2 class="brand-title mb-0">{APP_NAME}</h2>
                                    <p class="brand-tagline mb-0">{APP_TAGLINE}</p>
                                </div>
                            </div>
                            <h1 class="display-4 fw-bold text-white mb-4">{title}</h1>
                            <div class="features-list">
                                { for features.iter().map(|(icon, text)| html! {
                                    <div class="feature-item">
                                        <i class={classes!(*icon, "me-3")}></i>
                                        <span>{*text}</span>
                                    </div>
                                }) }
                            </div>
                        </div>
                    </div>

                    <div class="col-lg-6 d-flex align-items-center justify-content-center">
                        <div class="login-form-container">
                            <div class="text-center mb-4">
                                <Link<Route> classes={classes!("btn", "btn-outline-secondary", "mb-4")} to={Route::LoginSelection}>
                                    <i class="fas fa-arrow-left me-2"></i>{"Back to Role Selection"}
                                </Link<Route>>
                                <h2 class="role-title mb-2">{format!("{} Login", role.label())}</h2>
                                <p class="role-description text-muted">{description}</p>
                            </div>
                            <div class="login-card">
                                <form class="login-form" onsubmit={on_submit}>
                                    <Field label="Email Address" name="email" input_type="email"
                                        placeholder="Enter your email" value={(*email).clone()} oninput={on_email} />
                                    <Field label="Password" name="password" input_type="password"
                                        placeholder="Enter your password" value={(*password).clone()} oninput={on_password} />
                                    <button type="submit" class="btn btn-success btn-lg w-100" disabled={auth.busy}>
                                        if auth.busy {
                                            <span class="spinner-border spinner-border-sm me-2"></span>
                                        }
                                        {"Login"}
                                    </button>
                                </form>
                                if CONFIG.auth_mode == AuthMode::Demo {
                                    <div class="alert alert-light border small mt-3 mb-0">
                                        <i class="fas fa-info-circle me-2"></i>
                                        {format!("Demo account: {} / {}", demo_account(role).email, DEMO_PASSWORD)}
                                    </div>
                                }
                                if let Some(signup) = Route::signup_for(role) {
                                    <p class="text-center mt-3 mb-0">
                                        {"New here? "}
                                        <Link<Route> to={signup}>{"Create an account"}</Link<Route>>
                                    </p>
                                }
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
