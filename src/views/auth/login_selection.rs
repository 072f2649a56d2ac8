use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::Role;
use crate::router::Route;

fn card(role: Role) -> (&'static str, &'static str) {
    match role {
        Role::Farmer => ("fas fa-tractor", "Manage crops, payments and field updates"),
        Role::Agent => ("fas fa-user-tie", "Support farmers and review requests"),
        Role::Admin => ("fas fa-user-shield", "Administer agents, farmers and revenue"),
    }
}

#[function_component(LoginSelection)]
pub fn login_selection() -> Html {
    html! {
        <div class="container py-5">
            <h1 class="text-center mb-2">{"Choose Your Role"}</h1>
            <p class="text-center text-muted mb-5">{"Select how you want to sign in"}</p>
            <div class="row g-4 justify-content-center">
                { for Role::ALL.into_iter().map(|role| {
                    let (icon, blurb) = card(role);
                    html! {
                        <div class="col-md-4" key={role.as_str()}>
                            <div class="card h-100 text-center p-4 shadow-sm role-card">
                                <i class={classes!(icon, "fa-3x", "text-success", "mb-3")}></i>
                                <h4>{role.label()}</h4>
                                <p class="text-muted">{blurb}</p>
                                <Link<Route> classes={classes!("btn", "btn-success", "mt-auto")} to={Route::login_for(role)}>
                                    {format!("Login as {}", role.label())}
                                </Link<Route>>
                                if let Some(signup) = Route::signup_for(role) {
                                    <Link<Route> classes={classes!("btn", "btn-link", "mt-2")} to={signup}>{"Sign up"}</Link<Route>>
                                }
                            </div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
