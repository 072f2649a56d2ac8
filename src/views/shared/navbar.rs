use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth;
use crate::models::Role;
use crate::router::Route;
use crate::utils::APP_NAME;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let auth = use_auth();
    let expanded = use_state(|| false);

    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };
    let on_logout = {
        let logout = auth.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    let public_links = [
        (Route::Home, "Home"),
        (Route::About, "About"),
        (Route::Services, "Services"),
        (Route::Contact, "Contact"),
    ];

    let account = match &auth.user {
        Some(user) => html! {
            <ul class="navbar-nav ms-auto align-items-center">
                <li class="nav-item">
                    <Link<Route> classes={classes!("nav-link")} to={Route::dashboard_for(user.role)}>{"Dashboard"}</Link<Route>>
                </li>
                if user.role == Role::Farmer {
                    <li class="nav-item">
                        <Link<Route> classes={classes!("nav-link")} to={Route::Message}>{"Messages"}</Link<Route>>
                    </li>
                }
                <li class="nav-item">
                    <Link<Route> classes={classes!("nav-link")} to={Route::Settings}>{"Settings"}</Link<Route>>
                </li>
                <li class="nav-item">
                    <Link<Route> classes={classes!("nav-link", "d-flex", "align-items-center")} to={Route::Profile}>
                        <img src={user.avatar()} alt="avatar" class="rounded-circle me-2" width="32" height="32" />
                        <span>{user.first_name().to_string()}</span>
                        <span class="badge bg-light text-success ms-2">{user.role.label()}</span>
                    </Link<Route>>
                </li>
                <li class="nav-item">
                    <button class="btn btn-outline-light btn-sm ms-2" onclick={on_logout}>
                        <i class="fas fa-sign-out-alt me-1"></i>{"Logout"}
                    </button>
                </li>
            </ul>
        },
        None => html! {
            <ul class="navbar-nav ms-auto">
                <li class="nav-item">
                    <Link<Route> classes={classes!("btn", "btn-light", "btn-sm")} to={Route::LoginSelection}>{"Login"}</Link<Route>>
                </li>
            </ul>
        },
    };

    html! {
        <nav class="navbar navbar-expand-lg navbar-dark bg-success sticky-top">
            <div class="container-fluid">
                <Link<Route> classes={classes!("navbar-brand", "fw-bold")} to={Route::Home}>
                    <i class="fas fa-seedling me-2"></i>{APP_NAME}
                </Link<Route>>
                <button class="navbar-toggler" type="button" aria-label="Toggle navigation" onclick={toggle}>
                    <span class="navbar-toggler-icon"></span>
                </button>
                <div class={classes!("collapse", "navbar-collapse", (*expanded).then_some("show"))}>
                    <ul class="navbar-nav me-auto">
                        { for public_links.into_iter().map(|(route, label)| html! {
                            <li class="nav-item">
                                <Link<Route> classes={classes!("nav-link")} to={route}>{label}</Link<Route>>
                            </li>
                        }) }
                    </ul>
                    {account}
                </div>
            </div>
        </nav>
    }
}
