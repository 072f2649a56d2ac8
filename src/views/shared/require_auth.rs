use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::use_session;
use crate::models::Role;
use crate::router::{check_access, GuardDecision, Route};

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    /// Any signed-in user passes when unset
    #[prop_or_default]
    pub role: Option<Role>,
    pub children: Children,
}

/// Render children only for a session allowed by `role`; otherwise redirect
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let session = use_session();
    let user = session.user();

    match check_access(props.role, user.as_ref()) {
        GuardDecision::Render => html! { <>{props.children.clone()}</> },
        GuardDecision::Redirect(to) => {
            log::info!("🔒 [GUARD] Redirecting to {}", to.to_path());
            html! { <Redirect<Route> {to} /> }
        }
    }
}
