use yew_router::prelude::*;

use crate::models::Role;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/services")]
    Services,
    #[at("/profile")]
    Profile,
    #[at("/settings")]
    Settings,
    #[at("/login-selection")]
    LoginSelection,
    #[at("/farmer-login")]
    FarmerLogin,
    #[at("/agent-login")]
    AgentLogin,
    #[at("/admin-login")]
    AdminLogin,
    #[at("/farmer-signup")]
    FarmerSignup,
    #[at("/agent-signup")]
    AgentSignup,
    #[at("/farmer-dashboard")]
    FarmerDashboard,
    #[at("/agent-dashboard")]
    AgentDashboard,
    #[at("/admin-dashboard")]
    AdminDashboard,
    #[at("/message")]
    Message,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn login_for(role: Role) -> Route {
        match role {
            Role::Farmer => Route::FarmerLogin,
            Role::Agent => Route::AgentLogin,
            Role::Admin => Route::AdminLogin,
        }
    }

    pub fn dashboard_for(role: Role) -> Route {
        match role {
            Role::Farmer => Route::FarmerDashboard,
            Role::Agent => Route::AgentDashboard,
            Role::Admin => Route::AdminDashboard,
        }
    }

    /// Signup view for roles that can self-register
    pub fn signup_for(role: Role) -> Option<Route> {
        match role {
            Role::Farmer => Some(Route::FarmerSignup),
            Role::Agent => Some(Route::AgentSignup),
            Role::Admin => None,
        }
    }

    /// Views that render full-width without the page footer
    pub fn is_app_view(&self) -> bool {
        matches!(
            self,
            Route::FarmerDashboard
                | Route::AgentDashboard
                | Route::AdminDashboard
                | Route::Message
                | Route::Profile
                | Route::Settings
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_routes_match_paths() {
        assert_eq!(Route::login_for(Role::Admin).to_path(), "/admin-login");
        assert_eq!(Route::dashboard_for(Role::Farmer).to_path(), "/farmer-dashboard");
        assert_eq!(Route::signup_for(Role::Agent), Some(Route::AgentSignup));
        assert_eq!(Route::signup_for(Role::Admin), None);
    }

    #[test]
    fn recognizes_paths() {
        assert_eq!(Route::recognize("/message"), Some(Route::Message));
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
        assert!(Route::AdminDashboard.is_app_view());
        assert!(!Route::Home.is_app_view());
    }
}
