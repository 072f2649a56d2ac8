use crate::models::{Role, SessionUser};

use super::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(Route),
}

/// Decide whether a view guarded for `required` may render for `user`.
///
/// No session goes to the required role's login (or the login selection when any
/// role is accepted); a session with another role goes home.
pub fn check_access(required: Option<Role>, user: Option<&SessionUser>) -> GuardDecision {
    match (user, required) {
        (None, Some(role)) => GuardDecision::Redirect(Route::login_for(role)),
        (None, None) => GuardDecision::Redirect(Route::LoginSelection),
        (Some(user), Some(role)) if user.role != role => GuardDecision::Redirect(Route::Home),
        (Some(_), _) => GuardDecision::Render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> SessionUser {
        SessionUser::new("X1", "Someone", role, "North Region", "x@test.com")
    }

    #[test]
    fn admin_view_sends_farmer_home() {
        let farmer = user(Role::Farmer);
        assert_eq!(
            check_access(Some(Role::Admin), Some(&farmer)),
            GuardDecision::Redirect(Route::Home)
        );
    }

    #[test]
    fn admin_view_sends_anonymous_to_admin_login() {
        assert_eq!(
            check_access(Some(Role::Admin), None),
            GuardDecision::Redirect(Route::AdminLogin)
        );
    }

    #[test]
    fn matching_role_renders() {
        for role in Role::ALL {
            assert_eq!(check_access(Some(role), Some(&user(role))), GuardDecision::Render);
        }
    }

    #[test]
    fn any_role_view() {
        assert_eq!(check_access(None, Some(&user(Role::Agent))), GuardDecision::Render);
        assert_eq!(
            check_access(None, None),
            GuardDecision::Redirect(Route::LoginSelection)
        );
    }
}
