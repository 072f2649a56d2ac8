use crate::config::{AuthMode, CONFIG};
use crate::models::{AuthPayload, Credentials, Role, SessionUser};
use crate::utils::DEMO_PASSWORD;

use super::api_client::{ApiClient, ApiError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,
    #[error("Please enter your email and password.")]
    MissingCredentials,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// A built-in account that works without a backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoAccount {
    pub email: &'static str,
    pub id: &'static str,
    pub name: &'static str,
    pub role: Role,
    pub region: &'static str,
}

impl DemoAccount {
    pub fn to_user(&self) -> SessionUser {
        SessionUser::new(self.id, self.name, self.role, self.region, self.email)
    }
}

pub const DEMO_ACCOUNTS: [DemoAccount; 3] = [
    DemoAccount {
        email: "farmer@test.com",
        id: "F001",
        name: "John Farmer",
        role: Role::Farmer,
        region: "North Region",
    },
    DemoAccount {
        email: "agent@test.com",
        id: "A001",
        name: "Sarah Agent",
        role: Role::Agent,
        region: "North Region",
    },
    DemoAccount {
        email: "admin@test.com",
        id: "AD001",
        name: "Admin User",
        role: Role::Admin,
        region: "All Regions",
    },
];

pub fn demo_account(role: Role) -> &'static DemoAccount {
    // One demo account per role, in Role::ALL order
    match role {
        Role::Farmer => &DEMO_ACCOUNTS[0],
        Role::Agent => &DEMO_ACCOUNTS[1],
        Role::Admin => &DEMO_ACCOUNTS[2],
    }
}

/// Check credentials against the demo table. The email must belong to
/// the demo account of the role whose login page was used.
pub fn authenticate_demo(role: Role, credentials: &Credentials) -> Result<SessionUser, AuthError> {
    if !credentials.is_complete() {
        return Err(AuthError::MissingCredentials);
    }
    let account = demo_account(role);
    if credentials.email.eq_ignore_ascii_case(account.email) && credentials.password == DEMO_PASSWORD {
        Ok(account.to_user())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

/// Outcome of a successful login: the user plus a bearer token for remote sessions
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub user: SessionUser,
    pub token: Option<String>,
}

/// Log in through the configured mode. Demo accounts always work;
/// remote mode falls through to `POST /auth/login` for anything else.
pub async fn login(role: Role, credentials: Credentials) -> Result<LoginOutcome, AuthError> {
    match authenticate_demo(role, &credentials) {
        Ok(user) => {
            log::info!("✅ [AUTH] Demo login as {}", user.id);
            return Ok(LoginOutcome { user, token: None });
        }
        Err(AuthError::MissingCredentials) => return Err(AuthError::MissingCredentials),
        Err(_) if CONFIG.auth_mode == AuthMode::Demo => return Err(AuthError::InvalidCredentials),
        Err(_) => {}
    }

    let AuthPayload { token, user } = ApiClient::new()
        .login(&credentials.email, &credentials.password, role)
        .await
        .map_err(|e| match e {
            ApiError::Unauthorized => AuthError::InvalidCredentials,
            other => AuthError::Api(other),
        })?;

    if user.role != role {
        log::warn!("⚠️ [AUTH] Backend returned role {} for {} login", user.role, role);
        return Err(AuthError::InvalidCredentials);
    }
    log::info!("✅ [AUTH] Remote login as {}", user.id);
    Ok(LoginOutcome { user, token: Some(token) })
}

/// Register a signup. In demo mode the user is accepted as-is.
pub async fn register(user: SessionUser, password: String) -> Result<LoginOutcome, AuthError> {
    if CONFIG.auth_mode == AuthMode::Demo {
        log::info!("📝 [AUTH] Demo signup for {} ({})", user.id, user.role);
        return Ok(LoginOutcome { user, token: None });
    }
    let payload = ApiClient::new().register(&user, &password).await?;
    log::info!("✅ [AUTH] Registered {}", payload.user.id);
    Ok(LoginOutcome {
        user: payload.user,
        token: Some(payload.token),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_role_logs_in_as_itself() {
        for role in Role::ALL {
            let account = demo_account(role);
            let user = authenticate_demo(role, &Credentials::new(account.email, "password")).unwrap();
            assert_eq!(user.role, role);
            assert_eq!(user.email, account.email);
        }
    }

    #[test]
    fn demo_users_match_the_table() {
        let admin = authenticate_demo(Role::Admin, &Credentials::new("admin@test.com", "password")).unwrap();
        assert_eq!(admin.id, "AD001");
        assert_eq!(admin.name, "Admin User");
        assert_eq!(admin.region, "All Regions");
    }

    #[test]
    fn email_is_trimmed_and_case_insensitive() {
        let user = authenticate_demo(Role::Agent, &Credentials::new("  Agent@Test.com ", "password")).unwrap();
        assert_eq!(user.id, "A001");
    }

    #[test]
    fn wrong_password_or_role_is_rejected() {
        assert_eq!(
            authenticate_demo(Role::Farmer, &Credentials::new("farmer@test.com", "hunter2")),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            authenticate_demo(Role::Admin, &Credentials::new("farmer@test.com", "password")),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn empty_fields_are_reported_separately() {
        assert_eq!(
            authenticate_demo(Role::Farmer, &Credentials::new("", "password")),
            Err(AuthError::MissingCredentials)
        );
    }

    #[test]
    fn invalid_credentials_message_is_user_facing() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials. Please try again.");
    }
}
