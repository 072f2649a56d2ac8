use serde::{Deserialize, Serialize};

use super::user::{Role, SessionUser};

/// Body shape returned by every backend endpoint: `{success, data, message}`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ApiEnvelope<T> {
    pub success: Option<bool>,
    pub data: Option<T>,
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(flatten)]
    pub user: SessionUser,
    pub password: String,
}

/// `data` of a successful login/register
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthPayload {
    pub token: String,
    pub user: SessionUser,
}

/// `data` of `GET /auth/me`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MeResponse {
    pub user: SessionUser,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Credentials typed into a login form
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            password: password.to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_holds_payload_without_default() {
        let body = r#"{"data":{"token":"abc","user":{"id":"A001","name":"Sarah Agent","role":"agent"}}}"#;
        let envelope: ApiEnvelope<AuthPayload> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.success, None);
        assert_eq!(envelope.message, None);
        let payload = envelope.data.unwrap();
        assert_eq!(payload.token, "abc");
        assert_eq!(payload.user.role, Role::Agent);
    }

    #[test]
    fn envelope_without_data_is_none() {
        let envelope: ApiEnvelope<MeResponse> =
            serde_json::from_str(r#"{"success":false,"message":"Not found"}"#).unwrap();
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message.as_deref(), Some("Not found"));
    }
}
