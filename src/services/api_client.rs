// ============================================================================
// API CLIENT - HTTP only (stateless apart from the stored bearer token)
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use web_sys::FormData;

use crate::config::CONFIG;
use crate::models::{
    ApiEnvelope, AdminStats, AgentStats, AgentSummary, ApprovalInput, AssignAgentRequest, AuthPayload,
    ChangePasswordRequest, CropInput, CropRecord, FarmerStats, FarmerSummary, LoginRequest, MeResponse,
    MediaRecord, MemberStatus, PaymentOrder, PaymentOrderInput, PaymentRecord, RegisterRequest, ReviewInput,
    Role, SessionUser, StatusUpdate,
};
use crate::utils::{BrowserStorage, KeyValueStore};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error. Please try again.")]
    Network(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Session expired")]
    Unauthorized,
    #[error("Unexpected response: {0}")]
    Parse(String),
    #[error("Could not encode request: {0}")]
    Serialize(String),
}

#[derive(Debug, Clone, Copy)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Turn a raw response into the envelope's `data`
pub fn parse_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    check_status(status, body)?;
    let envelope: ApiEnvelope<T> =
        serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;
    envelope
        .data
        .ok_or_else(|| ApiError::Parse("response has no data".to_string()))
}

/// For endpoints whose only useful answer is the status; returns the message
pub fn parse_ack(status: u16, body: &str) -> Result<String, ApiError> {
    check_status(status, body)?;
    Ok(extract_message(body).unwrap_or_default())
}

fn check_status(status: u16, body: &str) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        401 => Err(ApiError::Unauthorized),
        _ => Err(ApiError::Http {
            status,
            message: extract_message(body).unwrap_or_else(|| format!("Request failed ({})", status)),
        }),
    }
}

/// Best-effort `message` field of an error body
pub fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .filter(|message| !message.is_empty())
}

/// Backend client
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        match BrowserStorage.load::<String>(&CONFIG.storage.token_key) {
            Ok(Some(token)) => builder.header("Authorization", &format!("Bearer {}", token)),
            _ => builder,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .builder(Method::Get, path)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::finish(response).await
    }

    async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .builder(method, path)
            .json(body)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::finish(response).await
    }

    async fn delete(&self, path: &str) -> Result<String, ApiError> {
        let response = self
            .builder(Method::Delete, path)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let (status, body) = Self::read(response).await?;
        parse_ack(status, &body)
    }

    async fn read(response: Response) -> Result<(u16, String), ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if status == 401 {
            // Stale token: forget it so the next visit starts logged out
            log::warn!("⚠️ [API] 401 received, clearing stored credentials");
            BrowserStorage.remove(&CONFIG.storage.token_key);
            BrowserStorage.remove(&CONFIG.storage.user_key);
        }
        Ok((status, body))
    }

    async fn finish<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let url = response.url();
        let (status, body) = Self::read(response).await?;
        let result = parse_response(status, &body);
        if let Err(e) = &result {
            log::error!("❌ [API] {} -> {}: {}", url, status, e);
        }
        result
    }

    // ---------------------------------------------------------------- auth

    pub async fn login(&self, email: &str, password: &str, role: Role) -> Result<AuthPayload, ApiError> {
        log::info!("🔐 [API] Login {} as {}", email, role);
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            role,
        };
        self.send(Method::Post, "/auth/login", &request).await
    }

    pub async fn register(&self, user: &SessionUser, password: &str) -> Result<AuthPayload, ApiError> {
        log::info!("📝 [API] Register {} ({})", user.email, user.role);
        let request = RegisterRequest {
            user: user.clone(),
            password: password.to_string(),
        };
        self.send(Method::Post, "/auth/register", &request).await
    }

    pub async fn me(&self) -> Result<SessionUser, ApiError> {
        self.get::<MeResponse>("/auth/me").await.map(|me| me.user)
    }

    pub async fn change_password(&self, current_password: &str, new_password: &str) -> Result<serde_json::Value, ApiError> {
        let request = ChangePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.send(Method::Put, "/auth/change-password", &request).await
    }

    pub async fn update_profile(&self, user: &SessionUser) -> Result<SessionUser, ApiError> {
        self.send(Method::Put, "/user/profile", user).await
    }

    // ----------------------------------------------------------- dashboards

    pub async fn farmer_stats(&self) -> Result<FarmerStats, ApiError> {
        self.get("/farmer/dashboard").await
    }

    pub async fn farmer_crops(&self) -> Result<Vec<CropRecord>, ApiError> {
        self.get("/farmer/crops").await
    }

    pub async fn farmer_payments(&self) -> Result<Vec<PaymentRecord>, ApiError> {
        self.get("/farmer/payments").await
    }

    pub async fn farmer_media(&self) -> Result<Vec<MediaRecord>, ApiError> {
        self.get("/farmer/media").await
    }

    pub async fn agent_stats(&self) -> Result<AgentStats, ApiError> {
        self.get("/agent/dashboard").await
    }

    pub async fn agent_farmers(&self) -> Result<Vec<FarmerSummary>, ApiError> {
        self.get("/agent/farmers").await
    }

    pub async fn agent_crops(&self) -> Result<Vec<CropRecord>, ApiError> {
        self.get("/agent/crops").await
    }

    pub async fn agent_payments(&self) -> Result<Vec<PaymentRecord>, ApiError> {
        self.get("/agent/payments").await
    }

    pub async fn agent_media_requests(&self) -> Result<Vec<MediaRecord>, ApiError> {
        self.get("/agent/media-requests").await
    }

    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        self.get("/admin/dashboard").await
    }

    pub async fn admin_agents(&self) -> Result<Vec<AgentSummary>, ApiError> {
        self.get("/admin/agents").await
    }

    pub async fn admin_farmers(&self) -> Result<Vec<FarmerSummary>, ApiError> {
        self.get("/admin/farmers").await
    }

    // ---------------------------------------------------------------- crops

    pub async fn create_crop(&self, crop: &CropInput) -> Result<CropRecord, ApiError> {
        self.send(Method::Post, "/crop", crop).await
    }

    pub async fn delete_crop(&self, id: &str) -> Result<String, ApiError> {
        self.delete(&format!("/crop/{}", id)).await
    }

    pub async fn approve_crop(&self, id: &str, approval: &ApprovalInput) -> Result<CropRecord, ApiError> {
        self.send(Method::Put, &format!("/crop/{}/approve", id), approval).await
    }

    // ------------------------------------------------------------- payments

    pub async fn create_order(&self, order: &PaymentOrderInput) -> Result<PaymentOrder, ApiError> {
        self.send(Method::Post, "/payment/create-order", order).await
    }

    pub async fn payment_history(&self) -> Result<Vec<PaymentRecord>, ApiError> {
        self.get("/payment/history").await
    }

    // ---------------------------------------------------------------- media

    pub async fn upload_media(&self, form: FormData) -> Result<MediaRecord, ApiError> {
        // The browser sets the multipart boundary; no Content-Type header here
        let response = self
            .builder(Method::Post, "/media/upload")
            .body(form)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::finish(response).await
    }

    pub async fn approve_media(&self, id: &str, review: &ReviewInput) -> Result<MediaRecord, ApiError> {
        self.send(Method::Put, &format!("/media/{}/approve", id), review).await
    }

    pub async fn reject_media(&self, id: &str, review: &ReviewInput) -> Result<MediaRecord, ApiError> {
        self.send(Method::Put, &format!("/media/{}/reject", id), review).await
    }

    // ---------------------------------------------------------------- users

    pub async fn admin_users(&self) -> Result<Vec<SessionUser>, ApiError> {
        self.get("/admin/users").await
    }

    pub async fn update_user_status(&self, id: &str, status: MemberStatus) -> Result<serde_json::Value, ApiError> {
        self.send(Method::Put, &format!("/admin/users/{}/status", id), &StatusUpdate { status })
            .await
    }

    pub async fn delete_user(&self, id: &str) -> Result<String, ApiError> {
        self.delete(&format!("/admin/users/{}", id)).await
    }

    pub async fn assign_agent(&self, farmer_id: &str, agent_id: &str) -> Result<serde_json::Value, ApiError> {
        let request = AssignAgentRequest {
            farmer_id: farmer_id.to_string(),
            agent_id: agent_id.to_string(),
        };
        self.send(Method::Post, "/admin/assign-agent", &request).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn data_is_unwrapped_from_envelope() {
        let body = r#"{"success":true,"data":{"token":"t","user":{"id":"F1","name":"N","role":"farmer"}},"message":"ok"}"#;
        let payload: AuthPayload = parse_response(200, body).unwrap();
        assert_eq!(payload.token, "t");
        assert_eq!(payload.user.role, Role::Farmer);
    }

    #[test]
    fn error_message_comes_from_body() {
        let err = parse_response::<AuthPayload>(400, r#"{"success":false,"message":"Email already registered"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 400,
                message: "Email already registered".to_string()
            }
        );
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn non_json_error_gets_generic_message() {
        let err = parse_response::<serde_json::Value>(502, "<html>Bad gateway</html>").unwrap_err();
        assert_eq!(err.to_string(), "Request failed (502)");
    }

    #[test]
    fn unauthorized_is_its_own_variant() {
        assert_eq!(
            parse_response::<serde_json::Value>(401, r#"{"message":"jwt expired"}"#),
            Err(ApiError::Unauthorized)
        );
    }

    #[test]
    fn missing_data_is_a_parse_error() {
        assert!(matches!(
            parse_response::<Vec<CropRecord>>(200, r#"{"success":true}"#),
            Err(ApiError::Parse(_))
        ));
    }

    #[test]
    fn ack_returns_message() {
        assert_eq!(parse_ack(200, r#"{"message":"Crop deleted"}"#).unwrap(), "Crop deleted");
        assert_eq!(parse_ack(204, "").unwrap(), "");
    }
}
