// ============================================================================
// DASHBOARD DATA HOOKS - Demo fixtures first, backend refresh in remote mode
// ============================================================================

use std::future::Future;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{AuthMode, CONFIG};
use crate::context::{use_session, use_toast, SessionContext, ToastContext};
use crate::fixtures;
use crate::hooks::report_api_error;
use crate::models::{
    Activity, AdminStats, AgentStats, AgentSummary, CropRecord, FarmNotification, FarmerStats, FarmerSummary,
    MediaRecord, PaymentRecord, SessionUser,
};
use crate::models::ToastKind;
use crate::services::{ApiClient, ApiError, DEMO_ACCOUNTS};

#[derive(Clone, PartialEq)]
pub struct FarmerData {
    pub crops: Vec<CropRecord>,
    pub payments: Vec<PaymentRecord>,
    pub notifications: Vec<FarmNotification>,
    pub media: Vec<MediaRecord>,
    pub activities: Vec<Activity>,
    /// Backend figures; derived from the lists when absent
    pub stats: Option<FarmerStats>,
}

impl FarmerData {
    pub fn demo() -> Self {
        Self {
            crops: fixtures::farmer_crops(),
            payments: fixtures::farmer_payments(),
            notifications: fixtures::farmer_notifications(),
            media: fixtures::farmer_media(),
            activities: fixtures::farmer_activities(),
            stats: None,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct AgentData {
    pub farmers: Vec<FarmerSummary>,
    pub crops: Vec<CropRecord>,
    pub payments: Vec<PaymentRecord>,
    pub media: Vec<MediaRecord>,
    pub activities: Vec<Activity>,
    pub stats: Option<AgentStats>,
}

impl AgentData {
    pub fn demo() -> Self {
        Self {
            farmers: fixtures::agent_farmers(),
            crops: fixtures::agent_crops(),
            payments: fixtures::agent_payments(),
            media: fixtures::agent_media_requests(),
            activities: fixtures::agent_activities(),
            stats: None,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct AdminData {
    pub farmers: Vec<FarmerSummary>,
    pub agents: Vec<AgentSummary>,
    /// Every registered account, all roles
    pub users: Vec<SessionUser>,
    pub payments: Vec<PaymentRecord>,
    pub activities: Vec<Activity>,
    pub stats: Option<AdminStats>,
}

impl AdminData {
    pub fn demo() -> Self {
        Self {
            farmers: fixtures::admin_farmers(),
            agents: fixtures::admin_agents(),
            users: DEMO_ACCOUNTS.iter().map(|account| account.to_user()).collect(),
            payments: fixtures::admin_payments(),
            activities: fixtures::admin_activities(),
            stats: None,
        }
    }
}

/// Seed with fixtures, then in remote mode replace them with `fetch`'s result.
/// Failures go through the session so a 401 logs the user out.
#[hook]
fn use_remote_data<T, Fut>(seed: fn() -> T, fetch: fn(ApiClient, T) -> Fut) -> UseStateHandle<T>
where
    T: Clone + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let data = use_state(seed);
    let session = use_session();
    let toasts = use_toast();
    let navigator = use_navigator();

    {
        let data = data.clone();
        use_effect_with((), move |_| {
            if CONFIG.auth_mode == AuthMode::Remote {
                let current = (*data).clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match fetch(ApiClient::new(), current).await {
                        Ok(fresh) => {
                            log::info!("✅ [DASHBOARD] Loaded backend data");
                            data.set(fresh);
                        }
                        Err(e) => {
                            log::error!("❌ [DASHBOARD] Falling back to demo data: {}", e);
                            if let (Some(route), Some(navigator)) = (report_api_error(&session, &toasts, &e), navigator) {
                                navigator.push(&route);
                            }
                        }
                    }
                });
            }
            || ()
        });
    }

    data
}

async fn fetch_farmer(api: ApiClient, mut data: FarmerData) -> Result<FarmerData, ApiError> {
    data.stats = Some(api.farmer_stats().await?);
    data.crops = api.farmer_crops().await?;
    data.payments = api.farmer_payments().await?;
    data.media = api.farmer_media().await?;
    Ok(data)
}

async fn fetch_agent(api: ApiClient, mut data: AgentData) -> Result<AgentData, ApiError> {
    data.stats = Some(api.agent_stats().await?);
    data.farmers = api.agent_farmers().await?;
    data.crops = api.agent_crops().await?;
    data.payments = api.agent_payments().await?;
    data.media = api.agent_media_requests().await?;
    Ok(data)
}

async fn fetch_admin(api: ApiClient, mut data: AdminData) -> Result<AdminData, ApiError> {
    data.stats = Some(api.admin_stats().await?);
    data.farmers = api.admin_farmers().await?;
    data.agents = api.admin_agents().await?;
    data.users = api.admin_users().await?;
    data.payments = api.payment_history().await?;
    Ok(data)
}

#[hook]
pub fn use_farmer_data() -> UseStateHandle<FarmerData> {
    use_remote_data(FarmerData::demo, fetch_farmer)
}

#[hook]
pub fn use_agent_data() -> UseStateHandle<AgentData> {
    use_remote_data(AgentData::demo, fetch_agent)
}

#[hook]
pub fn use_admin_data() -> UseStateHandle<AdminData> {
    use_remote_data(AdminData::demo, fetch_admin)
}

/// Mirrors dashboard edits to the backend in remote mode.
/// Local state is updated by the caller first; a failed call only reports.
#[derive(Clone)]
pub struct RemoteSync {
    session: SessionContext,
    toasts: ToastContext,
    navigator: Option<Navigator>,
}

impl RemoteSync {
    pub fn is_remote(&self) -> bool {
        CONFIG.auth_mode == AuthMode::Remote
    }

    pub fn run<T, F, Fut>(&self, action: &'static str, call: F)
    where
        T: 'static,
        F: FnOnce(ApiClient) -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        self.run_then(action, call, |_| ());
    }

    /// Like `run`, handing the backend's answer to `on_ok`
    pub fn run_then<T, F, Fut, K>(&self, action: &'static str, call: F, on_ok: K)
    where
        T: 'static,
        F: FnOnce(ApiClient) -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
        K: FnOnce(T) + 'static,
    {
        if !self.is_remote() {
            log::debug!("🧪 [DASHBOARD] {} kept local (demo mode)", action);
            return;
        }
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match call(ApiClient::new()).await {
                Ok(answer) => {
                    log::info!("✅ [DASHBOARD] {} synced", action);
                    on_ok(answer);
                }
                Err(e) => {
                    log::error!("❌ [DASHBOARD] {} failed: {}", action, e);
                    if let (Some(route), Some(navigator)) =
                        (report_api_error(&this.session, &this.toasts, &e), &this.navigator)
                    {
                        navigator.push(&route);
                    }
                }
            }
        });
    }

    pub fn toast(&self, message: &str, kind: ToastKind) {
        self.toasts.show(message, kind);
    }
}

#[hook]
pub fn use_remote_sync() -> RemoteSync {
    RemoteSync {
        session: use_session(),
        toasts: use_toast(),
        navigator: use_navigator(),
    }
}
