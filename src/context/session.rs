use yew::prelude::*;

use crate::config::{AuthMode, CONFIG};
use crate::hooks::use_reactive;
use crate::models::SessionUser;
use crate::services::{ApiClient, ApiError};
use crate::state::{ReactiveState, SessionStore};
use crate::utils::BrowserStorage;

pub type BrowserSession = SessionStore<BrowserStorage>;

/// Session store shared with every component under `SessionProvider`
#[derive(Clone)]
pub struct SessionContext {
    pub state: ReactiveState<BrowserSession>,
    version: u64,
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        self.state.ptr_eq(&other.state) && self.version == other.version
    }
}

impl SessionContext {
    pub fn user(&self) -> Option<SessionUser> {
        self.state.read(|store| store.current_user().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read(|store| store.is_authenticated())
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let state = use_reactive(|| SessionStore::restore(BrowserStorage));

    // Remote mode: confirm a restored token is still accepted
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let has_token = state.read(|store| store.token().is_some());
            if CONFIG.auth_mode == AuthMode::Remote && has_token {
                wasm_bindgen_futures::spawn_local(async move {
                    match ApiClient::new().me().await {
                        Ok(user) => {
                            if let Err(e) = state.update(|store| store.update_user(user)) {
                                log::error!("❌ [SESSION] Could not store refreshed user: {}", e);
                            }
                        }
                        Err(ApiError::Unauthorized) => {
                            log::warn!("⚠️ [SESSION] Stored token rejected, logging out");
                            state.update(|store| store.logout());
                        }
                        Err(e) => log::warn!("⚠️ [SESSION] Could not refresh user: {}", e),
                    }
                });
            }
            || ()
        });
    }

    let context = SessionContext {
        version: state.version(),
        state,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[hook]
pub fn use_session() -> SessionContext {
    // SessionProvider wraps the whole app in App
    use_context::<SessionContext>().unwrap_or_else(|| {
        log::error!("❌ [SESSION] use_session called outside SessionProvider");
        SessionContext {
            state: ReactiveState::new(SessionStore::new(BrowserStorage)),
            version: 0,
        }
    })
}
