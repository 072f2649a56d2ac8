use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::models::{assistant_delay_ms, assistant_reply};
use crate::services::random_seed;
use crate::state::{AssistantAction, AssistantChat};
use crate::utils::clock_time;

/// Floating AI assistant shared by every page
#[derive(Clone, PartialEq)]
pub struct AssistantContext {
    chat: UseReducerHandle<AssistantChat>,
}

impl AssistantContext {
    pub fn chat(&self) -> &AssistantChat {
        &self.chat
    }

    pub fn toggle(&self) {
        self.chat.dispatch(AssistantAction::Toggle);
    }

    pub fn open_with_insights(&self) {
        log::info!("🤖 [ASSISTANT] Opened from services");
        self.chat.dispatch(AssistantAction::OpenWithInsights { time: clock_time() });
    }

    /// Post a question; the canned answer lands 1-3 s later
    pub fn ask(&self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        self.chat.dispatch(AssistantAction::Ask {
            text: text.to_string(),
            time: clock_time(),
        });

        let seed = random_seed();
        let chat = self.chat.clone();
        Timeout::new(assistant_delay_ms(seed), move || {
            chat.dispatch(AssistantAction::Answer {
                text: assistant_reply(seed).to_string(),
                time: clock_time(),
            });
        })
        .forget();
    }
}

#[derive(Properties, PartialEq)]
pub struct AssistantProviderProps {
    pub children: Children,
}

#[function_component(AssistantProvider)]
pub fn assistant_provider(props: &AssistantProviderProps) -> Html {
    let chat = use_reducer(|| AssistantChat::new(clock_time()));
    let context = AssistantContext { chat };

    html! {
        <ContextProvider<AssistantContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AssistantContext>>
    }
}

#[hook]
pub fn use_assistant() -> Option<AssistantContext> {
    let context = use_context::<AssistantContext>();
    if context.is_none() {
        log::error!("❌ [ASSISTANT] use_assistant called outside AssistantProvider");
    }
    context
}
