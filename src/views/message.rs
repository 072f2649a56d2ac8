// ============================================================================
// MESSAGE - Farmer chat with the assigned agent
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth;
use crate::models::{agent_reply, ChatMessage};
use crate::router::Route;
use crate::services::random_seed;
use crate::utils::clock_time;

const REPLY_DELAY_MS: u32 = 2000;

pub enum ChatAction {
    Send { text: String, time: String },
    Reply { text: String, time: String },
}

/// Conversation plus the "agent is typing" flag
#[derive(Clone, PartialEq, Default)]
pub struct Chat {
    pub messages: Vec<ChatMessage>,
    pub typing: bool,
}

impl Chat {
    pub fn greeting(agent: &str, time: String) -> Self {
        Self {
            messages: vec![ChatMessage {
                id: 1,
                from_agent: true,
                text: format!("Hello! I'm {}, your agricultural agent. How can I help you today?", agent),
                time,
            }],
            typing: false,
        }
    }

    fn next_id(&self) -> u64 {
        self.messages.iter().map(|m| m.id).max().unwrap_or(0) + 1
    }
}

impl Reducible for Chat {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut chat = (*self).clone();
        let id = chat.next_id();
        match action {
            ChatAction::Send { text, time } => {
                let text = text.trim().to_string();
                if text.is_empty() {
                    return self;
                }
                chat.messages.push(ChatMessage { id, from_agent: false, text, time });
                chat.typing = true;
            }
            ChatAction::Reply { text, time } => {
                chat.messages.push(ChatMessage { id, from_agent: true, text, time });
                chat.typing = false;
            }
        }
        Rc::new(chat)
    }
}

#[function_component(Message)]
pub fn message() -> Html {
    let auth = use_auth();
    let agent = auth
        .user
        .as_ref()
        .and_then(|user| user.agent.clone())
        .unwrap_or_else(|| "Agent".to_string());

    let chat = {
        let agent = agent.clone();
        use_reducer(move || Chat::greeting(&agent, clock_time()))
    };
    let draft = use_state(String::new);

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let onsubmit = {
        let chat = chat.clone();
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if draft.trim().is_empty() {
                return;
            }
            chat.dispatch(ChatAction::Send {
                text: (*draft).clone(),
                time: clock_time(),
            });
            draft.set(String::new());

            let chat = chat.clone();
            Timeout::new(REPLY_DELAY_MS, move || {
                chat.dispatch(ChatAction::Reply {
                    text: agent_reply(random_seed()).to_string(),
                    time: clock_time(),
                });
            })
            .forget();
        })
    };

    let on_call = {
        let agent = agent.clone();
        Callback::from(move |_: MouseEvent| log::info!("📞 [MESSAGE] Calling {}", agent))
    };

    html! {
        <div class="container py-4 message-page">
            <div class="card message-card shadow-sm">
                <div class="card-header bg-success text-white d-flex justify-content-between align-items-center">
                    <div class="d-flex align-items-center">
                        <Link<Route> classes={classes!("btn", "btn-outline-light", "btn-sm", "me-3")} to={Route::FarmerDashboard}>
                            <i class="fas fa-arrow-left me-1"></i>{"Back"}
                        </Link<Route>>
                        <div>
                            <h5 class="mb-0">{agent.clone()}</h5>
                            <small>{"Agricultural Agent"}</small>
                        </div>
                    </div>
                    <div>
                        <span class="badge bg-light text-success me-2">{"Available"}</span>
                        <button class="btn btn-light btn-sm" onclick={on_call}>
                            <i class="fas fa-phone me-1"></i>{"Call"}
                        </button>
                    </div>
                </div>
                <div class="card-body chat-messages" style="height: 60vh; overflow-y: auto;">
                    { for chat.messages.iter().map(|msg| {
                        let (side, bubble, muted) = if msg.from_agent {
                            ("message-received", "bg-light", "text-muted")
                        } else {
                            ("message-sent", "bg-primary text-white", "text-white-50")
                        };
                        html! {
                            <div key={msg.id} class={classes!("message", side)}>
                                <div class={classes!("message-bubble", bubble)}>
                                    <div class="message-text">{msg.text.clone()}</div>
                                    <small class={classes!("message-time", muted)}>{msg.time.clone()}</small>
                                </div>
                            </div>
                        }
                    }) }
                    if chat.typing {
                        <div class="message message-received">
                            <div class="message-bubble bg-light">
                                <div class="typing-indicator"><span></span><span></span><span></span></div>
                            </div>
                        </div>
                    }
                </div>
                <div class="card-footer">
                    <form class="d-flex" {onsubmit}>
                        <input type="text" class="form-control me-2" placeholder="Type your message..."
                            value={(*draft).clone()} {oninput} />
                        <button type="submit" class="btn btn-success" disabled={draft.trim().is_empty()}>
                            <i class="fas fa-paper-plane"></i>
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn send(chat: Rc<Chat>, text: &str) -> Rc<Chat> {
        chat.reduce(ChatAction::Send {
            text: text.to_string(),
            time: "10:00 AM".to_string(),
        })
    }

    #[test]
    fn greeting_names_the_agent() {
        let chat = Chat::greeting("Sarah Agent", "09:59 AM".to_string());
        assert_eq!(chat.messages.len(), 1);
        assert!(chat.messages[0].from_agent);
        assert!(chat.messages[0].text.contains("Sarah Agent"));
    }

    #[test]
    fn sending_sets_typing_until_reply() {
        let chat = send(Rc::new(Chat::greeting("Agent", String::new())), "  When should I harvest?  ");
        assert!(chat.typing);
        assert_eq!(chat.messages[1].text, "When should I harvest?");
        assert_eq!(chat.messages[1].id, 2);

        let chat = chat.reduce(ChatAction::Reply {
            text: agent_reply(0).to_string(),
            time: String::new(),
        });
        assert!(!chat.typing);
        assert_eq!(chat.messages.len(), 3);
        assert!(chat.messages[2].from_agent);
    }

    #[test]
    fn blank_messages_are_ignored() {
        let chat = send(Rc::new(Chat::default()), "   ");
        assert!(chat.messages.is_empty());
        assert!(!chat.typing);
    }
}
