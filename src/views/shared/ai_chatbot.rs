use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::context::use_assistant;
use crate::models::QuickTopic;

/// Robot button in the corner; expands into the assistant conversation
#[function_component(AiChatbot)]
pub fn ai_chatbot() -> Html {
    let draft = use_state(String::new);
    let Some(assistant) = use_assistant() else {
        return html! {};
    };

    let on_toggle = {
        let assistant = assistant.clone();
        Callback::from(move |_: MouseEvent| assistant.toggle())
    };

    let chat = assistant.chat();
    if !chat.open {
        return html! {
            <button class="ai-chatbot-toggle btn btn-success rounded-pill shadow position-fixed bottom-0 end-0 m-4"
                style="z-index: 1050;" onclick={on_toggle}>
                <i class="fas fa-robot me-2"></i>{"AI Assistant"}
            </button>
        };
    }

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let onsubmit = {
        let (assistant, draft) = (assistant.clone(), draft.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            assistant.ask(&draft);
            draft.set(String::new());
        })
    };

    let typing = chat.is_typing();

    html! {
        <div class="ai-chatbot-container card shadow position-fixed bottom-0 end-0 m-4"
            style="width: 360px; z-index: 1050;">
            <div class="card-header bg-success text-white d-flex justify-content-between align-items-center">
                <span><i class="fas fa-robot me-2"></i>{"AgriConnect AI"}</span>
                <button class="btn btn-sm btn-link text-white" aria-label="Close" onclick={on_toggle}>
                    <i class="fas fa-times"></i>
                </button>
            </div>
            <div class="card-body ai-chatbot-messages" style="height: 320px; overflow-y: auto;">
                { for chat.messages.iter().map(|msg| {
                    let (side, bubble) = if msg.from_agent {
                        ("justify-content-start", "bg-light")
                    } else {
                        ("justify-content-end", "bg-success text-white")
                    };
                    html! {
                        <div key={msg.id} class={classes!("d-flex", "mb-2", side)}>
                            <div class={classes!("rounded", "p-2", bubble)} style="max-width: 80%; white-space: pre-line;">
                                <div>{msg.text.clone()}</div>
                                <small class="opacity-75">{msg.time.clone()}</small>
                            </div>
                        </div>
                    }
                }) }
                if typing {
                    <div class="d-flex mb-2">
                        <div class="rounded p-2 bg-light">
                            <div class="typing-indicator"><span></span><span></span><span></span></div>
                        </div>
                    </div>
                }
            </div>
            <div class="d-flex flex-wrap gap-1 px-3 pb-2">
                { for QuickTopic::ALL.into_iter().map(|topic| {
                    let assistant = assistant.clone();
                    let onclick = Callback::from(move |_: MouseEvent| assistant.ask(topic.question()));
                    html! {
                        <button class="btn btn-sm btn-outline-success" {onclick}>
                            <i class={classes!(topic.icon(), "me-1")}></i>{topic.label()}
                        </button>
                    }
                }) }
            </div>
            <form class="card-footer" {onsubmit}>
                <div class="input-group">
                    <input type="text" class="form-control" placeholder="Ask me anything about farming..."
                        value={(*draft).clone()} disabled={typing} {oninput} />
                    <button type="submit" class="btn btn-success" disabled={typing || draft.trim().is_empty()}>
                        <i class="fas fa-paper-plane"></i>
                    </button>
                </div>
            </form>
        </div>
    }
}
