use std::rc::Rc;

use yew::functional::Reducible;

use crate::models::{ChatMessage, ASSISTANT_CAPABILITIES, ASSISTANT_GREETING};

pub enum AssistantAction {
    Toggle,
    /// Opened from the services page: open and list what the assistant covers
    OpenWithInsights { time: String },
    Ask { text: String, time: String },
    Answer { text: String, time: String },
}

/// Floating assistant panel: visibility, conversation and unanswered questions
#[derive(Clone, PartialEq, Debug)]
pub struct AssistantChat {
    pub open: bool,
    pub messages: Vec<ChatMessage>,
    pending: u32,
}

impl AssistantChat {
    pub fn new(time: String) -> Self {
        Self {
            open: false,
            messages: vec![ChatMessage {
                id: 1,
                from_agent: true,
                text: ASSISTANT_GREETING.to_string(),
                time,
            }],
            pending: 0,
        }
    }

    /// An answer is still on its way
    pub fn is_typing(&self) -> bool {
        self.pending > 0
    }

    fn push(&mut self, from_agent: bool, text: String, time: String) {
        let id = self.messages.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        self.messages.push(ChatMessage { id, from_agent, text, time });
    }
}

impl Reducible for AssistantChat {
    type Action = AssistantAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut chat = (*self).clone();
        match action {
            AssistantAction::Toggle => chat.open = !chat.open,
            AssistantAction::OpenWithInsights { time } => {
                chat.open = true;
                // Repeated clicks don't stack the same list
                let listed = chat.messages.last().is_some_and(|m| m.text == ASSISTANT_CAPABILITIES);
                if !listed {
                    chat.push(true, ASSISTANT_CAPABILITIES.to_string(), time);
                }
            }
            AssistantAction::Ask { text, time } => {
                let text = text.trim().to_string();
                if text.is_empty() {
                    return self;
                }
                chat.push(false, text, time);
                chat.pending += 1;
            }
            AssistantAction::Answer { text, time } => {
                chat.push(true, text, time);
                chat.pending = chat.pending.saturating_sub(1);
            }
        }
        Rc::new(chat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{assistant_reply, QuickTopic};

    fn fresh() -> Rc<AssistantChat> {
        Rc::new(AssistantChat::new("09:00 AM".to_string()))
    }

    fn ask(chat: Rc<AssistantChat>, text: &str) -> Rc<AssistantChat> {
        chat.reduce(AssistantAction::Ask {
            text: text.to_string(),
            time: "09:01 AM".to_string(),
        })
    }

    fn answer(chat: Rc<AssistantChat>, seed: u32) -> Rc<AssistantChat> {
        chat.reduce(AssistantAction::Answer {
            text: assistant_reply(seed).to_string(),
            time: "09:02 AM".to_string(),
        })
    }

    #[test]
    fn starts_closed_with_a_greeting() {
        let chat = fresh();
        assert!(!chat.open);
        assert!(!chat.is_typing());
        assert_eq!(chat.messages.len(), 1);
        assert_eq!(chat.messages[0].text, ASSISTANT_GREETING);
    }

    #[test]
    fn toggle_flips_visibility() {
        let chat = fresh().reduce(AssistantAction::Toggle);
        assert!(chat.open);
        assert!(!chat.reduce(AssistantAction::Toggle).open);
    }

    #[test]
    fn question_shows_typing_until_answered() {
        let chat = ask(fresh(), "  When should I sow wheat?  ");
        assert!(chat.is_typing());
        assert_eq!(chat.messages[1].text, "When should I sow wheat?");
        assert!(!chat.messages[1].from_agent);

        let chat = answer(chat, 4);
        assert!(!chat.is_typing());
        assert_eq!(chat.messages.len(), 3);
        assert!(chat.messages[2].from_agent);
        assert_eq!(chat.messages[2].id, 3);
    }

    #[test]
    fn overlapping_questions_keep_typing_until_the_last_answer() {
        let chat = ask(fresh(), QuickTopic::Weather.question());
        let chat = ask(chat, QuickTopic::Pests.question());
        let chat = answer(chat, 0);
        assert!(chat.is_typing());
        let chat = answer(chat, 1);
        assert!(!chat.is_typing());
        assert_eq!(chat.messages.len(), 5);
    }

    #[test]
    fn blank_questions_are_ignored() {
        let chat = ask(fresh(), "   ");
        assert_eq!(chat.messages.len(), 1);
        assert!(!chat.is_typing());
    }

    #[test]
    fn insights_open_the_panel_and_list_topics_once() {
        let time = || "10:00 AM".to_string();
        let chat = fresh().reduce(AssistantAction::OpenWithInsights { time: time() });
        assert!(chat.open);
        assert_eq!(chat.messages.last().map(|m| m.text.as_str()), Some(ASSISTANT_CAPABILITIES));

        let chat = chat.reduce(AssistantAction::OpenWithInsights { time: time() });
        assert_eq!(chat.messages.len(), 2);
    }
}
