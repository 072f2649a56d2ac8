use serde::{Deserialize, Serialize};

/// Preferences edited on the settings page, stored under the `settings` key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub push_notifications: bool,
    pub crop_type: String,
    pub farming_method: String,
    pub irrigation_type: String,
    pub location_sharing: bool,
    pub data_analytics: bool,
    pub expert_advice: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            sms_notifications: false,
            push_notifications: true,
            crop_type: "rice".to_string(),
            farming_method: "organic".to_string(),
            irrigation_type: "drip".to_string(),
            location_sharing: true,
            data_analytics: true,
            expert_advice: true,
        }
    }
}

/// One line in the farmer/agent chat or the assistant panel
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    /// Written by the agent (or the assistant), not the user
    pub from_agent: bool,
    pub text: String,
    pub time: String,
}

const AGENT_REPLIES: [&str; 5] = [
    "Thank you for your message. I'll look into this for you.",
    "I understand your concern. Let me check the details.",
    "That's a good question. Here's what I can tell you...",
    "I'll get back to you with more information soon.",
    "Thanks for reaching out. I'm here to help!",
];

/// Canned agent answer until messaging has a backend
pub fn agent_reply(seed: u32) -> &'static str {
    AGENT_REPLIES[seed as usize % AGENT_REPLIES.len()]
}

pub const ASSISTANT_GREETING: &str = "Hello! I'm AgriConnect AI Assistant. How can I help you with farming today?";

pub const ASSISTANT_CAPABILITIES: &str = "I can help you with:\n• Crop recommendations\n• Weather analysis\n• Market insights\n• Pest management\n• Soil health tips\n\nWhat would you like to know?";

const ASSISTANT_REPLIES: [&str; 10] = [
    "Based on current weather patterns, I recommend monitoring soil moisture levels for optimal crop growth.",
    "Market analysis shows favorable prices for wheat this season. Consider timing your harvest accordingly.",
    "For pest management, I suggest implementing integrated pest management (IPM) techniques.",
    "Your soil pH levels indicate good conditions for most crops. Consider crop rotation for better yields.",
    "Weather forecast suggests moderate rainfall. This is ideal for your current crop stage.",
    "Based on historical data, this is the optimal time for applying fertilizers to your crops.",
    "I recommend using drought-resistant crop varieties given the current climate conditions.",
    "Market trends indicate increasing demand for organic produce. Consider this for your next planting.",
    "Your field's location is suitable for multiple crop rotations. Let me suggest the best sequence.",
    "Current soil conditions are perfect for legume crops. This will also improve soil nitrogen levels.",
];

/// Canned farming advice until the assistant has a model behind it
pub fn assistant_reply(seed: u32) -> &'static str {
    ASSISTANT_REPLIES[seed as usize % ASSISTANT_REPLIES.len()]
}

/// Answer delay between 1 and 3 seconds
pub fn assistant_delay_ms(seed: u32) -> u32 {
    1000 + seed % 2000
}

/// Shortcut buttons under the assistant conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickTopic {
    Weather,
    Crops,
    Market,
    Pests,
}

impl QuickTopic {
    pub const ALL: [QuickTopic; 4] = [QuickTopic::Weather, QuickTopic::Crops, QuickTopic::Market, QuickTopic::Pests];

    pub fn label(&self) -> &'static str {
        match self {
            QuickTopic::Weather => "Weather",
            QuickTopic::Crops => "Crops",
            QuickTopic::Market => "Market",
            QuickTopic::Pests => "Pests",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            QuickTopic::Weather => "fas fa-cloud-sun",
            QuickTopic::Crops => "fas fa-seedling",
            QuickTopic::Market => "fas fa-chart-line",
            QuickTopic::Pests => "fas fa-bug",
        }
    }

    /// Question sent on the user's behalf
    pub fn question(&self) -> &'static str {
        match self {
            QuickTopic::Weather => "What's the current weather forecast for my location?",
            QuickTopic::Crops => "Which crops are best suited for my soil type?",
            QuickTopic::Market => "What are the current market prices for major crops?",
            QuickTopic::Pests => "How can I identify and manage common crop pests?",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_settings_fill_in_defaults() {
        let settings: UserSettings = serde_json::from_str(r#"{"smsNotifications":true}"#).unwrap();
        assert!(settings.sms_notifications);
        assert!(settings.email_notifications);
        assert_eq!(settings.irrigation_type, "drip");
    }

    #[test]
    fn replies_cycle() {
        assert_eq!(agent_reply(0), agent_reply(5));
        assert_ne!(agent_reply(0), agent_reply(1));
    }

    #[test]
    fn assistant_answers_within_one_to_three_seconds() {
        for seed in [0, 1, 999, 1999, 2000, 9_999] {
            let delay = assistant_delay_ms(seed);
            assert!((1000..3000).contains(&delay), "{} -> {}", seed, delay);
        }
        assert_eq!(assistant_reply(3), assistant_reply(13));
    }
}
