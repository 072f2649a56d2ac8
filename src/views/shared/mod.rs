pub mod activity_panel;
pub mod ai_chatbot;
pub mod form;
pub mod navbar;
pub mod require_auth;
pub mod sidebar;
pub mod stat_card;
pub mod toast_container;

pub use activity_panel::ActivityPanel;
pub use ai_chatbot::AiChatbot;
pub use form::{bind, options, Field, SelectField, TextArea};
pub use navbar::Navbar;
pub use require_auth::RequireAuth;
pub use sidebar::{Sidebar, SidebarItem};
pub use stat_card::StatCard;
pub use toast_container::ToastContainer;
