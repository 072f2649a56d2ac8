pub mod assistant;
pub mod session;
pub mod toast;

pub use assistant::{use_assistant, AssistantContext, AssistantProvider};
pub use session::{use_session, BrowserSession, SessionContext, SessionProvider};
pub use toast::{use_toast, ToastContext, ToastProvider};
