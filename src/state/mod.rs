// ============================================================================
// STATE MODULE - Shared state for session, notifications and the assistant
// ============================================================================

pub mod assistant_state;
pub mod reactivity;
pub mod session_state;
pub mod toast_state;

pub use assistant_state::*;
pub use reactivity::*;
pub use session_state::*;
pub use toast_state::*;
