// ============================================================================
// ROUTER - Route table and role guard
// ============================================================================

pub mod guard;
pub mod routes;

pub use guard::{check_access, GuardDecision};
pub use routes::Route;
