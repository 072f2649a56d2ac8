pub mod use_auth;
pub mod use_dashboard;
pub mod use_reactive;

pub use use_auth::{report_api_error, use_auth, UseAuthHandle};
pub use use_dashboard::{
    use_admin_data, use_agent_data, use_farmer_data, use_remote_sync, AdminData, AgentData, FarmerData, RemoteSync,
};
pub use use_reactive::use_reactive;
