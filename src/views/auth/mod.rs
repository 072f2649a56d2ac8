pub mod agent_signup;
pub mod farmer_signup;
pub mod login_selection;
pub mod login_view;

pub use agent_signup::AgentSignup;
pub use farmer_signup::FarmerSignup;
pub use login_selection::LoginSelection;
pub use login_view::LoginView;
