pub mod api_client;
pub mod auth_service;
pub mod signup_service;

pub use api_client::{ApiClient, ApiError};
pub use auth_service::{authenticate_demo, demo_account, AuthError, DemoAccount, LoginOutcome, DEMO_ACCOUNTS};
pub use signup_service::{assign_agent, generate_member_id, random_seed, AgentSignupForm, FarmerSignupForm, SignupError};
