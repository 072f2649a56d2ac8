pub mod auth;
pub mod crop;
pub mod dashboard;
pub mod payment;
pub mod settings;
pub mod toast;
pub mod user;

pub use auth::{ApiEnvelope, AuthPayload, ChangePasswordRequest, Credentials, LoginRequest, MeResponse, RegisterRequest};
pub use crop::{ApprovalInput, CropInput, CropRecord, CropStatus};
pub use dashboard::{
    Activity, ActivityKind, AdminStats, AgentStats, AgentSummary, AssignAgentRequest, FarmNotification,
    FarmerStats, FarmerSummary, MediaRecord, MemberStatus, Priority, ReviewInput, ReviewStatus, StatusUpdate,
};
pub use payment::{PaymentOrder, PaymentOrderInput, PaymentRecord, PaymentStatus};
pub use settings::{
    agent_reply, assistant_delay_ms, assistant_reply, ChatMessage, QuickTopic, UserSettings, ASSISTANT_CAPABILITIES,
    ASSISTANT_GREETING,
};
pub use toast::{Toast, ToastKind};
pub use user::{ProfileUpdate, Role, SessionUser};
