use serde::{Deserialize, Serialize};

/// Category of a recent-activity entry. Each dashboard uses its own subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Agent,
    Crop,
    Farmer,
    Notification,
    Payment,
    Report,
    Request,
    Revenue,
    Support,
    Upload,
}

impl ActivityKind {
    pub const FARMER: [ActivityKind; 4] = [
        ActivityKind::Crop,
        ActivityKind::Upload,
        ActivityKind::Payment,
        ActivityKind::Notification,
    ];
    pub const AGENT: [ActivityKind; 4] = [
        ActivityKind::Farmer,
        ActivityKind::Support,
        ActivityKind::Payment,
        ActivityKind::Request,
    ];
    pub const ADMIN: [ActivityKind; 4] = [
        ActivityKind::Agent,
        ActivityKind::Farmer,
        ActivityKind::Revenue,
        ActivityKind::Report,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Agent => "agent",
            ActivityKind::Crop => "crop",
            ActivityKind::Farmer => "farmer",
            ActivityKind::Notification => "notification",
            ActivityKind::Payment => "payment",
            ActivityKind::Report => "report",
            ActivityKind::Request => "request",
            ActivityKind::Revenue => "revenue",
            ActivityKind::Support => "support",
            ActivityKind::Upload => "upload",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::FARMER
            .into_iter()
            .chain(Self::AGENT)
            .chain(Self::ADMIN)
            .find(|kind| kind.as_str() == value)
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::Agent => "fas fa-user-tie text-success",
            ActivityKind::Crop => "fas fa-check-circle text-success",
            ActivityKind::Farmer => "fas fa-user-plus text-success",
            ActivityKind::Notification => "fas fa-bell text-warning",
            ActivityKind::Payment => "fas fa-rupee-sign text-primary",
            ActivityKind::Report => "fas fa-file-alt text-info",
            ActivityKind::Request => "fas fa-question-circle text-info",
            ActivityKind::Revenue => "fas fa-chart-line text-warning",
            ActivityKind::Support => "fas fa-headset text-primary",
            ActivityKind::Upload => "fas fa-upload text-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: u32,
    pub kind: ActivityKind,
    pub message: String,
    pub minutes_ago: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Alert shown in a dashboard's notification panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmNotification {
    pub id: u32,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub read: bool,
    pub priority: Priority,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmerStats {
    pub total_crops: u32,
    pub earnings: f64,
    pub unread_notifications: u32,
    pub active_tasks: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentStats {
    pub assigned_farmers: u32,
    pub pending_approvals: u32,
    pub media_requests: u32,
    pub collections: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_farmers: u32,
    pub total_agents: u32,
    pub total_crops: u32,
    pub revenue: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Pending,
    Inactive,
    Suspended,
}

impl MemberStatus {
    pub const ALL: [MemberStatus; 4] = [
        MemberStatus::Active,
        MemberStatus::Pending,
        MemberStatus::Inactive,
        MemberStatus::Suspended,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Pending => "pending",
            MemberStatus::Inactive => "inactive",
            MemberStatus::Suspended => "suspended",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            MemberStatus::Active => "badge bg-success",
            MemberStatus::Pending => "badge bg-warning",
            MemberStatus::Inactive => "badge bg-secondary",
            MemberStatus::Suspended => "badge bg-danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmerSummary {
    pub id: String,
    pub name: String,
    pub region: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub crops: u32,
    pub status: MemberStatus,
    #[serde(default)]
    pub agent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSummary {
    pub id: String,
    pub name: String,
    pub region: String,
    #[serde(default)]
    pub farmers: u32,
    pub status: MemberStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn badge_class(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "badge bg-warning",
            ReviewStatus::Approved => "badge bg-success",
            ReviewStatus::Rejected => "badge bg-danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRecord {
    pub id: String,
    #[serde(default)]
    pub farmer: String,
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
    pub status: ReviewStatus,
    #[serde(default)]
    pub submitted: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewInput {
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignAgentRequest {
    pub farmer_id: String,
    pub agent_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: MemberStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_status_round_trips_through_select_values() {
        for status in MemberStatus::ALL {
            assert_eq!(MemberStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(MemberStatus::parse("all"), None);
    }

    #[test]
    fn activity_kinds_parse_and_reject_unknown() {
        assert_eq!(ActivityKind::parse("upload"), Some(ActivityKind::Upload));
        assert_eq!(ActivityKind::parse("all"), None);
        assert!(ActivityKind::ADMIN.contains(&ActivityKind::Revenue));
    }
}
