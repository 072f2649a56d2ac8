// ============================================================================
// DASHBOARD VIEWMODEL - Activity filtering, derived stats, list edits
// ============================================================================
// Pure functions over dashboard data; hooks own the state and call these
// ============================================================================

use std::collections::BTreeMap;

use crate::models::{
    Activity, ActivityKind, AdminStats, AgentStats, AgentSummary, CropRecord, CropStatus, FarmNotification,
    FarmerStats, FarmerSummary, MediaRecord, MemberStatus, PaymentRecord, PaymentStatus, ReviewStatus, Role,
    SessionUser,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivitySort {
    /// Most recent first
    #[default]
    Date,
    Type,
    Message,
}

impl ActivitySort {
    pub const ALL: [ActivitySort; 3] = [ActivitySort::Date, ActivitySort::Type, ActivitySort::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivitySort::Date => "date",
            ActivitySort::Type => "type",
            ActivitySort::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivitySort::Date => "Sort by Date",
            ActivitySort::Type => "Sort by Type",
            ActivitySort::Message => "Sort by Message",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|sort| sort.as_str() == value)
            .unwrap_or_default()
    }
}

/// Search box, type filter and sort selector of a recent-activity panel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityQuery {
    pub search: String,
    /// `None` means all types
    pub kind: Option<ActivityKind>,
    pub sort: ActivitySort,
}

impl ActivityQuery {
    pub fn matches(&self, activity: &Activity) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty() || activity.message.to_lowercase().contains(&needle);
        let matches_kind = self.kind.map_or(true, |kind| activity.kind == kind);
        matches_search && matches_kind
    }

    pub fn apply(&self, activities: &[Activity]) -> Vec<Activity> {
        let mut visible: Vec<Activity> = activities.iter().filter(|a| self.matches(a)).cloned().collect();
        match self.sort {
            ActivitySort::Date => visible.sort_by_key(|a| a.minutes_ago),
            ActivitySort::Type => visible.sort_by(|a, b| a.kind.as_str().cmp(b.kind.as_str())),
            ActivitySort::Message => visible.sort_by_key(|a| a.message.to_lowercase()),
        }
        visible
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ------------------------------------------------------------------ stats

pub fn farmer_stats(crops: &[CropRecord], payments: &[PaymentRecord], notifications: &[FarmNotification]) -> FarmerStats {
    FarmerStats {
        total_crops: crops.len() as u32,
        earnings: paid_total(payments),
        unread_notifications: notifications.iter().filter(|n| !n.read).count() as u32,
        active_tasks: crops
            .iter()
            .filter(|c| matches!(c.status, CropStatus::Active | CropStatus::Approved))
            .count() as u32,
    }
}

pub fn agent_stats(
    farmers: &[FarmerSummary],
    crops: &[CropRecord],
    media: &[MediaRecord],
    payments: &[PaymentRecord],
) -> AgentStats {
    AgentStats {
        assigned_farmers: farmers.len() as u32,
        pending_approvals: crops.iter().filter(|c| c.status == CropStatus::Pending).count() as u32,
        media_requests: media.iter().filter(|m| m.status == ReviewStatus::Pending).count() as u32,
        collections: paid_total(payments),
    }
}

pub fn admin_stats(farmers: &[FarmerSummary], agents: &[AgentSummary], payments: &[PaymentRecord]) -> AdminStats {
    AdminStats {
        total_farmers: farmers.len() as u32,
        total_agents: agents.len() as u32,
        total_crops: farmers.iter().map(|f| f.crops).sum(),
        revenue: paid_total(payments),
    }
}

/// Sum of settled payments
pub fn paid_total(payments: &[PaymentRecord]) -> f64 {
    payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Paid)
        .map(PaymentRecord::total)
        .sum()
}

/// Farmers grouped by region, alphabetically
pub fn farmers_per_region(farmers: &[FarmerSummary]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for farmer in farmers {
        *counts.entry(farmer.region.as_str()).or_default() += 1;
    }
    counts.into_iter().map(|(region, n)| (region.to_string(), n)).collect()
}

/// Farmers whose name, id or region contains `search`, optionally narrowed by status
pub fn filter_farmers(farmers: &[FarmerSummary], search: &str, status: Option<MemberStatus>) -> Vec<FarmerSummary> {
    let needle = search.trim().to_lowercase();
    farmers
        .iter()
        .filter(|f| status.map_or(true, |s| f.status == s))
        .filter(|f| {
            needle.is_empty()
                || [&f.name, &f.id, &f.region]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

pub fn count_with_status(members: impl IntoIterator<Item = MemberStatus>, status: MemberStatus) -> usize {
    members.into_iter().filter(|s| *s == status).count()
}

/// Account count per role, in `Role::ALL` order
pub fn accounts_by_role(users: &[SessionUser]) -> Vec<(Role, usize)> {
    Role::ALL
        .into_iter()
        .map(|role| (role, users.iter().filter(|u| u.role == role).count()))
        .collect()
}

// ------------------------------------------------------------ list edits

/// Mark a crop approved or rejected. Returns false for unknown ids.
pub fn review_crop(crops: &mut [CropRecord], id: &str, approved: bool) -> bool {
    match crops.iter_mut().find(|c| c.id == id) {
        Some(crop) => {
            crop.status = if approved { CropStatus::Approved } else { CropStatus::Rejected };
            true
        }
        None => false,
    }
}

pub fn review_media(media: &mut [MediaRecord], id: &str, approved: bool) -> bool {
    match media.iter_mut().find(|m| m.id == id) {
        Some(item) => {
            item.status = if approved { ReviewStatus::Approved } else { ReviewStatus::Rejected };
            true
        }
        None => false,
    }
}

pub fn remove_crop(crops: &mut Vec<CropRecord>, id: &str) -> bool {
    let before = crops.len();
    crops.retain(|c| c.id != id);
    crops.len() != before
}

pub fn set_farmer_status(farmers: &mut [FarmerSummary], id: &str, status: MemberStatus) -> bool {
    match farmers.iter_mut().find(|f| f.id == id) {
        Some(farmer) => {
            farmer.status = status;
            true
        }
        None => false,
    }
}

pub fn assign_farmer(farmers: &mut [FarmerSummary], farmer_id: &str, agent: &AgentSummary) -> bool {
    match farmers.iter_mut().find(|f| f.id == farmer_id) {
        Some(farmer) => {
            farmer.agent = Some(agent.name.clone());
            true
        }
        None => false,
    }
}

/// Settle a pending payment locally. Returns false for unknown or already settled ids.
pub fn mark_payment_paid(payments: &mut [PaymentRecord], id: &str) -> bool {
    match payments.iter_mut().find(|p| p.id == id && p.status == PaymentStatus::Pending) {
        Some(payment) => {
            payment.status = PaymentStatus::Paid;
            true
        }
        None => false,
    }
}

/// Backend history wins for every id it knows; local-only rows are kept after it
pub fn merge_payment_history(current: &[PaymentRecord], history: Vec<PaymentRecord>) -> Vec<PaymentRecord> {
    let local_only: Vec<PaymentRecord> = current
        .iter()
        .filter(|p| !history.iter().any(|h| h.id == p.id))
        .cloned()
        .collect();
    let mut merged = history;
    merged.extend(local_only);
    merged
}

pub fn mark_notification_read(notifications: &mut [FarmNotification], id: u32) {
    if let Some(notification) = notifications.iter_mut().find(|n| n.id == id) {
        notification.read = true;
    }
}

/// Next free id for a locally created crop (`C004` after `C003`)
pub fn next_crop_id(crops: &[CropRecord]) -> String {
    let highest = crops
        .iter()
        .filter_map(|c| c.id.strip_prefix('C').and_then(|n| n.parse::<u64>().ok()))
        .max()
        .unwrap_or(0);
    format!("C{:03}", highest.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn default_query_sorts_newest_first() {
        let visible = ActivityQuery::default().apply(&fixtures::farmer_activities());
        let ages: Vec<u32> = visible.iter().map(|a| a.minutes_ago).collect();
        assert_eq!(ages, vec![120, 240, 1440, 2880]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let query = ActivityQuery {
            search: "PAYMENT".to_string(),
            ..Default::default()
        };
        let visible = query.apply(&fixtures::farmer_activities());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].kind, ActivityKind::Payment);
    }

    #[test]
    fn type_filter_and_sort_combine() {
        let mut activities = fixtures::agent_activities();
        activities.push(Activity {
            id: 9,
            kind: ActivityKind::Payment,
            message: "Advance payment approved".to_string(),
            minutes_ago: 5,
        });
        let query = ActivityQuery {
            search: String::new(),
            kind: Some(ActivityKind::Payment),
            sort: ActivitySort::Message,
        };
        let messages: Vec<String> = query.apply(&activities).into_iter().map(|a| a.message).collect();
        assert_eq!(messages, vec!["Advance payment approved", "Processed payment: ₹25,000"]);
    }

    #[test]
    fn type_sort_is_alphabetical_by_kind() {
        let query = ActivityQuery {
            sort: ActivitySort::Type,
            ..Default::default()
        };
        let kinds: Vec<&str> = query
            .apply(&fixtures::admin_activities())
            .iter()
            .map(|a| a.kind.as_str())
            .collect();
        assert_eq!(kinds, vec!["agent", "farmer", "report", "revenue"]);
    }

    #[test]
    fn no_match_yields_empty_list_and_reset_restores() {
        let mut query = ActivityQuery {
            search: "tractor".to_string(),
            ..Default::default()
        };
        assert!(query.apply(&fixtures::farmer_activities()).is_empty());
        query.reset();
        assert_eq!(query.apply(&fixtures::farmer_activities()).len(), 4);
        assert_eq!(ActivitySort::parse("bogus"), ActivitySort::Date);
    }

    #[test]
    fn farmer_stats_follow_the_lists() {
        let stats = farmer_stats(
            &fixtures::farmer_crops(),
            &fixtures::farmer_payments(),
            &fixtures::farmer_notifications(),
        );
        assert_eq!(stats.total_crops, 3);
        assert_eq!(stats.earnings, 11875.0 + 7000.0);
        assert_eq!(stats.unread_notifications, 3);
        assert_eq!(stats.active_tasks, 2);
    }

    #[test]
    fn agent_stats_count_pending_work() {
        let stats = agent_stats(
            &fixtures::agent_farmers(),
            &fixtures::agent_crops(),
            &fixtures::agent_media_requests(),
            &fixtures::agent_payments(),
        );
        assert_eq!(stats.assigned_farmers, 4);
        assert_eq!(stats.pending_approvals, 2);
        assert_eq!(stats.media_requests, 2);
    }

    #[test]
    fn regions_are_grouped() {
        let regions = farmers_per_region(&fixtures::admin_farmers());
        assert_eq!(regions[0], ("East Region".to_string(), 1));
        assert!(regions.contains(&("North Region".to_string(), 2)));
    }

    #[test]
    fn reviews_update_status() {
        let mut crops = fixtures::agent_crops();
        assert!(review_crop(&mut crops, "C101", true));
        assert!(review_crop(&mut crops, "C102", false));
        assert!(!review_crop(&mut crops, "nope", true));
        assert_eq!(crops[0].status, CropStatus::Approved);
        assert_eq!(crops[1].status, CropStatus::Rejected);
    }

    #[test]
    fn crop_ids_continue_the_sequence() {
        let mut crops = fixtures::farmer_crops();
        assert_eq!(next_crop_id(&crops), "C004");
        assert!(remove_crop(&mut crops, "C003"));
        assert_eq!(next_crop_id(&crops), "C003");
        assert_eq!(next_crop_id(&[]), "C001");
    }

    #[test]
    fn paying_settles_only_pending_rows() {
        let mut payments = fixtures::farmer_payments();
        assert!(mark_payment_paid(&mut payments, "P002"));
        assert_eq!(payments[1].status, PaymentStatus::Paid);
        assert!(!mark_payment_paid(&mut payments, "P002"));
        assert!(!mark_payment_paid(&mut payments, "P404"));
    }

    #[test]
    fn refreshed_history_replaces_known_payments() {
        let current = fixtures::farmer_payments();
        let mut settled = current[1].clone();
        settled.status = PaymentStatus::Paid;

        let merged = merge_payment_history(&current, vec![settled]);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].id, "P002");
        assert_eq!(merged[0].status, PaymentStatus::Paid);
        assert!(merged.iter().filter(|p| p.id == "P002").count() == 1);
        assert!(merged.iter().any(|p| p.id == "P001"));
    }

    #[test]
    fn accounts_are_counted_per_role() {
        let users = vec![
            SessionUser::new("F0001", "Asha", Role::Farmer, "East Region", "asha@example.com"),
            SessionUser::new("F0002", "Ravi", Role::Farmer, "North Region", "ravi@example.com"),
            SessionUser::new("AD001", "Admin User", Role::Admin, "All Regions", "admin@test.com"),
        ];
        assert_eq!(
            accounts_by_role(&users),
            vec![(Role::Farmer, 2), (Role::Agent, 0), (Role::Admin, 1)]
        );
    }

    #[test]
    fn large_backend_crop_ids_do_not_overflow() {
        let mut crop = fixtures::farmer_crops().remove(0);
        crop.id = "C4294967295".to_string();
        assert_eq!(next_crop_id(&[crop.clone()]), "C4294967296");
        crop.id = format!("C{}", u64::MAX);
        assert_eq!(next_crop_id(&[crop]), format!("C{}", u64::MAX));
    }

    #[test]
    fn assignment_renames_agent() {
        let mut farmers = fixtures::admin_farmers();
        let agents = fixtures::admin_agents();
        assert!(assign_farmer(&mut farmers, "F002", &agents[2]));
        assert_eq!(farmers[1].agent.as_deref(), Some("Lisa Agent"));
        assert!(set_farmer_status(&mut farmers, "F002", MemberStatus::Active));
        assert_eq!(count_with_status(farmers.iter().map(|f| f.status), MemberStatus::Active), 3);
    }

    #[test]
    fn farmer_search_and_status_filter() {
        let farmers = fixtures::agent_farmers();
        assert_eq!(filter_farmers(&farmers, "", None).len(), 4);
        let south: Vec<String> = filter_farmers(&farmers, "SOUTH", None).into_iter().map(|f| f.id).collect();
        assert_eq!(south, vec!["F002"]);
        assert_eq!(filter_farmers(&farmers, "farmer", Some(MemberStatus::Active)).len(), 2);
        assert!(filter_farmers(&farmers, "nobody", None).is_empty());
    }
}
