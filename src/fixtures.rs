// ============================================================================
// FIXTURES - Demo data shown when no backend is configured
// ============================================================================

use crate::models::{
    Activity, ActivityKind, AgentSummary, CropRecord, CropStatus, FarmNotification, FarmerSummary, MediaRecord,
    MemberStatus, PaymentRecord, PaymentStatus, Priority, ReviewStatus,
};

fn activity(id: u32, kind: ActivityKind, message: &str, minutes_ago: u32) -> Activity {
    Activity {
        id,
        kind,
        message: message.to_string(),
        minutes_ago,
    }
}

fn crop(id: &str, name: &str, farmer: &str, dates: (&str, &str), status: CropStatus, kg: f64, price: f64, progress: u8) -> CropRecord {
    CropRecord {
        id: id.to_string(),
        name: name.to_string(),
        farmer: Some(farmer.to_string()),
        start_date: dates.0.to_string(),
        end_date: dates.1.to_string(),
        status,
        quantity_kg: kg,
        price_per_kg: price,
        progress,
    }
}

fn payment(id: &str, service: &str, farmer: &str, amounts: (f64, f64, f64), status: PaymentStatus, date: &str) -> PaymentRecord {
    PaymentRecord {
        id: id.to_string(),
        service: service.to_string(),
        farmer: Some(farmer.to_string()),
        estimated_cost: amounts.0,
        service_fee: amounts.1,
        profit_share: amounts.2,
        status,
        date: date.to_string(),
    }
}

fn notification(id: u32, title: &str, message: &str, timestamp: &str, read: bool, priority: Priority) -> FarmNotification {
    FarmNotification {
        id,
        title: title.to_string(),
        message: message.to_string(),
        timestamp: timestamp.to_string(),
        read,
        priority,
    }
}

fn farmer(id: &str, name: &str, region: &str, phone: &str, crops: u32, status: MemberStatus, agent: &str) -> FarmerSummary {
    FarmerSummary {
        id: id.to_string(),
        name: name.to_string(),
        region: region.to_string(),
        phone: phone.to_string(),
        crops,
        status,
        agent: Some(agent.to_string()),
    }
}

fn agent(id: &str, name: &str, region: &str, farmers: u32, status: MemberStatus) -> AgentSummary {
    AgentSummary {
        id: id.to_string(),
        name: name.to_string(),
        region: region.to_string(),
        farmers,
        status,
    }
}

fn media(id: &str, farmer: &str, description: &str, status: ReviewStatus, submitted: &str) -> MediaRecord {
    MediaRecord {
        id: id.to_string(),
        farmer: farmer.to_string(),
        description: description.to_string(),
        url: None,
        status,
        submitted: submitted.to_string(),
    }
}

// ---------------------------------------------------------------- farmer

pub fn farmer_activities() -> Vec<Activity> {
    vec![
        activity(1, ActivityKind::Crop, "Registered new crop: Wheat", 120),
        activity(2, ActivityKind::Upload, "Uploaded field photo", 240),
        activity(3, ActivityKind::Payment, "Received payment: ₹15,000", 1440),
        activity(4, ActivityKind::Notification, "3 new notifications", 2880),
    ]
}

pub fn farmer_crops() -> Vec<CropRecord> {
    vec![
        crop("C001", "Rice", "John Farmer", ("2024-01-15", "2024-06-15"), CropStatus::Active, 500.0, 25.0, 65),
        crop("C002", "Wheat", "John Farmer", ("2024-02-01", "2024-07-01"), CropStatus::Completed, 300.0, 30.0, 100),
        crop("C003", "Corn", "John Farmer", ("2024-03-01", "2024-08-01"), CropStatus::Active, 400.0, 20.0, 35),
    ]
}

pub fn farmer_notifications() -> Vec<FarmNotification> {
    vec![
        notification(1, "Weather Alert", "Heavy rainfall expected in next 48 hours. Protect your crops.", "2024-01-20 10:30 AM", false, Priority::High),
        notification(2, "Crop Prediction", "Rice prices expected to increase by 15% in next month.", "2024-01-19 02:15 PM", true, Priority::Medium),
        notification(3, "Pesticide Recommendation", "Apply neem-based pesticide to prevent pest infestation.", "2024-01-18 09:45 AM", false, Priority::High),
        notification(4, "Harvest Reminder", "Your wheat crop is ready for harvest in 2 weeks.", "2024-01-17 03:20 PM", false, Priority::Medium),
    ]
}

pub fn farmer_payments() -> Vec<PaymentRecord> {
    vec![
        payment("P001", "Rice Cultivation", "John Farmer", (8000.0, 2000.0, 1875.0), PaymentStatus::Paid, "2024-01-15"),
        payment("P002", "Wheat Cultivation", "John Farmer", (6000.0, 1500.0, 1350.0), PaymentStatus::Pending, "2024-01-20"),
        payment("P003", "Corn Cultivation", "John Farmer", (5000.0, 1250.0, 750.0), PaymentStatus::Paid, "2024-01-10"),
    ]
}

pub fn farmer_media() -> Vec<MediaRecord> {
    vec![
        media("M001", "John Farmer", "Rice field, week 6", ReviewStatus::Approved, "2024-01-18"),
        media("M002", "John Farmer", "Leaf spots on corn", ReviewStatus::Pending, "2024-01-21"),
    ]
}

// ----------------------------------------------------------------- agent

pub fn agent_activities() -> Vec<Activity> {
    vec![
        activity(1, ActivityKind::Farmer, "New farmer registration: John Doe", 60),
        activity(2, ActivityKind::Support, "Resolved ticket #1234", 180),
        activity(3, ActivityKind::Payment, "Processed payment: ₹25,000", 1440),
        activity(4, ActivityKind::Request, "New support request received", 2880),
    ]
}

pub fn agent_farmers() -> Vec<FarmerSummary> {
    vec![
        farmer("F001", "John Farmer", "North Region", "+91 98765 43210", 2, MemberStatus::Active, "Sarah Agent"),
        farmer("F002", "Sarah Farmer", "South Region", "+91 98765 43211", 1, MemberStatus::Pending, "Sarah Agent"),
        farmer("F003", "Mike Farmer", "East Region", "+91 98765 43212", 2, MemberStatus::Active, "Sarah Agent"),
        farmer("F004", "Lisa Farmer", "West Region", "+91 98765 43213", 1, MemberStatus::Inactive, "Sarah Agent"),
    ]
}

pub fn agent_crops() -> Vec<CropRecord> {
    vec![
        crop("C101", "Corn", "Sarah Farmer", ("2024-01-20", "2024-06-20"), CropStatus::Pending, 250.0, 20.0, 0),
        crop("C102", "Rice", "Mike Farmer", ("2024-01-19", "2024-06-30"), CropStatus::Pending, 600.0, 25.0, 0),
        crop("C001", "Rice", "John Farmer", ("2024-01-15", "2024-06-15"), CropStatus::Active, 500.0, 25.0, 65),
    ]
}

pub fn agent_payments() -> Vec<PaymentRecord> {
    vec![
        payment("P001", "Rice Cultivation", "John Farmer", (8000.0, 2000.0, 1875.0), PaymentStatus::Paid, "2024-01-15"),
        payment("P104", "Corn Cultivation", "Mike Farmer", (5000.0, 1250.0, 750.0), PaymentStatus::Pending, "2024-01-20"),
        payment("P105", "Wheat Cultivation", "Lisa Farmer", (6000.0, 1500.0, 1350.0), PaymentStatus::Paid, "2024-01-10"),
    ]
}

pub fn agent_media_requests() -> Vec<MediaRecord> {
    vec![
        media("M002", "John Farmer", "Leaf spots on corn", ReviewStatus::Pending, "2024-01-21"),
        media("M104", "Mike Farmer", "Irrigation channel repair", ReviewStatus::Pending, "2024-01-19"),
        media("M105", "Lisa Farmer", "Wheat harvest", ReviewStatus::Approved, "2024-01-12"),
    ]
}

// ----------------------------------------------------------------- admin

pub fn admin_activities() -> Vec<Activity> {
    vec![
        activity(1, ActivityKind::Agent, "New agent approved: Sarah Wilson", 120),
        activity(2, ActivityKind::Revenue, "Monthly revenue report generated", 240),
        activity(3, ActivityKind::Report, "Analytics report completed", 1440),
        activity(4, ActivityKind::Farmer, "500 new farmers registered", 2880),
    ]
}

pub fn admin_agents() -> Vec<AgentSummary> {
    vec![
        agent("A001", "Sarah Agent", "North Region", 15, MemberStatus::Active),
        agent("A002", "Mike Agent", "South Region", 12, MemberStatus::Active),
        agent("A003", "Lisa Agent", "East Region", 18, MemberStatus::Active),
        agent("A004", "John Agent", "West Region", 10, MemberStatus::Inactive),
    ]
}

pub fn admin_farmers() -> Vec<FarmerSummary> {
    vec![
        farmer("F001", "John Farmer", "North Region", "+91 98765 43210", 3, MemberStatus::Active, "Sarah Agent"),
        farmer("F002", "Sarah Farmer", "South Region", "+91 98765 43211", 1, MemberStatus::Pending, "Mike Agent"),
        farmer("F003", "Mike Farmer", "East Region", "+91 98765 43212", 2, MemberStatus::Active, "Lisa Agent"),
        farmer("F004", "Lisa Farmer", "West Region", "+91 98765 43213", 1, MemberStatus::Inactive, "John Agent"),
        farmer("F005", "Ravi Kumar", "North Region", "+91 98765 43214", 2, MemberStatus::Suspended, "Sarah Agent"),
    ]
}

/// Every payment visible platform-wide, one entry per id
pub fn admin_payments() -> Vec<PaymentRecord> {
    let mut payments = farmer_payments();
    for payment in agent_payments() {
        if !payments.iter().any(|p| p.id == payment.id) {
            payments.push(payment);
        }
    }
    payments
}
