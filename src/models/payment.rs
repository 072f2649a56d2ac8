use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Failed,
    #[serde(other)]
    Other,
}

impl PaymentStatus {
    pub fn badge_class(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "badge bg-success",
            PaymentStatus::Pending => "badge bg-warning",
            PaymentStatus::Failed => "badge bg-danger",
            PaymentStatus::Other => "badge bg-secondary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Other => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: String,
    pub service: String,
    #[serde(default)]
    pub farmer: Option<String>,
    #[serde(default)]
    pub estimated_cost: f64,
    #[serde(default)]
    pub service_fee: f64,
    #[serde(default)]
    pub profit_share: f64,
    pub status: PaymentStatus,
    #[serde(default)]
    pub date: String,
}

impl PaymentRecord {
    pub fn total(&self) -> f64 {
        self.estimated_cost + self.service_fee + self.profit_share
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrderInput {
    pub payment_id: String,
    pub amount: f64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrder {
    pub order_id: String,
    pub amount: f64,
    #[serde(default)]
    pub currency: String,
}
