use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropStatus {
    Pending,
    Approved,
    Active,
    Completed,
    Rejected,
    #[serde(other)]
    Other,
}

impl CropStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CropStatus::Pending => "Pending",
            CropStatus::Approved => "Approved",
            CropStatus::Active => "Active",
            CropStatus::Completed => "Completed",
            CropStatus::Rejected => "Rejected",
            CropStatus::Other => "Unknown",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            CropStatus::Pending => "badge bg-warning",
            CropStatus::Approved | CropStatus::Active => "badge bg-success",
            CropStatus::Completed => "badge bg-primary",
            CropStatus::Rejected => "badge bg-danger",
            CropStatus::Other => "badge bg-secondary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub farmer: Option<String>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    pub status: CropStatus,
    #[serde(default)]
    pub quantity_kg: f64,
    #[serde(default)]
    pub price_per_kg: f64,
    #[serde(default)]
    pub progress: u8,
}

impl CropRecord {
    pub fn total_value(&self) -> f64 {
        self.quantity_kg * self.price_per_kg
    }
}

/// Crop registration form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropInput {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub quantity_kg: String,
    pub price_per_kg: String,
}

impl CropInput {
    /// Turn the form into a pending record; the error names the offending field
    pub fn to_record(&self, id: &str) -> Result<CropRecord, String> {
        if self.name.trim().is_empty() {
            return Err("Crop name is required".to_string());
        }
        if self.start_date.is_empty() || self.end_date.is_empty() {
            return Err("Start and end dates are required".to_string());
        }
        if self.end_date < self.start_date {
            return Err("End date must be after start date".to_string());
        }
        let quantity_kg: f64 = self
            .quantity_kg
            .trim()
            .parse()
            .map_err(|_| "Quantity must be a number".to_string())?;
        let price_per_kg: f64 = self
            .price_per_kg
            .trim()
            .parse()
            .map_err(|_| "Price must be a number".to_string())?;
        if quantity_kg <= 0.0 || price_per_kg < 0.0 {
            return Err("Quantity and price must be positive".to_string());
        }

        Ok(CropRecord {
            id: id.to_string(),
            name: self.name.trim().to_string(),
            farmer: None,
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            status: CropStatus::Pending,
            quantity_kg,
            price_per_kg,
            progress: 0,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalInput {
    pub approved: bool,
    #[serde(default)]
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CropInput {
        CropInput {
            name: "Rice".to_string(),
            start_date: "2024-01-15".to_string(),
            end_date: "2024-06-15".to_string(),
            quantity_kg: "500".to_string(),
            price_per_kg: "25".to_string(),
        }
    }

    #[test]
    fn valid_form_becomes_pending_record() {
        let record = form().to_record("c-1").unwrap();
        assert_eq!(record.status, CropStatus::Pending);
        assert_eq!(record.total_value(), 12_500.0);
    }

    #[test]
    fn rejects_bad_forms() {
        let mut bad = form();
        bad.quantity_kg = "lots".to_string();
        assert_eq!(bad.to_record("x").unwrap_err(), "Quantity must be a number");

        let mut backwards = form();
        backwards.end_date = "2023-12-01".to_string();
        assert!(backwards.to_record("x").is_err());

        let mut unnamed = form();
        unnamed.name = "  ".to_string();
        assert!(unnamed.to_record("x").is_err());
    }

    #[test]
    fn unknown_status_is_tolerated() {
        let status: CropStatus = serde_json::from_str(r#""ready_for_harvest""#).unwrap();
        assert_eq!(status, CropStatus::Other);
    }
}
