use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    #[serde(alias = "error")]
    Danger,
}

impl ToastKind {
    /// Bootstrap background class
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Info => "bg-info",
            ToastKind::Success => "bg-success",
            ToastKind::Warning => "bg-warning",
            ToastKind::Danger => "bg-danger",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ToastKind::Info => "Info",
            ToastKind::Success => "Success",
            ToastKind::Warning => "Warning",
            ToastKind::Danger => "Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub visible: bool,
    pub created_at: DateTime<Utc>,
    pub duration_ms: u32,
}

impl Toast {
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + Duration::milliseconds(i64::from(self.duration_ms))
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_an_alias_for_danger() {
        assert_eq!(serde_json::from_str::<ToastKind>(r#""error""#).unwrap(), ToastKind::Danger);
        assert_eq!(serde_json::to_string(&ToastKind::Danger).unwrap(), r#""danger""#);
    }
}
