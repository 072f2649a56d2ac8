use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Farmer,
    Agent,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Farmer, Role::Agent, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Farmer => "farmer",
            Role::Agent => "agent",
            Role::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Farmer => "Farmer",
            Role::Agent => "Agent",
            Role::Admin => "Admin",
        }
    }

    /// Prefix used for generated member ids (`F0042`, `A0007`, `AD0001`)
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Role::Farmer => "F",
            Role::Agent => "A",
            Role::Admin => "AD",
        }
    }

    pub fn default_avatar(&self) -> &'static str {
        match self {
            Role::Farmer => "https://randomuser.me/api/portraits/men/32.jpg",
            Role::Agent => "https://randomuser.me/api/portraits/men/45.jpg",
            Role::Admin => "https://randomuser.me/api/portraits/women/65.jpg",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "farmer" => Ok(Role::Farmer),
            "agent" => Ok(Role::Agent),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// The authenticated user held by the session store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,

    // Signup extras
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acres: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultivation_start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_type: Option<String>,
}

impl SessionUser {
    pub fn new(id: &str, name: &str, role: Role, region: &str, email: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            role,
            region: region.to_string(),
            email: email.to_string(),
            profile_pic: None,
            phone: None,
            agent: None,
            address: None,
            age: None,
            gender: None,
            acres: None,
            cultivation_start_date: None,
            preferred_language: None,
            soil_type: None,
        }
    }

    /// Profile picture, falling back to the role's default avatar
    pub fn avatar(&self) -> String {
        self.profile_pic
            .clone()
            .filter(|pic| !pic.is_empty())
            .unwrap_or_else(|| self.role.default_avatar().to_string())
    }

    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// Editable subset of a session user (profile form)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub region: String,
    pub profile_pic: String,
}

impl ProfileUpdate {
    pub fn from_user(user: &SessionUser) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            region: user.region.clone(),
            profile_pic: user.avatar(),
        }
    }

    /// Merge the edited fields over `user`
    pub fn apply_to(&self, user: &SessionUser) -> SessionUser {
        let mut updated = user.clone();
        updated.name = self.name.trim().to_string();
        updated.email = self.email.trim().to_string();
        updated.region = self.region.trim().to_string();
        updated.profile_pic = Some(self.profile_pic.clone()).filter(|pic| !pic.is_empty());
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_and_displays() {
        assert_eq!("Farmer".parse::<Role>().unwrap(), Role::Farmer);
        assert_eq!(" admin ".parse::<Role>().unwrap(), Role::Admin);
        assert!("guest".parse::<Role>().is_err());
        assert_eq!(Role::Agent.to_string(), "agent");
    }

    #[test]
    fn user_serializes_camel_case_and_skips_empty_extras() {
        let mut user = SessionUser::new("F001", "John Farmer", Role::Farmer, "North Region", "farmer@test.com");
        user.profile_pic = Some("pic.png".to_string());
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["role"], "farmer");
        assert_eq!(json["profilePic"], "pic.png");
        assert!(json.get("soilType").is_none());
    }

    #[test]
    fn user_reads_minimal_backend_payload() {
        let user: SessionUser =
            serde_json::from_str(r#"{"id":"AD001","name":"Admin User","role":"admin"}"#).unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.region, "");
        assert_eq!(user.avatar(), Role::Admin.default_avatar());
    }

    #[test]
    fn profile_update_replaces_editable_fields_only() {
        let user = SessionUser::new("A001", "Sarah Agent", Role::Agent, "North Region", "agent@test.com");
        let mut form = ProfileUpdate::from_user(&user);
        form.name = "  Sarah K. Agent ".to_string();
        form.region = "South Region".to_string();
        form.profile_pic.clear();

        let updated = form.apply_to(&user);
        assert_eq!(updated.id, "A001");
        assert_eq!(updated.role, Role::Agent);
        assert_eq!(updated.name, "Sarah K. Agent");
        assert_eq!(updated.region, "South Region");
        assert_eq!(updated.profile_pic, None);
        assert_eq!(updated.first_name(), "Sarah");
    }
}
