use crate::models::{Role, SessionUser};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SignupError {
    #[error("Please fill in the {0} field.")]
    MissingField(&'static str),
    #[error("Passwords do not match!")]
    PasswordMismatch,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Agent assigned to new farmers until the backend does real matching
pub fn assign_agent(region: &str) -> &'static str {
    if region == "North Region" {
        "Sarah Agent"
    } else {
        "Regional Agent"
    }
}

/// `F0042`, `A0007`: role prefix plus four zero-padded digits
pub fn generate_member_id(role: Role, seed: u32) -> String {
    format!("{}{:04}", role.id_prefix(), seed % 10_000)
}

pub fn random_seed() -> u32 {
    (uuid::Uuid::new_v4().as_u128() % 10_000) as u32
}

fn require(value: &str, field: &'static str) -> Result<(), SignupError> {
    if value.trim().is_empty() {
        Err(SignupError::MissingField(field))
    } else {
        Ok(())
    }
}

fn check_email(email: &str) -> Result<(), SignupError> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(SignupError::InvalidEmail),
    }
}

fn check_passwords(password: &str, confirm: &str) -> Result<(), SignupError> {
    require(password, "password")?;
    if password != confirm {
        return Err(SignupError::PasswordMismatch);
    }
    Ok(())
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FarmerSignupForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub region: String,
    pub address: String,
    pub acres: String,
    pub cultivation_start_date: String,
    pub preferred_language: String,
    pub soil_type: String,
}

impl FarmerSignupForm {
    pub fn validate(&self) -> Result<(), SignupError> {
        require(&self.name, "name")?;
        require(&self.age, "age")?;
        require(&self.gender, "gender")?;
        require(&self.phone, "phone")?;
        require(&self.email, "email")?;
        check_email(&self.email)?;
        check_passwords(&self.password, &self.confirm_password)?;
        require(&self.region, "region")?;
        require(&self.address, "address")?;
        require(&self.acres, "acres")?;
        require(&self.cultivation_start_date, "cultivation start date")?;
        require(&self.preferred_language, "preferred language")?;
        require(&self.soil_type, "soil type")?;
        Ok(())
    }

    /// Build the session user for a validated form
    pub fn into_user(self, seed: u32) -> SessionUser {
        let mut user = SessionUser::new(
            &generate_member_id(Role::Farmer, seed),
            self.name.trim(),
            Role::Farmer,
            self.region.trim(),
            self.email.trim(),
        );
        user.agent = Some(assign_agent(user.region.as_str()).to_string());
        user.phone = non_empty(&self.phone);
        user.age = non_empty(&self.age);
        user.gender = non_empty(&self.gender);
        user.address = non_empty(&self.address);
        user.acres = non_empty(&self.acres);
        user.cultivation_start_date = non_empty(&self.cultivation_start_date);
        user.preferred_language = non_empty(&self.preferred_language);
        user.soil_type = non_empty(&self.soil_type);
        user
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentSignupForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub region: String,
}

impl AgentSignupForm {
    pub fn validate(&self) -> Result<(), SignupError> {
        require(&self.name, "name")?;
        require(&self.email, "email")?;
        check_email(&self.email)?;
        require(&self.phone, "phone")?;
        check_passwords(&self.password, &self.confirm_password)?;
        require(&self.region, "region")?;
        Ok(())
    }

    pub fn into_user(self, seed: u32) -> SessionUser {
        let mut user = SessionUser::new(
            &generate_member_id(Role::Agent, seed),
            self.name.trim(),
            Role::Agent,
            self.region.trim(),
            self.email.trim(),
        );
        user.phone = non_empty(&self.phone);
        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn farmer_form() -> FarmerSignupForm {
        FarmerSignupForm {
            name: "Ravi Kumar".to_string(),
            age: "41".to_string(),
            gender: "male".to_string(),
            phone: "9876543210".to_string(),
            email: "ravi@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            region: "South Region".to_string(),
            address: "12 Canal Road".to_string(),
            acres: "4.5".to_string(),
            cultivation_start_date: "2024-06-01".to_string(),
            preferred_language: "Telugu".to_string(),
            soil_type: "Red".to_string(),
        }
    }

    #[test]
    fn complete_farmer_form_is_valid() {
        assert_eq!(farmer_form().validate(), Ok(()));
    }

    #[test]
    fn mismatched_passwords_are_rejected() {
        let mut form = farmer_form();
        form.confirm_password = "secret2".to_string();
        assert_eq!(form.validate(), Err(SignupError::PasswordMismatch));
    }

    #[test]
    fn missing_fields_are_named() {
        let mut form = farmer_form();
        form.soil_type = "  ".to_string();
        assert_eq!(form.validate(), Err(SignupError::MissingField("soil type")));
        assert_eq!(
            SignupError::MissingField("soil type").to_string(),
            "Please fill in the soil type field."
        );
    }

    #[test]
    fn email_needs_an_at_sign() {
        let mut form = AgentSignupForm {
            name: "Meena".to_string(),
            email: "meena.example.com".to_string(),
            phone: "123".to_string(),
            password: "pw".to_string(),
            confirm_password: "pw".to_string(),
            region: "East Region".to_string(),
        };
        assert_eq!(form.validate(), Err(SignupError::InvalidEmail));
        form.email = "meena@example.com".to_string();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn ids_are_prefixed_and_padded() {
        assert_eq!(generate_member_id(Role::Farmer, 42), "F0042");
        assert_eq!(generate_member_id(Role::Agent, 7), "A0007");
        assert_eq!(generate_member_id(Role::Farmer, 123_456), "F3456");
        assert!(random_seed() < 10_000);
    }

    #[test]
    fn farmer_gets_agent_by_region() {
        let south = farmer_form().into_user(42);
        assert_eq!(south.id, "F0042");
        assert_eq!(south.role, Role::Farmer);
        assert_eq!(south.agent.as_deref(), Some("Regional Agent"));
        assert_eq!(south.soil_type.as_deref(), Some("Red"));

        let mut north = farmer_form();
        north.region = "North Region".to_string();
        assert_eq!(north.into_user(1).agent.as_deref(), Some("Sarah Agent"));
    }
}
