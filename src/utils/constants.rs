/// Product name shown in the navbar and page titles
pub const APP_NAME: &str = "AgriConnect";
pub const APP_TAGLINE: &str = "Smart Farming Solutions";

/// Regions offered by the signup forms
pub const REGIONS: [&str; 4] = ["North Region", "South Region", "East Region", "West Region"];

pub const LANGUAGES: [&str; 4] = ["English", "Hindi", "Telugu", "Tamil"];
pub const SOIL_TYPES: [&str; 4] = ["Clay", "Sandy", "Loamy", "Red"];
pub const GENDERS: [(&str, &str); 3] = [("male", "Male"), ("female", "Female"), ("other", "Other")];

/// Password shared by every built-in demo account
pub const DEMO_PASSWORD: &str = "password";

pub const MSG_LOGIN_SUCCESS: &str = "Login successful!";
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials. Please try again.";
pub const MSG_SIGNUP_SUCCESS: &str = "Signup successful! Welcome to AgriConnect.";
pub const MSG_PROFILE_UPDATED: &str = "Profile updated successfully!";
pub const MSG_LOGGED_OUT: &str = "You have been logged out.";
pub const MSG_SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";
