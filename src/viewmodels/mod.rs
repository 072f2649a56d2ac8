pub mod auth_viewmodel;
pub mod dashboard_viewmodel;

pub use auth_viewmodel::AuthViewModel;
pub use dashboard_viewmodel::{ActivityQuery, ActivitySort};
