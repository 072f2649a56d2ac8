pub mod app;
pub mod auth;
pub mod dashboards;
pub mod message;
pub mod pages;
pub mod profile;
pub mod settings;
pub mod shared;

pub use app::App;
