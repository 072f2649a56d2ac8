// ============================================================================
// AGRICONNECT WEB - Farmer / agent / admin front-end
// ============================================================================
// - Models: shared data shapes (serde)
// - State: session store and toast queue, framework independent
// - Services: REST client, authentication, signup rules
// - ViewModels: pure transitions driven by the hooks
// - Views: Yew components
// ============================================================================

pub mod config;
pub mod context;
pub mod fixtures;
pub mod hooks;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use crate::config::CONFIG;
use crate::views::App;

/// Install panic and logging hooks, then mount the app on `<body>`
pub fn run() {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        let level = if CONFIG.is_production() { log::Level::Info } else { log::Level::Debug };
        wasm_logger::init(wasm_logger::Config::new(level));
    }
    log::info!(
        "🚀 AgriConnect starting ({}, auth mode {:?})",
        CONFIG.environment,
        CONFIG.auth_mode
    );

    yew::Renderer::<App>::new().render();
}
