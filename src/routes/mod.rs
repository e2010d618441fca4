// Route definitions

use axum::{routing::get, Router};

use crate::AppState;

// Declare submodules for different route groups
mod api;
mod static_pages;

// create_router accepts the AppState and returns a Router; the state is
// provided to the nested routers here and consumed in main.rs.
pub fn create_router(app_state: AppState) -> Router {
    // API routes. These handlers expect AppState via the State extractor.
    let api_router = Router::new()
        .route("/drive-wheels", get(api::get_drive_wheel_options))
        .route("/charts/:drive_wheels", get(api::get_charts))
        // Provide the state to the API router
        .with_state(app_state.clone()); // Clone AppState for the nested router

    Router::new()
        // The dashboard page itself
        .route("/", get(static_pages::dashboard_page))
        // Nest the API router which already has state
        .nest("/api", api_router)
        .with_state(app_state)
}
