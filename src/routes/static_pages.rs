use askama::Template;
use axum::response::{Html, IntoResponse};

use crate::error::{AppError, AppResult};
use crate::models::{DriveWheels, DriveWheelsOption};

// Define the template struct for the dashboard page
#[derive(Template)]
#[template(path = "index.html")]
struct DashboardTemplate {
    options: Vec<DriveWheelsOption>,
    default_value: &'static str,
}

// Handler function to render the dashboard page
pub async fn dashboard_page() -> AppResult<impl IntoResponse> {
    let template = DashboardTemplate {
        options: DriveWheels::ALL.iter().copied().map(Into::into).collect(),
        default_value: DriveWheels::Rwd.value(),
    };
    match template.render() {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            tracing::error!("Failed to render dashboard template: {}", e);
            // Convert Askama error into our AppError
            Err(AppError::InternalServerError(anyhow::Error::new(e)))
        }
    }
}
