// Handlers for backend API endpoints

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};

use crate::{
    aggregate, charts,
    error::AppResult,
    models::{ChartDescriptor, DriveWheels, DriveWheelsOption},
};

// Import AppState struct from the crate root
use crate::AppState;

// --- API Handlers ---

pub async fn get_drive_wheel_options() -> AppResult<impl IntoResponse> {
    tracing::debug!("[HANDLER] /api/drive-wheels - Request received.");
    let options: Vec<DriveWheelsOption> = DriveWheels::ALL.iter().copied().map(Into::into).collect();
    Ok(Json(options))
}

// Returns exactly two chart descriptors, pie first, bar second.
pub async fn get_charts(
    State(app_state): State<AppState>, // Extract AppState
    Path(drive_wheels): Path<String>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(
        "[HANDLER] /api/charts/:drive_wheels - Request received for value: {}",
        drive_wheels
    );

    // Unknown values fall through to an empty aggregation and render as
    // empty charts; worth a warning since the UI never sends them.
    if DriveWheels::from_value(&drive_wheels).is_none() {
        tracing::warn!(
            "[HANDLER] /api/charts/:drive_wheels - Unknown drive-wheels value '{}', returning empty charts.",
            drive_wheels
        );
    }

    let rows = aggregate::aggregate(&app_state.dataset, &drive_wheels);
    tracing::debug!(
        "[HANDLER] /api/charts/:drive_wheels - Aggregated {} body-style groups for '{}'.",
        rows.len(),
        drive_wheels
    );

    let response: [ChartDescriptor; 2] = [
        charts::project_pie(&rows, &drive_wheels),
        charts::project_bar(&rows, &drive_wheels),
    ];
    Ok(Json(response))
}
