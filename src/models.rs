// Data structures shared across the dashboard
// e.g., Record, AggregateRow, ChartDescriptor

use serde::{Deserialize, Serialize};

// One row of the automobile dataset. Only the columns the dashboard consumes
// are materialized; csv/serde skips the rest of the file's columns.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Record {
    #[serde(rename = "drive-wheels")]
    pub drive_wheels: String,
    #[serde(rename = "body-style")]
    pub body_style: String,
    pub price: f64,
}

/// The drive-wheels dropdown option set. Values match the dataset's
/// `drive-wheels` column; labels are what the dropdown displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveWheels {
    Rwd,
    Fwd,
    FourWd,
}

impl DriveWheels {
    pub const ALL: [DriveWheels; 3] = [DriveWheels::Rwd, DriveWheels::Fwd, DriveWheels::FourWd];

    pub fn value(&self) -> &'static str {
        match self {
            DriveWheels::Rwd => "rwd",
            DriveWheels::Fwd => "fwd",
            DriveWheels::FourWd => "4wd",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DriveWheels::Rwd => "Rear Wheel Drive",
            DriveWheels::Fwd => "Front Wheel Drive",
            DriveWheels::FourWd => "Four Wheel Drive",
        }
    }

    // Filtering itself is permissive; this is only used to decide whether a
    // requested value is one the UI offers.
    pub fn from_value(value: &str) -> Option<DriveWheels> {
        Self::ALL.iter().copied().find(|dw| dw.value() == value)
    }
}

// One dropdown option as sent to the frontend
#[derive(Debug, Serialize, Clone)]
pub struct DriveWheelsOption {
    pub label: &'static str,
    pub value: &'static str,
}

impl From<DriveWheels> for DriveWheelsOption {
    fn from(dw: DriveWheels) -> Self {
        DriveWheelsOption {
            label: dw.label(),
            value: dw.value(),
        }
    }
}

/// One (drive-wheels, body-style) group with its mean price. Built fresh per
/// request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow {
    pub drive_wheels: String,
    pub body_style: String,
    pub mean_price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
}

/// Renderer-neutral chart data consumed by the frontend. `labels` and
/// `values` are parallel vectors, one entry per slice or bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDescriptor {
    pub kind: ChartKind,
    pub title: String,
    pub category_label: String,
    pub value_label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}
