// Chart projection: AggregateRows -> renderer-neutral descriptors.

use crate::models::{AggregateRow, ChartDescriptor, ChartKind};

const CATEGORY_LABEL: &str = "body-style";
const VALUE_LABEL: &str = "price";

/// Proportional view: one slice per body style, slice value = mean price.
pub fn project_pie(rows: &[AggregateRow], drive_wheels: &str) -> ChartDescriptor {
    let (labels, values) = series(rows);
    ChartDescriptor {
        kind: ChartKind::Pie,
        title: format!(
            "Price Distribution by Body Style ({})",
            drive_wheels.to_uppercase()
        ),
        category_label: CATEGORY_LABEL.to_string(),
        value_label: VALUE_LABEL.to_string(),
        labels,
        values,
    }
}

/// Comparative view: one bar per body style, x = body style, y = mean price.
pub fn project_bar(rows: &[AggregateRow], drive_wheels: &str) -> ChartDescriptor {
    let (labels, values) = series(rows);
    ChartDescriptor {
        kind: ChartKind::Bar,
        title: format!(
            "Average Price by Body Style ({})",
            drive_wheels.to_uppercase()
        ),
        category_label: CATEGORY_LABEL.to_string(),
        value_label: VALUE_LABEL.to_string(),
        labels,
        values,
    }
}

// Empty input produces empty parallel vectors; the frontend renders an empty
// chart, not an error.
fn series(rows: &[AggregateRow]) -> (Vec<String>, Vec<f64>) {
    rows.iter()
        .map(|row| (row.body_style.clone(), row.mean_price))
        .unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(body_style: &str, mean_price: f64) -> AggregateRow {
        AggregateRow {
            drive_wheels: "rwd".to_string(),
            body_style: body_style.to_string(),
            mean_price,
        }
    }

    #[test]
    fn pie_carries_one_slice_per_row() {
        let rows = vec![row("sedan", 11000.0), row("hatchback", 8000.0)];
        let pie = project_pie(&rows, "rwd");
        assert_eq!(pie.kind, ChartKind::Pie);
        assert_eq!(pie.title, "Price Distribution by Body Style (RWD)");
        assert_eq!(pie.labels, vec!["sedan", "hatchback"]);
        assert_eq!(pie.values, vec![11000.0, 8000.0]);
    }

    #[test]
    fn bar_carries_one_bar_per_row() {
        let rows = vec![row("sedan", 11000.0), row("hatchback", 8000.0)];
        let bar = project_bar(&rows, "rwd");
        assert_eq!(bar.kind, ChartKind::Bar);
        assert_eq!(bar.title, "Average Price by Body Style (RWD)");
        assert_eq!(bar.category_label, "body-style");
        assert_eq!(bar.value_label, "price");
        assert_eq!(bar.labels, vec!["sedan", "hatchback"]);
        assert_eq!(bar.values, vec![11000.0, 8000.0]);
    }

    #[test]
    fn empty_rows_produce_empty_charts_with_titled_filter() {
        let pie = project_pie(&[], "4wd");
        assert!(pie.labels.is_empty());
        assert!(pie.values.is_empty());
        assert!(pie.title.contains("4WD"));

        let bar = project_bar(&[], "4wd");
        assert!(bar.labels.is_empty());
        assert!(bar.values.is_empty());
        assert!(bar.title.contains("4WD"));
    }

    #[test]
    fn descriptor_serializes_with_frontend_field_names() {
        let bar = project_bar(&[row("sedan", 11000.0)], "rwd");
        let json = serde_json::to_value(&bar).unwrap();
        assert_eq!(json["kind"], "bar");
        assert_eq!(json["categoryLabel"], "body-style");
        assert_eq!(json["valueLabel"], "price");
        assert_eq!(json["labels"][0], "sedan");
        assert_eq!(json["values"][0], 11000.0);
    }
}
