// Filter + group-by + mean over the loaded dataset.

use std::collections::HashMap;

use crate::dataset::Dataset;
use crate::models::AggregateRow;

/// Mean price per body style over the records whose `drive-wheels` equals
/// `drive_wheels`.
///
/// The filter is permissive: a value matching no records (including values
/// outside the dropdown's option set) yields an empty Vec rather than an
/// error. Rows come back in first-appearance order of the body style within
/// the filtered subset.
pub fn aggregate(dataset: &Dataset, drive_wheels: &str) -> Vec<AggregateRow> {
    let mut order: Vec<&str> = Vec::new();
    let mut sums: HashMap<&str, (f64, u32)> = HashMap::new();

    for record in dataset
        .records()
        .iter()
        .filter(|r| r.drive_wheels == drive_wheels)
    {
        let entry = sums.entry(record.body_style.as_str()).or_insert_with(|| {
            order.push(record.body_style.as_str());
            (0.0, 0)
        });
        entry.0 += record.price;
        entry.1 += 1;
    }

    order
        .into_iter()
        .map(|body_style| {
            let (sum, count) = sums[body_style];
            AggregateRow {
                drive_wheels: drive_wheels.to_string(),
                body_style: body_style.to_string(),
                mean_price: sum / count as f64,
            }
        })
        .collect()
}
