use serde_json::Value;

use crate::error::LoadError;
use crate::model::record::{Dataset, SalesRecord};
use crate::repository::SalesSource;

/// Parses a sales document. It must be a non-empty JSON array of records.
pub fn parse_records(body: &str) -> Result<Vec<SalesRecord>, LoadError> {
    let document: Value = serde_json::from_str(body)?;
    let items = match document {
        Value::Array(items) => items,
        other => {
            return Err(LoadError::PayloadShape(format!(
                "expected an array, found {}",
                json_kind(&other)
            )))
        }
    };
    if items.is_empty() {
        return Err(LoadError::PayloadShape("array is empty".to_string()));
    }

    let records = items
        .into_iter()
        .map(serde_json::from_value::<SalesRecord>)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub fn try_load_dataset(source: &dyn SalesSource) -> Result<Dataset, LoadError> {
    tracing::info!(source = %source.describe(), "Fetching sales data");
    let body = source.fetch()?;
    let records = parse_records(&body)?;
    report_suspect_records(&records);

    let dataset = Dataset::new(records);
    tracing::info!(
        records = dataset.records.len(),
        years = ?dataset.years,
        "Loaded sales data"
    );
    Ok(dataset)
}

/// Loads the data set once. Any failure is logged and yields an empty set.
pub fn load_dataset(source: &dyn SalesSource) -> Dataset {
    match try_load_dataset(source) {
        Ok(dataset) => dataset,
        Err(err) => {
            tracing::error!(source = %source.describe(), error = %err, "Failed to load sales data");
            Dataset::default()
        }
    }
}

// Bad amounts and months do not abort the load; they are counted as zero
// or left out of the monthly view.
fn report_suspect_records(records: &[SalesRecord]) {
    for record in records {
        if record.amount().is_none() {
            tracing::warn!(
                year = record.year,
                month = record.month,
                week = record.week,
                amount = %record.total_amount,
                "Amount is not numeric, counting it as zero"
            );
        }
        if !(1..=12).contains(&record.month) {
            tracing::warn!(
                year = record.year,
                month = record.month,
                week = record.week,
                "Month is outside 1..=12"
            );
        }
    }
}
