use chrono::{Days, NaiveDate};
use indexmap::IndexMap;
use serde_json::{json, Value};

use crate::openapi::{DescriptorShape, Operation, TypeDescriptor};
use crate::widget::QuerySchema;

/// Query parameters that never reach the widget host.
const EXCLUDED: &[&str] = &["sort", "limit", "order"];

/// How far back the forced `start_date` default reaches.
const START_DATE_LOOKBACK_DAYS: u64 = 90;

/// Extract the query-parameter schema for one `get` operation.
///
/// Returns the schema plus the chart-eligibility flag. A `chart` parameter
/// only raises the flag; `sort`/`limit`/`order` are dropped outright; a
/// parameter whose descriptor matches no known shape is silently omitted.
pub fn query_schema(op: &Operation, today: NaiveDate) -> (QuerySchema, bool) {
    let mut optional: IndexMap<String, Value> = IndexMap::new();
    let mut has_chart = false;

    for param in &op.parameters {
        if param.location != "query" {
            continue;
        }
        if EXCLUDED.contains(&param.name.as_str()) {
            continue;
        }
        if param.name == "chart" {
            has_chart = true;
            continue;
        }

        if let Some(schema) = &param.schema {
            if let Some(value) = classify(schema) {
                optional.insert(param.name.clone(), value);
            }
        }

        // start_date is always forced to a computed default, whatever the
        // declared schema said.
        if param.name == "start_date" {
            let start = today - Days::new(START_DATE_LOOKBACK_DAYS);
            optional.insert(
                "start_date".to_string(),
                Value::String(start.format("%Y-%m-%d").to_string()),
            );
        }
    }

    (
        QuerySchema {
            optional,
            chart: None,
        },
        has_chart,
    )
}

/// Map a descriptor shape to its widget-host value, or None to omit the
/// parameter entirely.
fn classify(schema: &TypeDescriptor) -> Option<Value> {
    match schema.shape() {
        DescriptorShape::Enum(values) => Some(Value::Array(dedup(values.iter().cloned()))),
        DescriptorShape::AnyOf(members) => classify_union(members),
        DescriptorShape::Direct("string") => Some(json!("string")),
        DescriptorShape::Direct("integer") => Some(json!(0)),
        DescriptorShape::Direct(_) | DescriptorShape::Unrecognized => None,
    }
}

/// anyOf union: collect every member's enum values; with none present fall
/// back to a placeholder by type priority string > integer > null.
fn classify_union(members: &[TypeDescriptor]) -> Option<Value> {
    let enums = dedup(
        members
            .iter()
            .filter_map(|member| member.enum_values.as_ref())
            .flatten()
            .cloned(),
    );
    if !enums.is_empty() {
        return Some(Value::Array(enums));
    }

    let types: Vec<&str> = members
        .iter()
        .filter_map(|member| member.type_name.as_deref())
        .collect();
    if types.contains(&"string") {
        Some(json!("string"))
    } else if types.contains(&"integer") {
        Some(json!(0))
    } else if types.contains(&"null") {
        Some(Value::Null)
    } else {
        None
    }
}

/// Deduplicate preserving first-seen order. Enum lists are tiny, so the
/// quadratic scan is fine.
fn dedup(values: impl Iterator<Item = Value>) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
