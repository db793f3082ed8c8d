use crate::openapi::{ApiDescription, TypeDescriptor};
use crate::widget::{CellDataType, ColumnDef};

use super::title_case;

/// Convert a response schema's `results` descriptor into column
/// definitions.
///
/// The expected shape is an `anyOf` union whose members are arrays of a
/// `oneOf` union of named-schema references; anything else yields no
/// columns. With several referenced schemas only keys present on every
/// variant survive, described by the first schema's property metadata.
pub fn columns_from_results(api: &ApiDescription, results: &TypeDescriptor) -> Vec<ColumnDef> {
    let mut refs: Vec<&str> = Vec::new();
    if let Some(union) = &results.any_of {
        for member in union {
            let Some(items) = &member.items else { continue };
            let Some(variants) = &items.one_of else { continue };
            refs.extend(variants.iter().filter_map(|variant| variant.ref_name()));
        }
    }

    // Unresolved references are dropped, not errors.
    let schemas: Vec<_> = refs.iter().filter_map(|name| api.schema(name)).collect();
    let Some(first) = schemas.first() else {
        return Vec::new();
    };

    first
        .properties
        .iter()
        .filter(|(key, _)| {
            schemas
                .iter()
                .all(|schema| schema.properties.contains_key(key.as_str()))
        })
        .map(|(key, prop)| column_def(key, prop))
        .collect()
}

/// Build one column definition from a property descriptor. The numeric
/// check wins over the date format when both apply.
fn column_def(field: &str, prop: &TypeDescriptor) -> ColumnDef {
    let cell_data_type = match prop.type_name.as_deref() {
        Some("number") | Some("integer") => CellDataType::Number,
        _ if matches!(prop.format.as_deref(), Some("date") | Some("date-time")) => {
            CellDataType::Date
        }
        _ => CellDataType::Text,
    };

    ColumnDef {
        field: field.to_string(),
        header_name: prop.title.clone().unwrap_or_else(|| title_case(field)),
        cell_data_type,
        chart_data_type: cell_data_type.chart_data_type(),
        formatter_fn: cell_data_type.formatter_fn(),
    }
}
