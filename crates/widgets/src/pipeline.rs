//! The transformation pipeline: Route Selector → Schema Extractor (query
//! and response sides) → Column Synthesizer, driven once per description
//! snapshot by [`generate`].

mod columns;
mod query;
mod response;
mod routes;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::openapi::ApiDescription;
use crate::widget::{ChartConfig, ColumnDef, GridData, TableConfig, Widget, WidgetData, WidgetSet};

pub use columns::columns_from_results;
pub use query::query_schema;
pub use response::response_schema;
pub use routes::select_routes;

/// Which column may become the table's index hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableIndexMode {
    /// Only a `date` column sets the index.
    DateOnly,
    /// `date` if present, otherwise `period`.
    DateOrPeriod,
}

/// Per-pass settings. `today` is injected so a pass is reproducible.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub path_prefix: String,
    pub today: NaiveDate,
    pub index_mode: TableIndexMode,
}

impl PipelineOptions {
    pub fn new(path_prefix: impl Into<String>) -> Self {
        Self {
            path_prefix: path_prefix.into(),
            today: chrono::Local::now().date_naive(),
            index_mode: TableIndexMode::DateOrPeriod,
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn with_index_mode(mut self, mode: TableIndexMode) -> Self {
        self.index_mode = mode;
        self
    }
}

/// Run the full pipeline over one description snapshot.
///
/// Every selected route yields a base widget; routes with a `chart` query
/// parameter additionally yield a `_chart` variant. Per-route gaps (missing
/// response schema, unresolvable refs) degrade to a widget with fewer
/// enriched fields, never to a missing widget.
pub fn generate(api: &ApiDescription, opts: &PipelineOptions) -> WidgetSet {
    let mut widgets = WidgetSet::new();

    let selected = routes::select_routes(api, &opts.path_prefix);
    for &route in &selected {
        let Some(op) = api.paths.get(route).and_then(|methods| methods.get("get")) else {
            continue;
        };
        let Some(operation_id) = op.operation_id.as_deref() else {
            warn!("Route {} has no operationId — skipped", route);
            continue;
        };

        let (params, has_chart) = query::query_schema(op, opts.today);

        let columns = response::response_schema(api, operation_id)
            .and_then(|schema| schema.properties.get("results"))
            .map(|results| columns::columns_from_results(api, results))
            .unwrap_or_default();

        let mut table = TableConfig::default();
        if !columns.is_empty() {
            table.index = index_hint(&columns, opts.index_mode);
            table.columns_defs = Some(columns);
        }

        let widget_id = format!("OBB {operation_id}");
        let base = Widget {
            name: format!("OBB {}", title_case(&operation_id.replace('_', " "))),
            description: op.description.clone().unwrap_or_default(),
            category: op.tags.first().map(|tag| title_case(tag)).unwrap_or_default(),
            widget_type: op.tags.first().cloned().unwrap_or_default(),
            widget_id: widget_id.clone(),
            params,
            endpoint: route.strip_prefix('/').unwrap_or(route).to_string(),
            grid_data: GridData { w: 20, h: 5 },
            data: WidgetData {
                data_key: "results".to_string(),
                table: Some(table),
                chart: None,
            },
            default_viz: None,
        };

        let chart = has_chart.then(|| chart_variant(&base));
        widgets.insert(widget_id, base);
        if let Some(chart) = chart {
            widgets.insert(chart.widget_id.clone(), chart);
        }
    }

    info!(
        "Generated {} widgets from {} routes",
        widgets.len(),
        selected.len()
    );

    widgets
}

/// Derive the chart sibling: same widget with the table block swapped for a
/// line chart reading the nested chart content path.
fn chart_variant(base: &Widget) -> Widget {
    let mut chart = base.clone();
    chart.name = format!("{} Chart", base.name);
    chart.widget_id = format!("{}_chart", base.widget_id);
    chart.params.chart = Some(true);
    chart.default_viz = Some("chart".to_string());
    chart.data.data_key = "chart.content".to_string();
    chart.data.table = None;
    chart.data.chart = Some(ChartConfig::line());
    chart
}

fn index_hint(columns: &[ColumnDef], mode: TableIndexMode) -> Option<String> {
    let has = |field: &str| columns.iter().any(|c| c.field == field);
    match mode {
        TableIndexMode::DateOnly => has("date").then(|| "date".to_string()),
        TableIndexMode::DateOrPeriod => {
            if has("date") {
                Some("date".to_string())
            } else if has("period") {
                Some("period".to_string())
            } else {
                None
            }
        }
    }
}

/// Title casing over letter runs: the first letter of every run is
/// uppercased, the rest lowercased ("get stock quote" → "Get Stock Quote").
pub(crate) fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}
