//! Output types: the widget descriptor document consumed by the dashboard
//! host. Serialized camelCase; struct field order matches the document the
//! host expects.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// The full generated document, keyed by widgetId. Built once per pass and
/// read-only afterwards.
pub type WidgetSet = IndexMap<String, Widget>;

/// Query-parameter schema of a widget. The chart flag sits beside
/// `optional`, not inside it.
#[derive(Debug, Clone, Serialize)]
pub struct QuerySchema {
    pub optional: IndexMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<bool>,
}

/// Display type of a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellDataType {
    Text,
    Number,
    Date,
}

/// Chart role of a column, derived 1:1 from the cell type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartDataType {
    Series,
    Category,
}

/// Client-side formatter applied to date and number cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatterFn {
    Date,
    Int,
}

impl CellDataType {
    /// Numbers chart as series; everything else is a category axis.
    pub fn chart_data_type(self) -> ChartDataType {
        match self {
            CellDataType::Number => ChartDataType::Series,
            CellDataType::Text | CellDataType::Date => ChartDataType::Category,
        }
    }

    pub fn formatter_fn(self) -> Option<FormatterFn> {
        match self {
            CellDataType::Date => Some(FormatterFn::Date),
            CellDataType::Number => Some(FormatterFn::Int),
            CellDataType::Text => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    pub field: String,
    pub header_name: String,
    pub cell_data_type: CellDataType,
    pub chart_data_type: ChartDataType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter_fn: Option<FormatterFn>,
}

/// Fixed layout hint for the dashboard grid.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GridData {
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    pub show_all: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns_defs: Option<Vec<ColumnDef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            show_all: true,
            columns_defs: None,
            index: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: String,
}

impl ChartConfig {
    /// The fixed chart block used by chart variants.
    pub fn line() -> Self {
        Self {
            chart_type: "line".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetData {
    pub data_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<TableConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartConfig>,
}

/// One widget descriptor entry in the generated document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub name: String,
    pub description: String,
    pub category: String,
    pub widget_type: String,
    pub widget_id: String,
    pub params: QuerySchema,
    pub endpoint: String,
    pub grid_data: GridData,
    pub data: WidgetData,
    /// Set to "chart" on chart variants only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_viz: Option<String>,
}
