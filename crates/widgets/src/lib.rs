//! Transformation from a running API's interface description (an OpenAPI
//! document) into the widget-configuration document a dashboard host
//! consumes. The pipeline is pure: it reads a description snapshot and
//! produces an ordered widget mapping, nothing else.

pub mod openapi;
pub mod pipeline;
pub mod widget;

pub use openapi::{ApiDescription, DescriptorShape, Operation, SchemaObject, TypeDescriptor};
pub use pipeline::{generate, PipelineOptions, TableIndexMode};
pub use widget::{ColumnDef, QuerySchema, Widget, WidgetSet};
