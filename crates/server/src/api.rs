use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::state::AppState;

/// API root. The dashboard host probes it for liveness.
pub async fn root() -> Json<Value> {
    Json(json!({}))
}

/// The generated widget-configuration document.
pub async fn widgets(State(state): State<Arc<AppState>>) -> Json<widgetd_widgets::WidgetSet> {
    Json(state.widgets.clone())
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub widget_count: usize,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: "0.1.0",
        widget_count: state.widgets.len(),
    })
}
